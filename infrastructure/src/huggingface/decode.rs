//! Validation of image payloads returned by the Inference endpoint.

use imagine_application::GatewayError;
use imagine_domain::{GeneratedImage, ImageFormat};

/// Decode `bytes` as an image and wrap them in a [`GeneratedImage`].
///
/// The payload is fully decoded so truncated or corrupt images are rejected
/// here instead of when the user saves them.
pub fn decode_image(bytes: Vec<u8>) -> Result<GeneratedImage, GatewayError> {
    if bytes.is_empty() {
        return Err(GatewayError::Transport(
            "Empty response body from inference endpoint".to_string(),
        ));
    }

    let detected = image::guess_format(&bytes).map_err(|_| {
        GatewayError::Transport(format!(
            "Response is not an image ({} bytes of unrecognized data)",
            bytes.len()
        ))
    })?;
    let format = map_format(detected)?;

    let decoded = image::load_from_memory_with_format(&bytes, detected)
        .map_err(|e| GatewayError::Transport(format!("Could not decode {} image: {}", format, e)))?;

    Ok(GeneratedImage::new(
        bytes,
        format,
        decoded.width(),
        decoded.height(),
    ))
}

fn map_format(format: image::ImageFormat) -> Result<ImageFormat, GatewayError> {
    match format {
        image::ImageFormat::Png => Ok(ImageFormat::Png),
        image::ImageFormat::Jpeg => Ok(ImageFormat::Jpeg),
        image::ImageFormat::WebP => Ok(ImageFormat::Webp),
        image::ImageFormat::Gif => Ok(ImageFormat::Gif),
        image::ImageFormat::Bmp => Ok(ImageFormat::Bmp),
        other => Err(GatewayError::Transport(format!(
            "Unsupported image format: {:?}",
            other
        ))),
    }
}
