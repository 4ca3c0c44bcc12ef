//! Writes generated images to disk on request.

use imagine_domain::GenerationResult;
use std::io;
use std::path::PathBuf;
use tracing::info;

/// Saves image bytes into a directory using the result's download name.
#[derive(Debug, Clone)]
pub struct ImageSaver {
    dir: PathBuf,
}

impl ImageSaver {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Write `result` as `<dir>/<file name>`, overwriting an existing file.
    ///
    /// `index` is the 1-based history position when saving from the history
    /// list.
    pub fn save(&self, result: &GenerationResult, index: Option<usize>) -> io::Result<PathBuf> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(result.file_name(index));
        std::fs::write(&path, result.image.bytes())?;
        info!(
            "Saved {} ({} bytes)",
            path.display(),
            result.image.byte_len()
        );
        Ok(path)
    }
}
