//! Mapping of failed Inference responses onto [`GatewayError`] kinds.

use imagine_application::GatewayError;
use imagine_domain::util::truncate_str;
use serde_json::Value;
use std::time::Duration;

/// Maximum number of body bytes quoted in an error message
const MAX_MESSAGE_BYTES: usize = 300;

/// Classify a non-success response.
///
/// The status decides first (401/403, 429, 503). For any other status the
/// error text is searched for "loading", "rate limit" and "unauthorized", in
/// that order; anything left is a transport failure.
pub fn classify_failure(status: u16, body: &[u8]) -> GatewayError {
    let parsed = serde_json::from_slice::<Value>(body).ok();
    let message = error_message(status, body, parsed.as_ref());

    match status {
        401 | 403 => GatewayError::Authentication(message),
        429 => GatewayError::RateLimited(message),
        503 => GatewayError::ModelLoading {
            estimated_wait: parsed.as_ref().and_then(estimated_wait),
            message,
        },
        _ => classify_by_keyword(status, message, parsed.as_ref()),
    }
}

fn classify_by_keyword(status: u16, message: String, parsed: Option<&Value>) -> GatewayError {
    let lower = message.to_lowercase();
    if lower.contains("loading") {
        GatewayError::ModelLoading {
            estimated_wait: parsed.and_then(estimated_wait),
            message,
        }
    } else if lower.contains("rate limit") {
        GatewayError::RateLimited(message)
    } else if lower.contains("unauthorized") {
        GatewayError::Authentication(message)
    } else {
        GatewayError::Transport(format!("HTTP {}: {}", status, message))
    }
}

/// Human-readable error text from the body, falling back to the status.
///
/// Inference errors look like `{"error": "..."}` or `{"error": ["...", ...]}`.
fn error_message(status: u16, body: &[u8], parsed: Option<&Value>) -> String {
    let from_json = parsed
        .and_then(|v| v.get("error"))
        .and_then(|error| match error {
            Value::String(s) => Some(s.clone()),
            Value::Array(items) => {
                let parts: Vec<&str> = items.iter().filter_map(Value::as_str).collect();
                (!parts.is_empty()).then(|| parts.join("; "))
            }
            _ => None,
        });

    let text = from_json.unwrap_or_else(|| String::from_utf8_lossy(body).trim().to_string());
    if text.is_empty() {
        return reqwest::StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("request failed")
            .to_string();
    }
    truncate_str(&text, MAX_MESSAGE_BYTES).to_string()
}

/// `estimated_time` (seconds) reported for a cold model
fn estimated_wait(value: &Value) -> Option<Duration> {
    value
        .get("estimated_time")
        .and_then(Value::as_f64)
        .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_statuses() {
        for status in [401, 403] {
            let err = classify_failure(status, br#"{"error":"Invalid credentials in Authorization header"}"#);
            assert_eq!(
                err,
                GatewayError::Authentication(
                    "Invalid credentials in Authorization header".to_string()
                )
            );
        }
    }

    #[test]
    fn test_rate_limit_status() {
        let err = classify_failure(429, b"Too Many Requests");
        assert_eq!(err, GatewayError::RateLimited("Too Many Requests".to_string()));
    }

    #[test]
    fn test_model_loading_with_estimate() {
        let body = br#"{"error":"Model stabilityai/stable-diffusion-xl-base-1.0 is currently loading","estimated_time":20.5}"#;
        match classify_failure(503, body) {
            GatewayError::ModelLoading {
                message,
                estimated_wait,
            } => {
                assert!(message.contains("currently loading"));
                assert_eq!(estimated_wait, Some(Duration::from_secs_f64(20.5)));
            }
            other => panic!("expected ModelLoading, got {:?}", other),
        }
    }

    #[test]
    fn test_model_loading_without_body() {
        let err = classify_failure(503, b"");
        assert_eq!(
            err,
            GatewayError::ModelLoading {
                message: "Service Unavailable".to_string(),
                estimated_wait: None,
            }
        );
    }

    #[test]
    fn test_keyword_fallback_for_other_statuses() {
        assert!(matches!(
            classify_failure(500, br#"{"error":"Model is loading, please retry"}"#),
            GatewayError::ModelLoading { .. }
        ));
        assert!(matches!(
            classify_failure(400, b"rate limit exceeded for this model"),
            GatewayError::RateLimited(_)
        ));
        assert!(matches!(
            classify_failure(400, br#"{"error":["Unauthorized access"]}"#),
            GatewayError::Authentication(_)
        ));
    }

    #[test]
    fn test_other_failures_are_transport() {
        let err = classify_failure(500, br#"{"error":"CUDA out of memory"}"#);
        assert_eq!(
            err,
            GatewayError::Transport("HTTP 500: CUDA out of memory".to_string())
        );

        let err = classify_failure(404, b"");
        assert_eq!(err, GatewayError::Transport("HTTP 404: Not Found".to_string()));
    }

    #[test]
    fn test_negative_estimate_is_ignored() {
        let err = classify_failure(503, br#"{"error":"loading","estimated_time":-1}"#);
        assert!(matches!(
            err,
            GatewayError::ModelLoading {
                estimated_wait: None,
                ..
            }
        ));
    }

    #[test]
    fn test_long_bodies_are_truncated() {
        let body = "x".repeat(2000);
        match classify_failure(502, body.as_bytes()) {
            GatewayError::Transport(message) => assert!(message.len() < 400),
            other => panic!("expected Transport, got {:?}", other),
        }
    }
}
