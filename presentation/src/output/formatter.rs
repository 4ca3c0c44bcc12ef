//! Output formatter trait

use crate::output::console::{ConsoleFormatter, JsonFormatter};
use imagine_application::GenerateImageError;
use imagine_domain::{GenerationResult, OutputFormat};
use std::path::Path;

/// Trait for formatting generation outcomes
pub trait OutputFormatter: Send + Sync {
    /// Format a successful generation; `history_len` is the session's
    /// history size after it was recorded.
    fn format_result(&self, result: &GenerationResult, history_len: usize) -> String;

    /// Format a failed generation
    fn format_error(&self, error: &GenerateImageError) -> String;

    /// Format the confirmation for a saved image
    fn format_saved(&self, path: &Path) -> String;
}

/// Formatter for the configured output format
pub fn formatter_for(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(ConsoleFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}
