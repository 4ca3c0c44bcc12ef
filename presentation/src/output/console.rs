//! Console output formatters for generation results

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use imagine_application::GenerateImageError;
use imagine_domain::{
    ConfigIssue, GenerationResult, HISTORY_CAPACITY, HistoryEntry, Severity, StylePreset,
};
use serde::Serialize;
use std::path::Path;

/// Formats generation results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a successful generation
    pub fn format_result(result: &GenerationResult, history_len: usize) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Image generated"));
        output.push('\n');

        output.push_str(&format!("{} {}\n", "Caption:".cyan().bold(), result.caption()));

        if result.is_enhanced() {
            output.push_str(&format!(
                "{} {}\n",
                "Enhanced prompt:".cyan().bold(),
                result.composed_prompt
            ));
        }

        output.push_str(&format!(
            "{} {} {}x{} ({})\n",
            "Image:".cyan().bold(),
            result.image.format(),
            result.image.width(),
            result.image.height(),
            Self::human_size(result.image.byte_len())
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Model:".cyan().bold(),
            result.model.display_name()
        ));
        output.push_str(&format!(
            "{} {}/{}\n",
            "History:".dimmed(),
            history_len,
            HISTORY_CAPACITY
        ));

        output
    }

    /// Format the session history, most recent first, numbered from 1
    pub fn format_history(entries: &[HistoryEntry]) -> String {
        if entries.is_empty() {
            return "No images generated yet.\n".dimmed().to_string();
        }

        let mut output = format!(
            "{} ({}/{})\n",
            "Recent generations".cyan().bold(),
            entries.len(),
            HISTORY_CAPACITY
        );
        for (i, entry) in entries.iter().enumerate() {
            let result = entry.result();
            output.push_str(&format!(
                "  {:>2}. {}  {}\n",
                i + 1,
                result.caption(),
                format!(
                    "[{} {}x{}, {}]",
                    result.image.format(),
                    result.image.width(),
                    result.image.height(),
                    result.created_at.format("%H:%M:%S")
                )
                .dimmed()
            ));
        }
        output
    }

    /// Format the style catalog with the suffix each style appends
    pub fn format_styles(current: Option<StylePreset>) -> String {
        let mut output = format!("{}\n", "Style presets:".cyan().bold());
        for style in StylePreset::all() {
            let marker = if Some(*style) == current { "*" } else { " " };
            let adds = if style.is_none() {
                "(prompt unchanged)".dimmed().to_string()
            } else {
                style.suffix().to_string()
            };
            output.push_str(&format!(
                " {} {:<14} {}\n",
                marker.green(),
                style.label().bold(),
                adds
            ));
        }
        output
    }

    /// Format a failed generation with its hint
    pub fn format_error(error: &GenerateImageError) -> String {
        format!(
            "{} {}\n  {}",
            "Error:".red().bold(),
            error,
            error.hint().yellow()
        )
    }

    /// Format configuration issues, one per line
    pub fn format_config_issues(issues: &[ConfigIssue]) -> String {
        issues
            .iter()
            .map(|issue| match issue.severity {
                Severity::Error => format!("{} {}", "config error:".red().bold(), issue.message),
                Severity::Warning => {
                    format!("{} {}", "config warning:".yellow().bold(), issue.message)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn format_saved(path: &Path) -> String {
        format!("{} {}", "Saved:".green().bold(), path.display())
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    /// Byte count as B / KB / MB
    pub fn human_size(bytes: usize) -> String {
        const KB: f64 = 1024.0;
        let bytes = bytes as f64;
        if bytes < KB {
            format!("{} B", bytes)
        } else if bytes < KB * KB {
            format!("{:.1} KB", bytes / KB)
        } else {
            format!("{:.1} MB", bytes / (KB * KB))
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_result(&self, result: &GenerationResult, history_len: usize) -> String {
        Self::format_result(result, history_len)
    }

    fn format_error(&self, error: &GenerateImageError) -> String {
        Self::format_error(error)
    }

    fn format_saved(&self, path: &Path) -> String {
        Self::format_saved(path)
    }
}

/// JSON document printed for a successful generation
#[derive(Serialize)]
struct ResultDocument<'a> {
    #[serde(flatten)]
    result: &'a GenerationResult,
    mime_type: &'static str,
    bytes: usize,
    history_len: usize,
    history_capacity: usize,
}

/// Formats generation outcomes as JSON documents
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_result(&self, result: &GenerationResult, history_len: usize) -> String {
        let document = ResultDocument {
            result,
            mime_type: result.image.format().mime_type(),
            bytes: result.image.byte_len(),
            history_len,
            history_capacity: HISTORY_CAPACITY,
        };
        serde_json::to_string_pretty(&document).unwrap_or_else(|_| "{}".to_string())
    }

    fn format_error(&self, error: &GenerateImageError) -> String {
        let value = serde_json::json!({
            "error": error.to_string(),
            "category": error.category().as_str(),
            "hint": error.hint(),
            "retryable": error.is_retryable(),
        });
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }

    fn format_saved(&self, path: &Path) -> String {
        serde_json::json!({ "saved": path.display().to_string() }).to_string()
    }
}
