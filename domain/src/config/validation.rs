//! Structured configuration issues.
//!
//! Config loaders report problems as [`ConfigIssue`] values instead of
//! failing outright, so the front end can print warnings and only abort on
//! [`Severity::Error`].

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A field holds a value outside its allowed set.
    InvalidEnumValue {
        field: String,
        value: String,
        valid_values: Vec<String>,
    },
    /// A required string field is empty.
    EmptyValue { field: String },
    /// A duration field is zero where a positive value is required.
    ZeroDuration { field: String },
}

/// A detected issue in the loaded configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    /// Whether any issue in the slice is fatal
    pub fn has_errors(issues: &[ConfigIssue]) -> bool {
        issues.iter().any(|i| i.severity == Severity::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(severity: Severity) -> ConfigIssue {
        ConfigIssue {
            severity,
            code: ConfigIssueCode::EmptyValue {
                field: "huggingface.model".to_string(),
            },
            message: "huggingface.model is empty".to_string(),
        }
    }

    #[test]
    fn has_errors_returns_true_for_errors() {
        assert!(ConfigIssue::has_errors(&[
            issue(Severity::Warning),
            issue(Severity::Error)
        ]));
    }

    #[test]
    fn has_errors_returns_false_for_warnings_only() {
        assert!(!ConfigIssue::has_errors(&[issue(Severity::Warning)]));
        assert!(!ConfigIssue::has_errors(&[]));
    }
}
