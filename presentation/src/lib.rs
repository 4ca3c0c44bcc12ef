//! Presentation layer for imagine
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive session REPL.

pub mod chat;
pub mod cli;
pub mod config;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::ChatRepl;
pub use cli::commands::{Cli, OutputFormat};
pub use config::{OutputConfig, ReplConfig};
pub use output::console::{ConsoleFormatter, JsonFormatter};
pub use output::formatter::{OutputFormatter, formatter_for};
pub use output::saver::ImageSaver;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
