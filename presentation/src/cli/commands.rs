//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for generation results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Text,
    /// JSON metadata
    Json,
}

impl From<OutputFormat> for imagine_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => imagine_domain::OutputFormat::Text,
            OutputFormat::Json => imagine_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for imagine
#[derive(Parser, Debug)]
#[command(name = "imagine")]
#[command(author, version, about = "AI image generator - styled text-to-image via Hugging Face")]
#[command(long_about = r#"
imagine turns a text description into an image using a hosted
Stable Diffusion model on Hugging Face Inference.

A style preset appends a descriptive suffix to your prompt
(see --list-styles). The access token is read from the
HUGGINGFACE_TOKEN environment variable or a .env file.

Configuration files are loaded from (in priority order):
1. --config <path>                   Explicit config file
2. ./imagine.toml                    Project-level config
3. ~/.config/imagine/config.toml     Global config

Example:
  imagine "a cute cat wearing a wizard hat" --style Anime --save
  imagine --list-styles
  imagine --chat
"#)]
pub struct Cli {
    /// Description of the image to generate (not required in chat mode)
    pub prompt: Option<String>,

    /// Style preset (identifier or label, e.g. "DigitalArt" or "Digital Art")
    #[arg(short, long, value_name = "STYLE")]
    pub style: Option<String>,

    /// Start an interactive generation session
    #[arg(short, long)]
    pub chat: bool,

    /// Save the generated image to the output directory
    #[arg(long)]
    pub save: bool,

    /// Directory for saved images (overrides config)
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Output format (overrides config)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// List the available style presets and exit
    #[arg(long)]
    pub list_styles: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
