//! REPL (Read-Eval-Print Loop) for an interactive generation session
//!
//! Each REPL owns one [`GenerationSession`], so its history lives exactly as
//! long as the REPL does.

use crate::config::{OutputConfig, ReplConfig};
use crate::output::console::ConsoleFormatter;
use crate::output::formatter::{OutputFormatter, formatter_for};
use crate::output::saver::ImageSaver;
use crate::progress::reporter::ProgressReporter;
use imagine_application::{
    GenerateImageInput, GenerateImageUseCase, GenerationProgressNotifier, GenerationSession,
    NoProgress,
};
use imagine_domain::StylePreset;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// A parsed slash command
#[derive(Debug, Clone, PartialEq, Eq)]
enum ReplCommand {
    Quit,
    Help,
    Styles,
    /// Show (`None`) or change the active style
    Style(Option<String>),
    History,
    Clear,
    /// Save a history entry by 1-based position (default: most recent)
    Save(usize),
    Usage(&'static str),
    Unknown(String),
}

fn parse_command(line: &str) -> ReplCommand {
    let (name, arg) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, Some(rest.trim()).filter(|s| !s.is_empty())),
        None => (line, None),
    };

    match name {
        "/quit" | "/exit" | "/q" => ReplCommand::Quit,
        "/help" | "/h" | "/?" => ReplCommand::Help,
        "/styles" => ReplCommand::Styles,
        "/style" => ReplCommand::Style(arg.map(str::to_string)),
        "/history" => ReplCommand::History,
        "/clear" => ReplCommand::Clear,
        "/save" => match arg.map(str::parse::<usize>) {
            None => ReplCommand::Save(1),
            Some(Ok(n)) if n >= 1 => ReplCommand::Save(n),
            Some(_) => ReplCommand::Usage("/save [n]  (n = position in /history, from 1)"),
        },
        _ => ReplCommand::Unknown(name.to_string()),
    }
}

/// Interactive generation REPL
pub struct ChatRepl {
    use_case: GenerateImageUseCase,
    session: GenerationSession,
    style: StylePreset,
    config: ReplConfig,
    formatter: Box<dyn OutputFormatter>,
    saver: ImageSaver,
}

impl ChatRepl {
    /// Create a new ChatRepl with its own session
    pub fn new(use_case: GenerateImageUseCase) -> Self {
        let output = OutputConfig::default();
        Self {
            use_case,
            session: GenerationSession::new(),
            style: StylePreset::None,
            config: ReplConfig::default(),
            formatter: formatter_for(output.format),
            saver: ImageSaver::new(output.dir),
        }
    }

    /// Apply REPL configuration
    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.style = config.initial_style;
        self.config = config;
        self
    }

    /// Apply output configuration (format and save directory)
    pub fn with_output(mut self, output: &OutputConfig) -> Self {
        self.formatter = formatter_for(output.format);
        self.saver = ImageSaver::new(output.dir.clone());
        self
    }

    /// Set whether to show progress
    pub fn with_progress(mut self, show: bool) -> Self {
        self.config.show_progress = show;
        self
    }

    pub fn session(&self) -> &GenerationSession {
        &self.session
    }

    pub fn style(&self) -> StylePreset {
        self.style
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        if let Some(ref path) = self.config.history_file {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            let readline = rl.readline(&format!("[{}] >>> ", self.style.label()));

            match readline {
                Ok(line) => {
                    let line = line.trim();

                    // Skip empty lines
                    if line.is_empty() {
                        continue;
                    }

                    // Handle commands
                    if line.starts_with('/') {
                        if self.handle_command(line) {
                            break;
                        }
                        continue;
                    }

                    // Add to history
                    let _ = rl.add_history_entry(line);

                    self.process_prompt(line).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        // Save history
        if let Some(ref path) = self.config.history_file {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│        imagine - AI Image Generator         │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Model: {}", self.use_case.gateway().model().display_name());
        println!("Style: {}", self.style.label());
        println!();
        println!("Describe the image you want, or type /help for commands.");
        println!("Press Ctrl-C while generating to cancel.");
        println!();
    }

    fn print_help() {
        println!();
        println!("Commands:");
        println!("  /style [name]     - Show or change the style preset");
        println!("  /styles           - List style presets");
        println!("  /history          - Show recent generations (up to 10)");
        println!("  /save [n]         - Save image n from /history (default: latest)");
        println!("  /clear            - Clear the session history");
        println!("  /help, /h, /?     - Show this help");
        println!("  /quit, /exit, /q  - Exit");
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    fn handle_command(&mut self, line: &str) -> bool {
        match parse_command(line) {
            ReplCommand::Quit => {
                println!("Bye!");
                return true;
            }
            ReplCommand::Help => Self::print_help(),
            ReplCommand::Styles => {
                print!("{}", ConsoleFormatter::format_styles(Some(self.style)));
            }
            ReplCommand::Style(None) => {
                println!("Current style: {}", self.style.label());
            }
            ReplCommand::Style(Some(name)) => match name.parse::<StylePreset>() {
                Ok(style) => {
                    self.style = style;
                    debug!("Style changed to {}", style.id());
                    if style.is_none() {
                        println!("Style: None (prompt unchanged)");
                    } else {
                        println!("Style: {} (adds: {})", style.label(), style.suffix());
                    }
                }
                Err(e) => {
                    println!("{}", e);
                    print!("{}", ConsoleFormatter::format_styles(Some(self.style)));
                }
            },
            ReplCommand::History => {
                print!("{}", ConsoleFormatter::format_history(&self.session.history()));
            }
            ReplCommand::Clear => {
                self.session.clear_history();
                println!("History cleared.");
            }
            ReplCommand::Save(n) => self.save_entry(n),
            ReplCommand::Usage(usage) => println!("Usage: {}", usage),
            ReplCommand::Unknown(name) => {
                println!("Unknown command: {}", name);
                println!("Type /help for available commands");
            }
        }
        false
    }

    fn save_entry(&self, position: usize) {
        let Some(entry) = self.session.history_entry(position - 1) else {
            println!(
                "No image #{} in history ({} available).",
                position,
                self.session.history_len()
            );
            return;
        };

        match self.saver.save(entry.result(), Some(position)) {
            Ok(path) => println!("{}", self.formatter.format_saved(&path)),
            Err(e) => eprintln!("Could not save image: {}", e),
        }
    }

    async fn process_prompt(&self, prompt: &str) {
        println!();

        let token = CancellationToken::new();
        let input =
            GenerateImageInput::new(prompt, self.style.id()).with_cancellation(token.clone());

        let progress: Box<dyn GenerationProgressNotifier> = if self.config.show_progress {
            Box::new(ProgressReporter::new())
        } else {
            Box::new(NoProgress)
        };

        let generation =
            self.use_case
                .execute_with_progress(&self.session, input, progress.as_ref());
        tokio::pin!(generation);

        let outcome = tokio::select! {
            outcome = &mut generation => outcome,
            Ok(()) = tokio::signal::ctrl_c() => {
                token.cancel();
                generation.await
            }
        };

        match outcome {
            Ok(result) => {
                println!(
                    "{}",
                    self.formatter
                        .format_result(&result, self.session.history_len())
                );
            }
            Err(e) => {
                eprintln!("{}", self.formatter.format_error(&e));
            }
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use imagine_application::{GatewayError, GenerationParams, ImageGateway};
    use imagine_domain::{GeneratedImage, ImageFormat, ModelId};
    use std::sync::Arc;

    struct StubGateway {
        model: ModelId,
    }

    #[async_trait]
    impl ImageGateway for StubGateway {
        fn model(&self) -> &ModelId {
            &self.model
        }

        async fn text_to_image(&self, _prompt: &str) -> Result<GeneratedImage, GatewayError> {
            Ok(GeneratedImage::new(vec![7; 16], ImageFormat::Png, 4, 4))
        }
    }

    fn repl() -> ChatRepl {
        let use_case = GenerateImageUseCase::new(Arc::new(StubGateway {
            model: ModelId::default(),
        }))
        .with_params(GenerationParams::default().without_cold_start_retry());
        ChatRepl::new(use_case).with_progress(false)
    }

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("/quit"), ReplCommand::Quit);
        assert_eq!(parse_command("/q"), ReplCommand::Quit);
        assert_eq!(parse_command("/style"), ReplCommand::Style(None));
        assert_eq!(
            parse_command("/style  Digital Art "),
            ReplCommand::Style(Some("Digital Art".to_string()))
        );
        assert_eq!(parse_command("/save"), ReplCommand::Save(1));
        assert_eq!(parse_command("/save 3"), ReplCommand::Save(3));
        assert!(matches!(parse_command("/save 0"), ReplCommand::Usage(_)));
        assert!(matches!(parse_command("/save x"), ReplCommand::Usage(_)));
        assert_eq!(
            parse_command("/dance"),
            ReplCommand::Unknown("/dance".to_string())
        );
    }

    #[test]
    fn test_style_command_changes_style() {
        let mut repl = repl();
        assert!(!repl.handle_command("/style anime"));
        assert_eq!(repl.style(), StylePreset::Anime);

        // Unknown style keeps the previous one
        assert!(!repl.handle_command("/style Steampunk"));
        assert_eq!(repl.style(), StylePreset::Anime);

        assert!(repl.handle_command("/quit"));
    }

    #[test]
    fn test_initial_style_from_config() {
        let repl = repl().with_config(ReplConfig {
            show_progress: false,
            history_file: None,
            initial_style: StylePreset::Cyberpunk,
        });
        assert_eq!(repl.style(), StylePreset::Cyberpunk);
    }

    #[tokio::test]
    async fn test_prompts_fill_history_and_clear_empties_it() {
        let mut repl = repl();
        repl.handle_command("/style Fantasy");

        repl.process_prompt("a dragon").await;
        repl.process_prompt("   ").await;
        repl.process_prompt("a castle").await;

        let history = repl.session().history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].result().prompt, "a castle");
        assert_eq!(history[0].result().style, StylePreset::Fantasy);

        repl.handle_command("/clear");
        assert!(repl.session().history().is_empty());
    }

    #[tokio::test]
    async fn test_save_command_writes_history_entry() {
        let dir = tempfile::tempdir().unwrap();
        let mut repl = repl().with_output(&OutputConfig {
            dir: dir.path().to_path_buf(),
            ..Default::default()
        });

        repl.process_prompt("a lighthouse at dusk").await;
        repl.handle_command("/save 1");
        repl.handle_command("/save 5");

        let saved = dir.path().join("ai_generated_a_lighthouse_at_dusk_1.png");
        assert_eq!(std::fs::read(saved).unwrap(), vec![7; 16]);
    }
}
