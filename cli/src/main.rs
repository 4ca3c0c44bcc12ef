//! CLI entrypoint for imagine
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow, bail};
use clap::Parser;
use imagine_application::{
    GenerateImageInput, GenerateImageUseCase, GenerationEventLogger,
    GenerationProgressNotifier, GenerationSession, NoEventLogger, NoProgress,
};
use imagine_domain::{ConfigIssue, StylePreset};
use imagine_infrastructure::{
    ConfigLoader, FileConfig, HuggingFaceImageGateway, HuggingFaceSettings,
    JsonlGenerationLogger,
};
use imagine_presentation::{
    ChatRepl, Cli, ConsoleFormatter, ImageSaver, OutputConfig, ProgressReporter, ReplConfig,
    SimpleProgress, formatter_for,
};
use std::io::IsTerminal;
use std::process::ExitCode;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Token may live in a .env file next to the project
    let dotenv_path = dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    // Logs go to stderr so JSON output on stdout stays clean
    let (log_writer, _log_guard) = tracing_appender::non_blocking(std::io::stderr());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(log_writer)
        .init();

    info!("Starting imagine");
    if let Some(path) = dotenv_path {
        info!("Loaded environment from {}", path.display());
    }

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(ExitCode::SUCCESS);
    }

    if cli.list_styles {
        print!("{}", ConsoleFormatter::format_styles(None));
        return Ok(ExitCode::SUCCESS);
    }

    // === Configuration ===
    let config: FileConfig = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let issues = config.validate();
    if !issues.is_empty() {
        eprintln!("{}", ConsoleFormatter::format_config_issues(&issues));
    }
    if ConfigIssue::has_errors(&issues) {
        bail!("Invalid configuration");
    }

    if !config.output.color {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    let gateway = Arc::new(HuggingFaceImageGateway::new(HuggingFaceSettings {
        base_url: config.huggingface.base_url.clone(),
        model: config.huggingface.parse_model().0.unwrap_or_default(),
        token: config.huggingface.resolve_token(),
        timeout: config.huggingface.timeout(),
    })?);
    if !gateway.has_token() {
        warn!(
            "No Hugging Face token found in ${}; requests will be rejected",
            config.huggingface.api_key_env
        );
        if !cli.quiet {
            eprintln!(
                "Warning: no Hugging Face token. Create one at https://huggingface.co/settings/tokens \
                 and set {} (or add it to .env).",
                config.huggingface.api_key_env
            );
        }
    }

    let event_logger: Arc<dyn GenerationEventLogger> = match config.logging.events_path() {
        Some(path) => match JsonlGenerationLogger::open(&path) {
            Ok(logger) => {
                info!("Generation events logged to {}", logger.path().display());
                Arc::new(logger)
            }
            Err(e) => {
                warn!("Event log disabled, cannot open {}: {}", path.display(), e);
                Arc::new(NoEventLogger)
            }
        },
        None => Arc::new(NoEventLogger),
    };

    let use_case = GenerateImageUseCase::new(gateway)
        .with_params(config.generation.to_generation_params())
        .with_event_logger(event_logger);

    let output = OutputConfig {
        format: cli
            .output
            .map(Into::into)
            .or(config.output.format)
            .unwrap_or_default(),
        color: config.output.color,
        dir: cli
            .output_dir
            .clone()
            .unwrap_or_else(|| config.output.output_dir()),
    };
    let default_style = config.generation.parse_default_style().0;

    // Chat mode
    if cli.chat {
        let initial_style = match cli.style.as_deref() {
            Some(name) => name.parse::<StylePreset>()?,
            None => default_style,
        };
        let mut repl = ChatRepl::new(use_case)
            .with_config(ReplConfig {
                show_progress: config.repl.show_progress && !cli.quiet,
                history_file: config.repl.history_path(),
                initial_style,
            })
            .with_output(&output);

        repl.run().await?;
        return Ok(ExitCode::SUCCESS);
    }

    // Single prompt mode - prompt is required
    let Some(prompt) = cli.prompt else {
        bail!("Prompt is required. Use --chat for interactive mode.");
    };
    let style = cli
        .style
        .unwrap_or_else(|| default_style.id().to_string());

    let progress: Box<dyn GenerationProgressNotifier> = if cli.quiet {
        Box::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress::stderr())
    };

    let session = GenerationSession::new();
    let cancel = CancellationToken::new();
    let input = GenerateImageInput::new(prompt, style).with_cancellation(cancel.clone());

    let generation = use_case.execute_with_progress(&session, input, progress.as_ref());
    tokio::pin!(generation);
    let outcome = tokio::select! {
        outcome = &mut generation => outcome,
        Ok(()) = tokio::signal::ctrl_c() => {
            cancel.cancel();
            generation.await
        }
    };

    let formatter = formatter_for(output.format);
    match outcome {
        Ok(result) => {
            println!("{}", formatter.format_result(&result, session.history_len()));

            if cli.save {
                let path = ImageSaver::new(output.dir).save(&result, None)?;
                println!("{}", formatter.format_saved(&path));
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("{}", formatter.format_error(&e));
            Ok(ExitCode::FAILURE)
        }
    }
}
