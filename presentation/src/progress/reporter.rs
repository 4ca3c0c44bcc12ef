//! Progress reporting for image generation

use colored::Colorize;
use imagine_application::GenerationProgressNotifier;
use imagine_domain::{GenerationPhase, GenerationRequest};
use imagine_domain::util::truncate_str;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

/// Reports progress during generation with a spinner
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn with_spinner(&self, f: impl FnOnce(&ProgressBar)) {
        if let Ok(guard) = self.spinner.lock()
            && let Some(pb) = guard.as_ref()
        {
            f(pb);
        }
    }

    fn start(&self) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_message("Composing prompt...");
        if let Ok(mut guard) = self.spinner.lock() {
            *guard = Some(pb);
        }
    }

    fn finish(&self, message: Option<String>) {
        if let Ok(mut guard) = self.spinner.lock()
            && let Some(pb) = guard.take()
        {
            match message {
                Some(msg) => pb.finish_with_message(msg),
                None => pb.finish_and_clear(),
            }
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl GenerationProgressNotifier for ProgressReporter {
    fn on_phase(&self, phase: GenerationPhase) {
        match phase {
            GenerationPhase::Composing => self.start(),
            GenerationPhase::Succeeded => {
                self.finish(Some(format!("{}", "Image generated!".green())))
            }
            GenerationPhase::Failed => self.finish(None),
            GenerationPhase::Idle | GenerationPhase::Dispatching => {}
        }
    }

    fn on_composed(&self, request: &GenerationRequest, composed_prompt: &str) {
        if request.style.is_none() {
            return;
        }
        self.with_spinner(|pb| {
            pb.println(format!(
                "{} {}",
                "Enhanced prompt:".cyan(),
                truncate_str(composed_prompt, 160)
            ));
        });
    }

    fn on_dispatch(&self, attempt: u32) {
        let message = if attempt == 1 {
            "Generating your image... This may take 10-30 seconds.".to_string()
        } else {
            format!("Retrying (attempt {})...", attempt)
        };
        self.with_spinner(|pb| pb.set_message(message));
    }

    fn on_retry_scheduled(&self, delay: Duration, _reason: &str) {
        self.with_spinner(|pb| {
            pb.set_message(format!(
                "Model is warming up, retrying in {}s...",
                delay.as_secs()
            ));
        });
    }
}

/// Plain-line progress for non-interactive stderr (pipes, CI logs).
///
/// Lines never go to stdout, which carries only results.
pub struct SimpleProgress<W = io::Stderr> {
    out: Mutex<W>,
}

impl SimpleProgress {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> SimpleProgress<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    fn line(&self, text: std::fmt::Arguments<'_>) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = writeln!(out, "{}", text);
    }
}

impl<W: Write + Send> GenerationProgressNotifier for SimpleProgress<W> {
    fn on_phase(&self, phase: GenerationPhase) {
        match phase {
            GenerationPhase::Succeeded => self.line(format_args!("  {} done", "v".green())),
            GenerationPhase::Failed => self.line(format_args!("  {} failed", "x".red())),
            _ => {}
        }
    }

    fn on_composed(&self, request: &GenerationRequest, composed_prompt: &str) {
        if !request.style.is_none() {
            self.line(format_args!("{} {}", "->".cyan(), composed_prompt));
        }
    }

    fn on_dispatch(&self, attempt: u32) {
        self.line(format_args!("{} Generating (attempt {})", "->".cyan(), attempt));
    }

    fn on_retry_scheduled(&self, delay: Duration, reason: &str) {
        self.line(format_args!(
            "  {} {} - retrying in {}s",
            "!".yellow(),
            reason,
            delay.as_secs()
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reporter_tolerates_callbacks_without_spinner() {
        let reporter = ProgressReporter::new();
        let request = GenerationRequest::try_new("a cat", "Anime").unwrap();

        // No spinner yet: every callback is a no-op
        reporter.on_dispatch(1);
        reporter.on_composed(&request, "a cat, anime style");
        reporter.on_phase(GenerationPhase::Failed);
        assert!(reporter.spinner.lock().unwrap().is_none());
    }

    #[test]
    fn test_reporter_spinner_lifecycle() {
        let reporter = ProgressReporter::new();
        reporter.on_phase(GenerationPhase::Composing);
        assert!(reporter.spinner.lock().unwrap().is_some());

        reporter.on_dispatch(2);
        reporter.on_retry_scheduled(Duration::from_secs(5), "loading");
        reporter.on_phase(GenerationPhase::Succeeded);
        assert!(reporter.spinner.lock().unwrap().is_none());
    }

    #[test]
    fn test_simple_progress_writes_to_its_own_stream() {
        let progress = SimpleProgress::new(Vec::new());
        let request = GenerationRequest::try_new("a cat", "Anime").unwrap();

        progress.on_phase(GenerationPhase::Composing);
        progress.on_composed(&request, "a cat, anime style");
        progress.on_dispatch(1);
        progress.on_retry_scheduled(Duration::from_secs(5), "Model is loading");
        progress.on_dispatch(2);
        progress.on_phase(GenerationPhase::Succeeded);

        let written = String::from_utf8(progress.out.into_inner().unwrap()).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].ends_with("a cat, anime style"));
        assert!(lines[1].ends_with("Generating (attempt 1)"));
        assert!(lines[2].ends_with("Model is loading - retrying in 5s"));
        assert!(lines[4].ends_with("done"));
    }

    #[test]
    fn test_simple_progress_skips_unstyled_prompt() {
        let progress = SimpleProgress::new(Vec::new());
        let request = GenerationRequest::try_new("a cat", "None").unwrap();

        progress.on_composed(&request, "a cat");
        progress.on_phase(GenerationPhase::Failed);

        let written = String::from_utf8(progress.out.into_inner().unwrap()).unwrap();
        assert_eq!(written.lines().count(), 1);
        assert!(written.contains("failed"));
    }
}
