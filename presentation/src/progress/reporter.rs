//! Progress reporting while waiting on the model

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use quill_application::{GatewayError, TranscriptObserver};
use quill_domain::Message;
use std::io::Write;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Spinner shown while a request is outstanding
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// Start (or restart) the spinner with a message
    pub fn start(&self, message: impl Into<String>) {
        let bar = ProgressBar::new_spinner();
        bar.set_style(Self::spinner_style());
        bar.set_message(message.into());
        bar.enable_steady_tick(Duration::from_millis(80));
        if let Ok(mut slot) = self.bar.lock()
            && let Some(previous) = slot.replace(bar)
        {
            previous.finish_and_clear();
        }
    }

    /// Remove the spinner, if one is running
    pub fn stop(&self) {
        if let Ok(mut slot) = self.bar.lock()
            && let Some(bar) = slot.take()
        {
            bar.finish_and_clear();
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Prints a chat reply to stdout as its fragments arrive
///
/// With a [`ProgressReporter`] attached, a spinner runs from submission until
/// the first fragment.
pub struct StreamPrinter {
    progress: Option<ProgressReporter>,
    label: String,
    started: AtomicBool,
}

impl StreamPrinter {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            progress: None,
            label: label.into(),
            started: AtomicBool::new(false),
        }
    }

    /// Set whether to show a spinner while waiting
    pub fn with_progress(mut self, show: bool) -> Self {
        self.progress = show.then(ProgressReporter::new);
        self
    }

    fn stop_spinner(&self) {
        if let Some(progress) = &self.progress {
            progress.stop();
        }
    }

    fn write(text: &str) {
        let mut stdout = std::io::stdout().lock();
        let _ = stdout.write_all(text.as_bytes());
        let _ = stdout.flush();
    }
}

impl TranscriptObserver for StreamPrinter {
    fn on_submitted(&self, _text: &str) {
        self.started.store(false, Ordering::SeqCst);
        if let Some(progress) = &self.progress {
            progress.start(format!("Waiting for {}...", self.label));
        }
    }

    fn on_fragment(&self, fragment: &str) {
        if !self.started.swap(true, Ordering::SeqCst) {
            self.stop_spinner();
            Self::write(&format!("{}\n", "model".yellow().bold()));
        }
        Self::write(fragment);
    }

    fn on_complete(&self, _reply: &Message) {
        self.stop_spinner();
        if self.started.load(Ordering::SeqCst) {
            Self::write("\n");
        } else {
            Self::write(&format!("{}\n", "(empty reply)".dimmed()));
        }
    }

    fn on_error(&self, error: &GatewayError, partial: bool) {
        self.stop_spinner();
        if partial {
            Self::write("\n");
            eprintln!("{} {}", "Reply interrupted:".yellow().bold(), error);
        } else {
            eprintln!("{} {}", "Error:".red().bold(), error);
        }
    }
}
