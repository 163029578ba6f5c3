use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::time::Duration;

/// Spinner shown while an external tool runs.
pub struct Spinner {
    pb: ProgressBar,
}

impl Spinner {
    pub fn new(message: &str) -> Self {
        let pb = if super::is_ci() {
            ProgressBar::hidden()
        } else {
            ProgressBar::new_spinner()
        };

        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
            pb.set_style(style.tick_strings(&["◐", "◓", "◑", "◒", "●"]));
        }
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));

        Self { pb }
    }

    pub fn set_message(&self, message: &str) {
        self.pb.set_message(message.to_string());
    }

    pub fn finish(&self, message: &str) {
        self.pb
            .finish_with_message(format!("{} {}", "✓".green(), message));
    }

    /// Finishes with a warning mark; the run went on but needs attention.
    pub fn warn(&self, message: &str) {
        self.pb
            .finish_with_message(format!("{} {}", "⚠".yellow(), message));
    }

    pub fn fail(&self, message: &str) {
        self.pb
            .finish_with_message(format!("{} {}", "✗".red(), message));
    }
}
