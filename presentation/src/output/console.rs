//! Console messages and the waiting indicator

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use reconstruct_domain::Mode;
use std::time::Duration;

/// Spinner shown while a request is in flight.
pub struct WaitingIndicator {
    bar: ProgressBar,
}

impl WaitingIndicator {
    pub fn start(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));
        Self { bar }
    }

    pub fn finish(self) {
        self.bar.finish_and_clear();
    }
}

/// Formats messages for terminal display
pub struct ConsoleOutput;

impl ConsoleOutput {
    pub fn error(message: &str) -> String {
        format!("{} {}", "Error:".red().bold(), message)
    }

    pub fn warning(message: &str) -> String {
        format!("{} {}", "Warning:".yellow().bold(), message)
    }

    /// One line per mode: key, then the first sentence of its instruction.
    pub fn modes() -> String {
        Mode::all()
            .iter()
            .map(|mode| {
                let summary = mode
                    .instruction()
                    .split_once(". ")
                    .map_or(mode.instruction(), |(first, _)| first);
                format!("{:<12} {}", mode.label().cyan().bold(), summary.dimmed())
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modes_lists_every_key() {
        colored::control::set_override(false);
        let listing = ConsoleOutput::modes();
        for mode in Mode::all() {
            assert!(listing.contains(mode.label()));
        }
        assert_eq!(listing.lines().count(), Mode::all().len());
    }

    #[test]
    fn test_error_contains_message() {
        colored::control::set_override(false);
        assert_eq!(ConsoleOutput::error("boom"), "Error: boom");
    }
}
