//! Progress spinner for long waits
//!
//! Draws to stderr and hides itself when stderr is not a terminal.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::client::models::{OperationHandle, OperationStatus};

/// Create a spinner with consistent styling
pub fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.cyan} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Spinner that follows the statuses of one operation.
pub struct PollProgress {
    bar: ProgressBar,
    label: String,
}

impl PollProgress {
    pub fn start(handle: &OperationHandle) -> Self {
        let label = format!("Waiting for {} {}", handle.kind, handle.id);
        Self {
            bar: create_spinner(&label),
            label,
        }
    }

    /// Poller observer callback.
    pub fn observe(&self, status: &OperationStatus, poll: u32) {
        self.bar.set_message(format!(
            "{}: {} ({}, check #{})",
            self.label,
            status.state,
            status.raw_or_missing(),
            poll
        ));
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl Drop for PollProgress {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }
}
