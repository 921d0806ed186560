//! Snapshot progress display for the command-line driver

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static SNAPSHOT_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Snapshots: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many snapshots have been analysed
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a progress bar for `snapshots` samples
    pub fn new(snapshots: usize) -> Self {
        let bar = ProgressBar::new(snapshots as u64);
        bar.set_style(SNAPSHOT_STYLE.clone());
        Self { bar }
    }

    /// Create a progress bar that never draws
    pub fn hidden(snapshots: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(snapshots as u64);
        Self { bar }
    }

    /// Mark one snapshot as analysed at simulation time `time`
    pub fn advance(&self, time: f64) {
        self.bar.set_message(format!("t = {time}"));
        self.bar.inc(1);
    }

    /// Number of snapshots analysed so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        self.bar.finish_with_message("All snapshots analysed");
    }
}
