//! Per-item progress display for a generation batch

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] NFTs: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Reports each generated item and a final confirmation
pub struct ProgressManager {
    bar: Option<ProgressBar>,
    completed: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no bar until [`Self::initialize`]
    pub const fn new() -> Self {
        Self {
            bar: None,
            completed: 0,
        }
    }

    /// Create the batch bar for `total` items
    pub fn initialize(&mut self, total: usize) {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(BATCH_STYLE.clone());
        bar.enable_steady_tick(Duration::from_millis(250));
        self.bar = Some(bar);
        self.completed = 0;
    }

    /// Mark one item as written
    pub fn complete_item(&mut self, index: usize, image_name: &str) {
        self.completed += 1;
        match self.bar {
            Some(ref bar) => {
                bar.set_message(format!("✓ {image_name}"));
                bar.inc(1);
                bar.suspend(|| log::debug!("Generated item {index} as {image_name}"));
            }
            None => log::debug!("Generated item {index} as {image_name}"),
        }
    }

    /// Number of items completed since initialization
    pub const fn completed(&self) -> usize {
        self.completed
    }

    /// Close the bar with a confirmation message
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_with_message(format!("All {} NFTs generated", self.completed));
        }
    }
}
