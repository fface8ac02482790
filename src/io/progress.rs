//! Terminal progress display for a generation run

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Carved: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar tracking carved cells against the face cell count
///
/// Prim's leaves walls between corridors, so the bar finishes short of full.
#[derive(Debug, Default)]
pub struct ProgressManager {
    bar: Option<ProgressBar>,
}

impl ProgressManager {
    /// Create a manager with no bar shown yet
    pub const fn new() -> Self {
        Self { bar: None }
    }

    /// Show a bar sized for `total_cells` cells
    pub fn initialize(&mut self, total_cells: usize) {
        let bar = ProgressBar::new(total_cells as u64);
        bar.set_style(PROGRESS_STYLE.clone());
        self.bar = Some(bar);
    }

    /// Report carved passages and the current frontier size
    pub fn update(&self, passages: usize, frontier_len: usize) {
        if let Some(ref bar) = self.bar {
            bar.set_position(passages as u64);
            bar.set_message(format!("frontier {frontier_len}"));
        }
    }

    /// Freeze the bar with a closing message
    pub fn finish(&self, message: &str) {
        if let Some(ref bar) = self.bar {
            bar.finish_with_message(message.to_string());
        }
    }
}
