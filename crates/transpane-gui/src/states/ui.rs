use std::path::PathBuf;

use transpane_core::scene::Opacity;

/// Log lines kept in the status panel.
const MAX_LOG_LINES: usize = 200;

/// Overall UI state.
pub struct UIState {
    pub image_path: Option<PathBuf>,
    pub regions_path: Option<PathBuf>,

    /// Slider position; the viewer holds the clamped value.
    pub opacity_percent: u8,

    /// Log messages.
    pub log_messages: Vec<String>,
}

impl UIState {
    pub fn new(opacity: Opacity) -> Self {
        Self {
            image_path: None,
            regions_path: None,
            opacity_percent: opacity.percent(),
            log_messages: Vec::new(),
        }
    }

    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
        if self.log_messages.len() > MAX_LOG_LINES {
            let excess = self.log_messages.len() - MAX_LOG_LINES;
            self.log_messages.drain(..excess);
        }
    }
}
