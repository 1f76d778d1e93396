// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// URL text field (not yet rewritten)
    pub url_text: String,

    pub window_w: u32,
    pub window_h: u32,

    /// Show the raw `over|KIND|details` lines under the table
    pub show_raw: bool,

    /// Show the debug log panel
    pub show_debug: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            url_text: s!(),
            window_w: 900,
            window_h: 640,
            show_raw: false,
            show_debug: true,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
