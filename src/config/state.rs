// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Indices into the discovered file list
    pub selected_files: Vec<usize>,

    pub window_w: u32,
    pub window_h: u32,

    /// Active tab index into the processed reports
    pub current_tab: usize,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            selected_files: Vec::new(),
            window_w: 1100,
            window_h: 700,
            current_tab: 0,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
