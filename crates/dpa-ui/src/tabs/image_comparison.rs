//! Image Comparison 标签页（占位界面）

use crate::state::{Command, UiState};
use crate::tabs::similarity_grid;
use dpa_core::theme::ColorScheme;

pub fn show(ui: &mut egui::Ui, state: &mut UiState, scheme: &ColorScheme) {
    similarity_grid(ui, "Reference Image", scheme);
    if ui.button("Find Similar Images").clicked() {
        state.request(Command::FindSimilarImages);
    }
}
