//! 顶部控制区
//!
//! 上传/修正DXF、合金选择、生成/处理/导出按钮。
//! 按钮只发出命令，具体处理在宿主应用里完成。

use crate::state::{Alloy, Command, UiState};
use crate::theme::to_color32;
use dpa_core::theme::ColorScheme;

/// 绘制顶部控制区
pub fn show_controls(ui: &mut egui::Ui, state: &mut UiState, scheme: &ColorScheme) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new("Profile Analysis Controls")
                .strong()
                .color(to_color32(scheme.text)),
        );
    });
    ui.horizontal(|ui| {
        if ui.button("Upload DXF").clicked() {
            state.request(Command::UploadDxf);
        }
        if ui.button("Correct DXF").clicked() {
            state.request(Command::CorrectDxf);
        }

        ui.separator();
        ui.label(egui::RichText::new("Alloy:").strong());
        egui::ComboBox::from_id_salt("alloy_select")
            .selected_text(state.alloy.label())
            .show_ui(ui, |ui| {
                for alloy in Alloy::ALL {
                    ui.selectable_value(&mut state.alloy, alloy, alloy.label());
                }
            });
        ui.separator();

        if ui.button("Generate Profile").clicked() {
            state.request(Command::GenerateProfile);
        }
        if accent_button(ui, "Process", scheme).clicked() {
            state.request(Command::ProcessProfile);
        }
        if ui.button("Export PDF").clicked() {
            state.request(Command::ExportPdf);
        }
    });
}

/// 强调色按钮（Process / Predict Performance）
pub fn accent_button(ui: &mut egui::Ui, text: &str, scheme: &ColorScheme) -> egui::Response {
    ui.add(
        egui::Button::new(
            egui::RichText::new(text)
                .strong()
                .color(egui::Color32::WHITE),
        )
        .fill(to_color32(scheme.accent)),
    )
}
