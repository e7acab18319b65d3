//! CAD Viewer 标签页
//!
//! 嵌入式图纸查看器加上型材信息面板。
//! 这是唯一包含真实行为的页面。

use crate::state::{Command, UiState};
use crate::theme::to_color32;
use crate::viewer::show_viewer;
use dpa_core::theme::ColorScheme;
use dpa_file::DrawingMetadata;
use dpa_view::DisplaySurface;

/// 绘制 CAD Viewer 页
pub fn show(
    ui: &mut egui::Ui,
    state: &mut UiState,
    surface: &mut DisplaySurface,
    scheme: &ColorScheme,
) {
    ui.group(|ui| {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("CAD View").strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .add_enabled(surface.has_content(), egui::Button::new("Open Detail View"))
                    .clicked()
                {
                    state.request(Command::OpenDetailView);
                }
                if ui.button("Fit").clicked() {
                    state.request(Command::ZoomFit);
                }
                if ui.button("−").on_hover_text("Zoom out").clicked() {
                    state.request(Command::ZoomOut);
                }
                if ui.button("+").on_hover_text("Zoom in").clicked() {
                    state.request(Command::ZoomIn);
                }
            });
        });

        let viewer_height = (ui.available_height() - 190.0).max(300.0);
        ui.allocate_ui(egui::vec2(ui.available_width(), viewer_height), |ui| {
            show_viewer(ui, surface);
        });
    });

    ui.group(|ui| {
        ui.label(egui::RichText::new("Profile Information").strong());
        match surface.metadata() {
            Some(metadata) => metadata_grid(ui, metadata, scheme),
            None => {
                ui.label(
                    egui::RichText::new("Profile parameters will be displayed here")
                        .color(to_color32(scheme.text_light)),
                );
            }
        }
    });
}

/// 元数据表格：版本、单位、尺寸与各类型实体数量
fn metadata_grid(ui: &mut egui::Ui, metadata: &DrawingMetadata, scheme: &ColorScheme) {
    let value_color = to_color32(scheme.primary);
    egui::Grid::new("profile_metadata")
        .num_columns(2)
        .spacing(egui::vec2(20.0, 4.0))
        .show(ui, |ui| {
            ui.label(egui::RichText::new("Version:").strong());
            ui.colored_label(value_color, &metadata.version);
            ui.end_row();

            ui.label(egui::RichText::new("Units:").strong());
            ui.colored_label(value_color, metadata.unit_label);
            ui.end_row();

            if let (Some(width), Some(height), Some(area)) =
                (&metadata.width, &metadata.height, &metadata.area)
            {
                ui.label(egui::RichText::new("Width:").strong());
                ui.colored_label(value_color, width);
                ui.end_row();

                ui.label(egui::RichText::new("Height:").strong());
                ui.colored_label(value_color, height);
                ui.end_row();

                ui.label(egui::RichText::new("Area:").strong());
                ui.colored_label(value_color, area);
                ui.end_row();
            }

            for (type_name, count) in &metadata.entity_counts {
                ui.label(format!("{}:", type_name));
                ui.colored_label(value_color, count.to_string());
                ui.end_row();
            }
        });
}
