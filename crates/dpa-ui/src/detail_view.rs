//! 独立的图纸详情窗口
//!
//! 持有自己的显示表面副本，缩放/平移不影响主查看器。

use crate::viewer::show_viewer;
use dpa_view::DisplaySurface;

/// 绘制详情窗口，返回窗口是否仍然打开
pub fn show_detail_view(ctx: &egui::Context, open: &mut bool, surface: &mut DisplaySurface) {
    egui::Window::new("Profile Detail View")
        .open(open)
        .default_size(egui::vec2(900.0, 650.0))
        .resizable(true)
        .collapsible(false)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Fit").clicked() {
                    surface.fit_to_view();
                }
                if ui.button("−").on_hover_text("Zoom out").clicked() {
                    surface.zoom_out();
                }
                if ui.button("+").on_hover_text("Zoom in").clicked() {
                    surface.zoom_in();
                }
                if let Some(metadata) = surface.metadata() {
                    ui.separator();
                    ui.label(format!(
                        "{} | {} entities",
                        metadata.unit_label,
                        metadata.entity_counts.values().sum::<usize>()
                    ));
                }
            });
            ui.separator();
            show_viewer(ui, surface);
        });
}
