//! 标签页
//!
//! CAD Viewer 之外的页面都是占位界面：
//! 按钮只弹出提示，不包含任何真实算法。

pub mod best_match;
pub mod cad_viewer;
pub mod die_prediction;
pub mod feature_comparison;
pub mod image_comparison;

use crate::theme::to_color32;
use dpa_core::theme::ColorScheme;

/// 虚线框占位块：居中文字的灰底卡片
pub(crate) fn placeholder_box(
    ui: &mut egui::Ui,
    text: &str,
    size: egui::Vec2,
    scheme: &ColorScheme,
) {
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    let painter = ui.painter();
    painter.rect_filled(rect, 4.0, to_color32(scheme.surface));
    painter.rect_stroke(
        rect,
        4.0,
        egui::Stroke::new(1.0, to_color32(scheme.text_light)),
        egui::StrokeKind::Inside,
    );
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        text,
        egui::FontId::proportional(13.0),
        to_color32(scheme.text_light),
    );
}

/// 参考图样 + 五个相似图样的占位网格（特征/图像比较共用）
pub(crate) fn similarity_grid(
    ui: &mut egui::Ui,
    reference_label: &str,
    scheme: &ColorScheme,
) {
    ui.group(|ui| {
        ui.label(egui::RichText::new("Reference Profile").strong());
        placeholder_box(
            ui,
            reference_label,
            egui::vec2(ui.available_width(), 180.0),
            scheme,
        );
    });

    ui.group(|ui| {
        ui.label(egui::RichText::new("Similar Profiles").strong());
        egui::Grid::new("similar_profiles")
            .spacing(egui::vec2(10.0, 10.0))
            .show(ui, |ui| {
                for i in 0..5 {
                    ui.vertical(|ui| {
                        placeholder_box(
                            ui,
                            &format!("Profile {}", i + 1),
                            egui::vec2(150.0, 100.0),
                            scheme,
                        );
                        let similarity = format!("Similarity: {}%", 80 - i * 5);
                        if i < 2 {
                            ui.label(
                                egui::RichText::new(similarity)
                                    .strong()
                                    .color(to_color32(scheme.accent)),
                            );
                        } else {
                            ui.label(similarity);
                        }
                    });
                    if i == 2 {
                        ui.end_row();
                    }
                }
            });
    });
}
