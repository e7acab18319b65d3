//! 主题应用
//!
//! 把配色方案映射到egui的视觉样式。配色始终由宿主显式传入，
//! 组件不自行决定颜色。

use dpa_core::theme::{Color, ColorScheme};

/// 核心颜色转egui颜色
pub fn to_color32(color: Color) -> egui::Color32 {
    egui::Color32::from_rgb(color.r, color.g, color.b)
}

/// 将配色方案应用到egui上下文
pub fn apply_theme(ctx: &egui::Context, scheme: &ColorScheme, dark_mode: bool) {
    let mut visuals = if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };

    visuals.panel_fill = to_color32(scheme.background);
    visuals.window_fill = to_color32(scheme.surface);
    visuals.extreme_bg_color = to_color32(scheme.surface);
    visuals.override_text_color = Some(to_color32(scheme.text));
    visuals.selection.bg_fill = to_color32(scheme.primary);
    visuals.hyperlink_color = to_color32(scheme.primary);
    visuals.error_fg_color = to_color32(scheme.error);
    visuals.widgets.hovered.bg_fill = to_color32(scheme.secondary);
    visuals.widgets.active.bg_fill = to_color32(scheme.primary);

    ctx.set_visuals(visuals);
}
