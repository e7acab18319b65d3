//! Die Prediction 标签页（占位界面）
//!
//! 性能参数表：前三项显示示例值，
//! 其余在预测算法接入前显示 "--"。

use crate::controls::accent_button;
use crate::state::{Command, UiState};
use crate::theme::to_color32;
use dpa_core::theme::ColorScheme;

/// 性能参数及示例值
const PERFORMANCE_PARAMS: [(&str, &str); 17] = [
    ("Alloy", "6063"),
    ("Billet Length", "750 mm"),
    ("Butt Length", "25 mm"),
    ("Acceleration Time", "12 s"),
    ("Extrusion Time", "65 s"),
    ("Cycle Time", "110 s"),
    ("Puller Speed", "1.2 m/min"),
    ("Ram Speed", "8.5 mm/s"),
    ("Peak Stem Force", "850 tons"),
    ("Die Force", "650 tons"),
    ("Billet Temp (Head)", "475 °C"),
    ("Billet Temp (Tail)", "460 °C"),
    ("Exit Temp (Front)", "520 °C"),
    ("Exit Temp (Rear)", "515 °C"),
    ("Recovery", "92%"),
    ("Front End Scrap", "1.5 m"),
    ("Back-end Scrap", "0.8 m"),
];

pub fn show(ui: &mut egui::Ui, state: &mut UiState, scheme: &ColorScheme) {
    ui.group(|ui| {
        ui.label(egui::RichText::new("Performance Prediction").strong());
        egui::Grid::new("performance_params")
            .num_columns(4)
            .spacing(egui::vec2(24.0, 6.0))
            .show(ui, |ui| {
                for (i, (param, value)) in PERFORMANCE_PARAMS.iter().enumerate() {
                    ui.label(egui::RichText::new(format!("{}:", param)).strong());
                    let shown = if i < 3 { value } else { &"--" };
                    ui.colored_label(to_color32(scheme.primary), *shown);
                    if i % 2 == 1 {
                        ui.end_row();
                    }
                }
            });
    });

    if accent_button(ui, "Predict Performance", scheme).clicked() {
        state.request(Command::PredictPerformance);
    }
}
