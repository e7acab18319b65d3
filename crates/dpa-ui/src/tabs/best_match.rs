//! Best Match 标签页（占位界面）

use crate::state::{Command, UiState};
use crate::tabs::placeholder_box;
use crate::theme::to_color32;
use dpa_core::theme::ColorScheme;

pub fn show(ui: &mut egui::Ui, state: &mut UiState, scheme: &ColorScheme) {
    ui.group(|ui| {
        ui.label(egui::RichText::new("Best Match Profiles").strong());
        ui.horizontal(|ui| {
            for i in 0..3 {
                ui.vertical(|ui| {
                    let rank = format!("Rank #{}", i + 1);
                    if i == 0 {
                        ui.label(
                            egui::RichText::new(rank)
                                .strong()
                                .color(to_color32(scheme.accent)),
                        );
                    } else {
                        ui.label(egui::RichText::new(rank).strong());
                    }

                    placeholder_box(
                        ui,
                        &format!("Profile {}", i + 1),
                        egui::vec2(200.0, 150.0),
                        scheme,
                    );

                    let similarity = format!("Similarity: {}%", 95 - i * 8);
                    if i == 0 {
                        ui.label(
                            egui::RichText::new(similarity)
                                .strong()
                                .color(to_color32(scheme.accent)),
                        );
                    } else {
                        ui.label(similarity);
                    }
                });
            }
        });
    });

    if ui.button("Find Best Match").clicked() {
        state.request(Command::FindBestMatch);
    }
}
