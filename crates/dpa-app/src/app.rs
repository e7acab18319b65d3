//! 主应用程序
//!
//! 持有UI状态与显示表面，按帧绘制界面并处理UI发出的命令。
//! 文件对话框在命令处理处弹出，加载管线本身保持同步。

use std::path::Path;

use dpa_core::theme::{ColorScheme, ThemeKind};
use dpa_ui::detail_view::show_detail_view;
use dpa_ui::tabs;
use dpa_ui::{apply_theme, controls, Command, Tab, UiState};
use dpa_view::DisplaySurface;
use tracing::{error, info};

use crate::config::AppConfig;

/// 主窗口标题
pub const APP_TITLE: &str = "DXF Profile Analyzer";

/// 应用程序状态
pub struct ProfileAnalyzerApp {
    theme: ThemeKind,
    scheme: ColorScheme,
    ui_state: UiState,
    surface: DisplaySurface,
    /// 详情窗口的独立副本，缩放互不影响
    detail_surface: Option<DisplaySurface>,
}

impl ProfileAnalyzerApp {
    pub fn new(config: &AppConfig) -> Self {
        let theme = config.theme;
        let scheme = theme.scheme();
        let mut ui_state = UiState::default();
        ui_state.dark_mode = theme == ThemeKind::Dark;
        Self {
            theme,
            scheme,
            ui_state,
            surface: DisplaySurface::new(scheme),
            detail_surface: None,
        }
    }

    /// 切换浅色/深色主题，并把新配色传给所有显示表面
    fn set_theme(&mut self, theme: ThemeKind) {
        self.theme = theme;
        self.scheme = theme.scheme();
        self.ui_state.dark_mode = theme == ThemeKind::Dark;
        self.surface.set_theme(self.scheme);
        if let Some(detail) = &mut self.detail_surface {
            detail.set_theme(self.scheme);
        }
    }

    /// 加载图纸文件；错误进入显示表面的错误态并弹出消息框
    fn load_drawing(&mut self, path: &Path) {
        match self.surface.load(path) {
            Ok(metadata) => {
                info!("Loaded drawing {}: {}", path.display(), metadata.version);
                self.detail_surface = None;
                self.ui_state
                    .set_status(format!("Uploaded: {}", path.display()));
            }
            Err(e) => {
                error!("Load failed for {}: {}", path.display(), e);
                self.detail_surface = None;
                self.ui_state.set_status(e.to_string());
                self.ui_state.show_modal("Load Error", e.to_string());
            }
        }
    }

    /// 处理本帧UI发出的命令
    fn process_command(&mut self, command: Command) {
        match command {
            Command::UploadDxf => {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("DXF Files", &["dxf"])
                    .set_title("Upload DXF")
                    .pick_file()
                {
                    self.load_drawing(&path);
                }
            }
            Command::ExportPdf => {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("PDF Files", &["pdf"])
                    .set_title("Export PDF")
                    .save_file()
                {
                    self.ui_state
                        .set_status(format!("Exported to: {}", path.display()));
                }
            }

            // 占位动作：只弹出提示，不包含真实算法
            Command::CorrectDxf => {
                self.ui_state
                    .show_modal("DXF Correction", "Performing DXF correction...");
            }
            Command::GenerateProfile => {
                self.ui_state
                    .show_modal("Profile Generation", "Generating profile...");
            }
            Command::ProcessProfile => {
                self.ui_state
                    .show_modal("Profile Processing", "Processing profile...");
            }
            Command::FindSimilarProfiles => {
                self.ui_state
                    .show_modal("Similar Profiles", "Finding similar profiles by features...");
            }
            Command::FindSimilarImages => {
                self.ui_state
                    .show_modal("Similar Images", "Finding similar profiles by images...");
            }
            Command::FindBestMatch => {
                self.ui_state
                    .show_modal("Best Match", "Finding best matching profiles...");
            }
            Command::PredictPerformance => {
                self.ui_state
                    .show_modal("Performance Prediction", "Predicting extrusion performance...");
            }

            Command::ZoomIn => self.surface.zoom_in(),
            Command::ZoomOut => self.surface.zoom_out(),
            Command::ZoomFit => self.surface.fit_to_view(),

            Command::OpenDetailView => {
                if self.surface.has_content() {
                    self.detail_surface = Some(self.surface.clone());
                    self.ui_state.show_detail_view = true;
                }
            }
        }
    }

    /// 模态消息框：单个OK按钮，点击后关闭
    fn show_modal(&mut self, ctx: &egui::Context) {
        let Some(modal) = self.ui_state.modal.clone() else {
            return;
        };
        let mut dismissed = false;
        egui::Window::new(&modal.title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(&modal.text);
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            });
        if dismissed {
            self.ui_state.modal = None;
        }
    }
}

impl eframe::App for ProfileAnalyzerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        apply_theme(ctx, &self.scheme, self.ui_state.dark_mode);

        // ===== 顶部：标题、主题切换、控制区、标签栏 =====
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(APP_TITLE);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let label = if self.ui_state.dark_mode {
                        "Light Mode"
                    } else {
                        "Dark Mode"
                    };
                    if ui.button(label).clicked() {
                        let next = match self.theme {
                            ThemeKind::Light => ThemeKind::Dark,
                            ThemeKind::Dark => ThemeKind::Light,
                        };
                        self.set_theme(next);
                    }
                });
            });
            ui.separator();
            controls::show_controls(ui, &mut self.ui_state, &self.scheme);
            ui.separator();
            ui.horizontal(|ui| {
                for tab in Tab::ALL {
                    if ui
                        .selectable_label(self.ui_state.active_tab == tab, tab.title())
                        .clicked()
                    {
                        self.ui_state.active_tab = tab;
                    }
                }
            });
        });

        // ===== 底部：状态栏 =====
        let status = self.ui_state.status_message.clone();
        let loaded = self.surface.has_content();
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&status);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if loaded {
                        ui.label("Drawing loaded");
                    } else {
                        ui.label("No drawing");
                    }
                });
            });
        });

        // ===== 中央：当前标签页 =====
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| match self.ui_state.active_tab {
                Tab::CadViewer => tabs::cad_viewer::show(
                    ui,
                    &mut self.ui_state,
                    &mut self.surface,
                    &self.scheme,
                ),
                Tab::FeatureComparison => {
                    tabs::feature_comparison::show(ui, &mut self.ui_state, &self.scheme)
                }
                Tab::ImageComparison => {
                    tabs::image_comparison::show(ui, &mut self.ui_state, &self.scheme)
                }
                Tab::BestMatch => tabs::best_match::show(ui, &mut self.ui_state, &self.scheme),
                Tab::DiePrediction => {
                    tabs::die_prediction::show(ui, &mut self.ui_state, &self.scheme)
                }
            });
        });

        // ===== 详情窗口 =====
        if self.ui_state.show_detail_view {
            if let Some(detail) = &mut self.detail_surface {
                let mut open = true;
                show_detail_view(ctx, &mut open, detail);
                self.ui_state.show_detail_view = open;
            } else {
                self.ui_state.show_detail_view = false;
            }
        }

        self.show_modal(ctx);

        if let Some(command) = self.ui_state.take_command() {
            self.process_command(command);
        }
    }
}
