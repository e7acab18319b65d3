//! DXF Profile Analyzer 主程序入口
//! 使用 eframe 作为应用框架，提供完整的 egui 集成

mod app;
mod config;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use app::{ProfileAnalyzerApp, APP_TITLE};
use config::AppConfig;

fn main() -> Result<()> {
    let config = AppConfig::discover()?;

    // 初始化日志：RUST_LOG 优先，否则用配置文件里的等级
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));
    tracing::subscriber::set_global_default(
        FmtSubscriber::builder().with_env_filter(filter).finish(),
    )?;

    info!("Starting {}...", APP_TITLE);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_title(APP_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        native_options,
        Box::new(move |_cc| Ok(Box::new(ProfileAnalyzerApp::new(&config)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {}", e))?;

    Ok(())
}
