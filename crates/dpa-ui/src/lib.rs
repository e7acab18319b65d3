//! DPA 用户界面
//!
//! 基于egui的即时模式GUI。管线数据（显示表面、元数据、
//! 主题配色）都是纯值对象，这里只负责把它们画出来，
//! 并把用户动作折算成待处理命令交给宿主。

pub mod controls;
pub mod detail_view;
pub mod state;
pub mod tabs;
pub mod theme;
pub mod viewer;

pub use state::{Alloy, Command, ModalMessage, Tab, UiState};
pub use theme::{apply_theme, to_color32};
pub use viewer::show_viewer;
