//! DPA 加载/显示管线
//!
//! 图纸的加载与显示：解析结果经渲染桥转为场景图元，
//! 视口控制器负责包围盒计算、适配缩放，显示表面维护
//! 空/已加载/错误三态。本crate只有纯数据和算法，
//! 不引用任何UI工具包类型。

pub mod error;
pub mod render;
pub mod scene;
pub mod surface;
pub mod viewport;

pub use error::LoadError;
pub use scene::{Placeholder, PlaceholderKind, SceneContainer, ScenePrimitive};
pub use surface::{DisplaySurface, ViewState, EMPTY_PLACEHOLDER};
pub use viewport::{ViewportController, FIT_MARGIN, ZOOM_STEP};
