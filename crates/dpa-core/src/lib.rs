//! DPA 核心几何与数学类型
//!
//! 提供2D几何图元、视图变换和主题配色的值类型。
//! 本crate不做任何I/O，也不依赖UI工具包。

pub mod entity;
pub mod geometry;
pub mod math;
pub mod theme;
pub mod transform;

pub mod prelude {
    //! 常用类型的便捷导入
    pub use crate::entity::Entity;
    pub use crate::geometry::{Arc, Circle, Geometry, Line, Point, Polyline, PolylineVertex, Text};
    pub use crate::math::{BoundingBox2, Point2, Vector2, EPSILON};
    pub use crate::theme::{Color, ColorScheme, ThemeKind};
    pub use crate::transform::ViewTransform;
}
