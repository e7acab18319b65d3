//! 绘图实体
//!
//! 对本工具而言，实体就是几何体加上解析得到的颜色；
//! 管线只用类型标签做统计，用几何做渲染委托。

use crate::geometry::Geometry;
use crate::theme::Color;
use serde::{Deserialize, Serialize};

/// 绘图实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub geometry: Geometry,
    pub color: Color,
}

impl Entity {
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            color: Color::WHITE,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}
