//! 解析后的文档模型
//!
//! `DrawingDocument` 在解析完成后不可变，由加载操作独占持有。

use dpa_core::entity::Entity;
use dpa_core::math::Point2;
use serde::{Deserialize, Serialize};

/// 解析后的图纸文档
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawingDocument {
    /// 格式版本（如 "R2013"）
    pub version: String,
    /// 图纸单位代码（$INSUNITS，0-20）
    pub unit_code: i32,
    /// 按文件顺序排列的实体
    pub entities: Vec<Entity>,
    /// 文档声明的内容范围（$EXTMIN / $EXTMAX），缺失时为 None
    pub extents: Option<(Point2, Point2)>,
}

impl DrawingDocument {
    pub fn new(version: String, unit_code: i32) -> Self {
        Self {
            version,
            unit_code,
            entities: Vec::new(),
            extents: None,
        }
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }
}
