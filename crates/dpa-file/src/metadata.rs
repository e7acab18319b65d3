//! 元数据提取
//!
//! 对解析后的文档做一次遍历，派生摘要记录：
//! 版本、单位、各类型实体数量、内容范围尺寸。
//! 纯函数，无I/O，不会失败；缺失的头部信息以默认值表示。

use crate::document::DrawingDocument;
use serde::Serialize;
use std::collections::BTreeMap;

/// 实体类型到数量的映射。
/// 使用 BTreeMap 保证遍历顺序稳定，提取结果可逐字节复现。
pub type EntitySummary = BTreeMap<&'static str, usize>;

/// 图纸摘要元数据
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrawingMetadata {
    pub version: String,
    pub unit_label: &'static str,
    pub entity_counts: EntitySummary,
    /// 内容宽度，保留两位小数；范围缺失时为 None
    pub width: Option<String>,
    pub height: Option<String>,
    pub area: Option<String>,
}

/// $INSUNITS 单位代码查表（0-20），未知代码返回 "Unknown"
pub fn unit_label(code: i32) -> &'static str {
    match code {
        0 => "Unitless",
        1 => "Inches",
        2 => "Feet",
        3 => "Miles",
        4 => "Millimeters",
        5 => "Centimeters",
        6 => "Meters",
        7 => "Kilometers",
        8 => "Microinches",
        9 => "Mils",
        10 => "Yards",
        11 => "Angstroms",
        12 => "Nanometers",
        13 => "Microns",
        14 => "Decimeters",
        15 => "Decameters",
        16 => "Hectometers",
        17 => "Gigameters",
        18 => "Astronomical Units",
        19 => "Light Years",
        20 => "Parsecs",
        _ => "Unknown",
    }
}

/// 从文档提取摘要元数据
pub fn extract_metadata(document: &DrawingDocument) -> DrawingMetadata {
    let mut entity_counts = EntitySummary::new();
    for entity in &document.entities {
        *entity_counts.entry(entity.geometry.type_name()).or_insert(0) += 1;
    }

    let (width, height, area) = match document.extents {
        Some((min, max)) => {
            let w = max.x - min.x;
            let h = max.y - min.y;
            (
                Some(format!("{:.2}", w)),
                Some(format!("{:.2}", h)),
                Some(format!("{:.2}", w * h)),
            )
        }
        None => (None, None, None),
    };

    DrawingMetadata {
        version: document.version.clone(),
        unit_label: unit_label(document.unit_code),
        entity_counts,
        width,
        height,
        area,
    }
}
