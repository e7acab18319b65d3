//! DXF文件导入
//!
//! 所有字节级解析都委托给 `dxf` crate；这里只负责把解析结果
//! 转换为内部文档模型（头部摘要 + 实体序列）。

use crate::document::DrawingDocument;
use crate::error::FileError;
use dpa_core::entity::Entity;
use dpa_core::geometry::{Arc, Circle, Geometry, Line, Point, Polyline, PolylineVertex, Text};
use dpa_core::math::Point2;
use dpa_core::theme::Color;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{debug, info};

/// 超出此量级的坐标视为未设置的哨兵值
const EXTENTS_SENTINEL: f64 = 1e19;

/// 从DXF文件加载文档
///
/// 文件打开失败报 `Io`，解析失败报 `Dxf`。
pub fn load_document(path: &Path) -> Result<DrawingDocument, FileError> {
    let mut reader = BufReader::new(File::open(path)?);
    let drawing = dxf::Drawing::load(&mut reader).map_err(|e| FileError::Dxf(e.to_string()))?;

    let mut document = DrawingDocument::new(
        format!("{:?}", drawing.header.version),
        drawing.header.default_drawing_units as i32,
    );
    document.extents = header_extents(&drawing.header);

    let mut skipped = 0usize;
    for entity in drawing.entities() {
        match convert_dxf_entity(entity) {
            Some(converted) => document.entities.push(converted),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        debug!("Skipped {} unsupported DXF entities", skipped);
    }
    info!(
        "Loaded {}: {} entities, version {}",
        path.display(),
        document.entity_count(),
        document.version
    );

    Ok(document)
}

/// 读取 $EXTMIN / $EXTMAX；倒置或哨兵值视为缺失
fn header_extents(header: &dxf::Header) -> Option<(Point2, Point2)> {
    let min = &header.minimum_drawing_extents;
    let max = &header.maximum_drawing_extents;

    let sane = |v: f64| v.abs() < EXTENTS_SENTINEL;
    if !(sane(min.x) && sane(min.y) && sane(max.x) && sane(max.y)) {
        return None;
    }
    if min.x > max.x || min.y > max.y {
        return None;
    }
    Some((Point2::new(min.x, min.y), Point2::new(max.x, max.y)))
}

/// 将DXF实体转换为内部实体
fn convert_dxf_entity(entity: &dxf::entities::Entity) -> Option<Entity> {
    let geometry = match &entity.specific {
        dxf::entities::EntityType::Line(line) => {
            let start = Point2::new(line.p1.x, line.p1.y);
            let end = Point2::new(line.p2.x, line.p2.y);
            Geometry::Line(Line::new(start, end))
        }

        dxf::entities::EntityType::Circle(circle) => {
            let center = Point2::new(circle.center.x, circle.center.y);
            Geometry::Circle(Circle::new(center, circle.radius))
        }

        dxf::entities::EntityType::Arc(arc) => {
            let center = Point2::new(arc.center.x, arc.center.y);
            let start_angle = arc.start_angle.to_radians();
            let end_angle = arc.end_angle.to_radians();
            Geometry::Arc(Arc::new(center, arc.radius, start_angle, end_angle))
        }

        dxf::entities::EntityType::LwPolyline(lwpoly) => {
            let vertices: Vec<PolylineVertex> = lwpoly
                .vertices
                .iter()
                .map(|v| PolylineVertex::with_bulge(Point2::new(v.x, v.y), v.bulge))
                .collect();
            Geometry::Polyline(Polyline::new(vertices, lwpoly.is_closed()))
        }

        dxf::entities::EntityType::Polyline(poly) => {
            let vertices: Vec<PolylineVertex> = poly
                .vertices()
                .map(|v| {
                    PolylineVertex::with_bulge(Point2::new(v.location.x, v.location.y), v.bulge)
                })
                .collect();
            Geometry::Polyline(Polyline::new(vertices, poly.is_closed()))
        }

        dxf::entities::EntityType::Text(text) => {
            let position = Point2::new(text.location.x, text.location.y);
            let mut converted = Text::new(position, text.value.clone(), text.text_height);
            converted.rotation = text.rotation.to_radians();
            Geometry::Text(converted)
        }

        dxf::entities::EntityType::MText(mtext) => {
            let position = Point2::new(mtext.insertion_point.x, mtext.insertion_point.y);
            // MText 内容可能包含格式代码，这里只处理换行
            let content = mtext.text.replace("\\P", "\n");
            let mut converted = Text::new(position, content, mtext.initial_text_height);
            converted.rotation = mtext.rotation_angle.to_radians();
            Geometry::Text(converted)
        }

        dxf::entities::EntityType::ModelPoint(point) => {
            let position = Point2::new(point.location.x, point.location.y);
            Geometry::Point(Point::from_point2(position))
        }

        // 其余实体类型不参与渲染，仅在加载时统计跳过数量
        _ => return None,
    };

    let color = entity
        .common
        .color
        .index()
        .map(|i| aci_to_color(i as u8))
        .unwrap_or(Color::WHITE);

    Some(Entity::new(geometry).with_color(color))
}

/// AutoCAD颜色索引(ACI)转RGB
fn aci_to_color(index: u8) -> Color {
    match index {
        1 => Color::rgb(255, 0, 0),
        2 => Color::rgb(255, 255, 0),
        3 => Color::rgb(0, 255, 0),
        4 => Color::rgb(0, 255, 255),
        5 => Color::rgb(0, 0, 255),
        6 => Color::rgb(255, 0, 255),
        7 => Color::WHITE,
        8 => Color::rgb(128, 128, 128),
        9 => Color::rgb(192, 192, 192),
        _ => Color::WHITE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_drawing() -> dxf::Drawing {
        let mut drawing = dxf::Drawing::new();
        drawing.header.default_drawing_units = dxf::enums::Units::Millimeters;
        drawing.header.minimum_drawing_extents = dxf::Point::new(0.0, 0.0, 0.0);
        drawing.header.maximum_drawing_extents = dxf::Point::new(100.0, 50.0, 0.0);

        let line = dxf::entities::Line {
            p1: dxf::Point::new(0.0, 0.0, 0.0),
            p2: dxf::Point::new(100.0, 0.0, 0.0),
            ..Default::default()
        };
        drawing.add_entity(dxf::entities::Entity::new(
            dxf::entities::EntityType::Line(line),
        ));

        let circle = dxf::entities::Circle {
            center: dxf::Point::new(50.0, 25.0, 0.0),
            radius: 10.0,
            ..Default::default()
        };
        drawing.add_entity(dxf::entities::Entity::new(
            dxf::entities::EntityType::Circle(circle),
        ));

        drawing
    }

    #[test]
    fn test_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.dxf");
        sample_drawing().save_file(&path).unwrap();

        let document = load_document(&path).unwrap();
        assert_eq!(document.entity_count(), 2);
        assert_eq!(document.unit_code, 4);

        let (min, max) = document.extents.expect("extents should be present");
        assert!((min.x - 0.0).abs() < 1e-9);
        assert!((max.x - 100.0).abs() < 1e-9);
        assert!((max.y - 50.0).abs() < 1e-9);

        assert!(matches!(document.entities[0].geometry, Geometry::Line(_)));
        assert!(matches!(document.entities[1].geometry, Geometry::Circle(_)));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = load_document(Path::new("/nonexistent/missing.dxf")).unwrap_err();
        assert!(matches!(err, FileError::Io(_)));
    }

    #[test]
    fn test_load_garbage_is_dxf_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.dxf");
        std::fs::write(&path, b"not a dxf file at all").unwrap();

        let err = load_document(&path).unwrap_err();
        assert!(matches!(err, FileError::Dxf(_)));
    }

    #[test]
    fn test_inverted_extents_are_absent() {
        let mut header = dxf::Header::default();
        header.minimum_drawing_extents = dxf::Point::new(10.0, 0.0, 0.0);
        header.maximum_drawing_extents = dxf::Point::new(0.0, 5.0, 0.0);
        assert!(header_extents(&header).is_none());
    }

    #[test]
    fn test_sentinel_extents_are_absent() {
        let mut header = dxf::Header::default();
        header.minimum_drawing_extents = dxf::Point::new(1e20, 1e20, 0.0);
        header.maximum_drawing_extents = dxf::Point::new(-1e20, -1e20, 0.0);
        assert!(header_extents(&header).is_none());
    }

    #[test]
    fn test_aci_palette() {
        assert_eq!(aci_to_color(1), Color::rgb(255, 0, 0));
        assert_eq!(aci_to_color(7), Color::WHITE);
        assert_eq!(aci_to_color(200), Color::WHITE);
    }
}
