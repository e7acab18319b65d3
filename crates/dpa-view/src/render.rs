//! 渲染桥
//!
//! 把解析后的实体转换为场景图元。曲线在这里折化为线段，
//! 之后的包围盒计算与绘制都只面对少数几种图元。

use crate::scene::ScenePrimitive;
use dpa_core::geometry::Geometry;
use dpa_core::math::Point2;
use dpa_file::DrawingDocument;

/// 圆弧折化的段数
const ARC_SEGMENTS: usize = 32;

/// 将文档实体全部转换为场景图元
pub fn build_scene(document: &DrawingDocument) -> Vec<ScenePrimitive> {
    let mut primitives = Vec::with_capacity(document.entity_count());
    for entity in &document.entities {
        if let Some(primitive) = convert(&entity.geometry, entity.color) {
            primitives.push(primitive);
        }
    }
    primitives
}

fn convert(geometry: &Geometry, color: dpa_core::theme::Color) -> Option<ScenePrimitive> {
    match geometry {
        Geometry::Point(p) => Some(ScenePrimitive::Marker {
            position: p.position,
            color,
        }),

        Geometry::Line(line) => Some(ScenePrimitive::Stroke {
            points: vec![line.start, line.end],
            closed: false,
            color,
        }),

        Geometry::Circle(circle) => Some(ScenePrimitive::Circle {
            center: circle.center,
            radius: circle.radius,
            color,
        }),

        Geometry::Arc(arc) => {
            let sweep = arc.sweep_angle();
            let step = sweep / ARC_SEGMENTS as f64;
            let points: Vec<Point2> = (0..=ARC_SEGMENTS)
                .map(|i| arc.point_at(arc.start_angle + i as f64 * step))
                .collect();
            Some(ScenePrimitive::Stroke {
                points,
                closed: false,
                color,
            })
        }

        Geometry::Polyline(polyline) => {
            if polyline.vertex_count() < 2 {
                return None;
            }
            // bulge 圆弧段以直线段近似
            let points: Vec<Point2> = polyline.vertices.iter().map(|v| v.point).collect();
            Some(ScenePrimitive::Stroke {
                points,
                closed: polyline.closed,
                color,
            })
        }

        Geometry::Text(text) => {
            if text.content.is_empty() {
                return None;
            }
            Some(ScenePrimitive::Text {
                position: text.position,
                content: text.content.clone(),
                height: text.height,
                color,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dpa_core::entity::Entity;
    use dpa_core::geometry::{Arc, Circle, Geometry, Line, Polyline};
    use dpa_core::theme::Color;

    #[test]
    fn test_build_scene_converts_each_entity() {
        let mut doc = DrawingDocument::new("R2013".to_string(), 4);
        doc.entities.push(Entity::new(Geometry::Line(Line::new(
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
        ))));
        doc.entities.push(Entity::new(Geometry::Circle(Circle::new(
            Point2::new(5.0, 5.0),
            2.0,
        ))));

        let primitives = build_scene(&doc);
        assert_eq!(primitives.len(), 2);
        assert!(matches!(primitives[0], ScenePrimitive::Stroke { .. }));
        assert!(matches!(primitives[1], ScenePrimitive::Circle { .. }));
    }

    #[test]
    fn test_arc_is_flattened() {
        let arc = Arc::new(Point2::origin(), 1.0, 0.0, std::f64::consts::PI);
        let primitive = convert(&Geometry::Arc(arc), Color::WHITE).unwrap();
        match primitive {
            ScenePrimitive::Stroke { points, .. } => {
                assert_eq!(points.len(), ARC_SEGMENTS + 1);
                // 端点落在圆弧的起止位置
                assert!((points[0].x - 1.0).abs() < 1e-9);
                assert!((points[ARC_SEGMENTS].x + 1.0).abs() < 1e-6);
            }
            _ => panic!("arc should flatten to a stroke"),
        }
    }

    #[test]
    fn test_degenerate_polyline_skipped() {
        let polyline = Polyline::from_points([Point2::origin()], false);
        assert!(convert(&Geometry::Polyline(polyline), Color::WHITE).is_none());
    }
}
