//! 几何图元定义
//!
//! 支持的基本图元：
//! - 点 (Point)
//! - 线段 (Line)
//! - 圆 (Circle)
//! - 圆弧 (Arc)
//! - 多段线 (Polyline)
//! - 文本 (Text)

use crate::math::{BoundingBox2, Point2, EPSILON};
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, TAU};

/// 几何类型枚举
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Geometry {
    Point(Point),
    Line(Line),
    Circle(Circle),
    Arc(Arc),
    Polyline(Polyline),
    Text(Text),
}

impl Geometry {
    /// 获取几何的包围盒
    pub fn bounding_box(&self) -> BoundingBox2 {
        match self {
            Geometry::Point(p) => p.bounding_box(),
            Geometry::Line(l) => l.bounding_box(),
            Geometry::Circle(c) => c.bounding_box(),
            Geometry::Arc(a) => a.bounding_box(),
            Geometry::Polyline(pl) => pl.bounding_box(),
            Geometry::Text(t) => t.bounding_box(),
        }
    }

    /// 获取几何的类型名称（用于实体统计）
    pub fn type_name(&self) -> &'static str {
        match self {
            Geometry::Point(_) => "Point",
            Geometry::Line(_) => "Line",
            Geometry::Circle(_) => "Circle",
            Geometry::Arc(_) => "Arc",
            Geometry::Polyline(_) => "Polyline",
            Geometry::Text(_) => "Text",
        }
    }
}

/// 点
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Point {
    pub position: Point2,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            position: Point2::new(x, y),
        }
    }

    pub fn from_point2(position: Point2) -> Self {
        Self { position }
    }

    pub fn bounding_box(&self) -> BoundingBox2 {
        BoundingBox2::new(self.position, self.position)
    }
}

/// 线段
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Line {
    pub start: Point2,
    pub end: Point2,
}

impl Line {
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// 计算线段长度
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }

    pub fn bounding_box(&self) -> BoundingBox2 {
        BoundingBox2::from_points([self.start, self.end])
    }
}

/// 圆
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point2,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point2, radius: f64) -> Self {
        Self { center, radius }
    }

    pub fn bounding_box(&self) -> BoundingBox2 {
        BoundingBox2::new(
            Point2::new(self.center.x - self.radius, self.center.y - self.radius),
            Point2::new(self.center.x + self.radius, self.center.y + self.radius),
        )
    }
}

/// 圆弧
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Arc {
    pub center: Point2,
    pub radius: f64,
    /// 起始角度（弧度）
    pub start_angle: f64,
    /// 终止角度（弧度）
    pub end_angle: f64,
}

impl Arc {
    pub fn new(center: Point2, radius: f64, start_angle: f64, end_angle: f64) -> Self {
        Self {
            center,
            radius,
            start_angle,
            end_angle,
        }
    }

    /// 扫掠角（逆时针，范围 (0, 2π]）
    pub fn sweep_angle(&self) -> f64 {
        let mut sweep = self.end_angle - self.start_angle;
        while sweep <= 0.0 {
            sweep += TAU;
        }
        while sweep > TAU {
            sweep -= TAU;
        }
        sweep
    }

    /// 圆弧上指定角度的点
    pub fn point_at(&self, angle: f64) -> Point2 {
        Point2::new(
            self.center.x + self.radius * angle.cos(),
            self.center.y + self.radius * angle.sin(),
        )
    }

    /// 包围盒：两个端点加上扫掠范围内的象限点
    pub fn bounding_box(&self) -> BoundingBox2 {
        let sweep = self.sweep_angle();
        let mut bbox = BoundingBox2::from_points([
            self.point_at(self.start_angle),
            self.point_at(self.start_angle + sweep),
        ]);

        // 从起始角之后的第一个象限角开始逐个检查
        let mut quadrant = (self.start_angle / FRAC_PI_2).ceil() * FRAC_PI_2;
        if quadrant - self.start_angle < EPSILON {
            quadrant += FRAC_PI_2;
        }
        while quadrant < self.start_angle + sweep {
            bbox.expand(self.point_at(quadrant));
            quadrant += FRAC_PI_2;
        }
        bbox
    }
}

/// 多段线顶点，bulge 表示相邻段的圆弧凸度
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolylineVertex {
    pub point: Point2,
    pub bulge: f64,
}

impl PolylineVertex {
    pub fn new(point: Point2) -> Self {
        Self { point, bulge: 0.0 }
    }

    pub fn with_bulge(point: Point2, bulge: f64) -> Self {
        Self { point, bulge }
    }
}

/// 多段线
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Polyline {
    pub vertices: Vec<PolylineVertex>,
    pub closed: bool,
}

impl Polyline {
    pub fn new(vertices: Vec<PolylineVertex>, closed: bool) -> Self {
        Self { vertices, closed }
    }

    pub fn from_points<I>(points: I, closed: bool) -> Self
    where
        I: IntoIterator<Item = Point2>,
    {
        Self {
            vertices: points.into_iter().map(PolylineVertex::new).collect(),
            closed,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn bounding_box(&self) -> BoundingBox2 {
        BoundingBox2::from_points(self.vertices.iter().map(|v| v.point))
    }
}

/// 文本
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Text {
    pub position: Point2,
    pub content: String,
    pub height: f64,
    /// 旋转角度（弧度）
    pub rotation: f64,
}

impl Text {
    pub fn new(position: Point2, content: String, height: f64) -> Self {
        Self {
            position,
            content,
            height,
            rotation: 0.0,
        }
    }

    /// 近似包围盒：按等宽字形估算宽度
    pub fn bounding_box(&self) -> BoundingBox2 {
        let width = self.height * 0.6 * self.content.chars().count() as f64;
        BoundingBox2::new(
            self.position,
            Point2::new(self.position.x + width, self.position.y + self.height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_length() {
        let line = Line::new(Point2::new(0.0, 0.0), Point2::new(3.0, 4.0));
        assert!((line.length() - 5.0).abs() < EPSILON);
    }

    #[test]
    fn test_circle_bounding_box() {
        let circle = Circle::new(Point2::new(10.0, -5.0), 2.5);
        let bbox = circle.bounding_box();
        assert_eq!(bbox.min, Point2::new(7.5, -7.5));
        assert_eq!(bbox.max, Point2::new(12.5, -2.5));
    }

    #[test]
    fn test_arc_bounding_box_includes_quadrant() {
        // 从0°到180°的上半圆，最高点在90°处
        let arc = Arc::new(Point2::origin(), 1.0, 0.0, std::f64::consts::PI);
        let bbox = arc.bounding_box();
        assert!((bbox.max.y - 1.0).abs() < 1e-6);
        assert!((bbox.min.y - 0.0).abs() < 1e-6);
        assert!((bbox.min.x + 1.0).abs() < 1e-6);
        assert!((bbox.max.x - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_arc_sweep_wraps() {
        // 跨越0°的圆弧
        let arc = Arc::new(Point2::origin(), 1.0, 5.0, 1.0);
        let sweep = arc.sweep_angle();
        assert!((sweep - (TAU - 4.0)).abs() < EPSILON);
    }

    #[test]
    fn test_polyline_bounding_box() {
        let pl = Polyline::from_points(
            [
                Point2::new(0.0, 0.0),
                Point2::new(10.0, 0.0),
                Point2::new(10.0, 10.0),
            ],
            false,
        );
        let bbox = pl.bounding_box();
        assert_eq!(bbox.min, Point2::new(0.0, 0.0));
        assert_eq!(bbox.max, Point2::new(10.0, 10.0));
    }
}
