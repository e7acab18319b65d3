//! 视图变换
//!
//! 世界坐标到屏幕坐标的等比仿射映射。屏幕Y轴向下，
//! 因此映射时翻转Y分量。

use crate::math::{Point2, Vector2};
use serde::{Deserialize, Serialize};

/// 视图变换：`screen = (world.x * scale + offset.x, -world.y * scale + offset.y)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewTransform {
    pub scale: f64,
    pub offset: Vector2,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl ViewTransform {
    pub fn identity() -> Self {
        Self {
            scale: 1.0,
            offset: Vector2::zeros(),
        }
    }

    /// 世界坐标转屏幕坐标
    pub fn world_to_screen(&self, p: Point2) -> Point2 {
        Point2::new(
            p.x * self.scale + self.offset.x,
            -p.y * self.scale + self.offset.y, // Y轴翻转
        )
    }

    /// 屏幕坐标转世界坐标
    pub fn screen_to_world(&self, p: Point2) -> Point2 {
        Point2::new(
            (p.x - self.offset.x) / self.scale,
            -(p.y - self.offset.y) / self.scale,
        )
    }

    /// 以屏幕上某点为锚点缩放：该点对应的世界位置保持不动
    pub fn zoom_about(&mut self, factor: f64, anchor: Point2) {
        self.scale *= factor;
        self.offset = self.offset * factor + anchor.coords * (1.0 - factor);
    }

    /// 容差范围内的相等比较
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        (self.scale - other.scale).abs() <= tolerance
            && (self.offset - other.offset).norm() <= tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::EPSILON;

    #[test]
    fn test_identity_roundtrip() {
        let t = ViewTransform::identity();
        let p = Point2::new(3.0, 4.0);
        let s = t.world_to_screen(p);
        assert_eq!(s, Point2::new(3.0, -4.0));
        let back = t.screen_to_world(s);
        assert!((back - p).norm() < EPSILON);
    }

    #[test]
    fn test_zoom_about_keeps_anchor() {
        let mut t = ViewTransform {
            scale: 2.0,
            offset: Vector2::new(100.0, 50.0),
        };
        let anchor_screen = Point2::new(120.0, 80.0);
        let anchor_world = t.screen_to_world(anchor_screen);

        t.zoom_about(1.2, anchor_screen);

        let after = t.world_to_screen(anchor_world);
        assert!((after - anchor_screen).norm() < 1e-6);
        assert!((t.scale - 2.4).abs() < EPSILON);
    }

    #[test]
    fn test_zoom_inverse_restores_transform() {
        let original = ViewTransform {
            scale: 1.5,
            offset: Vector2::new(400.0, 300.0),
        };
        let mut t = original;
        let anchor = Point2::new(400.0, 300.0);
        t.zoom_about(1.2, anchor);
        t.zoom_about(1.0 / 1.2, anchor);
        assert!(t.approx_eq(&original, 1e-9));
    }
}
