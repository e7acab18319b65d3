//! 数学基础类型
//!
//! 基于 nalgebra 的2D点/向量别名，以及轴对齐包围盒。

use serde::{Deserialize, Serialize};

/// 浮点比较容差
pub const EPSILON: f64 = 1e-9;

pub type Point2 = nalgebra::Point2<f64>;
pub type Vector2 = nalgebra::Vector2<f64>;

/// 2D轴对齐包围盒
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox2 {
    pub min: Point2,
    pub max: Point2,
}

impl BoundingBox2 {
    pub fn new(min: Point2, max: Point2) -> Self {
        Self { min, max }
    }

    /// 由一组点构造包围盒；空集合返回原点处的退化盒
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Point2>,
    {
        let mut iter = points.into_iter();
        let first = match iter.next() {
            Some(p) => p,
            None => Point2::origin(),
        };
        let mut bbox = Self::new(first, first);
        for p in iter {
            bbox.expand(p);
        }
        bbox
    }

    /// 扩展包围盒以包含指定点
    pub fn expand(&mut self, p: Point2) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    /// 两个包围盒的并集
    pub fn union(&self, other: &Self) -> Self {
        let mut bbox = *self;
        bbox.expand(other.min);
        bbox.expand(other.max);
        bbox
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Point2 {
        Point2::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }

    /// 宽或高接近于零即视为退化
    pub fn is_degenerate(&self) -> bool {
        self.width() < EPSILON || self.height() < EPSILON
    }
}
