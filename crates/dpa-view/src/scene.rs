//! 场景容器
//!
//! 可渲染图元的集合，外加一个可选的占位条目
//! （场景为空或出错时显示的文字）。
//! 不变量：任意时刻至多存在一个占位条目；
//! 重新填充总是先整体清空，绝不增量修改。

use dpa_core::math::{BoundingBox2, Point2};
use dpa_core::theme::Color;

/// 可渲染图元
#[derive(Debug, Clone)]
pub enum ScenePrimitive {
    /// 折线描边（直线、圆弧折化、多段线）
    Stroke {
        points: Vec<Point2>,
        closed: bool,
        color: Color,
    },
    /// 圆
    Circle {
        center: Point2,
        radius: f64,
        color: Color,
    },
    /// 单点标记（以固定屏幕尺寸绘制）
    Marker { position: Point2, color: Color },
    /// 文本
    Text {
        position: Point2,
        content: String,
        height: f64,
        color: Color,
    },
}

impl ScenePrimitive {
    /// 图元的世界坐标包围盒
    pub fn bounding_box(&self) -> BoundingBox2 {
        match self {
            ScenePrimitive::Stroke { points, .. } => {
                BoundingBox2::from_points(points.iter().copied())
            }
            ScenePrimitive::Circle { center, radius, .. } => BoundingBox2::new(
                Point2::new(center.x - radius, center.y - radius),
                Point2::new(center.x + radius, center.y + radius),
            ),
            ScenePrimitive::Marker { position, .. } => BoundingBox2::new(*position, *position),
            ScenePrimitive::Text {
                position,
                content,
                height,
                ..
            } => {
                let width = height * 0.6 * content.chars().count() as f64;
                BoundingBox2::new(
                    *position,
                    Point2::new(position.x + width, position.y + height),
                )
            }
        }
    }
}

/// 占位条目的类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderKind {
    /// 尚未加载任何图纸
    Empty,
    /// 上一次加载失败
    Error,
}

/// 占位条目：场景无内容时显示的文字
#[derive(Debug, Clone)]
pub struct Placeholder {
    pub text: String,
    pub kind: PlaceholderKind,
}

impl Placeholder {
    pub fn empty(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: PlaceholderKind::Empty,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: PlaceholderKind::Error,
        }
    }
}

/// 场景容器
#[derive(Debug, Clone, Default)]
pub struct SceneContainer {
    primitives: Vec<ScenePrimitive>,
    placeholder: Option<Placeholder>,
}

impl SceneContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn primitives(&self) -> &[ScenePrimitive] {
        &self.primitives
    }

    pub fn placeholder(&self) -> Option<&Placeholder> {
        self.placeholder.as_ref()
    }

    /// 场景是否没有可渲染图元
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// 清空图元与占位条目
    pub fn clear(&mut self) {
        self.primitives.clear();
        self.placeholder = None;
    }

    /// 设置占位条目，替换已有的那个
    pub fn set_placeholder(&mut self, placeholder: Placeholder) {
        self.placeholder = Some(placeholder);
    }

    /// 整体替换图元：先清空旧图元和占位条目，再填入新图元
    pub fn repopulate(&mut self, primitives: Vec<ScenePrimitive>) {
        self.clear();
        self.primitives = primitives;
    }
}
