//! 视口控制器
//!
//! 持有视图变换与最近一次的内容包围盒，提供
//! 包围盒计算、退化包围盒归一化、适配缩放和离散缩放。

use crate::scene::SceneContainer;
use dpa_core::math::{BoundingBox2, Point2, Vector2};
use dpa_core::transform::ViewTransform;
use tracing::debug;

/// 适配视图时内容四周保留的边距（世界单位）
pub const FIT_MARGIN: f64 = 5.0;

/// 离散缩放的步进系数（滚轮/按钮）
pub const ZOOM_STEP: f64 = 1.2;

/// 低于此尺寸的包围盒维度视为退化
const MIN_DIMENSION: f64 = 1.0;

/// 退化维度归一化后的最小尺寸
const NORMALIZED_DIMENSION: f64 = 10.0;

/// 视口控制器
#[derive(Debug, Clone)]
pub struct ViewportController {
    transform: ViewTransform,
    last_bounds: Option<BoundingBox2>,
    viewport_size: (f32, f32),
}

impl Default for ViewportController {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewportController {
    pub fn new() -> Self {
        Self {
            transform: ViewTransform::identity(),
            last_bounds: None,
            viewport_size: (0.0, 0.0),
        }
    }

    pub fn transform(&self) -> ViewTransform {
        self.transform
    }

    pub fn last_bounds(&self) -> Option<BoundingBox2> {
        self.last_bounds
    }

    pub fn viewport_size(&self) -> (f32, f32) {
        self.viewport_size
    }

    pub fn set_viewport_size(&mut self, size: (f32, f32)) {
        self.viewport_size = size;
    }

    /// 重置为单位变换并丢弃已记录的包围盒
    pub fn reset(&mut self) {
        self.transform = ViewTransform::identity();
        self.last_bounds = None;
    }

    /// 计算场景中所有图元（不含占位条目）的最小包围盒
    pub fn compute_bounds(scene: &SceneContainer) -> Option<BoundingBox2> {
        let mut iter = scene.primitives().iter();
        let first = iter.next()?.bounding_box();
        Some(iter.fold(first, |acc, p| acc.union(&p.bounding_box())))
    }

    /// 归一化退化包围盒：任一维度小于1单位时，
    /// 把两个维度都扩到至少10单位，锚定在原最小角。
    /// 该调整只记录日志，从不上报给用户。
    pub fn normalize_bounds(bounds: BoundingBox2) -> BoundingBox2 {
        let (w, h) = (bounds.width(), bounds.height());
        if w >= MIN_DIMENSION && h >= MIN_DIMENSION {
            return bounds;
        }

        debug!(
            "Normalizing degenerate bounds {}x{} at ({}, {})",
            w, h, bounds.min.x, bounds.min.y
        );
        BoundingBox2::new(
            bounds.min,
            Point2::new(
                bounds.min.x + w.max(NORMALIZED_DIMENSION),
                bounds.min.y + h.max(NORMALIZED_DIMENSION),
            ),
        )
    }

    /// 适配视图：重置变换后缩放/平移，使边距内的包围盒
    /// 恰好充满可视区域并保持纵横比（短轴居中留白）。
    /// 包围盒缺失或视口未就绪时不做任何事。
    pub fn fit_to_view(&mut self, bounds: Option<BoundingBox2>) {
        let Some(bounds) = bounds else {
            return;
        };
        let (vw, vh) = (self.viewport_size.0 as f64, self.viewport_size.1 as f64);
        if vw <= 0.0 || vh <= 0.0 {
            return;
        }

        self.transform = ViewTransform::identity();

        let padded_w = bounds.width() + 2.0 * FIT_MARGIN;
        let padded_h = bounds.height() + 2.0 * FIT_MARGIN;
        let scale = (vw / padded_w).min(vh / padded_h);
        let center = bounds.center();

        self.transform.scale = scale;
        self.transform.offset = Vector2::new(
            vw / 2.0 - center.x * scale,
            vh / 2.0 + center.y * scale, // Y轴翻转
        );
        self.last_bounds = Some(bounds);
    }

    /// 重新计算场景包围盒并适配视图
    pub fn fit_scene(&mut self, scene: &SceneContainer) {
        let bounds = Self::compute_bounds(scene).map(Self::normalize_bounds);
        self.fit_to_view(bounds);
    }

    /// 以视口中心为锚点缩放；factor > 1 放大，(0,1) 缩小
    pub fn zoom(&mut self, factor: f64) {
        if factor <= 0.0 {
            return;
        }
        let anchor = Point2::new(
            self.viewport_size.0 as f64 / 2.0,
            self.viewport_size.1 as f64 / 2.0,
        );
        self.transform.zoom_about(factor, anchor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::ScenePrimitive;
    use dpa_core::theme::Color;

    fn scene_with_rect(min: Point2, max: Point2) -> SceneContainer {
        let mut scene = SceneContainer::new();
        scene.repopulate(vec![ScenePrimitive::Stroke {
            points: vec![min, max],
            closed: false,
            color: Color::WHITE,
        }]);
        scene
    }

    #[test]
    fn test_compute_bounds_empty_scene() {
        let scene = SceneContainer::new();
        assert!(ViewportController::compute_bounds(&scene).is_none());
    }

    #[test]
    fn test_normalize_leaves_healthy_bounds() {
        let bounds = BoundingBox2::new(Point2::new(0.0, 0.0), Point2::new(100.0, 50.0));
        assert_eq!(ViewportController::normalize_bounds(bounds), bounds);
    }

    #[test]
    fn test_normalize_floor() {
        // 宽度退化：两个维度都要被扩到至少10，锚定在原最小角
        let bounds = BoundingBox2::new(Point2::new(3.0, 7.0), Point2::new(3.5, 12.0));
        let normalized = ViewportController::normalize_bounds(bounds);
        assert_eq!(normalized.min, Point2::new(3.0, 7.0));
        assert!(normalized.width() >= 10.0);
        assert!(normalized.height() >= 10.0);
    }

    #[test]
    fn test_normalize_point_bounds() {
        let bounds = BoundingBox2::new(Point2::new(-2.0, -2.0), Point2::new(-2.0, -2.0));
        let normalized = ViewportController::normalize_bounds(bounds);
        assert_eq!(normalized.min, Point2::new(-2.0, -2.0));
        assert!((normalized.width() - 10.0).abs() < 1e-9);
        assert!((normalized.height() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_fit_scale_and_centering() {
        let mut viewport = ViewportController::new();
        viewport.set_viewport_size((210.0, 110.0));
        let bounds = BoundingBox2::new(Point2::new(0.0, 0.0), Point2::new(100.0, 50.0));
        viewport.fit_to_view(Some(bounds));

        // 加边距后为110x60；比例取两轴中较小者
        let expected_scale = (210.0 / 110.0_f64).min(110.0 / 60.0);
        let t = viewport.transform();
        assert!((t.scale - expected_scale).abs() < 1e-9);

        // 内容中心映射到视口中心
        let screen_center = t.world_to_screen(bounds.center());
        assert!((screen_center.x - 105.0).abs() < 1e-9);
        assert!((screen_center.y - 55.0).abs() < 1e-9);
    }

    #[test]
    fn test_fit_is_idempotent() {
        let mut viewport = ViewportController::new();
        viewport.set_viewport_size((800.0, 600.0));
        let scene = scene_with_rect(Point2::new(0.0, 0.0), Point2::new(40.0, 20.0));

        viewport.fit_scene(&scene);
        let first = viewport.transform();
        viewport.fit_scene(&scene);
        let second = viewport.transform();
        assert!(first.approx_eq(&second, 1e-12));
    }

    #[test]
    fn test_fit_noop_without_bounds() {
        let mut viewport = ViewportController::new();
        viewport.set_viewport_size((800.0, 600.0));
        viewport.zoom(2.0);
        let before = viewport.transform();
        viewport.fit_to_view(None);
        assert_eq!(viewport.transform(), before);
    }

    #[test]
    fn test_zoom_inverse() {
        let mut viewport = ViewportController::new();
        viewport.set_viewport_size((800.0, 600.0));
        let scene = scene_with_rect(Point2::new(0.0, 0.0), Point2::new(100.0, 100.0));
        viewport.fit_scene(&scene);

        let before = viewport.transform();
        viewport.zoom(ZOOM_STEP);
        viewport.zoom(1.0 / ZOOM_STEP);
        assert!(viewport.transform().approx_eq(&before, 1e-9));
    }
}
