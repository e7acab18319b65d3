//! 显示表面
//!
//! 组合场景容器与视口控制器，维护 空/已加载/错误 三态。
//! `load` 同步执行 解析→提取→渲染→适配 整条管线，
//! 失败以 `LoadError` 返回值表示，错误信息写入占位条目。

use crate::error::LoadError;
use crate::render::build_scene;
use crate::scene::{Placeholder, SceneContainer};
use crate::viewport::{ViewportController, ZOOM_STEP};
use dpa_core::theme::ColorScheme;
use dpa_file::{extract_metadata, load_document, DrawingDocument, DrawingMetadata};
use std::path::Path;
use tracing::{info, warn};

/// 未加载任何图纸时的占位文字
pub const EMPTY_PLACEHOLDER: &str = "No drawing loaded";

/// 显示表面的状态
#[derive(Debug, Clone)]
pub enum ViewState {
    /// 无文档，显示占位文字
    Empty,
    /// 文档已加载，场景已填充
    Loaded(DrawingMetadata),
    /// 上次加载失败，占位条目携带错误信息
    Error(String),
}

/// 显示表面
///
/// 每个实例独占自己的场景、视口与元数据；
/// 全屏弹窗使用独立副本而非共享引用。
#[derive(Debug, Clone)]
pub struct DisplaySurface {
    scene: SceneContainer,
    viewport: ViewportController,
    state: ViewState,
    theme: ColorScheme,
}

impl DisplaySurface {
    pub fn new(theme: ColorScheme) -> Self {
        let mut scene = SceneContainer::new();
        scene.set_placeholder(Placeholder::empty(EMPTY_PLACEHOLDER));
        Self {
            scene,
            viewport: ViewportController::new(),
            state: ViewState::Empty,
            theme,
        }
    }

    pub fn scene(&self) -> &SceneContainer {
        &self.scene
    }

    pub fn viewport(&self) -> &ViewportController {
        &self.viewport
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn metadata(&self) -> Option<&DrawingMetadata> {
        match &self.state {
            ViewState::Loaded(metadata) => Some(metadata),
            _ => None,
        }
    }

    /// 是否持有已加载的内容（门控全屏弹窗等扩展动作）
    pub fn has_content(&self) -> bool {
        matches!(self.state, ViewState::Loaded(_))
    }

    pub fn theme(&self) -> &ColorScheme {
        &self.theme
    }

    /// 主题变化时由宿主显式传入新配色
    pub fn set_theme(&mut self, theme: ColorScheme) {
        self.theme = theme;
    }

    /// 无条件清空：场景、视口、状态全部回到初始
    pub fn clear(&mut self) {
        self.scene.clear();
        self.scene
            .set_placeholder(Placeholder::empty(EMPTY_PLACEHOLDER));
        self.viewport.reset();
        self.state = ViewState::Empty;
    }

    /// 从文件加载并显示
    pub fn load(&mut self, path: &Path) -> Result<DrawingMetadata, LoadError> {
        self.clear();
        let document = match load_document(path) {
            Ok(document) => document,
            Err(e) => {
                warn!("Failed to load {}: {}", path.display(), e);
                return Err(self.fail(LoadError::Parse(e)));
            }
        };
        self.display_document(document)
    }

    /// 显示已解析的文档：提取元数据、填充场景、适配视图
    pub fn display_document(
        &mut self,
        document: DrawingDocument,
    ) -> Result<DrawingMetadata, LoadError> {
        self.clear();

        let metadata = extract_metadata(&document);
        let primitives = build_scene(&document);
        if primitives.is_empty() {
            warn!("Drawing produced no renderable primitives");
            return Err(self.fail(LoadError::NoVisibleEntities));
        }

        self.scene.repopulate(primitives);
        self.viewport.reset();
        self.viewport.fit_scene(&self.scene);

        info!(
            "Displaying drawing: {} primitives, version {}",
            self.scene.primitives().len(),
            metadata.version
        );
        self.state = ViewState::Loaded(metadata.clone());
        Ok(metadata)
    }

    /// 进入错误态：占位条目携带错误信息，不保留部分状态
    fn fail(&mut self, error: LoadError) -> LoadError {
        let message = error.to_string();
        self.scene.clear();
        self.scene.set_placeholder(Placeholder::error(&message));
        self.viewport.reset();
        self.state = ViewState::Error(message);
        error
    }

    /// 放大一个步进；无内容时不做任何事
    pub fn zoom_in(&mut self) {
        if self.has_content() {
            self.viewport.zoom(ZOOM_STEP);
        }
    }

    /// 缩小一个步进；无内容时不做任何事
    pub fn zoom_out(&mut self) {
        if self.has_content() {
            self.viewport.zoom(1.0 / ZOOM_STEP);
        }
    }

    /// 以最新计算的包围盒重新适配视图
    pub fn fit_to_view(&mut self) {
        if self.has_content() {
            self.viewport.fit_scene(&self.scene);
        }
    }

    /// 显示区域尺寸变化（含首次显示）；尺寸变化且有内容时重新适配
    pub fn resized(&mut self, size: (f32, f32)) {
        if self.viewport.viewport_size() == size {
            return;
        }
        self.viewport.set_viewport_size(size);
        if self.has_content() {
            self.viewport.fit_scene(&self.scene);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::PlaceholderKind;
    use dpa_core::entity::Entity;
    use dpa_core::geometry::{Circle, Geometry, Line};
    use dpa_core::math::Point2;

    fn surface() -> DisplaySurface {
        let mut s = DisplaySurface::new(ColorScheme::light());
        s.resized((800.0, 600.0));
        s
    }

    fn document_a() -> DrawingDocument {
        let mut doc = DrawingDocument::new("R2013".to_string(), 4);
        doc.entities.push(Entity::new(Geometry::Line(Line::new(
            Point2::new(0.0, 0.0),
            Point2::new(100.0, 50.0),
        ))));
        doc
    }

    fn document_b() -> DrawingDocument {
        let mut doc = DrawingDocument::new("R2018".to_string(), 6);
        doc.entities.push(Entity::new(Geometry::Circle(Circle::new(
            Point2::new(0.0, 0.0),
            25.0,
        ))));
        doc.entities.push(Entity::new(Geometry::Circle(Circle::new(
            Point2::new(50.0, 0.0),
            10.0,
        ))));
        doc
    }

    #[test]
    fn test_initial_state_is_empty() {
        let s = surface();
        assert!(matches!(s.state(), ViewState::Empty));
        assert!(!s.has_content());
        let ph = s.scene().placeholder().unwrap();
        assert_eq!(ph.kind, PlaceholderKind::Empty);
        assert_eq!(ph.text, EMPTY_PLACEHOLDER);
    }

    #[test]
    fn test_display_document_transitions_to_loaded() {
        let mut s = surface();
        let metadata = s.display_document(document_a()).unwrap();
        assert!(s.has_content());
        assert_eq!(metadata.version, "R2013");
        assert_eq!(metadata.unit_label, "Millimeters");
        assert!(s.scene().placeholder().is_none());
        assert_eq!(s.scene().primitives().len(), 1);
    }

    #[test]
    fn test_empty_document_transitions_to_error() {
        let mut s = surface();
        let doc = DrawingDocument::new("R2013".to_string(), 4);
        let err = s.display_document(doc).unwrap_err();
        assert!(err.to_string().contains("no visible entities"));
        match s.state() {
            ViewState::Error(message) => assert!(message.contains("no visible entities")),
            other => panic!("expected error state, got {:?}", other),
        }
        assert!(!s.has_content());
        let ph = s.scene().placeholder().unwrap();
        assert_eq!(ph.kind, PlaceholderKind::Error);
    }

    #[test]
    fn test_parse_failure_transitions_to_error() {
        let mut s = surface();
        let err = s.load(Path::new("/nonexistent/missing.dxf")).unwrap_err();
        assert!(err.to_string().contains("failed to load"));
        assert!(matches!(s.state(), ViewState::Error(_)));
    }

    #[test]
    fn test_clear_before_load() {
        let mut s = surface();
        s.display_document(document_a()).unwrap();
        assert_eq!(s.scene().primitives().len(), 1);

        // 加载B后场景里只剩B的图元
        s.display_document(document_b()).unwrap();
        assert_eq!(s.scene().primitives().len(), 2);
        assert!(s.scene().placeholder().is_none());
        assert_eq!(s.metadata().unwrap().version, "R2018");
    }

    #[test]
    fn test_error_then_load_recovers() {
        let mut s = surface();
        let empty = DrawingDocument::new("R2013".to_string(), 4);
        let _ = s.display_document(empty);
        assert!(matches!(s.state(), ViewState::Error(_)));

        s.display_document(document_a()).unwrap();
        assert!(s.has_content());
        assert!(s.scene().placeholder().is_none());
    }

    #[test]
    fn test_refit_is_idempotent() {
        let mut s = surface();
        s.display_document(document_a()).unwrap();
        s.fit_to_view();
        let first = s.viewport().transform();
        s.fit_to_view();
        let second = s.viewport().transform();
        assert!(first.approx_eq(&second, 1e-12));
    }

    #[test]
    fn test_zoom_roundtrip_restores_transform() {
        let mut s = surface();
        s.display_document(document_a()).unwrap();
        let before = s.viewport().transform();
        s.zoom_in();
        s.zoom_out();
        assert!(s.viewport().transform().approx_eq(&before, 1e-9));
    }

    #[test]
    fn test_zoom_is_noop_without_content() {
        let mut s = surface();
        let before = s.viewport().transform();
        s.zoom_in();
        s.zoom_out();
        s.fit_to_view();
        assert_eq!(s.viewport().transform(), before);
    }

    #[test]
    fn test_resize_refits_loaded_content() {
        let mut s = surface();
        s.display_document(document_a()).unwrap();
        let before = s.viewport().transform();
        s.resized((400.0, 300.0));
        let after = s.viewport().transform();
        assert!(!after.approx_eq(&before, 1e-9));
        assert_eq!(s.viewport().viewport_size(), (400.0, 300.0));
    }
}
