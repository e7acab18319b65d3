//! 图纸查看器组件
//!
//! 把显示表面适配到egui画布：分配画布、跟踪尺寸变化、
//! 处理滚轮缩放、绘制场景图元与占位文字。

use crate::theme::to_color32;
use dpa_core::math::Point2;
use dpa_core::transform::ViewTransform;
use dpa_view::{DisplaySurface, PlaceholderKind, ScenePrimitive};

/// 描边线宽（屏幕像素）
const STROKE_WIDTH: f32 = 1.5;

/// 单点标记半径（屏幕像素）
const MARKER_RADIUS: f32 = 3.0;

/// 绘制查看器并处理交互，返回画布响应
pub fn show_viewer(ui: &mut egui::Ui, surface: &mut DisplaySurface) -> egui::Response {
    let (response, painter) =
        ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
    let rect = response.rect;

    // 首次显示与尺寸变化都会触发重新适配
    surface.resized((rect.width(), rect.height()));

    // 滚轮缩放：向上放大，向下缩小
    if response.hovered() {
        let scroll = ui.input(|i| i.raw_scroll_delta);
        if scroll.y > 0.0 {
            surface.zoom_in();
        } else if scroll.y < 0.0 {
            surface.zoom_out();
        }
    }

    let scheme = *surface.theme();
    painter.rect_filled(rect, 2.0, to_color32(scheme.surface));

    let transform = surface.viewport().transform();
    for primitive in surface.scene().primitives() {
        paint_primitive(&painter, &rect, &transform, primitive);
    }

    if let Some(placeholder) = surface.scene().placeholder() {
        let color = match placeholder.kind {
            PlaceholderKind::Empty => to_color32(scheme.text_light),
            PlaceholderKind::Error => to_color32(scheme.error),
        };
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            &placeholder.text,
            egui::FontId::proportional(14.0),
            color,
        );
    }

    response
}

fn to_screen(rect: &egui::Rect, transform: &ViewTransform, p: Point2) -> egui::Pos2 {
    let s = transform.world_to_screen(p);
    egui::Pos2::new(rect.left() + s.x as f32, rect.top() + s.y as f32)
}

fn paint_primitive(
    painter: &egui::Painter,
    rect: &egui::Rect,
    transform: &ViewTransform,
    primitive: &ScenePrimitive,
) {
    match primitive {
        ScenePrimitive::Stroke {
            points,
            closed,
            color,
        } => {
            let stroke = egui::Stroke::new(STROKE_WIDTH, to_color32(*color));
            for pair in points.windows(2) {
                painter.line_segment(
                    [
                        to_screen(rect, transform, pair[0]),
                        to_screen(rect, transform, pair[1]),
                    ],
                    stroke,
                );
            }
            if *closed && points.len() > 2 {
                painter.line_segment(
                    [
                        to_screen(rect, transform, points[points.len() - 1]),
                        to_screen(rect, transform, points[0]),
                    ],
                    stroke,
                );
            }
        }

        ScenePrimitive::Circle {
            center,
            radius,
            color,
        } => {
            let screen_center = to_screen(rect, transform, *center);
            let screen_radius = (radius * transform.scale) as f32;
            painter.circle_stroke(
                screen_center,
                screen_radius,
                egui::Stroke::new(STROKE_WIDTH, to_color32(*color)),
            );
        }

        ScenePrimitive::Marker { position, color } => {
            painter.circle_filled(
                to_screen(rect, transform, *position),
                MARKER_RADIUS,
                to_color32(*color),
            );
        }

        ScenePrimitive::Text {
            position,
            content,
            height,
            color,
        } => {
            let size = ((height * transform.scale) as f32).clamp(6.0, 72.0);
            painter.text(
                to_screen(rect, transform, *position),
                egui::Align2::LEFT_BOTTOM,
                content,
                egui::FontId::proportional(size),
                to_color32(*color),
            );
        }
    }
}
