// src/renderer.rs
use egui::{Align2, FontId, Painter, Pos2, Rect, Stroke};

use crate::surface::{DisplaySurface, PaintOp, Surface};

/// Paints the display surface with egui shapes.
#[derive(Debug, Clone)]
pub struct Renderer {
    text_font: FontId,
}

impl Renderer {
    pub fn new(text_font: FontId) -> Self {
        Self { text_font }
    }

    /// Screen rectangle covered by `display` when its top-left pixel sits at `origin`.
    pub fn canvas_rect(display: &DisplaySurface, origin: Pos2) -> Rect {
        let [width, height] = display.size();
        Rect::from_min_size(origin, egui::vec2(width as f32, height as f32))
    }

    /// Renders the display surface with its top-left corner at `origin`
    pub fn render(&self, painter: &Painter, origin: Pos2, display: &DisplaySurface) {
        let rect = Self::canvas_rect(display, origin);
        let painter = painter.with_clip_rect(rect.intersect(painter.clip_rect()));
        painter.rect_filled(rect, 0.0, display.background());

        let to_screen = |pos: Pos2| origin + pos.to_vec2();
        for op in display.ops() {
            match op {
                PaintOp::Segment {
                    from,
                    to,
                    color,
                    width,
                } => {
                    let (from, to) = (to_screen(*from), to_screen(*to));
                    painter.line_segment([from, to], Stroke::new(*width, *color));
                    // Round caps
                    painter.circle_filled(from, width * 0.5, *color);
                    painter.circle_filled(to, width * 0.5, *color);
                }
                PaintOp::Text {
                    origin: text_origin,
                    content,
                    color,
                } => {
                    painter.text(
                        to_screen(*text_origin),
                        Align2::LEFT_TOP,
                        content,
                        self.text_font.clone(),
                        *color,
                    );
                }
            }
        }
    }
}
