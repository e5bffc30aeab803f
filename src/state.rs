use egui::{Color32, Pos2};

use crate::brush::BrushState;
use crate::canvas::Canvas;
use crate::color;
use crate::error::Result;
use crate::surface::PaintOp;

/// Text tool: armed text is consumed by the next canvas click.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TextTool {
    #[default]
    Idle,
    Armed {
        content: String,
    },
}

/// Everything the canvas handlers read and mutate.
#[derive(Debug)]
pub struct CanvasState {
    canvas: Canvas,
    brush: BrushState,
    /// True between a primary press that started a stroke and its release.
    stroking: bool,
    /// Last point of the active stroke.
    cursor: Option<Pos2>,
    text_tool: TextTool,
}

impl CanvasState {
    pub fn new(canvas: Canvas, brush: BrushState) -> Self {
        Self {
            canvas,
            brush,
            stroking: false,
            cursor: None,
            text_tool: TextTool::Idle,
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn brush(&self) -> &BrushState {
        &self.brush
    }

    pub fn stroke_cursor(&self) -> Option<Pos2> {
        self.cursor
    }

    pub fn is_stroking(&self) -> bool {
        self.stroking
    }

    pub fn text_tool(&self) -> &TextTool {
        &self.text_tool
    }

    pub fn is_text_armed(&self) -> bool {
        matches!(self.text_tool, TextTool::Armed { .. })
    }

    /// Primary press on the canvas: stamps armed text, otherwise starts a stroke.
    pub fn primary_press(&mut self, pos: Pos2) {
        if !self.stamp_text(pos) {
            self.begin_stroke();
        }
    }

    pub fn begin_stroke(&mut self) {
        self.stroking = true;
        self.cursor = None;
    }

    /// Pointer moved with the primary button held. The first move of a
    /// stroke only anchors it.
    pub fn continue_stroke(&mut self, pos: Pos2) {
        if !self.stroking {
            return;
        }
        if let Some(from) = self.cursor {
            self.canvas.apply(PaintOp::Segment {
                from,
                to: pos,
                color: self.brush.color(),
                width: self.brush.width(),
            });
        }
        self.cursor = Some(pos);
    }

    pub fn end_stroke(&mut self) {
        self.stroking = false;
        self.cursor = None;
    }

    pub fn set_brush_color(&mut self, color: Color32) {
        log::info!("Brush color set to {}", color::hex(color));
        self.brush.set_color(color);
    }

    pub fn set_brush_size(&mut self, size: u32) {
        self.brush.set_size(size);
    }

    pub fn select_eraser(&mut self) {
        log::info!("Eraser selected");
        self.brush.select_eraser(self.canvas.background());
    }

    /// Pipette. Returns the sampled color, or `None` (and changes nothing)
    /// when `pos` is outside the canvas.
    pub fn sample_color(&mut self, pos: Pos2) -> Option<Color32> {
        let Some(sampled) = self.canvas.sample(pos) else {
            log::debug!("Pipette outside the canvas at {pos:?}");
            return None;
        };
        self.set_brush_color(sampled);
        Some(sampled)
    }

    pub fn clear(&mut self) {
        log::info!("Canvas cleared");
        self.canvas.clear();
    }

    /// Destructive resize; on error nothing changes.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        self.canvas.resize(width, height)?;
        log::info!("Canvas resized to {width}x{height}");
        Ok(())
    }

    pub fn change_background(&mut self, background: Color32) {
        log::info!("Background changed to {}", color::hex(background));
        self.canvas.set_background(background);
        self.brush.background_changed(self.canvas.background());
    }

    /// Arms the text tool. Blank text leaves it idle; returns whether it armed.
    pub fn arm_text(&mut self, content: &str) -> bool {
        if content.trim().is_empty() {
            return false;
        }
        log::info!("Text tool armed with {content:?}");
        self.text_tool = TextTool::Armed {
            content: content.to_owned(),
        };
        true
    }

    /// Stamps the armed text at `pos` and disarms. Does nothing while idle.
    pub fn stamp_text(&mut self, pos: Pos2) -> bool {
        let TextTool::Armed { content } = std::mem::take(&mut self.text_tool) else {
            return false;
        };
        log::info!("Stamping text at {pos:?}");
        self.canvas.apply(PaintOp::Text {
            origin: pos,
            content,
            color: self.brush.color(),
        });
        true
    }
}
