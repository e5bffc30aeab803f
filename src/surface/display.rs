use egui::Color32;

use super::{PaintOp, PixelBuffer, Surface};
use crate::text::TextFont;

/// What the window shows: a background plus the ops drawn since the last
/// reallocation. The renderer paints it every frame; it never looks at the
/// [`PixelBuffer`].
#[derive(Clone, Debug, PartialEq)]
pub struct DisplaySurface {
    size: [u32; 2],
    background: Color32,
    ops: Vec<PaintOp>,
}

impl DisplaySurface {
    pub fn new(size: [u32; 2], background: Color32) -> Self {
        Self {
            size,
            background,
            ops: Vec::new(),
        }
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    pub fn ops(&self) -> &[PaintOp] {
        &self.ops
    }

    /// Replays the display's op list onto a fresh raster.
    ///
    /// This checks that both surfaces received the same op sequence. It says
    /// nothing about the pixels egui puts on screen: egui anti-aliases edges
    /// and lays out text with its own rasterizer, so those differ at the edges.
    pub fn rasterize(&self, font: &TextFont) -> PixelBuffer {
        let mut buffer = PixelBuffer::new(self.size, self.background);
        for op in &self.ops {
            buffer.draw(op, font);
        }
        buffer
    }
}

impl Surface for DisplaySurface {
    fn size(&self) -> [u32; 2] {
        self.size
    }

    fn reset(&mut self, size: [u32; 2], background: Color32) {
        self.size = size;
        self.background = background;
        self.ops = Vec::new();
    }

    fn draw(&mut self, op: &PaintOp, _font: &TextFont) {
        self.ops.push(op.clone());
    }
}
