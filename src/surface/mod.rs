//! The two surfaces every drawing operation is applied to.

use egui::{Color32, Pos2};

use crate::text::TextFont;

mod display;
mod pixel_buffer;

pub use display::DisplaySurface;
pub use pixel_buffer::PixelBuffer;

/// One drawing operation, in canvas pixel coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum PaintOp {
    /// A straight piece of a freehand stroke, with round caps.
    Segment {
        from: Pos2,
        to: Pos2,
        color: Color32,
        width: f32,
    },
    /// Text with its top-left corner at `origin`.
    Text {
        origin: Pos2,
        content: String,
        color: Color32,
    },
}

/// Something [`PaintOp`]s can be drawn onto.
pub trait Surface {
    /// Width and height in pixels.
    fn size(&self) -> [u32; 2];

    /// Throws away all content and starts over at `size`, filled with `background`.
    fn reset(&mut self, size: [u32; 2], background: Color32);

    fn draw(&mut self, op: &PaintOp, font: &TextFont);
}
