use egui::{Color32, Pos2};

use crate::color;
use crate::error::{PaintError, Result};
use crate::surface::{DisplaySurface, PaintOp, PixelBuffer, Surface};
use crate::text::TextFont;

/// Largest accepted canvas side, in pixels.
pub const MAX_CANVAS_SIDE: u32 = 8192;

/// The display surface and the pixel buffer, kept in lockstep.
///
/// Every change goes through [`Canvas::apply`] or a reallocation, both of
/// which touch the two surfaces together.
#[derive(Debug)]
pub struct Canvas {
    pixels: PixelBuffer,
    display: DisplaySurface,
    background: Color32,
    font: TextFont,
}

impl Canvas {
    pub fn new(width: u32, height: u32, background: Color32, font: TextFont) -> Result<Self> {
        let size = validate_size(width, height)?;
        let background = color::opaque(background);
        Ok(Self {
            pixels: PixelBuffer::new(size, background),
            display: DisplaySurface::new(size, background),
            background,
            font,
        })
    }

    /// Draws `op` onto both surfaces.
    pub fn apply(&mut self, op: PaintOp) {
        let Self {
            pixels,
            display,
            font,
            ..
        } = self;
        for surface in [display as &mut dyn Surface, pixels as &mut dyn Surface] {
            surface.draw(&op, font);
        }
    }

    fn reallocate(&mut self, size: [u32; 2], background: Color32) {
        self.background = background;
        for surface in [
            &mut self.display as &mut dyn Surface,
            &mut self.pixels as &mut dyn Surface,
        ] {
            surface.reset(size, background);
        }
    }

    /// Wipes all drawing, keeping size and background.
    pub fn clear(&mut self) {
        self.reallocate(self.size(), self.background);
    }

    /// Reallocates at a new size. Existing drawing is discarded, not scaled.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        let size = validate_size(width, height)?;
        self.reallocate(size, self.background);
        Ok(())
    }

    /// Refills the canvas with a new background, discarding all drawing.
    pub fn set_background(&mut self, background: Color32) {
        self.reallocate(self.size(), color::opaque(background));
    }

    /// Reads the exported pixel under `pos`.
    pub fn sample(&self, pos: Pos2) -> Option<Color32> {
        self.pixels.sample(pos)
    }

    pub fn size(&self) -> [u32; 2] {
        self.pixels.size()
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }

    pub fn display(&self) -> &DisplaySurface {
        &self.display
    }

    pub fn font(&self) -> &TextFont {
        &self.font
    }
}

/// Checks a requested canvas size.
pub fn validate_size(width: u32, height: u32) -> Result<[u32; 2]> {
    let valid = |side| (1..=MAX_CANVAS_SIDE).contains(&side);
    if valid(width) && valid(height) {
        Ok([width, height])
    } else {
        Err(PaintError::InvalidDimensions { width, height })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    fn canvas() -> Canvas {
        Canvas::new(50, 30, Color32::WHITE, TextFont::load_default().unwrap()).unwrap()
    }

    #[test]
    fn apply_reaches_both_surfaces() {
        let mut canvas = canvas();
        canvas.apply(PaintOp::Segment {
            from: pos2(1.0, 1.0),
            to: pos2(20.0, 20.0),
            color: Color32::RED,
            width: 2.0,
        });

        assert_eq!(canvas.display().ops().len(), 1);
        assert_eq!(canvas.sample(pos2(10.0, 10.0)), Some(Color32::RED));
        assert_eq!(&canvas.display().rasterize(canvas.font()), canvas.pixels());
    }

    #[test]
    fn reallocation_resets_both_surfaces() {
        let mut canvas = canvas();
        canvas.apply(PaintOp::Segment {
            from: pos2(1.0, 1.0),
            to: pos2(20.0, 20.0),
            color: Color32::RED,
            width: 2.0,
        });
        canvas.set_background(Color32::GRAY);

        assert!(canvas.display().ops().is_empty());
        assert_eq!(canvas.display().background(), Color32::GRAY);
        assert_eq!(canvas.sample(pos2(10.0, 10.0)), Some(Color32::GRAY));
        assert_eq!(canvas.size(), [50, 30]);
    }

    #[test]
    fn invalid_sizes_are_rejected() {
        assert!(validate_size(0, 10).is_err());
        assert!(validate_size(10, 0).is_err());
        assert!(validate_size(MAX_CANVAS_SIDE + 1, 10).is_err());
        assert_eq!(validate_size(1, MAX_CANVAS_SIDE).unwrap(), [1, MAX_CANVAS_SIDE]);

        let mut canvas = canvas();
        assert!(canvas.resize(0, 5).is_err());
        assert_eq!(canvas.size(), [50, 30]);
    }
}
