use crate::color;
use egui::Color32;
use std::ops::RangeInclusive;

/// Sizes offered by the brush-size selector.
pub const BRUSH_SIZES: RangeInclusive<u32> = 1..=10;

/// Color and width applied to new drawing operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrushState {
    color: Color32,
    size: u32,
    /// Set by the eraser; the color then tracks the canvas background.
    erasing: bool,
}

impl Default for BrushState {
    fn default() -> Self {
        Self::new(Color32::BLACK, *BRUSH_SIZES.start())
    }
}

impl BrushState {
    pub fn new(color: Color32, size: u32) -> Self {
        Self {
            color: color::opaque(color),
            size: clamp_size(size),
            erasing: false,
        }
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Stroke width in canvas pixels.
    pub fn width(&self) -> f32 {
        self.size as f32
    }

    pub fn is_erasing(&self) -> bool {
        self.erasing
    }

    /// Replaces the paint color and leaves eraser mode.
    pub fn set_color(&mut self, color: Color32) {
        self.color = color::opaque(color);
        self.erasing = false;
    }

    pub fn set_size(&mut self, size: u32) {
        self.size = clamp_size(size);
    }

    /// Switches to the eraser, which paints with the canvas background.
    pub fn select_eraser(&mut self, background: Color32) {
        self.color = color::opaque(background);
        self.erasing = true;
    }

    /// Keeps the eraser in step with a new canvas background.
    pub fn background_changed(&mut self, background: Color32) {
        if self.erasing {
            self.color = color::opaque(background);
        }
    }
}

fn clamp_size(size: u32) -> u32 {
    size.clamp(*BRUSH_SIZES.start(), *BRUSH_SIZES.end())
}
