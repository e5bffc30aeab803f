//! The fixed face used for text stamping.
//!
//! Both surfaces use egui's embedded monospace face: the display through
//! `egui::FontId::monospace`, the pixel buffer through `ab_glyph` outlines of
//! the same font bytes.

use ab_glyph::{Font, FontArc, GlyphId, PxScale, ScaleFont, point};
use egui::Pos2;

use crate::error::{PaintError, Result};

/// Pixel height of stamped text.
pub const TEXT_SIZE: f32 = 16.0;

const FONT_NAME: &str = "Hack";

#[derive(Clone)]
pub struct TextFont {
    font: FontArc,
    scale: PxScale,
}

impl std::fmt::Debug for TextFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextFont")
            .field("name", &FONT_NAME)
            .field("size", &self.scale.y)
            .finish()
    }
}

impl TextFont {
    /// Loads the monospace face bundled with egui.
    pub fn load_default() -> Result<Self> {
        let definitions = egui::FontDefinitions::default();
        let data = definitions
            .font_data
            .get(FONT_NAME)
            .ok_or(PaintError::MissingFont(FONT_NAME))?;
        let font = FontArc::try_from_vec(data.font.to_vec())?;
        log::debug!("Loaded text font {FONT_NAME}");

        Ok(Self {
            font,
            scale: PxScale::from(TEXT_SIZE),
        })
    }

    pub fn egui_font_id(&self) -> egui::FontId {
        egui::FontId::monospace(self.scale.y)
    }

    /// Rasterizes `text` with its top-left corner at `origin`, reporting the
    /// coverage (0..=1) of every touched pixel to `put`.
    pub fn rasterize(&self, origin: Pos2, text: &str, mut put: impl FnMut(i64, i64, f32)) {
        let scaled = self.font.as_scaled(self.scale);
        let line_height = scaled.height() + scaled.line_gap();
        let mut caret = point(origin.x, origin.y + scaled.ascent());
        let mut previous: Option<GlyphId> = None;

        for ch in text.chars() {
            if ch == '\n' {
                caret = point(origin.x, caret.y + line_height);
                previous = None;
                continue;
            }

            let id = self.font.glyph_id(ch);
            if let Some(prev) = previous {
                caret.x += scaled.kern(prev, id);
            }
            let glyph = id.with_scale_and_position(self.scale, caret);
            caret.x += scaled.h_advance(id);
            previous = Some(id);

            if let Some(outlined) = self.font.outline_glyph(glyph) {
                let bounds = outlined.px_bounds();
                let left = bounds.min.x.floor() as i64;
                let top = bounds.min.y.floor() as i64;
                outlined.draw(|gx, gy, coverage| {
                    put(left + i64::from(gx), top + i64::from(gy), coverage);
                });
            }
        }
    }
}
