use egui::Color32;

use crate::brush::BrushState;
use crate::canvas::{self, Canvas};
use crate::error::Result;
use crate::state::CanvasState;
use crate::text::TextFont;

/// Settings restored on the next launch. The drawing itself is never saved.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct Preferences {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub background: Color32,
    pub brush_color: Color32,
    pub brush_size: u32,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            canvas_width: 600,
            canvas_height: 400,
            background: Color32::WHITE,
            brush_color: Color32::BLACK,
            brush_size: 1,
        }
    }
}

impl Preferences {
    pub fn from_state(state: &CanvasState) -> Self {
        let [canvas_width, canvas_height] = state.canvas().size();
        Self {
            canvas_width,
            canvas_height,
            background: state.canvas().background(),
            brush_color: state.brush().color(),
            brush_size: state.brush().size(),
        }
    }

    /// Builds a fresh canvas from these settings. A stored size that is no
    /// longer acceptable falls back to the default size.
    pub fn into_state(self, font: TextFont) -> Result<CanvasState> {
        let (width, height) = match canvas::validate_size(self.canvas_width, self.canvas_height) {
            Ok([width, height]) => (width, height),
            Err(err) => {
                log::warn!("Ignoring stored canvas size: {err}");
                let defaults = Self::default();
                (defaults.canvas_width, defaults.canvas_height)
            }
        };
        let canvas = Canvas::new(width, height, self.background, font)?;
        let brush = BrushState::new(self.brush_color, self.brush_size);
        Ok(CanvasState::new(canvas, brush))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn font() -> TextFont {
        TextFont::load_default().unwrap()
    }

    #[test]
    fn defaults_match_startup_canvas() {
        let state = Preferences::default().into_state(font()).unwrap();
        assert_eq!(state.canvas().size(), [600, 400]);
        assert_eq!(state.canvas().background(), Color32::WHITE);
        assert_eq!(state.brush().color(), Color32::BLACK);
        assert_eq!(state.brush().size(), 1);
    }

    #[test]
    fn round_trips_through_state() {
        let prefs = Preferences {
            canvas_width: 320,
            canvas_height: 200,
            background: Color32::from_rgb(250, 240, 230),
            brush_color: Color32::from_rgb(0, 128, 0),
            brush_size: 6,
        };
        let state = prefs.clone().into_state(font()).unwrap();
        assert_eq!(Preferences::from_state(&state), prefs);
    }

    #[test]
    fn bad_stored_values_are_repaired() {
        let prefs = Preferences {
            canvas_width: 0,
            brush_size: 50,
            ..Default::default()
        };
        let state = prefs.into_state(font()).unwrap();
        assert_eq!(state.canvas().size(), [600, 400]);
        assert_eq!(state.brush().size(), 10);
    }
}
