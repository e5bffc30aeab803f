use egui::PointerButton;

use super::{InputEvent, Shortcut};
use crate::state::CanvasState;

/// Work an event asks of the app shell, beyond mutating canvas state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Export,
    PickColor,
}

/// Routes an input event to the canvas state handlers
pub fn route_event(event: &InputEvent, state: &mut CanvasState) -> Option<Action> {
    match *event {
        InputEvent::PointerDown {
            position,
            button: PointerButton::Primary,
            on_canvas: true,
        } => state.primary_press(position),
        InputEvent::PointerDown {
            position,
            button: PointerButton::Secondary,
            on_canvas: true,
        } => {
            state.sample_color(position);
        }
        InputEvent::PointerDown { .. } => {}
        InputEvent::PointerUp {
            button: PointerButton::Primary,
            ..
        } => state.end_stroke(),
        InputEvent::PointerUp { .. } => {}
        InputEvent::PointerMove { position } => state.continue_stroke(position),
        InputEvent::Shortcut(Shortcut::Save) => return Some(Action::Export),
        InputEvent::Shortcut(Shortcut::PickColor) => return Some(Action::PickColor),
    }
    None
}
