use egui::{Context, Event, Key, KeyboardShortcut, Modifiers, PointerButton, Pos2, Rect};

mod router;
pub use router::{Action, route_event};

const SAVE_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::S);
const COLOR_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::C);

/// Keyboard shortcuts the app reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Save,
    PickColor,
}

/// Represents the input events the canvas reacts to, in canvas pixel coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Mouse button was pressed
    PointerDown {
        position: Pos2,
        button: PointerButton,
        /// Whether the press landed on the visible canvas
        on_canvas: bool,
    },
    /// Mouse button was released, wherever it happened
    PointerUp { position: Pos2, button: PointerButton },
    /// Mouse moved (with or without buttons pressed)
    PointerMove { position: Pos2 },
    Shortcut(Shortcut),
}

/// Handles converting raw egui input into our domain-specific InputEvents
#[derive(Debug, Default)]
pub struct InputHandler {
    /// Whether a primary press that began on the canvas is still held.
    primary_held: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_primary_held(&self) -> bool {
        self.primary_held
    }

    /// Collects this frame's events.
    ///
    /// `origin` is the screen position of the canvas' top-left pixel and
    /// `hit_rect` the part of the canvas currently visible. Presses only count
    /// as on the canvas while `canvas_hovered`, i.e. no popup, window or
    /// scroll bar sits on top of it.
    pub fn process_input(
        &mut self,
        ctx: &Context,
        origin: Pos2,
        hit_rect: Rect,
        canvas_hovered: bool,
    ) -> Vec<InputEvent> {
        let to_canvas = |pos: Pos2| (pos - origin).to_pos2();
        let mut events = Vec::new();

        ctx.input(|input| {
            for event in &input.events {
                match event {
                    Event::PointerMoved(pos) => events.push(InputEvent::PointerMove {
                        position: to_canvas(*pos),
                    }),
                    Event::PointerButton {
                        pos,
                        button,
                        pressed: true,
                        ..
                    } => {
                        let on_canvas = canvas_hovered && hit_rect.contains(*pos);
                        if *button == PointerButton::Primary {
                            self.primary_held = on_canvas;
                        }
                        events.push(InputEvent::PointerDown {
                            position: to_canvas(*pos),
                            button: *button,
                            on_canvas,
                        });
                    }
                    Event::PointerButton {
                        pos,
                        button,
                        pressed: false,
                        ..
                    } => {
                        if *button == PointerButton::Primary {
                            self.primary_held = false;
                        }
                        events.push(InputEvent::PointerUp {
                            position: to_canvas(*pos),
                            button: *button,
                        });
                    }
                    _ => {}
                }
            }
        });

        // Some backends turn Ctrl+C into a copy event instead of a key press.
        let copy_requested = ctx.input(|input| input.events.iter().any(|e| matches!(e, Event::Copy)));
        ctx.input_mut(|input| {
            if input.consume_shortcut(&SAVE_SHORTCUT) {
                events.push(InputEvent::Shortcut(Shortcut::Save));
            }
            if input.consume_shortcut(&COLOR_SHORTCUT) || copy_requested {
                events.push(InputEvent::Shortcut(Shortcut::PickColor));
            }
        });

        events
    }
}
