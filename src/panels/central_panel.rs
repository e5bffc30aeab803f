use egui::CursorIcon;

use crate::input::{Action, InputHandler, route_event};
use crate::renderer::Renderer;
use crate::state::CanvasState;

/// Shows the canvas and, when `accept_input` is set, routes this frame's
/// pointer and keyboard input to it.
pub fn central_panel(
    ctx: &egui::Context,
    state: &mut CanvasState,
    renderer: &Renderer,
    input: &mut InputHandler,
    accept_input: bool,
) -> Vec<Action> {
    let mut actions = Vec::new();

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::both().show(ui, |ui| {
            let [width, height] = state.canvas().size();
            let (rect, response) = ui.allocate_exact_size(
                egui::vec2(width as f32, height as f32),
                egui::Sense::click_and_drag(),
            );
            let hovered = response.hovered();
            response.on_hover_cursor(CursorIcon::Crosshair);

            if accept_input {
                let hit_rect = rect.intersect(ui.clip_rect());
                for event in input.process_input(ctx, rect.min, hit_rect, hovered) {
                    actions.extend(route_event(&event, state));
                }
                // Strokes continue past the canvas edge.
                if input.is_primary_held() {
                    ctx.set_cursor_icon(CursorIcon::Crosshair);
                }
            }

            renderer.render(ui.painter(), rect.min, state.canvas().display());
        });
    });

    actions
}
