use egui::{Color32, Sense, Slider};

use crate::brush::BRUSH_SIZES;
use crate::color;
use crate::state::{CanvasState, TextTool};

/// Toolbar buttons that need the app shell (prompts, dialogs).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    Clear,
    PickColor,
    Save,
    Eraser,
    ResizeCanvas,
    ChangeBackground,
    AddText,
}

impl ToolbarAction {
    pub const ALL: [Self; 7] = [
        Self::Clear,
        Self::PickColor,
        Self::Save,
        Self::Eraser,
        Self::ResizeCanvas,
        Self::ChangeBackground,
        Self::AddText,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::PickColor => "Pick Color",
            Self::Save => "Save",
            Self::Eraser => "Eraser",
            Self::ResizeCanvas => "Resize Canvas",
            Self::ChangeBackground => "Change Background",
            Self::AddText => "Add Text",
        }
    }
}

/// Fixed toolbar along the top of the window. Brush size edits go straight
/// to `state`; everything else is returned for the app to carry out.
pub fn tools_panel(ctx: &egui::Context, state: &mut CanvasState, enabled: bool) -> Option<ToolbarAction> {
    let mut action = None;

    egui::TopBottomPanel::top("tools_panel").show(ctx, |ui| {
        ui.add_enabled_ui(enabled, |ui| {
            ui.horizontal_wrapped(|ui| {
                for candidate in ToolbarAction::ALL {
                    if ui.button(candidate.label()).clicked() {
                        log::info!("Toolbar: {}", candidate.label());
                        action = Some(candidate);
                    }
                }

                ui.separator();
                color_swatch(ui, state.brush().color());

                let mut size = state.brush().size();
                egui::ComboBox::from_id_salt("brush_size")
                    .width(48.0)
                    .selected_text(size.to_string())
                    .show_ui(ui, |ui| {
                        for candidate in BRUSH_SIZES {
                            ui.selectable_value(&mut size, candidate, candidate.to_string());
                        }
                    });
                ui.add(Slider::new(&mut size, BRUSH_SIZES).text("Size"));
                if size != state.brush().size() {
                    state.set_brush_size(size);
                }
            });
        });

        ui.horizontal(|ui| {
            let [width, height] = state.canvas().size();
            ui.label(format!("Canvas {width}×{height}"));
            if let TextTool::Armed { content } = state.text_tool() {
                ui.separator();
                ui.label(format!("Click the canvas to place {content:?}"));
            }
        });
    });

    action
}

fn color_swatch(ui: &mut egui::Ui, color: Color32) {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(40.0, 18.0), Sense::hover());
    if ui.is_rect_visible(rect) {
        ui.painter().rect_filled(rect, 2.0, color);
        ui.painter()
            .rect_stroke(rect, 2.0, ui.visuals().widgets.noninteractive.bg_stroke);
    }
    response.on_hover_text(color::hex(color));
}
