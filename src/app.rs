use std::path::PathBuf;

use crate::dialogs::{Answer, Notice, Prompt, PromptResponse};
use crate::error::Result;
use crate::file_handler;
use crate::input::{Action, InputHandler};
use crate::panels::{self, ToolbarAction};
use crate::preferences::Preferences;
use crate::renderer::Renderer;
use crate::state::CanvasState;
use crate::text::TextFont;

pub struct PaintApp {
    state: CanvasState,
    renderer: Renderer,
    input: InputHandler,
    prompt: Option<Prompt>,
    notice: Option<Notice>,
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self> {
        // Load previous preferences (if any).
        let preferences: Preferences = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        Self::with_preferences(preferences)
    }

    pub fn with_preferences(preferences: Preferences) -> Result<Self> {
        let font = TextFont::load_default()?;
        let renderer = Renderer::new(font.egui_font_id());
        let state = preferences.into_state(font)?;
        let [width, height] = state.canvas().size();
        log::info!("Starting with a {width}x{height} canvas");

        Ok(Self {
            state,
            renderer,
            input: InputHandler::new(),
            prompt: None,
            notice: None,
        })
    }

    pub fn state(&self) -> &CanvasState {
        &self.state
    }

    fn is_modal_open(&self) -> bool {
        self.prompt.is_some() || self.notice.is_some()
    }

    fn open_prompt(&mut self, prompt: Prompt) {
        self.state.end_stroke();
        self.prompt = Some(prompt);
    }

    pub fn prompt(&self) -> Option<&Prompt> {
        self.prompt.as_ref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Carries out a toolbar button.
    pub fn perform(&mut self, action: ToolbarAction) {
        match action {
            ToolbarAction::Clear => self.state.clear(),
            ToolbarAction::PickColor => self.open_prompt(Prompt::PenColor(self.state.brush().color())),
            ToolbarAction::Save => self.export(),
            ToolbarAction::Eraser => self.state.select_eraser(),
            ToolbarAction::ResizeCanvas => self.open_prompt(Prompt::resize(self.state.canvas().size())),
            ToolbarAction::ChangeBackground => {
                self.open_prompt(Prompt::Background(self.state.canvas().background()));
            }
            ToolbarAction::AddText => self.open_prompt(Prompt::Text(String::new())),
        }
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Export => self.perform(ToolbarAction::Save),
            Action::PickColor => self.perform(ToolbarAction::PickColor),
        }
    }

    fn apply_answer(&mut self, answer: Answer) {
        match answer {
            Answer::PenColor(color) => self.state.set_brush_color(color),
            Answer::Background(color) => self.state.change_background(color),
            Answer::Text(content) => {
                self.state.arm_text(&content);
            }
            Answer::Resize { width, height } => {
                if let Err(err) = self.state.resize(width, height) {
                    log::warn!("Resize rejected: {err}");
                }
            }
        }
    }

    fn export(&mut self) {
        self.state.end_stroke();
        self.export_to(file_handler::ask_save_path());
    }

    /// Writes the pixel buffer to `path` and reports the outcome as a notice.
    /// `None` means the save dialog was cancelled.
    pub fn export_to(&mut self, path: Option<PathBuf>) {
        let Some(path) = path else {
            log::debug!("Save cancelled");
            return;
        };

        self.notice = Some(match file_handler::export_image(self.state.canvas().pixels(), &path) {
            Ok(written) => Notice::info(format!("Image saved to {}", written.display())),
            Err(err) => {
                log::error!("{err}");
                Notice::error(err.to_string())
            }
        });
    }
}

impl eframe::App for PaintApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &Preferences::from_state(&self.state));
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}

impl PaintApp {
    /// Lays out one frame: toolbar, canvas, then any open prompt or notice.
    pub fn ui(&mut self, ctx: &egui::Context) {
        let modal = self.is_modal_open();

        if let Some(action) = panels::tools_panel(ctx, &mut self.state, !modal) {
            self.perform(action);
        }

        let canvas_enabled = !self.is_modal_open();
        let actions = panels::central_panel(
            ctx,
            &mut self.state,
            &self.renderer,
            &mut self.input,
            canvas_enabled,
        );
        for action in actions {
            self.handle_action(action);
        }

        if let Some(prompt) = &mut self.prompt {
            if let PromptResponse::Closed(answer) = prompt.show(ctx) {
                self.prompt = None;
                if let Some(answer) = answer {
                    self.apply_answer(answer);
                }
            }
        }

        if let Some(notice) = &self.notice {
            if notice.show(ctx) {
                self.notice = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialogs::NoticeKind;
    use egui::{Color32, Event, Key, Modifiers, RawInput};

    fn app() -> PaintApp {
        PaintApp::with_preferences(Preferences::default()).unwrap()
    }

    fn press(key: Key) -> Event {
        Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: Modifiers::NONE,
        }
    }

    fn run_frame(app: &mut PaintApp, ctx: &egui::Context, events: Vec<Event>) {
        let input = RawInput {
            events,
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| app.ui(ctx));
    }

    fn draw_something(app: &mut PaintApp) {
        app.state.begin_stroke();
        app.state.continue_stroke(egui::pos2(10.0, 10.0));
        app.state.continue_stroke(egui::pos2(50.0, 40.0));
        app.state.end_stroke();
    }

    #[test]
    fn escape_cancels_background_change() {
        let ctx = egui::Context::default();
        let mut app = app();
        draw_something(&mut app);
        let before = app.state().canvas().pixels().clone();

        app.perform(ToolbarAction::ChangeBackground);
        assert!(matches!(app.prompt(), Some(Prompt::Background(_))));
        if let Some(Prompt::Background(color)) = &mut app.prompt {
            *color = Color32::RED;
        }
        run_frame(&mut app, &ctx, vec![press(Key::Escape)]);

        assert!(app.prompt().is_none());
        assert_eq!(app.state().canvas().background(), Color32::WHITE);
        assert_eq!(app.state().canvas().pixels(), &before);
        assert_eq!(app.state().canvas().display().ops().len(), 1);
    }

    #[test]
    fn escape_cancels_color_pick() {
        let ctx = egui::Context::default();
        let mut app = app();
        let brush = *app.state().brush();

        app.perform(ToolbarAction::PickColor);
        if let Some(Prompt::PenColor(color)) = &mut app.prompt {
            *color = Color32::GREEN;
        }
        run_frame(&mut app, &ctx, vec![press(Key::Escape)]);

        assert!(app.prompt().is_none());
        assert_eq!(app.state().brush(), &brush);
    }

    #[test]
    fn enter_confirms_color_pick() {
        let ctx = egui::Context::default();
        let mut app = app();

        app.perform(ToolbarAction::PickColor);
        if let Some(Prompt::PenColor(color)) = &mut app.prompt {
            *color = Color32::GREEN;
        }
        run_frame(&mut app, &ctx, vec![press(Key::Enter)]);

        assert!(app.prompt().is_none());
        assert_eq!(app.state().brush().color(), Color32::GREEN);
    }

    #[test]
    fn resize_prompt_applies_only_valid_input() {
        let ctx = egui::Context::default();
        let mut app = app();
        draw_something(&mut app);
        let before = app.state().canvas().pixels().clone();

        app.perform(ToolbarAction::ResizeCanvas);
        app.prompt = Some(Prompt::Resize {
            width: "0".to_owned(),
            height: "20".to_owned(),
        });
        run_frame(&mut app, &ctx, vec![press(Key::Enter)]);
        assert!(app.prompt().is_none());
        assert_eq!(app.state().canvas().pixels(), &before);

        app.perform(ToolbarAction::ResizeCanvas);
        app.prompt = Some(Prompt::Resize {
            width: "30".to_owned(),
            height: "20".to_owned(),
        });
        run_frame(&mut app, &ctx, vec![press(Key::Enter)]);
        assert_eq!(app.state().canvas().size(), [30, 20]);
    }

    #[test]
    fn cancelled_save_does_nothing() {
        let mut app = app();
        app.export_to(None);
        assert!(app.notice().is_none());
    }

    #[test]
    fn failed_save_shows_error_notice() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app();
        draw_something(&mut app);
        let before = app.state().canvas().pixels().clone();

        app.export_to(Some(dir.path().join("no_such_dir").join("drawing.png")));

        let notice = app.notice().unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert!(notice.message.contains("drawing.png"));
        assert_eq!(app.state().canvas().pixels(), &before);
    }

    #[test]
    fn successful_save_shows_info_notice() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app();

        app.export_to(Some(dir.path().join("drawing")));

        let notice = app.notice().unwrap();
        assert_eq!(notice.kind, NoticeKind::Info);
        assert!(dir.path().join("drawing.png").exists());
    }
}
