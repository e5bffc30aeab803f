//! Modal prompts and notices.
//!
//! While a prompt or notice is open the canvas ignores pointer input.

use egui::{Align2, Color32, Context, RichText};
use egui::color_picker::{self, Alpha};

/// A question waiting for the user.
#[derive(Debug, Clone, PartialEq)]
pub enum Prompt {
    PenColor(Color32),
    Background(Color32),
    Text(String),
    Resize { width: String, height: String },
}

/// A confirmed, validated prompt result.
#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    PenColor(Color32),
    Background(Color32),
    Text(String),
    Resize { width: u32, height: u32 },
}

#[derive(Debug, Clone, PartialEq)]
pub enum PromptResponse {
    Open,
    /// `None` when cancelled or the input did not validate.
    Closed(Option<Answer>),
}

impl Prompt {
    pub fn resize(size: [u32; 2]) -> Self {
        let [width, height] = size;
        Self::Resize {
            width: width.to_string(),
            height: height.to_string(),
        }
    }

    fn title(&self) -> &'static str {
        match self {
            Self::PenColor(_) => "Pick Color",
            Self::Background(_) => "Change Background",
            Self::Text(_) => "Add Text",
            Self::Resize { .. } => "Resize Canvas",
        }
    }

    /// Turns the current input into an answer, if it is valid.
    pub fn answer(&self) -> Option<Answer> {
        match self {
            Self::PenColor(color) => Some(Answer::PenColor(*color)),
            Self::Background(color) => Some(Answer::Background(*color)),
            Self::Text(content) => Some(Answer::Text(content.clone())),
            Self::Resize { width, height } => {
                parse_dimensions(width, height).map(|(width, height)| Answer::Resize { width, height })
            }
        }
    }

    pub fn show(&mut self, ctx: &Context) -> PromptResponse {
        let mut confirmed = false;
        let mut cancelled = false;

        egui::Window::new(self.title())
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                match self {
                    Self::PenColor(color) | Self::Background(color) => {
                        color_picker::color_picker_color32(ui, color, Alpha::Opaque);
                    }
                    Self::Text(content) => {
                        ui.label("Text to place on the canvas:");
                        let response = ui.text_edit_singleline(content);
                        if ui.memory(|m| m.focused().is_none()) {
                            response.request_focus();
                        }
                    }
                    Self::Resize { width, height } => {
                        egui::Grid::new("resize_prompt_grid").num_columns(2).show(ui, |ui| {
                            ui.label("Width:");
                            ui.text_edit_singleline(width);
                            ui.end_row();
                            ui.label("Height:");
                            ui.text_edit_singleline(height);
                            ui.end_row();
                        });
                    }
                }

                ui.separator();
                ui.horizontal(|ui| {
                    confirmed |= ui.button("OK").clicked();
                    cancelled |= ui.button("Cancel").clicked();
                });
            });

        ctx.input(|i| {
            cancelled |= i.key_pressed(egui::Key::Escape);
            confirmed |= i.key_pressed(egui::Key::Enter);
        });

        if cancelled {
            log::debug!("{} cancelled", self.title());
            PromptResponse::Closed(None)
        } else if confirmed {
            let answer = self.answer();
            if answer.is_none() {
                log::debug!("{} input rejected: {self:?}", self.title());
            }
            PromptResponse::Closed(answer)
        } else {
            PromptResponse::Open
        }
    }
}

/// Parses a width/height pair; both must be positive integers.
pub fn parse_dimensions(width: &str, height: &str) -> Option<(u32, u32)> {
    let parse = |side: &str| side.trim().parse::<u32>().ok().filter(|&v| v > 0);
    Some((parse(width)?, parse(height)?))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// A message box dismissed with OK.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    /// Returns `true` once dismissed.
    pub fn show(&self, ctx: &Context) -> bool {
        let (title, color) = match self.kind {
            NoticeKind::Info => ("Information", ctx.style().visuals.text_color()),
            NoticeKind::Error => ("Error", ctx.style().visuals.error_fg_color),
        };

        let mut dismissed = false;
        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(RichText::new(&self.message).color(color));
                dismissed = ui.button("OK").clicked();
            });

        dismissed || ctx.input(|i| i.key_pressed(egui::Key::Enter) || i.key_pressed(egui::Key::Escape))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions_must_be_positive_integers() {
        assert_eq!(parse_dimensions("800", " 600 "), Some((800, 600)));
        assert_eq!(parse_dimensions("0", "600"), None);
        assert_eq!(parse_dimensions("800", ""), None);
        assert_eq!(parse_dimensions("-4", "600"), None);
        assert_eq!(parse_dimensions("12.5", "600"), None);
        assert_eq!(parse_dimensions("abc", "600"), None);
    }

    #[test]
    fn resize_prompt_is_prefilled() {
        let prompt = Prompt::resize([640, 480]);
        assert_eq!(prompt.answer(), Some(Answer::Resize { width: 640, height: 480 }));
    }

    #[test]
    fn invalid_resize_input_has_no_answer() {
        let prompt = Prompt::Resize {
            width: "10".to_owned(),
            height: "zero".to_owned(),
        };
        assert_eq!(prompt.answer(), None);
    }

    fn key_frame(ctx: &Context, prompt: &mut Prompt, key: Option<egui::Key>) -> PromptResponse {
        let events = key
            .map(|key| egui::Event::Key {
                key,
                physical_key: None,
                pressed: true,
                repeat: false,
                modifiers: egui::Modifiers::NONE,
            })
            .into_iter()
            .collect();
        let input = egui::RawInput {
            events,
            ..Default::default()
        };
        let mut response = PromptResponse::Open;
        let _ = ctx.run(input, |ctx| response = prompt.show(ctx));
        response
    }

    #[test]
    fn prompt_stays_open_without_input() {
        let ctx = Context::default();
        let mut prompt = Prompt::Text("draft".to_owned());
        assert_eq!(key_frame(&ctx, &mut prompt, None), PromptResponse::Open);
    }

    #[test]
    fn escape_cancels_any_prompt() {
        let ctx = Context::default();
        for mut prompt in [
            Prompt::PenColor(Color32::RED),
            Prompt::Background(Color32::BLUE),
            Prompt::Text("hello".to_owned()),
            Prompt::resize([100, 100]),
        ] {
            assert_eq!(
                key_frame(&ctx, &mut prompt, Some(egui::Key::Escape)),
                PromptResponse::Closed(None)
            );
        }
    }

    #[test]
    fn enter_confirms_with_validated_answer() {
        let ctx = Context::default();
        let mut prompt = Prompt::resize([64, 32]);
        assert_eq!(
            key_frame(&ctx, &mut prompt, Some(egui::Key::Enter)),
            PromptResponse::Closed(Some(Answer::Resize { width: 64, height: 32 }))
        );

        let mut prompt = Prompt::Resize {
            width: "64".to_owned(),
            height: "".to_owned(),
        };
        assert_eq!(
            key_frame(&ctx, &mut prompt, Some(egui::Key::Enter)),
            PromptResponse::Closed(None)
        );
    }

    #[test]
    fn color_prompts_answer_with_their_color() {
        assert_eq!(
            Prompt::Background(Color32::RED).answer(),
            Some(Answer::Background(Color32::RED))
        );
        assert_eq!(
            Prompt::PenColor(Color32::BLUE).answer(),
            Some(Answer::PenColor(Color32::BLUE))
        );
    }
}
