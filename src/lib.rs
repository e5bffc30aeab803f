#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod brush;
pub mod canvas;
pub mod color;
pub mod dialogs;
pub mod error;
pub mod file_handler;
pub mod input;
pub mod panels;
pub mod preferences;
pub mod renderer;
pub mod state;
pub mod surface;
pub mod text;

pub use app::PaintApp;
pub use brush::BrushState;
pub use canvas::Canvas;
pub use error::PaintError;
pub use input::{InputEvent, InputHandler};
pub use preferences::Preferences;
pub use renderer::Renderer;
pub use state::{CanvasState, TextTool};
pub use surface::{DisplaySurface, PaintOp, PixelBuffer, Surface};
pub use text::TextFont;
