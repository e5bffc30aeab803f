use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced to the user as notices.
#[derive(Debug, Error)]
pub enum PaintError {
    #[error("Failed to save image to {path}: {source}")]
    Export {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Invalid canvas size {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Font {0} is not among the embedded fonts")]
    MissingFont(&'static str),

    #[error("Failed to load the text font: {0}")]
    Font(#[from] ab_glyph::InvalidFont),
}

pub type Result<T> = std::result::Result<T, PaintError>;
