use std::path::{Path, PathBuf};

use image::ImageFormat;

use crate::error::{PaintError, Result};
use crate::surface::PixelBuffer;

/// Extension appended when the chosen path has no usable one.
pub const DEFAULT_EXTENSION: &str = "png";

/// Raster formats the exporter writes, picked by file extension.
const WRITABLE_FORMATS: [ImageFormat; 5] = [
    ImageFormat::Png,
    ImageFormat::Jpeg,
    ImageFormat::Bmp,
    ImageFormat::Tga,
    ImageFormat::Tiff,
];

/// Asks the user where to save. `None` when the dialog is cancelled.
pub fn ask_save_path() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Save image")
        .add_filter("PNG files", &[DEFAULT_EXTENSION])
        .set_file_name(format!("drawing.{DEFAULT_EXTENSION}"))
        .save_file()
}

/// Appends `.png` unless the path already names a writable raster format.
pub fn normalize_export_path(path: impl Into<PathBuf>) -> PathBuf {
    let path = path.into();
    let known = path
        .extension()
        .and_then(ImageFormat::from_extension)
        .is_some_and(|format| WRITABLE_FORMATS.contains(&format));
    if known {
        return path;
    }

    let mut name = path.into_os_string();
    name.push(".");
    name.push(DEFAULT_EXTENSION);
    PathBuf::from(name)
}

/// Encodes the pixel buffer at `path` (normalized first) and returns the
/// path actually written.
pub fn export_image(pixels: &PixelBuffer, path: &Path) -> Result<PathBuf> {
    let path = normalize_export_path(path);
    log::info!(
        "Exporting {}x{} image to {}",
        pixels.width(),
        pixels.height(),
        path.display()
    );

    pixels
        .image()
        .save(&path)
        .map_err(|source| PaintError::Export {
            path: path.clone(),
            source,
        })?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn png_extension_is_appended_when_missing() {
        assert_eq!(normalize_export_path("out/drawing"), PathBuf::from("out/drawing.png"));
        assert_eq!(normalize_export_path("drawing.txt"), PathBuf::from("drawing.txt.png"));
        assert_eq!(normalize_export_path("my.drawing"), PathBuf::from("my.drawing.png"));
    }

    #[test]
    fn raster_extensions_are_kept() {
        for name in ["a.png", "a.PNG", "a.jpg", "a.jpeg", "a.bmp", "a.tga", "a.tif", "a.tiff"] {
            assert_eq!(normalize_export_path(name), PathBuf::from(name));
        }
    }
}
