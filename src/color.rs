//! Conversions between the UI color type and the pixel buffer's RGB triples.

use egui::Color32;
use image::Rgb;

/// Drops any alpha; the canvas is a flat RGB raster.
pub fn opaque(color: Color32) -> Color32 {
    let [r, g, b, _] = color.to_array();
    Color32::from_rgb(r, g, b)
}

pub fn to_rgb(color: Color32) -> Rgb<u8> {
    let [r, g, b, _] = color.to_array();
    Rgb([r, g, b])
}

pub fn from_rgb(pixel: Rgb<u8>) -> Color32 {
    let Rgb([r, g, b]) = pixel;
    Color32::from_rgb(r, g, b)
}

/// `#rrggbb`, used in the toolbar and in log lines.
pub fn hex(color: Color32) -> String {
    let [r, g, b, _] = color.to_array();
    format!("#{r:02x}{g:02x}{b:02x}")
}
