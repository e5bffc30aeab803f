use egui::{Color32, Pos2};
use image::{Rgb, RgbImage};

use super::{PaintOp, Surface};
use crate::color;
use crate::text::TextFont;

/// Slack for pixel centers lying exactly on a stroke's edge.
const COVERAGE_EPSILON: f32 = 1e-4;

/// The in-memory raster that gets exported.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelBuffer {
    image: RgbImage,
}

impl PixelBuffer {
    pub fn new(size: [u32; 2], background: Color32) -> Self {
        let [width, height] = size;
        Self {
            image: RgbImage::from_pixel(width, height, color::to_rgb(background)),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    /// Color of the pixel under `pos`, or `None` outside the buffer.
    pub fn sample(&self, pos: Pos2) -> Option<Color32> {
        let (x, y) = self.pixel_at(pos)?;
        Some(color::from_rgb(*self.image.get_pixel(x, y)))
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color32> {
        self.image
            .get_pixel_checked(x, y)
            .map(|pixel| color::from_rgb(*pixel))
    }

    fn pixel_at(&self, pos: Pos2) -> Option<(u32, u32)> {
        // Written this way round so NaN is rejected too.
        if !(pos.x >= 0.0 && pos.y >= 0.0) {
            return None;
        }
        let (x, y) = (pos.x.floor() as u32, pos.y.floor() as u32);
        (x < self.width() && y < self.height()).then_some((x, y))
    }

    fn fill_segment(&mut self, from: Pos2, to: Pos2, color: Color32, width: f32) {
        let radius = (width * 0.5).max(0.5);
        let rgb = color::to_rgb(color);

        let min_x = (from.x.min(to.x) - radius).floor().max(0.0) as u32;
        let min_y = (from.y.min(to.y) - radius).floor().max(0.0) as u32;
        let max_x = (from.x.max(to.x) + radius).ceil().min(self.width() as f32) as u32;
        let max_y = (from.y.max(to.y) + radius).ceil().min(self.height() as f32) as u32;

        for y in min_y..max_y {
            for x in min_x..max_x {
                let center = Pos2::new(x as f32 + 0.5, y as f32 + 0.5);
                if distance_to_segment(center, from, to) <= radius + COVERAGE_EPSILON {
                    self.image.put_pixel(x, y, rgb);
                }
            }
        }
    }

    fn fill_text(&mut self, origin: Pos2, content: &str, color: Color32, font: &TextFont) {
        let Rgb(ink) = color::to_rgb(color);
        let (width, height) = (i64::from(self.width()), i64::from(self.height()));
        let image = &mut self.image;

        font.rasterize(origin, content, |x, y, coverage| {
            if x < 0 || y < 0 || x >= width || y >= height || coverage <= 0.0 {
                return;
            }
            let coverage = coverage.min(1.0);
            let Rgb(pixel) = image.get_pixel_mut(x as u32, y as u32);
            for (channel, ink) in pixel.iter_mut().zip(ink) {
                let blended = *channel as f32 + (ink as f32 - *channel as f32) * coverage;
                *channel = blended.round() as u8;
            }
        });
    }
}

impl Surface for PixelBuffer {
    fn size(&self) -> [u32; 2] {
        [self.width(), self.height()]
    }

    fn reset(&mut self, size: [u32; 2], background: Color32) {
        *self = Self::new(size, background);
    }

    fn draw(&mut self, op: &PaintOp, font: &TextFont) {
        match op {
            PaintOp::Segment {
                from,
                to,
                color,
                width,
            } => self.fill_segment(*from, *to, *color, *width),
            PaintOp::Text {
                origin,
                content,
                color,
            } => self.fill_text(*origin, content, *color, font),
        }
    }
}

fn distance_to_segment(p: Pos2, a: Pos2, b: Pos2) -> f32 {
    let ab = b - a;
    let length_sq = ab.length_sq();
    if length_sq == 0.0 {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / length_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}
