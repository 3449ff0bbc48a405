//! The drawing seam between the display and a raster target.

use crate::assets::Sprite;
use crate::types::{Rect, Rgb};

/// Fixed-width terminal font.
///
/// Every glyph is one cell wide; `size` is the line height in rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Font {
    pub size: u16,
}

impl Font {
    pub fn monospace(size: u16) -> Self {
        Self { size }
    }

    /// Width and height of `text` in cells.
    pub fn measure(&self, text: &str) -> (i32, i32) {
        (text.chars().count() as i32, self.size as i32)
    }
}

/// A 2D raster canvas.
///
/// Coordinates are cells with the origin at the top-left; anything outside
/// the canvas is clipped by the implementation.
pub trait Surface {
    fn width(&self) -> u16;

    fn height(&self) -> u16;

    /// Paint `rect` with a solid background color.
    fn fill(&mut self, color: Rgb, rect: Rect);

    /// Draw a filled rectangle.
    fn draw_rect(&mut self, color: Rgb, rect: Rect);

    /// Copy `sprite` into `rect`, scaling it to fit. Transparent pixels leave
    /// the target untouched.
    fn blit(&mut self, sprite: &Sprite, rect: Rect);

    /// Draw `text` with its top-left corner at (`x`, `y`).
    fn draw_text(&mut self, text: &str, color: Rgb, x: i32, y: i32, font: &Font);

    /// Draw `text` centered on (`cx`, `cy`).
    fn draw_text_center(&mut self, text: &str, color: Rgb, cx: i32, cy: i32, font: &Font) {
        let (w, h) = font.measure(text);
        self.draw_text(text, color, cx - w / 2, cy - h / 2, font);
    }

    /// Draw `text` starting at column `x`, vertically centered on `cy`.
    fn draw_text_left(&mut self, text: &str, color: Rgb, x: i32, cy: i32, font: &Font) {
        let (_, h) = font.measure(text);
        self.draw_text(text, color, x, cy - h / 2, font);
    }
}
