//! Framebuffer and style types for terminal rendering.
//!
//! [`FrameBuffer`] is the concrete [`Surface`]: one cell is one raster unit.
//! Fills and sprite pixels set a cell's background color; text sets glyphs
//! and foreground color on top of whatever background is already there.

use crate::assets::Sprite;
use crate::surface::{Font, Surface};
use crate::types::{Rect, Rgb};

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
        }
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// Clipped cell span: x, y, w, h.
type Span = (u16, u16, u16, u16);

/// 2D framebuffer of styled character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Cell::default());
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Text of row `y`, one char per cell.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|c| c.ch)
            .collect()
    }

    fn clip(&self, rect: Rect) -> Option<Span> {
        if rect.is_empty() {
            return None;
        }
        let x0 = rect.x.max(0);
        let y0 = rect.y.max(0);
        let x1 = rect.right().min(self.width as i32);
        let y1 = rect.bottom().min(self.height as i32);
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some((x0 as u16, y0 as u16, (x1 - x0) as u16, (y1 - y0) as u16))
    }

    fn paint_background(&mut self, x: u16, y: u16, color: Rgb) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = Cell {
                ch: ' ',
                style: CellStyle {
                    bg: color,
                    ..CellStyle::default()
                },
            };
        }
    }

    fn fill_span(&mut self, rect: Rect, color: Rgb) {
        let Some((x, y, w, h)) = self.clip(rect) else {
            return;
        };
        for dy in 0..h {
            for dx in 0..w {
                self.paint_background(x + dx, y + dy, color);
            }
        }
    }
}

impl Surface for FrameBuffer {
    fn width(&self) -> u16 {
        self.width
    }

    fn height(&self) -> u16 {
        self.height
    }

    fn fill(&mut self, color: Rgb, rect: Rect) {
        self.fill_span(rect, color);
    }

    fn draw_rect(&mut self, color: Rgb, rect: Rect) {
        self.fill_span(rect, color);
    }

    fn blit(&mut self, sprite: &Sprite, rect: Rect) {
        if sprite.width() == 0 || sprite.height() == 0 {
            return;
        }
        let Some((x, y, w, h)) = self.clip(rect) else {
            return;
        };
        // Nearest-neighbour sample relative to the unclipped rect.
        for cy in y..y + h {
            let sy = ((cy as i64 - rect.y as i64) * sprite.height() as i64 / rect.h as i64) as u32;
            for cx in x..x + w {
                let sx = ((cx as i64 - rect.x as i64) * sprite.width() as i64 / rect.w as i64) as u32;
                if let Some(color) = sprite.pixel(sx, sy) {
                    self.paint_background(cx, cy, color);
                }
            }
        }
    }

    fn draw_text(&mut self, text: &str, color: Rgb, x: i32, y: i32, _font: &Font) {
        if y < 0 || y >= self.height as i32 {
            return;
        }
        for (i, ch) in text.chars().enumerate() {
            let cx = x + i as i32;
            if cx < 0 {
                continue;
            }
            if cx >= self.width as i32 {
                break;
            }
            if let Some(idx) = self.idx(cx as u16, y as u16) {
                let bg = self.cells[idx].style.bg;
                self.cells[idx] = Cell {
                    ch,
                    style: CellStyle { fg: color, bg },
                };
            }
        }
    }
}
