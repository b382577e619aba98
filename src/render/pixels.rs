//! An RGB framebuffer shown two pixels per terminal cell with '▀'.

use crate::assets::Rgb;
use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};

/// Row-major pixels. Height is twice the number of terminal rows it fills.
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
}

impl PixelBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb::default(); width * height],
        }
    }

    /// Buffer sized to cover `area` of terminal cells.
    pub fn for_area(area: Rect) -> Self {
        Self::new(area.width as usize, area.height as usize * 2)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    /// Out-of-range writes are dropped.
    pub fn set(&mut self, x: i32, y: i32, color: Rgb) {
        if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
            self.pixels[y as usize * self.width + x as usize] = color;
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Rgb {
        self.pixels[y * self.width + x]
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb) {
        for dy in 0..h {
            for dx in 0..w {
                self.set(x + dx, y + dy, color);
            }
        }
    }

    /// Scale every pixel's brightness by `factor / 256`.
    pub fn dim(&mut self, factor: u16) {
        let scale = |c: u8| ((c as u16 * factor) >> 8).min(255) as u8;
        for px in &mut self.pixels {
            *px = Rgb(scale(px.0), scale(px.1), scale(px.2));
        }
    }
}

fn to_color(c: Rgb) -> Color {
    Color::Rgb(c.0, c.1, c.2)
}

/// Borrowing widget so a frame can be drawn without giving the buffer away.
pub struct PixelView<'a>(pub &'a PixelBuffer);

impl Widget for PixelView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let pixels = self.0;
        let cols = area.width.min(pixels.width() as u16);
        let rows = area.height.min((pixels.height() / 2) as u16);

        for row in 0..rows {
            for col in 0..cols {
                let top = pixels.get(col as usize, row as usize * 2);
                let bottom = pixels.get(col as usize, row as usize * 2 + 1);
                buf.get_mut(area.x + col, area.y + row)
                    .set_symbol("▀")
                    .set_fg(to_color(top))
                    .set_bg(to_color(bottom));
            }
        }
    }
}
