//! In-memory RGB565 display
//!
//! Stands in for the LCD controller on the host: pixels stream into a window
//! in row-major order exactly as they would over the panel's bus. Text is not
//! rasterized; each draw is recorded so the HUD can be inspected.

use super::{Color, Display};
use crate::consts::MAX_SCREEN;
use crate::sim::geometry::{Region, Vec2};

/// A recorded text draw
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDraw {
    pub x: i32,
    pub y: i32,
    pub text: String,
    pub fg: Color,
    pub bg: Color,
}

/// Software framebuffer implementing `Display`
#[derive(Debug, Clone)]
pub struct Framebuffer {
    width: i32,
    height: i32,
    pixels: Vec<Color>,
    window: Region,
    cursor: Vec2,
    /// Pixels written since creation (including clipped ones)
    pub pixels_written: u64,
    /// Text draws, oldest first
    pub text: Vec<TextDraw>,
}

impl Framebuffer {
    /// Each side is clamped to `1..=MAX_SCREEN`
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.clamp(1, MAX_SCREEN);
        let height = height.clamp(1, MAX_SCREEN);
        let full = Region::new(Vec2::ZERO, Vec2::new(width - 1, height - 1));
        Self {
            width,
            height,
            pixels: vec![Color::BLACK; (width * height) as usize],
            window: full,
            cursor: full.top_left,
            pixels_written: 0,
            text: Vec::new(),
        }
    }

    /// Pixel at `p`, or None off-screen
    pub fn pixel(&self, p: Vec2) -> Option<Color> {
        self.index(p).map(|i| self.pixels[i])
    }

    /// Most recent text drawn at (x, y)
    pub fn text_at(&self, x: i32, y: i32) -> Option<&str> {
        self.text
            .iter()
            .rev()
            .find(|t| t.x == x && t.y == y)
            .map(|t| t.text.as_str())
    }

    /// Any text draw containing `needle`
    pub fn has_text(&self, needle: &str) -> bool {
        self.text.iter().any(|t| t.text.contains(needle))
    }

    /// Binary PPM (P6) image of the screen
    pub fn to_ppm(&self) -> Vec<u8> {
        let header = format!("P6\n{} {}\n255\n", self.width, self.height);
        let mut out = Vec::with_capacity(header.len() + self.pixels.len() * 3);
        out.extend_from_slice(header.as_bytes());
        for color in &self.pixels {
            out.extend_from_slice(&color.to_rgb888());
        }
        out
    }

    fn index(&self, p: Vec2) -> Option<usize> {
        if p.x < 0 || p.y < 0 || p.x >= self.width || p.y >= self.height {
            return None;
        }
        Some((p.y * self.width + p.x) as usize)
    }
}

impl Display for Framebuffer {
    fn set_window(&mut self, region: Region) {
        self.window = region;
        self.cursor = region.top_left;
    }

    fn write_pixel(&mut self, color: Color) {
        self.pixels_written += 1;
        if let Some(i) = self.index(self.cursor) {
            self.pixels[i] = color;
        }
        // advance row-major, wrapping back to the window start
        self.cursor.x += 1;
        if self.cursor.x > self.window.bot_right.x {
            self.cursor.x = self.window.top_left.x;
            self.cursor.y += 1;
            if self.cursor.y > self.window.bot_right.y {
                self.cursor.y = self.window.top_left.y;
            }
        }
    }

    fn draw_glyph(&mut self, x: i32, y: i32, glyph: char, fg: Color, bg: Color) {
        self.draw_text(x, y, glyph.encode_utf8(&mut [0; 4]), fg, bg);
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str, fg: Color, bg: Color) {
        self.text.push(TextDraw {
            x,
            y,
            text: text.to_string(),
            fg,
            bg,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_streaming_row_major() {
        let mut fb = Framebuffer::new(8, 8);
        fb.set_window(Region::new(Vec2::new(2, 2), Vec2::new(3, 3)));
        fb.write_pixel(Color::RED);
        fb.write_pixel(Color::GREEN);
        fb.write_pixel(Color::BLUE);
        fb.write_pixel(Color::WHITE);

        assert_eq!(fb.pixel(Vec2::new(2, 2)), Some(Color::RED));
        assert_eq!(fb.pixel(Vec2::new(3, 2)), Some(Color::GREEN));
        assert_eq!(fb.pixel(Vec2::new(2, 3)), Some(Color::BLUE));
        assert_eq!(fb.pixel(Vec2::new(3, 3)), Some(Color::WHITE));
        assert_eq!(fb.pixel(Vec2::new(4, 2)), Some(Color::BLACK));
        assert_eq!(fb.pixels_written, 4);
    }

    #[test]
    fn test_offscreen_writes_are_clipped() {
        let mut fb = Framebuffer::new(4, 4);
        fb.set_window(Region::new(Vec2::new(-1, 0), Vec2::new(0, 0)));
        fb.write_pixel(Color::RED);
        fb.write_pixel(Color::GREEN);
        assert_eq!(fb.pixel(Vec2::new(0, 0)), Some(Color::GREEN));
        assert_eq!(fb.pixel(Vec2::new(-1, 0)), None);
    }

    #[test]
    fn test_text_is_recorded() {
        let mut fb = Framebuffer::new(4, 4);
        fb.draw_text(30, 150, "3", Color::VIOLET, Color::WHITE);
        fb.draw_glyph(100, 150, '7', Color::VIOLET, Color::WHITE);
        fb.draw_text(30, 150, "4", Color::VIOLET, Color::WHITE);
        assert_eq!(fb.text_at(30, 150), Some("4"));
        assert_eq!(fb.text_at(100, 150), Some("7"));
        assert!(!fb.has_text("winner"));
    }

    #[test]
    fn test_oversized_screen_is_clamped() {
        let fb = Framebuffer::new(100_000, 100_000);
        assert_eq!(fb.pixel(Vec2::new(4095, 4095)), Some(Color::BLACK));
        assert_eq!(fb.pixel(Vec2::new(4096, 0)), None);
    }

    #[test]
    fn test_ppm_header() {
        let fb = Framebuffer::new(3, 2);
        let ppm = fb.to_ppm();
        assert!(ppm.starts_with(b"P6\n3 2\n255\n"));
        assert_eq!(ppm.len(), b"P6\n3 2\n255\n".len() + 3 * 2 * 3);
    }
}
