//! Platform abstraction layer
//!
//! Driver traits the game consumes:
//! - `Display`: windowed pixel streaming and text
//! - `Buttons`: four directional switches
//! - `Buzzer` (in `audio`): tone generation
//! - `Power`: activity indicator and low-power wait
//!
//! plus a host implementation of all of them (framebuffer display, demo
//! autopilot input, thread-driven tick source).

pub mod autopilot;
pub mod clock;
pub mod framebuffer;
pub mod host;

pub use autopilot::AutoPilot;
pub use clock::TickSource;
pub use framebuffer::Framebuffer;
pub use host::{HostBoard, Input, RunSummary, run};

use serde::{Deserialize, Serialize};

use crate::audio::Buzzer;
use crate::sim::geometry::Region;

/// 16-bit RGB565 color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color(pub u16);

impl Color {
    pub const BLACK: Color = Color(0x0000);
    pub const WHITE: Color = Color(0xffff);
    pub const RED: Color = Color(0xf800);
    pub const GREEN: Color = Color(0x07e0);
    pub const BLUE: Color = Color(0x001f);
    pub const ORANGE: Color = Color(0xfd20);
    pub const VIOLET: Color = Color(0xec1d);

    /// Expand to 8-bit RGB
    pub fn to_rgb888(self) -> [u8; 3] {
        let r = ((self.0 >> 11) & 0x1f) as u8;
        let g = ((self.0 >> 5) & 0x3f) as u8;
        let b = (self.0 & 0x1f) as u8;
        [(r << 3) | (r >> 2), (g << 2) | (g >> 4), (b << 3) | (b >> 2)]
    }
}

/// Pixel display controller
pub trait Display {
    /// Restrict subsequent pixel writes to `region`, cursor at its top-left
    fn set_window(&mut self, region: Region);
    /// Write one pixel at the cursor, advancing row-major within the window
    fn write_pixel(&mut self, color: Color);
    fn draw_glyph(&mut self, x: i32, y: i32, glyph: char, fg: Color, bg: Color);
    fn draw_text(&mut self, x: i32, y: i32, text: &str, fg: Color, bg: Color);
}

/// Pressed-button bitset, one bit per direction switch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ButtonSet(pub u8);

impl ButtonSet {
    /// Left paddle up
    pub const P1_UP: u8 = 1 << 0;
    /// Left paddle down
    pub const P1_DOWN: u8 = 1 << 1;
    /// Right paddle down
    pub const P2_DOWN: u8 = 1 << 2;
    /// Right paddle up
    pub const P2_UP: u8 = 1 << 3;

    pub const NONE: ButtonSet = ButtonSet(0);

    #[inline]
    pub fn pressed(self, bit: u8) -> bool {
        self.0 & bit != 0
    }

    #[inline]
    pub fn any(self) -> bool {
        self.0 & 0x0f != 0
    }

    pub fn with(self, bit: u8) -> Self {
        ButtonSet(self.0 | bit)
    }
}

/// Directional switch driver
pub trait Buttons {
    /// Current (debounced) pressed state
    fn read_buttons(&mut self) -> ButtonSet;
}

/// Power and clock control
pub trait Power {
    /// Drive the CPU-active indicator
    fn set_indicator(&mut self, on: bool);
    /// Suspend until the next interrupt
    fn enter_low_power(&mut self);
}

/// Everything the scheduler touches
pub trait Board: Display + Buttons + Buzzer + Power {}

impl<T: Display + Buttons + Buzzer + Power> Board for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_expand() {
        assert_eq!(Color::WHITE.to_rgb888(), [255, 255, 255]);
        assert_eq!(Color::BLACK.to_rgb888(), [0, 0, 0]);
        assert_eq!(Color::RED.to_rgb888(), [255, 0, 0]);
        assert_eq!(Color::GREEN.to_rgb888(), [0, 255, 0]);
    }

    #[test]
    fn test_button_set() {
        let b = ButtonSet::NONE.with(ButtonSet::P1_UP).with(ButtonSet::P2_UP);
        assert!(b.pressed(ButtonSet::P1_UP));
        assert!(!b.pressed(ButtonSet::P1_DOWN));
        assert!(b.any());
        assert!(!ButtonSet::NONE.any());
    }
}
