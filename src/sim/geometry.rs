//! Integer pixel geometry
//!
//! Positions are `glam::IVec2` in screen pixels (x right, y down).
//! A `Region` is an inclusive axis-aligned box.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Pixel-space vector
pub type Vec2 = IVec2;

/// Inclusive axis-aligned bounding region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Region {
    pub top_left: Vec2,
    pub bot_right: Vec2,
}

impl Region {
    /// Build a region from two corners, normalizing so top_left <= bot_right
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self {
            top_left: a.min(b),
            bot_right: a.max(b),
        }
    }

    /// Region centered on `center` extending `half` in each direction
    #[inline]
    pub fn around(center: Vec2, half: Vec2) -> Self {
        let half = half.abs();
        Self {
            top_left: center - half,
            bot_right: center + half,
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bot_right.x - self.top_left.x + 1
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bot_right.y - self.top_left.y + 1
    }

    /// Number of pixels covered
    pub fn area(&self) -> usize {
        self.width() as usize * self.height() as usize
    }

    pub fn center(&self) -> Vec2 {
        (self.top_left + self.bot_right) / 2
    }

    /// Point inside the region (edges inclusive)
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.cmpge(self.top_left).all() && p.cmple(self.bot_right).all()
    }

    /// Point lies on the region's border
    #[inline]
    pub fn on_edge(&self, p: Vec2) -> bool {
        self.contains(p)
            && (p.x == self.top_left.x
                || p.x == self.bot_right.x
                || p.y == self.top_left.y
                || p.y == self.bot_right.y)
    }

    /// Whether this region overflows `fence` on the given axis (0 = x, 1 = y)
    #[inline]
    pub fn overflows_axis(&self, fence: &Region, axis: usize) -> bool {
        self.top_left[axis] < fence.top_left[axis] || self.bot_right[axis] > fence.bot_right[axis]
    }

    /// Pixel coordinates in row-major order
    pub fn pixels(&self) -> impl Iterator<Item = Vec2> + use<> {
        let Region { top_left, bot_right } = *self;
        (top_left.y..=bot_right.y)
            .flat_map(move |y| (top_left.x..=bot_right.x).map(move |x| Vec2::new(x, y)))
    }
}
