//! Shape primitives used by layers
//!
//! A closed set of three shapes. Each one answers two questions about itself
//! when placed at a position: its bounding region, and whether a pixel is
//! covered.

use serde::{Deserialize, Serialize};

use super::geometry::{Region, Vec2};

/// Immutable geometric descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shape {
    /// Filled rectangle extending `half_size` from its center
    Rectangle { half_size: Vec2 },
    /// One-pixel rectangle border extending `half_size` from its center
    RectangleOutline { half_size: Vec2 },
    /// Filled circle
    Circle { radius: i32 },
}

impl Shape {
    pub const fn rect(half_w: i32, half_h: i32) -> Self {
        Shape::Rectangle {
            half_size: Vec2::new(half_w, half_h),
        }
    }

    pub const fn outline(half_w: i32, half_h: i32) -> Self {
        Shape::RectangleOutline {
            half_size: Vec2::new(half_w, half_h),
        }
    }

    pub const fn circle(radius: i32) -> Self {
        Shape::Circle { radius }
    }

    /// Bounding region of the shape centered at `pos`
    pub fn bounds_at(&self, pos: Vec2) -> Region {
        match *self {
            Shape::Rectangle { half_size } | Shape::RectangleOutline { half_size } => {
                Region::around(pos, half_size)
            }
            Shape::Circle { radius } => Region::around(pos, Vec2::splat(radius)),
        }
    }

    /// Whether `point` is covered by the shape centered at `pos`
    pub fn contains_point(&self, pos: Vec2, point: Vec2) -> bool {
        match *self {
            Shape::Rectangle { half_size } => Region::around(pos, half_size).contains(point),
            Shape::RectangleOutline { half_size } => Region::around(pos, half_size).on_edge(point),
            Shape::Circle { radius } => {
                let d = point - pos;
                d.length_squared() <= radius * radius
            }
        }
    }
}
