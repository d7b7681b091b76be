//! Software compositor
//!
//! Repaints damage regions by probing the scene front to back for every pixel.
//! No frame buffer is kept here; pixels stream straight to the `Display`.

pub mod compositor;

pub use compositor::{advance, draw_scene, paint_region};
