//! Scene graph: layers in compositing order, plus moving-layer handles
//!
//! The `Scene` owns every `Layer`. Its index order is the compositing order
//! (front first) and is fixed once built. A `MovingLayer` borrows nothing; it
//! holds a `LayerId` into the scene together with a velocity.

use serde::{Deserialize, Serialize};

use super::geometry::{Region, Vec2};
use super::shape::Shape;
use crate::platform::Color;

/// Index of a layer in its scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayerId(pub usize);

/// A static scene node
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layer {
    pub shape: Shape,
    /// Position currently shown
    pub pos: Vec2,
    /// Position before the last commit
    pub pos_last: Vec2,
    /// Pending position, promoted to `pos` on the next commit
    pub pos_next: Vec2,
    pub color: Color,
}

impl Layer {
    /// A settled layer: all three positions equal
    pub fn new(shape: Shape, pos: Vec2, color: Color) -> Self {
        Self {
            shape,
            pos,
            pos_last: pos,
            pos_next: pos,
            color,
        }
    }

    /// Bounding region at the current position
    #[inline]
    pub fn bounds(&self) -> Region {
        self.shape.bounds_at(self.pos)
    }

    /// Whether the layer covers `pixel` at its current position
    #[inline]
    pub fn covers(&self, pixel: Vec2) -> bool {
        self.shape.contains_point(self.pos, pixel)
    }

    /// Promote the pending position
    #[inline]
    pub fn commit(&mut self) {
        self.pos_last = self.pos;
        self.pos = self.pos_next;
    }

    /// No move pending
    pub fn is_settled(&self) -> bool {
        self.pos_next == self.pos
    }
}

/// Ordered, fixed collection of layers
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scene {
    layers: Vec<Layer>,
}

impl Scene {
    pub fn new() -> Self {
        Self { layers: Vec::new() }
    }

    /// Append a layer behind every layer already present
    pub fn push(&mut self, layer: Layer) -> LayerId {
        self.layers.push(layer);
        LayerId(self.layers.len() - 1)
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Layers front to back
    pub fn iter(&self) -> impl Iterator<Item = &Layer> {
        self.layers.iter()
    }

    pub fn get(&self, id: LayerId) -> &Layer {
        &self.layers[id.0]
    }

    pub fn get_mut(&mut self, id: LayerId) -> &mut Layer {
        &mut self.layers[id.0]
    }

    /// Color of the first layer covering `pixel`, else `background`
    pub fn color_at(&self, pixel: Vec2, background: Color) -> Color {
        self.layers
            .iter()
            .find(|layer| layer.covers(pixel))
            .map_or(background, |layer| layer.color)
    }
}

/// Velocity-bearing handle to one layer of a scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovingLayer {
    pub layer: LayerId,
    /// Pixels per physics step, sign is direction
    pub velocity: Vec2,
}

impl MovingLayer {
    pub fn new(layer: LayerId, velocity: Vec2) -> Self {
        Self { layer, velocity }
    }

    /// Pending position plus one velocity step
    pub fn tentative(&self, scene: &Scene) -> Vec2 {
        scene.get(self.layer).pos_next + self.velocity
    }
}
