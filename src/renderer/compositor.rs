//! Damage-region redraw

use crate::platform::{Color, Display};
use crate::sim::geometry::Region;
use crate::sim::layer::{MovingLayer, Scene};

/// Commit pending positions of `moving`, then repaint each one's new bounds
///
/// All commits happen before any pixel is written, so every repaint sees the
/// whole set of moved layers at their new positions. Only the new bounding
/// region is repainted; whatever the layer left behind outside it stays on
/// screen until some other repaint covers it.
pub fn advance<D: Display + ?Sized>(
    moving: &[MovingLayer],
    scene: &mut Scene,
    display: &mut D,
    background: Color,
) {
    for ml in moving {
        scene.get_mut(ml.layer).commit();
    }

    for ml in moving {
        let bounds = scene.get(ml.layer).bounds();
        paint_region(scene, bounds, display, background);
    }
}

/// Stream every pixel of `region` with its composited color
pub fn paint_region<D: Display + ?Sized>(
    scene: &Scene,
    region: Region,
    display: &mut D,
    background: Color,
) {
    display.set_window(region);
    for pixel in region.pixels() {
        display.write_pixel(scene.color_at(pixel, background));
    }
}

/// Paint the full scene: background over `screen`, then every layer's bounds
pub fn draw_scene<D: Display + ?Sized>(
    scene: &Scene,
    screen: Region,
    display: &mut D,
    background: Color,
) {
    display.set_window(screen);
    for _ in 0..screen.area() {
        display.write_pixel(background);
    }
    for layer in scene.iter() {
        paint_region(scene, layer.bounds(), display, background);
    }
}
