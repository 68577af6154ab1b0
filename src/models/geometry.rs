// src/models/geometry.rs
// Geometry helpers shared by the animators and the drawing surface.
//
// Everything in the animation layer works in canvas space: pixels, origin at
// the top left corner, y growing downwards. Only the nannou surface converts
// to nannou's centered, y-up space.

use nannou::prelude::*;

pub fn deg_to_rad(angle_degree: f32) -> f32 {
    angle_degree * (PI / 180.0)
}

/// Size of the canvas a canvas-space scene is laid out on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasSize {
    pub width: f32,
    pub height: f32,
}

impl CanvasSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Converts a canvas-space point to nannou coordinates.
    pub fn to_nannou(&self, point: Point2) -> Point2 {
        pt2(point.x - self.width / 2.0, self.height / 2.0 - point.y)
    }
}

/// Side of the square canvas holding `width`x`height` at any rotation:
/// the hypotenuse, so corners are never cut.
pub fn rotated_canvas_side(width: f32, height: f32) -> f32 {
    (width.powi(2) + height.powi(2)).sqrt()
}

/// Samples a canvas-space arc. Angles are radians measured clockwise on
/// screen (canvas convention), from `start_arc` to `end_arc`.
pub fn arc_points(
    center: Point2,
    radius: f32,
    start_arc: f32,
    end_arc: f32,
    resolution: usize,
) -> Vec<Point2> {
    let resolution = resolution.max(1);
    let sweep = end_arc - start_arc;

    (0..=resolution)
        .map(|i| {
            let angle = start_arc + sweep * (i as f32 / resolution as f32);
            pt2(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect()
}

/// Linear interpolation between two canvas points.
pub fn lerp_point(start: Point2, end: Point2, t: f64) -> Point2 {
    let x = start.x as f64 + (end.x as f64 - start.x as f64) * t;
    let y = start.y as f64 + (end.y as f64 - start.y as f64) * t;
    pt2(x as f32, y as f32)
}
