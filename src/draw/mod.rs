// src/draw/mod.rs
// The drawing surface the credits are composited on.
//
// Animators never talk to nannou directly: they are handed a CreditsSurface
// for the tick and issue canvas-space drawing operations on it.

pub mod nannou_surface;
pub mod textures;

#[cfg(test)]
pub mod recorder;

pub use nannou_surface::NannouSurface;
pub use textures::{AlphaLayer, CreditsTextures};

use nannou::prelude::*;

use crate::animation::RotatedFrame;

#[derive(Debug, Clone, PartialEq)]
pub struct StrokeStyle {
    pub color: Rgba,
    pub stroke_weight: f32,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: rgba(0.0, 0.0, 0.0, 1.0),
            stroke_weight: 19.0,
        }
    }
}

pub trait CreditsSurface {
    /// Strokes an open polyline with bevel joins.
    fn stroke_polyline(&mut self, points: &[Point2], style: &StrokeStyle);

    /// Strokes an arc; angles in radians, clockwise on screen.
    fn stroke_arc(
        &mut self,
        center: Point2,
        radius: f32,
        start_arc: f32,
        end_arc: f32,
        style: &StrokeStyle,
    );

    /// Draws a pre-rendered rotation frame of sprite `sprite`, centered on `center`.
    fn draw_sprite(&mut self, sprite: usize, center: Point2, frame: &RotatedFrame);

    /// Draws noise frame `frame` over the whole canvas.
    fn draw_noise(&mut self, frame: usize, alpha: f32);

    /// Fills the whole canvas with black.
    fn fill_black(&mut self, alpha: f32);

    /// Draws the final still with its top left corner at `origin`.
    /// Draws nothing while the image is not loaded.
    fn draw_final_image(&mut self, origin: Point2, alpha: f32);
}
