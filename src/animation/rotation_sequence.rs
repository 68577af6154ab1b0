// src/animation/rotation_sequence.rs
//
// Pre-rendered rotation of a sprite, consumed through a pull cursor.
//
// Frames are produced once, up front. The cursor hands each frame out for
// `interpolation_factor` consecutive calls, which slows the rotation down
// without needing more frames, and parks on the last frame once the list is
// exhausted.

use super::AnimationError;
use crate::models::rotated_canvas_side;

/// Slowest rotation step, in degrees per frame.
pub const ROTATE_VELOCITY_BASE: f64 = 0.05;
pub const DEFAULT_INTERPOLATION_FACTOR: usize = 4;

/// Largest velocity factor that keeps a single step under 359°.
pub fn max_velocity_factor() -> u32 {
    ((359.0 - ROTATE_VELOCITY_BASE) / ROTATE_VELOCITY_BASE) as u32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotationDirection {
    #[default]
    Clockwise,
    Counterclockwise,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationParams {
    pub full_angle: f32,  // total rotation described by the sequence, degrees
    pub start_angle: f32, // rotation of the first frame, degrees
    pub velocity_factor: u32,
    pub direction: RotationDirection,
    pub interpolation_factor: usize,
}

impl RotationParams {
    pub fn new(full_angle: f32, start_angle: f32, velocity_factor: u32) -> Self {
        Self {
            full_angle,
            start_angle,
            velocity_factor,
            direction: RotationDirection::Clockwise,
            interpolation_factor: DEFAULT_INTERPOLATION_FACTOR,
        }
    }

    /// Signed rotation added between two consecutive frames, degrees.
    pub fn step_angle(&self) -> f64 {
        let factor = self.velocity_factor.min(max_velocity_factor()) as f64;
        let step = ROTATE_VELOCITY_BASE + ROTATE_VELOCITY_BASE * factor;
        match self.direction {
            RotationDirection::Clockwise => step,
            RotationDirection::Counterclockwise => -step,
        }
    }

    pub fn frame_count(&self) -> usize {
        (self.full_angle as f64 / self.step_angle()).abs().ceil() as usize
    }
}

/// A sprite rendered at one angle of its rotation.
/// The frame canvas is a square of side `canvas_side` with the source centered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotatedFrame {
    pub angle: f32, // degrees, clockwise on screen
    pub source_width: f32,
    pub source_height: f32,
    pub canvas_side: f32,
}

#[derive(Debug, Clone)]
pub struct RotationSequence<F = RotatedFrame> {
    frames: Vec<F>,
    interpolation_factor: usize,
    calls: usize,
    index: usize,
    complete: bool,
}

impl RotationSequence<RotatedFrame> {
    /// Rotation frames for a `width`x`height` sprite.
    pub fn for_sprite(
        width: f32,
        height: f32,
        params: &RotationParams,
    ) -> Result<Self, AnimationError> {
        let canvas_side = rotated_canvas_side(width, height);
        Self::build(params, |angle| RotatedFrame {
            angle,
            source_width: width,
            source_height: height,
            canvas_side,
        })
    }
}

impl<F> RotationSequence<F> {
    /// Renders every frame of the rotation with `render`, which receives the
    /// frame's angle in degrees.
    pub fn build(
        params: &RotationParams,
        mut render: impl FnMut(f32) -> F,
    ) -> Result<Self, AnimationError> {
        if params.interpolation_factor == 0 {
            return Err(AnimationError::InvalidInterpolation);
        }

        let count = params.frame_count();
        if count == 0 {
            return Err(AnimationError::EmptySequence(params.full_angle));
        }

        let step = params.step_angle();
        let start = params.start_angle as f64;
        let frames = (0..count)
            .map(|i| render((start + step * i as f64) as f32))
            .collect();

        Ok(Self {
            frames,
            interpolation_factor: params.interpolation_factor,
            calls: 0,
            index: 0,
            complete: false,
        })
    }

    /// Produces the frame for this tick.
    pub fn advance(&mut self) -> &F {
        let next = self.calls / self.interpolation_factor;
        self.calls += 1;

        if next < self.frames.len() {
            self.index = next;
        } else {
            self.index = self.frames.len() - 1;
            self.complete = true;
        }
        &self.frames[self.index]
    }

    /// The frame last produced by `advance` (the first frame before any call).
    pub fn current(&self) -> &F {
        &self.frames[self.index]
    }

    /// True once the cursor has run past the last frame.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frames(&self) -> &[F] {
        &self.frames
    }
}
