// src/animation/mod.rs
// Tick-driven animators: every call to `animate`/`advance` is one render tick.

pub mod letterform;
pub mod noise_sequence;
pub mod path_chain;
pub mod rotation_sequence;
pub mod shape;

pub use letterform::Letterform;
pub use noise_sequence::NoiseSequence;
pub use path_chain::{PathChain, PathSegment};
pub use rotation_sequence::{RotatedFrame, RotationDirection, RotationParams, RotationSequence};
pub use shape::Shape;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum AnimationError {
    #[error("velocity must be in (0, 1], got {0}")]
    InvalidVelocity(f64),
    #[error("segment {0} has no coordinates")]
    EmptySegment(usize),
    #[error("nothing to animate")]
    Empty,
    #[error("rotation produces no frames (full angle {0})")]
    EmptySequence(f32),
    #[error("interpolation factor must be at least 1")]
    InvalidInterpolation,
}

/// Number of steps a figure takes to draw at `velocity` (fraction per tick),
/// together with the exact `1 / velocity`.
///
/// Steps follow the loop bound `i < moves`, so a velocity that doesn't
/// divide 1 gets one extra, overshooting step.
pub(crate) fn step_plan(velocity: f64) -> Result<(f64, usize), AnimationError> {
    if !(velocity > 0.0 && velocity <= 1.0) {
        return Err(AnimationError::InvalidVelocity(velocity));
    }
    let moves = 1.0 / velocity;
    Ok((moves, moves.ceil() as usize))
}
