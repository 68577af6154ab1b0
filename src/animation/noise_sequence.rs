// src/animation/noise_sequence.rs
// Cyclic cursor over the pre-rendered noise frames.

use super::AnimationError;

#[derive(Debug, Clone)]
pub struct NoiseSequence {
    length: usize,
    index: usize,
}

impl NoiseSequence {
    pub fn new(length: usize) -> Result<Self, AnimationError> {
        if length == 0 {
            return Err(AnimationError::Empty);
        }
        Ok(Self { length, index: 0 })
    }

    /// Index of the frame to draw this tick; wraps back to 0 after the last one.
    pub fn advance(&mut self) -> usize {
        let current = self.index;
        self.index += 1;
        if self.index >= self.length {
            self.index = 0;
        }
        current
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
}
