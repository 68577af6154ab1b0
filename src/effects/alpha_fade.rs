// src/effects/alpha_fade.rs
//
// Frame-stepped alpha fades.
// A fade only moves while its gate is open, one velocity step per tick,
// and stops at its bound.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeDirection {
    Out,
    In,
}

#[derive(Debug, Clone)]
pub struct AlphaFade {
    alpha: f32,
    velocity: f32, // magnitude of the per-tick step
    direction: FadeDirection,
}

impl AlphaFade {
    /// Starts opaque and is drawn until it has faded out.
    pub fn fade_out(velocity: f32) -> Self {
        Self {
            alpha: 1.0,
            velocity: velocity.abs(),
            direction: FadeDirection::Out,
        }
    }

    /// Starts transparent and is drawn once its gate opens.
    pub fn fade_in(velocity: f32) -> Self {
        Self {
            alpha: 0.0,
            velocity: velocity.abs(),
            direction: FadeDirection::In,
        }
    }

    /// Steps the fade for one tick and returns the alpha to draw with,
    /// or None when nothing should be drawn this tick.
    pub fn step(&mut self, gate_open: bool) -> Option<f32> {
        match self.direction {
            FadeDirection::Out => {
                if self.alpha <= self.velocity {
                    return None;
                }
                if gate_open {
                    self.alpha = (self.alpha - self.velocity).max(0.0);
                }
                Some(self.alpha)
            }
            FadeDirection::In => {
                if !gate_open {
                    return None;
                }
                self.alpha = (self.alpha + self.velocity).min(1.0);
                Some(self.alpha)
            }
        }
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// True once the fade reached the point where it no longer changes.
    pub fn is_settled(&self) -> bool {
        match self.direction {
            FadeDirection::Out => self.alpha <= self.velocity,
            FadeDirection::In => self.alpha >= 1.0,
        }
    }
}
