// src/views/falling_sprite.rs
// A sprite that drops down the canvas while slowly turning.

use nannou::prelude::*;

use crate::animation::{AnimationError, RotationParams, RotationSequence};
use crate::draw::CreditsSurface;
use crate::models::{CanvasSize, FallingSpriteDef};

#[derive(Debug, Clone)]
pub struct FallingSprite {
    pub sprite: usize, // which sprite texture to draw
    pub position: Point2,
    pub velocity_y: f32,
    pub sequence: RotationSequence,
}

impl FallingSprite {
    /// Places the sprite on the canvas: horizontal fraction of the width,
    /// starting the given fraction of the height above the top edge.
    pub fn new(
        sprite: usize,
        def: &FallingSpriteDef,
        (width, height): (f32, f32),
        canvas: CanvasSize,
    ) -> Result<Self, AnimationError> {
        let params = RotationParams::new(
            def.rotate_full_angle,
            def.rotate_angle,
            def.rotate_velocity_factor,
        );
        let sequence = RotationSequence::for_sprite(width, height, &params)?;

        Ok(Self {
            sprite,
            position: pt2(def.x * canvas.width, -def.y * canvas.height),
            velocity_y: def.velocity_y,
            sequence,
        })
    }

    pub fn update_and_draw(&mut self, surface: &mut dyn CreditsSurface) {
        let frame = *self.sequence.advance();
        self.position.y += self.velocity_y;
        surface.draw_sprite(self.sprite, self.position, &frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::recorder::{DrawCommand, RecordingSurface};
    use crate::models::FALLING_SPRITES;

    #[test]
    fn test_sprite_starts_above_the_canvas_and_falls() {
        let canvas = CanvasSize::new(1000.0, 500.0);
        let mut sprite = FallingSprite::new(0, &FALLING_SPRITES[0], (400.0, 339.0), canvas).unwrap();
        assert_eq!(sprite.position, pt2(850.0, -200.0));

        let mut surface = RecordingSurface::new();
        sprite.update_and_draw(&mut surface);
        sprite.update_and_draw(&mut surface);

        match &surface.commands[1] {
            DrawCommand::Sprite {
                sprite,
                center,
                angle,
            } => {
                assert_eq!(*sprite, 0);
                assert!((center.y - (-200.0 + 2.0 * 1.8)).abs() < 1e-4);
                assert_eq!(center.x, 850.0);
                // still on the first frame: four calls per frame
                assert_eq!(*angle, 5.0);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
