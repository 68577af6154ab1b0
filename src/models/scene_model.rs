// src/models/scene_model.rs
// The falling sprites and the sprite sheet they are cut from.

/// A cell of the sprite sheet, in sheet pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetCell {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl SheetCell {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

pub const FALLING_SHEET_CELLS: [SheetCell; 5] = [
    SheetCell::new(4, 4, 400, 339),
    SheetCell::new(413, 4, 200, 226),
    SheetCell::new(620, 4, 500, 543),
    SheetCell::new(1135, 4, 200, 70),
    SheetCell::new(4, 558, 500, 471),
];

/// A falling sprite as authored, before it is placed on a canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FallingSpriteDef {
    pub rotate_full_angle: f32,
    pub rotate_angle: f32,
    pub rotate_velocity_factor: u32,
    pub x: f32, // fraction of canvas width from the left
    pub y: f32, // fraction of canvas height above the top edge
    pub velocity_y: f32,
}

/// Sprite `i` is cut from `FALLING_SHEET_CELLS[i]`.
pub const FALLING_SPRITES: [FallingSpriteDef; 5] = [
    // medium
    FallingSpriteDef {
        rotate_full_angle: 35.0,
        rotate_angle: 5.0,
        rotate_velocity_factor: 5,
        x: 0.85,
        y: 0.4,
        velocity_y: 1.8,
    },
    // small
    FallingSpriteDef {
        rotate_full_angle: 60.0,
        rotate_angle: 5.0,
        rotate_velocity_factor: 2,
        x: 0.65,
        y: 0.15,
        velocity_y: 1.3,
    },
    // large
    FallingSpriteDef {
        rotate_full_angle: 25.0,
        rotate_angle: 5.0,
        rotate_velocity_factor: 4,
        x: 0.5,
        y: 0.1,
        velocity_y: 1.9,
    },
    // small
    FallingSpriteDef {
        rotate_full_angle: 57.0,
        rotate_angle: 5.0,
        rotate_velocity_factor: 5,
        x: 0.35,
        y: 0.4,
        velocity_y: 1.3,
    },
    // large
    FallingSpriteDef {
        rotate_full_angle: 1.0,
        rotate_angle: 5.0,
        rotate_velocity_factor: 10,
        x: 0.15,
        y: 0.9,
        velocity_y: 2.5,
    },
];

/// Where the final still is drawn, canvas space.
pub const FINAL_IMAGE_ORIGIN: (f32, f32) = (15.0, 15.0);
