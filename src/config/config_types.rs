// src/config/config_types.rs
//
// Config types for the credits sequence.
// Every section has defaults so a partial config.toml still loads.

use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct PathConfig {
    pub sprite_sheet: String,
    pub final_image: String,
    pub soundtrack: String,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            sprite_sheet: "assets/falling-spritesheet.png".to_string(),
            final_image: "assets/mad-men-couch.png".to_string(),
            soundtrack: "assets/mad-men-credits.wav".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

// texture_width/height double as the canvas size the scene is laid out on
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct RenderConfig {
    pub texture_width: u32,
    pub texture_height: u32,
    pub texture_samples: u32,
    pub arc_resolution: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            texture_width: 1280,
            texture_height: 720,
            texture_samples: 4,
            arc_resolution: 128,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StyleConfig {
    pub stroke_weight: f32,
    pub clear_color: [f32; 3],
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            stroke_weight: 19.0,
            clear_color: [1.0, 1.0, 1.0],
        }
    }
}

/************************* Timeline Configs ********************/

// Thresholds are whole seconds since the credits started; a layer opens once
// the elapsed time is strictly greater than its threshold.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct TimelineConfig {
    pub black_fade_after: u64,
    pub noise_fade_after: u64,
    pub sprites_after: u64,
    pub letters_after: u64,
    pub final_image_after: u64,
    pub audio_delay: f32, // seconds between the sprite sheet loading and audio start
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            black_fade_after: 4,
            noise_fade_after: 12,
            sprites_after: 12,
            letters_after: 25,
            final_image_after: 32,
            audio_delay: 2.5,
        }
    }
}

// alpha change per tick
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct FadeConfig {
    pub noise_velocity: f32,
    pub black_velocity: f32,
    pub final_image_velocity: f32,
}

impl Default for FadeConfig {
    fn default() -> Self {
        Self {
            noise_velocity: -0.005,
            black_velocity: -0.005,
            final_image_velocity: 0.009,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct NoiseConfig {
    pub frames: usize,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self { frames: 10 }
    }
}
