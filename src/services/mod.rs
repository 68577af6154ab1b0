// src/services/mod.rs
// Asset loading and playback.

pub mod asset_loader;
pub mod soundtrack;
pub mod sprite_sheet;

pub use asset_loader::{AssetEvent, AssetLoader};
pub use soundtrack::{Playback, Soundtrack};
pub use sprite_sheet::slice_sheet;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("image error: {0}")]
    Image(#[from] nannou::image::ImageError),
    #[error("wav error: {0}")]
    Wav(#[from] hound::Error),
    #[error("unsupported audio format: {0}")]
    UnsupportedFormat(String),
    #[error("audio stream error: {0}")]
    Audio(String),
    #[error("sheet cell {index} lies outside the {sheet_width}x{sheet_height} sheet")]
    CellOutOfBounds {
        index: usize,
        sheet_width: u32,
        sheet_height: u32,
    },
}
