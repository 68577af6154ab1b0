// src/views/mod.rs

pub mod credits_director;
pub mod falling_sprite;

pub use credits_director::{CreditsDirector, CreditsState, DirectorCommand};
pub use falling_sprite::FallingSprite;
