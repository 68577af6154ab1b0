pub mod noise_frames;

pub use noise_frames::{generate_noise_frame, generate_noise_frames};
