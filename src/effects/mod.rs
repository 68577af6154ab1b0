pub mod alpha_fade;
pub mod timeline;

pub use alpha_fade::{AlphaFade, FadeDirection};
pub use timeline::{Layer, OneShotCue, Timeline, TimelineEntry};
