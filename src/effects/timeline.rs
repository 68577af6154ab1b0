// src/effects/timeline.rs
//
// The credits timeline: which layer opens after how many seconds.
// Entries are kept in compositing order and all of them are evaluated every
// tick; a layer decides for itself what a closed gate means (hidden, or
// shown but not fading yet).

use std::time::{Duration, Instant};

use crate::config::TimelineConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    FallingSprites,
    Letterforms,
    NoiseGrain,
    BlackCurtain,
    FinalImage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineEntry {
    pub after_secs: u64,
    pub layer: Layer,
}

impl TimelineEntry {
    pub fn is_open(&self, elapsed_secs: u64) -> bool {
        elapsed_secs > self.after_secs
    }
}

#[derive(Debug, Clone)]
pub struct Timeline {
    entries: Vec<TimelineEntry>,
}

impl Timeline {
    pub fn new(entries: Vec<TimelineEntry>) -> Self {
        Self { entries }
    }

    pub fn from_config(config: &TimelineConfig) -> Self {
        Self::new(vec![
            TimelineEntry {
                after_secs: config.sprites_after,
                layer: Layer::FallingSprites,
            },
            TimelineEntry {
                after_secs: config.letters_after,
                layer: Layer::Letterforms,
            },
            TimelineEntry {
                after_secs: config.noise_fade_after,
                layer: Layer::NoiseGrain,
            },
            TimelineEntry {
                after_secs: config.black_fade_after,
                layer: Layer::BlackCurtain,
            },
            TimelineEntry {
                after_secs: config.final_image_after,
                layer: Layer::FinalImage,
            },
        ])
    }

    /// Every layer in compositing order, with whether its gate is open.
    pub fn evaluate(&self, elapsed_secs: u64) -> impl Iterator<Item = (Layer, bool)> + '_ {
        self.entries
            .iter()
            .map(move |entry| (entry.layer, entry.is_open(elapsed_secs)))
    }

    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }
}

/// A one-shot timer: fires once, on the first check at or past its due time.
#[derive(Debug, Clone, Default)]
pub struct OneShotCue {
    due: Option<Instant>,
}

impl OneShotCue {
    pub fn schedule(&mut self, from: Instant, delay: Duration) {
        self.due = Some(from + delay);
    }

    pub fn fire(&mut self, now: Instant) -> bool {
        match self.due {
            Some(due) if now >= due => {
                self.due = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.due.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds_are_strict() {
        let entry = TimelineEntry {
            after_secs: 12,
            layer: Layer::FallingSprites,
        };
        assert!(!entry.is_open(0));
        assert!(!entry.is_open(12));
        assert!(entry.is_open(13));
    }

    #[test]
    fn test_compositing_order() {
        let timeline = Timeline::from_config(&TimelineConfig::default());
        let layers: Vec<Layer> = timeline.entries().iter().map(|e| e.layer).collect();
        assert_eq!(
            layers,
            vec![
                Layer::FallingSprites,
                Layer::Letterforms,
                Layer::NoiseGrain,
                Layer::BlackCurtain,
                Layer::FinalImage,
            ]
        );
    }

    #[test]
    fn test_evaluate_opens_layers_over_time() {
        let timeline = Timeline::from_config(&TimelineConfig::default());
        let open_at = |secs| -> Vec<Layer> {
            timeline
                .evaluate(secs)
                .filter(|(_, open)| *open)
                .map(|(layer, _)| layer)
                .collect()
        };

        assert!(open_at(0).is_empty());
        assert_eq!(open_at(5), vec![Layer::BlackCurtain]);
        assert_eq!(
            open_at(13),
            vec![Layer::FallingSprites, Layer::NoiseGrain, Layer::BlackCurtain]
        );
        assert_eq!(open_at(40).len(), 5);
    }

    #[test]
    fn test_cue_fires_once() {
        let start = Instant::now();
        let mut cue = OneShotCue::default();
        assert!(!cue.fire(start));

        cue.schedule(start, Duration::from_millis(2500));
        assert!(cue.is_pending());
        assert!(!cue.fire(start + Duration::from_millis(2499)));
        assert!(cue.fire(start + Duration::from_millis(2500)));
        assert!(!cue.fire(start + Duration::from_secs(10)));
        assert!(!cue.is_pending());
    }
}
