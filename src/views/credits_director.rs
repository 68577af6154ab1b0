// src/views/credits_director.rs
//
// The Credits Director.
//
// Owns every animated entity of the credits and decides, tick by tick, what
// gets composited. It is a small state machine:
//
//   Waiting --soundtrack ready--> Init --sprite sheet loaded--> Playing
//
// The director never touches assets or the GPU itself. Work it needs from
// the outside (generating noise, loading images, starting the audio) is
// queued as DirectorCommands for the render loop to carry out.

use nannou::prelude::*;
use std::time::{Duration, Instant};

use crate::animation::{Letterform, NoiseSequence};
use crate::config::{Config, FadeConfig};
use crate::draw::CreditsSurface;
use crate::effects::{AlphaFade, Layer, OneShotCue, Timeline};
use crate::models::{mad_men_title, CanvasSize, FALLING_SPRITES, FINAL_IMAGE_ORIGIN};
use crate::views::FallingSprite;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreditsState {
    Waiting,
    Init,
    Playing,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DirectorCommand {
    GenerateNoise { frames: usize, width: u32, height: u32 },
    LoadImages,
    PlayAudio,
}

pub struct CreditsDirector {
    state: CreditsState,
    pristine: bool,

    // settings
    canvas: CanvasSize,
    stroke_weight: f32,
    noise_frames: usize,
    audio_delay: Duration,
    timeline: Timeline,

    // animated entities
    letters: Vec<Letterform>,
    falling: Vec<FallingSprite>,
    noise: Option<NoiseSequence>,
    noise_fade: AlphaFade,
    black_fade: AlphaFade,
    final_fade: AlphaFade,
    final_image_ready: bool,

    // clock
    started_at: Option<Instant>,
    audio_cue: OneShotCue,

    commands: Vec<DirectorCommand>,
}

impl CreditsDirector {
    pub fn new(config: &Config) -> Self {
        let (width, height) = config.canvas_size();
        let FadeConfig {
            noise_velocity,
            black_velocity,
            final_image_velocity,
        } = config.fades;

        Self {
            state: CreditsState::Waiting,
            pristine: true,

            canvas: CanvasSize::new(width, height),
            stroke_weight: config.style.stroke_weight,
            noise_frames: config.noise.frames,
            audio_delay: Duration::from_secs_f32(config.timeline.audio_delay.max(0.0)),
            timeline: Timeline::from_config(&config.timeline),

            letters: Vec::new(),
            falling: Vec::new(),
            noise: None,
            noise_fade: AlphaFade::fade_out(noise_velocity),
            black_fade: AlphaFade::fade_out(black_velocity),
            final_fade: AlphaFade::fade_in(final_image_velocity),
            final_image_ready: false,

            started_at: None,
            audio_cue: OneShotCue::default(),

            commands: Vec::new(),
        }
    }

    /// The soundtrack can play through: start the render loop.
    pub fn on_soundtrack_ready(&mut self) {
        if self.state == CreditsState::Waiting {
            log::info!("Soundtrack ready, initialising credits");
            self.state = CreditsState::Init;
        }
    }

    /// Builds the falling sprites from the sheet cell sizes and starts the clock.
    /// Sprite `i` uses cell `i`; sprites without a cell are skipped.
    pub fn on_sprite_sheet_loaded(&mut self, cell_sizes: &[(f32, f32)], now: Instant) {
        if self.state != CreditsState::Init {
            log::warn!("Sprite sheet arrived in state {:?}, ignoring", self.state);
            return;
        }

        self.falling = FALLING_SPRITES
            .iter()
            .zip(cell_sizes)
            .enumerate()
            .filter_map(|(i, (def, size))| {
                FallingSprite::new(i, def, *size, self.canvas)
                    .map_err(|e| log::error!("Falling sprite {}: {}", i, e))
                    .ok()
            })
            .collect();

        self.started_at = Some(now);
        self.audio_cue.schedule(now, self.audio_delay);
        self.state = CreditsState::Playing;
        log::info!(
            "Credits playing with {} falling sprites, audio in {:?}",
            self.falling.len(),
            self.audio_delay
        );
    }

    pub fn on_final_image_loaded(&mut self) {
        self.final_image_ready = true;
    }

    /// One render tick.
    pub fn tick(&mut self, surface: &mut dyn CreditsSurface, now: Instant) {
        match self.state {
            CreditsState::Waiting => {}
            CreditsState::Init => {
                if self.pristine {
                    self.init_credits();
                }
            }
            CreditsState::Playing => self.draw_credits(surface, now),
        }
    }

    fn init_credits(&mut self) {
        self.pristine = false;

        self.letters = mad_men_title()
            .iter()
            .filter_map(|def| {
                Letterform::new(def, self.stroke_weight)
                    .map_err(|e| log::error!("Letter {}: {}", def.name, e))
                    .ok()
            })
            .collect();

        self.noise = NoiseSequence::new(self.noise_frames)
            .map_err(|e| log::warn!("No noise overlay: {}", e))
            .ok();
        if self.noise.is_some() {
            self.commands.push(DirectorCommand::GenerateNoise {
                frames: self.noise_frames,
                width: self.canvas.width as u32,
                height: self.canvas.height as u32,
            });
        }

        self.commands.push(DirectorCommand::LoadImages);
    }

    fn draw_credits(&mut self, surface: &mut dyn CreditsSurface, now: Instant) {
        if self.audio_cue.fire(now) {
            self.commands.push(DirectorCommand::PlayAudio);
        }

        let elapsed = self.elapsed_secs(now);
        let gates: Vec<(Layer, bool)> = self.timeline.evaluate(elapsed).collect();

        for (layer, open) in gates {
            match layer {
                Layer::FallingSprites => {
                    if open {
                        for sprite in self.falling.iter_mut() {
                            sprite.update_and_draw(surface);
                        }
                    }
                }
                Layer::Letterforms => {
                    if open {
                        for letter in self.letters.iter_mut() {
                            letter.animate(surface);
                        }
                    }
                }
                Layer::NoiseGrain => {
                    if let Some(noise) = self.noise.as_mut() {
                        if let Some(alpha) = self.noise_fade.step(open) {
                            surface.draw_noise(noise.advance(), alpha);
                        }
                    }
                }
                Layer::BlackCurtain => {
                    if let Some(alpha) = self.black_fade.step(open) {
                        surface.fill_black(alpha);
                    }
                }
                Layer::FinalImage => {
                    if let Some(alpha) = self.final_fade.step(open) {
                        if self.final_image_ready {
                            let (x, y) = FINAL_IMAGE_ORIGIN;
                            surface.draw_final_image(pt2(x, y), alpha);
                        }
                    }
                }
            }
        }
    }

    /// Whole seconds since the credits started playing.
    pub fn elapsed_secs(&self, now: Instant) -> u64 {
        self.started_at
            .map(|start| now.saturating_duration_since(start).as_secs())
            .unwrap_or(0)
    }

    /// Commands queued since the last call.
    pub fn take_commands(&mut self) -> Vec<DirectorCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn state(&self) -> CreditsState {
        self.state
    }

    pub fn letters_complete(&self) -> bool {
        !self.letters.is_empty() && self.letters.iter().all(|letter| letter.is_complete())
    }

    pub fn falling_sprites(&self) -> &[FallingSprite] {
        &self.falling
    }

    pub fn noise_alpha(&self) -> f32 {
        self.noise_fade.alpha()
    }

    pub fn black_alpha(&self) -> f32 {
        self.black_fade.alpha()
    }

    pub fn final_image_alpha(&self) -> f32 {
        self.final_fade.alpha()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::recorder::RecordingSurface;
    use crate::models::FALLING_SHEET_CELLS;

    fn cell_sizes() -> Vec<(f32, f32)> {
        FALLING_SHEET_CELLS
            .iter()
            .map(|cell| (cell.width as f32, cell.height as f32))
            .collect()
    }

    fn playing_director(start: Instant) -> CreditsDirector {
        let mut director = CreditsDirector::new(&Config::default());
        let mut surface = RecordingSurface::new();
        director.on_soundtrack_ready();
        director.tick(&mut surface, start);
        director.take_commands();
        director.on_sprite_sheet_loaded(&cell_sizes(), start);
        director.on_final_image_loaded();
        director
    }

    #[test]
    fn test_waiting_draws_nothing() {
        let mut director = CreditsDirector::new(&Config::default());
        let mut surface = RecordingSurface::new();
        director.tick(&mut surface, Instant::now());
        assert_eq!(director.state(), CreditsState::Waiting);
        assert!(surface.commands.is_empty());
        assert!(director.take_commands().is_empty());

        // images can't arrive before the director asked for them
        director.on_sprite_sheet_loaded(&cell_sizes(), Instant::now());
        assert_eq!(director.state(), CreditsState::Waiting);
    }

    #[test]
    fn test_init_runs_once_and_requests_assets() {
        let mut director = CreditsDirector::new(&Config::default());
        let mut surface = RecordingSurface::new();
        director.on_soundtrack_ready();
        assert_eq!(director.state(), CreditsState::Init);

        director.tick(&mut surface, Instant::now());
        assert_eq!(
            director.take_commands(),
            vec![
                DirectorCommand::GenerateNoise {
                    frames: 10,
                    width: 1280,
                    height: 720,
                },
                DirectorCommand::LoadImages,
            ]
        );
        assert_eq!(director.letters.len(), 6);

        // the init tick draws nothing and never repeats
        director.tick(&mut surface, Instant::now());
        assert!(surface.commands.is_empty());
        assert!(director.take_commands().is_empty());
    }

    #[test]
    fn test_sprite_sheet_starts_playing() {
        let start = Instant::now();
        let director = playing_director(start);
        assert_eq!(director.state(), CreditsState::Playing);
        assert_eq!(director.falling_sprites().len(), 5);

        // positions resolved against the 1280x720 canvas, above the top edge
        let first = &director.falling_sprites()[0];
        assert!((first.position.x - 1088.0).abs() < 1e-3);
        assert!((first.position.y + 288.0).abs() < 1e-3);
    }

    #[test]
    fn test_audio_starts_after_delay() {
        let start = Instant::now();
        let mut director = playing_director(start);
        let mut surface = RecordingSurface::new();

        director.tick(&mut surface, start + Duration::from_millis(2000));
        assert!(director.take_commands().is_empty());

        director.tick(&mut surface, start + Duration::from_millis(2600));
        assert_eq!(director.take_commands(), vec![DirectorCommand::PlayAudio]);

        director.tick(&mut surface, start + Duration::from_secs(5));
        assert!(director.take_commands().is_empty());
    }

    #[test]
    fn test_first_frame() {
        let start = Instant::now();
        let mut director = playing_director(start);
        let mut surface = RecordingSurface::new();

        director.tick(&mut surface, start);
        assert_eq!(surface.sprites(), 0);
        assert_eq!(surface.strokes(), 0);
        assert_eq!(surface.noise_alpha(), Some(1.0));
        assert_eq!(surface.black_alpha(), Some(1.0));
        assert_eq!(surface.final_image_alpha(), None);
    }

    #[test]
    fn test_black_curtain_lifts_after_four_seconds() {
        let start = Instant::now();
        let mut director = playing_director(start);
        let mut surface = RecordingSurface::new();

        director.tick(&mut surface, start + Duration::from_secs(4));
        assert_eq!(surface.black_alpha(), Some(1.0));

        surface.clear();
        director.tick(&mut surface, start + Duration::from_secs(5));
        assert!(surface.black_alpha().unwrap() < 1.0);
        // the noise keeps full strength until its own threshold
        assert_eq!(surface.noise_alpha(), Some(1.0));
    }

    #[test]
    fn test_whole_sequence_at_sixty_fps() {
        let start = Instant::now();
        let mut director = playing_director(start);
        let mut surface = RecordingSurface::new();

        let frames = 40 * 60;
        for frame in 0..=frames {
            surface.clear();
            let now = start + Duration::from_secs_f64(frame as f64 / 60.0);
            director.tick(&mut surface, now);

            for alpha in [
                director.noise_alpha(),
                director.black_alpha(),
                director.final_image_alpha(),
            ] {
                assert!((0.0..=1.0).contains(&alpha));
            }
        }

        // the last tick is at 40s
        assert_eq!(surface.sprites(), 5);
        assert!(director.letters_complete());
        assert!(surface.strokes() > 0);
        assert!(director.noise_alpha() <= 0.005 + 1e-6);
        assert!(director.black_alpha() <= 0.005 + 1e-6);
        assert_eq!(surface.noise_alpha(), None);
        assert_eq!(surface.black_alpha(), None);
        assert_eq!(director.final_image_alpha(), 1.0);
        assert_eq!(surface.final_image_alpha(), Some(1.0));
    }

    #[test]
    fn test_final_image_waits_for_its_asset() {
        let start = Instant::now();
        let mut director = CreditsDirector::new(&Config::default());
        let mut surface = RecordingSurface::new();
        director.on_soundtrack_ready();
        director.tick(&mut surface, start);
        director.on_sprite_sheet_loaded(&cell_sizes(), start);

        director.tick(&mut surface, start + Duration::from_secs(33));
        assert_eq!(surface.final_image_alpha(), None);
        // the fade still runs so a late image joins mid-fade
        assert!(director.final_image_alpha() > 0.0);

        director.on_final_image_loaded();
        surface.clear();
        director.tick(&mut surface, start + Duration::from_secs(33));
        assert!(surface.final_image_alpha().unwrap() > 0.009);
    }

    #[test]
    fn test_letters_wait_for_their_threshold() {
        let start = Instant::now();
        let mut director = playing_director(start);
        let mut surface = RecordingSurface::new();

        director.tick(&mut surface, start + Duration::from_secs(25));
        assert_eq!(surface.strokes(), 0);
        assert_eq!(surface.sprites(), 5);

        surface.clear();
        director.tick(&mut surface, start + Duration::from_secs(26));
        // one stroke per letter on the first tick
        assert_eq!(surface.strokes(), 1 + 1 + 2 + 1 + 4 + 1);
    }
}
