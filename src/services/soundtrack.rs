// src/services/soundtrack.rs
//
// The credits soundtrack: a WAV file decoded up front with hound and played
// through a nannou_audio output stream. The audio thread only reads the
// shared sample buffer.

use nannou_audio as audio;
use nannou_audio::Buffer;
use std::path::Path;
use std::sync::Arc;

use super::AssetError;

#[derive(Debug, Clone)]
pub struct Soundtrack {
    samples: Arc<Vec<f32>>, // interleaved
    channels: usize,
    sample_rate: u32,
}

impl Soundtrack {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, AssetError> {
        let reader = hound::WavReader::open(path)?;
        Self::from_reader(reader)
    }

    pub fn from_reader<R: std::io::Read>(mut reader: hound::WavReader<R>) -> Result<Self, AssetError> {
        let spec = reader.spec();

        let samples: Vec<f32> = match spec.sample_format {
            hound::SampleFormat::Float => reader.samples::<f32>().collect::<Result<_, _>>()?,
            hound::SampleFormat::Int => {
                if spec.bits_per_sample == 0 || spec.bits_per_sample > 32 {
                    return Err(AssetError::UnsupportedFormat(format!(
                        "{}-bit integer samples",
                        spec.bits_per_sample
                    )));
                }
                let full_scale = (1i64 << (spec.bits_per_sample - 1)) as f32;
                reader
                    .samples::<i32>()
                    .map(|sample| sample.map(|s| s as f32 / full_scale))
                    .collect::<Result<_, _>>()?
            }
        };

        Ok(Self {
            samples: Arc::new(samples),
            channels: spec.channels.max(1) as usize,
            sample_rate: spec.sample_rate,
        })
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn duration_secs(&self) -> f32 {
        let frames = self.samples.len() / self.channels;
        frames as f32 / self.sample_rate.max(1) as f32
    }

    /// Opens an output stream at the soundtrack's sample rate and starts it.
    /// The stream stops making sound when dropped.
    pub fn play(&self, host: &audio::Host) -> Result<audio::Stream<Playback>, AssetError> {
        let stream = host
            .new_output_stream(Playback::new(self))
            .render(render)
            .sample_rate(self.sample_rate)
            .build()
            .or_else(|e| {
                log::warn!(
                    "No output stream at {} Hz ({}), using the device default",
                    self.sample_rate,
                    e
                );
                host.new_output_stream(Playback::new(self)).render(render).build()
            })
            .map_err(|e| AssetError::Audio(e.to_string()))?;

        stream.play().map_err(|e| AssetError::Audio(e.to_string()))?;
        log::info!("Soundtrack playing ({:.1} s)", self.duration_secs());
        Ok(stream)
    }
}

/// Audio-thread state: where in the soundtrack the stream is.
pub struct Playback {
    samples: Arc<Vec<f32>>,
    channels: usize,
    frame: usize,
}

impl Playback {
    fn new(soundtrack: &Soundtrack) -> Self {
        Self {
            samples: Arc::clone(&soundtrack.samples),
            channels: soundtrack.channels,
            frame: 0,
        }
    }

    /// Writes the next frame into `out`, spreading or dropping source
    /// channels to fit. Silence once the soundtrack has ended.
    fn fill_frame(&mut self, out: &mut [f32]) {
        let start = self.frame * self.channels;
        let Some(source) = self.samples.get(start..start + self.channels) else {
            out.iter_mut().for_each(|sample| *sample = 0.0);
            return;
        };

        for (channel, sample) in out.iter_mut().enumerate() {
            *sample = source[channel.min(self.channels - 1)];
        }
        self.frame += 1;
    }
}

fn render(playback: &mut Playback, buffer: &mut Buffer) {
    for frame in buffer.frames_mut() {
        playback.fill_frame(frame);
    }
}
