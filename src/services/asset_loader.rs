// src/services/asset_loader.rs
//
// Background asset loading.
// Each request gets its own thread; results come back as AssetEvents over a
// channel that the render loop drains once per frame.

use nannou::image::RgbaImage;
use std::{
    path::{Path, PathBuf},
    sync::mpsc::{channel, Receiver, Sender},
    thread,
    time::Instant,
};

use super::{slice_sheet, AssetError, Soundtrack};
use crate::models::FALLING_SHEET_CELLS;

#[derive(Debug)]
pub enum AssetEvent {
    SoundtrackReady(Soundtrack),
    SpriteSheetLoaded(Vec<RgbaImage>), // one image per falling sprite
    FinalImageLoaded(RgbaImage),
    Failed { asset: PathBuf, error: AssetError },
}

pub struct AssetLoader {
    sender: Sender<AssetEvent>,
    receiver: Receiver<AssetEvent>,
}

impl Default for AssetLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetLoader {
    pub fn new() -> Self {
        let (sender, receiver) = channel();
        Self { sender, receiver }
    }

    pub fn load_soundtrack(&self, path: PathBuf) {
        self.spawn("soundtrack-loader", move |sender| {
            let event = match timed("soundtrack", &path, || Soundtrack::open(&path)) {
                Ok(soundtrack) => AssetEvent::SoundtrackReady(soundtrack),
                Err(error) => AssetEvent::Failed { asset: path, error },
            };
            let _ = sender.send(event);
        });
    }

    /// Loads the sprite sheet, then the final image.
    pub fn load_images(&self, sprite_sheet: PathBuf, final_image: PathBuf) {
        self.spawn("image-loader", move |sender| {
            let sheet = timed("sprite sheet", &sprite_sheet, || {
                let sheet = open_rgba(&sprite_sheet)?;
                slice_sheet(&sheet, &FALLING_SHEET_CELLS)
            });
            let event = match sheet {
                Ok(sprites) => AssetEvent::SpriteSheetLoaded(sprites),
                Err(error) => AssetEvent::Failed {
                    asset: sprite_sheet,
                    error,
                },
            };
            if sender.send(event).is_err() {
                return;
            }

            let event = match timed("final image", &final_image, || open_rgba(&final_image)) {
                Ok(image) => AssetEvent::FinalImageLoaded(image),
                Err(error) => AssetEvent::Failed {
                    asset: final_image,
                    error,
                },
            };
            let _ = sender.send(event);
        });
    }

    /// Every event that arrived since the last call.
    pub fn poll(&self) -> Vec<AssetEvent> {
        self.receiver.try_iter().collect()
    }

    fn spawn<F>(&self, name: &str, job: F)
    where
        F: FnOnce(Sender<AssetEvent>) + Send + 'static,
    {
        let sender = self.sender.clone();
        let spawned = thread::Builder::new()
            .name(name.to_string())
            .spawn(move || job(sender));
        if let Err(e) = spawned {
            log::error!("Failed to start {} thread: {}", name, e);
        }
    }
}

fn open_rgba(path: &Path) -> Result<RgbaImage, AssetError> {
    Ok(nannou::image::open(path)?.to_rgba8())
}

fn timed<T>(
    what: &str,
    path: &Path,
    load: impl FnOnce() -> Result<T, AssetError>,
) -> Result<T, AssetError> {
    let start = Instant::now();
    let result = load();
    match &result {
        Ok(_) => log::debug!("Loaded {} {:?} in {:?}", what, path, start.elapsed()),
        Err(e) => log::error!("Failed to load {} {:?}: {}", what, path, e),
    }
    result
}
