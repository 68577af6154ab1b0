// src/draw/textures.rs
//
// GPU-side images of the credits.
//
// nannou's textured primitives ignore the vertex color alpha, so layers that
// fade (noise, final image) keep their pixels on the CPU and are re-uploaded
// into an AlphaLayer with the alpha channel scaled whenever it changes.

use nannou::image::{DynamicImage, RgbaImage};
use nannou::prelude::*;

const LAYER_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;

/// Copy of the raw pixel bytes with every alpha sample multiplied by `alpha`.
pub fn scale_alpha(image: &RgbaImage, alpha: f32) -> Vec<u8> {
    let alpha = alpha.clamp(0.0, 1.0);
    let mut data = image.as_raw().clone();
    for pixel in data.chunks_exact_mut(4) {
        pixel[3] = (pixel[3] as f32 * alpha).round() as u8;
    }
    data
}

fn alpha_key(alpha: f32) -> u8 {
    (alpha.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// A texture whose contents are replaced from CPU images with a given alpha.
pub struct AlphaLayer {
    texture: wgpu::Texture,
    size: [u32; 2],
    uploaded: Option<(usize, u8)>, // (image key, alpha) currently on the GPU
}

impl AlphaLayer {
    pub fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let texture = wgpu::TextureBuilder::new()
            .size([width, height])
            .format(LAYER_FORMAT)
            .usage(wgpu::TextureUsages::COPY_DST | wgpu::TextureUsages::TEXTURE_BINDING)
            .build(device);

        Self {
            texture,
            size: [width, height],
            uploaded: None,
        }
    }

    /// Queues an upload of `image` at `alpha`, unless that exact pair is
    /// already on the GPU. `key` identifies the image (e.g. a frame index).
    pub fn upload(
        &mut self,
        device: &wgpu::Device,
        encoder: &mut wgpu::CommandEncoder,
        key: usize,
        image: &RgbaImage,
        alpha: f32,
    ) {
        let wanted = (key, alpha_key(alpha));
        if self.uploaded == Some(wanted) {
            return;
        }
        if image.dimensions() != (self.size[0], self.size[1]) {
            log::warn!(
                "Image {:?} doesn't fit layer {:?}, skipping upload",
                image.dimensions(),
                self.size
            );
            return;
        }

        let data = scale_alpha(image, alpha);
        self.texture.upload_data(device, encoder, &data);
        self.uploaded = Some(wanted);
    }

    pub fn texture(&self) -> &wgpu::Texture {
        &self.texture
    }

    pub fn size(&self) -> [u32; 2] {
        self.size
    }
}

/// Every image the credits draw, once loaded.
#[derive(Default)]
pub struct CreditsTextures {
    sprites: Vec<wgpu::Texture>,
    sprite_sizes: Vec<(f32, f32)>,
    noise_frames: Vec<RgbaImage>,
    noise_layer: Option<AlphaLayer>,
    final_image: Option<(RgbaImage, AlphaLayer)>,
}

impl CreditsTextures {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uploads the sliced sprite sheet cells, one texture per sprite.
    pub fn set_sprites(&mut self, app: &App, cells: Vec<RgbaImage>) {
        self.sprite_sizes = cells
            .iter()
            .map(|cell| (cell.width() as f32, cell.height() as f32))
            .collect();
        self.sprites = cells
            .into_iter()
            .map(|cell| wgpu::Texture::from_image(app, &DynamicImage::ImageRgba8(cell)))
            .collect();
    }

    pub fn set_noise_frames(&mut self, device: &wgpu::Device, frames: Vec<RgbaImage>) {
        self.noise_layer = frames
            .first()
            .map(|frame| AlphaLayer::new(device, frame.width(), frame.height()));
        self.noise_frames = frames;
    }

    pub fn set_final_image(&mut self, device: &wgpu::Device, image: RgbaImage) {
        let layer = AlphaLayer::new(device, image.width(), image.height());
        self.final_image = Some((image, layer));
    }

    pub fn sprite(&self, index: usize) -> Option<&wgpu::Texture> {
        self.sprites.get(index)
    }

    pub fn sprite_sizes(&self) -> &[(f32, f32)] {
        &self.sprite_sizes
    }

    /// Prepares noise frame `frame` at `alpha` and returns the layer to draw.
    pub fn noise_layer(
        &mut self,
        device: &wgpu::Device,
        encoder: &mut wgpu::CommandEncoder,
        frame: usize,
        alpha: f32,
    ) -> Option<&AlphaLayer> {
        let image = self.noise_frames.get(frame)?;
        let layer = self.noise_layer.as_mut()?;
        layer.upload(device, encoder, frame, image, alpha);
        Some(layer)
    }

    /// Prepares the final image at `alpha` and returns the layer to draw.
    pub fn final_layer(
        &mut self,
        device: &wgpu::Device,
        encoder: &mut wgpu::CommandEncoder,
        alpha: f32,
    ) -> Option<&AlphaLayer> {
        let (image, layer) = self.final_image.as_mut()?;
        layer.upload(device, encoder, 0, image, alpha);
        Some(layer)
    }
}
