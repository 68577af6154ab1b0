// src/utilities/noise_frames.rs
//
// Random grayscale "film grain" frames.
// Each frame is opaque and mirror-symmetric: pixel k and pixel n-1-k share
// one random gray level, so only half the pixels cost a random draw.

use nannou::image::RgbaImage;
use rand::{thread_rng, Rng};
use rayon::prelude::*;

pub fn generate_noise_frame<R: Rng + ?Sized>(width: u32, height: u32, rng: &mut R) -> RgbaImage {
    let pixels = (width * height) as usize;
    let mut data = vec![0u8; pixels * 4];

    for k in 0..pixels.div_ceil(2) {
        let gray: u8 = rng.gen();
        let mirrored = pixels - 1 - k;
        for pixel in [k, mirrored] {
            data[pixel * 4..pixel * 4 + 4].copy_from_slice(&[gray, gray, gray, 255]);
        }
    }

    // the buffer is exactly width * height * 4 bytes
    RgbaImage::from_raw(width, height, data).unwrap_or_else(|| RgbaImage::new(width, height))
}

/// Generates `count` independent frames in parallel.
pub fn generate_noise_frames(width: u32, height: u32, count: usize) -> Vec<RgbaImage> {
    (0..count)
        .into_par_iter()
        .map(|_| generate_noise_frame(width, height, &mut thread_rng()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_frame_is_opaque_gray_and_mirrored() {
        let mut rng = StdRng::seed_from_u64(7);
        let frame = generate_noise_frame(7, 5, &mut rng);
        assert_eq!(frame.dimensions(), (7, 5));

        let pixels: Vec<[u8; 4]> = frame.pixels().map(|p| p.0).collect();
        let n = pixels.len();
        for (k, pixel) in pixels.iter().enumerate() {
            assert_eq!(pixel[3], 255);
            assert_eq!(pixel[0], pixel[1]);
            assert_eq!(pixel[1], pixel[2]);
            assert_eq!(*pixel, pixels[n - 1 - k]);
        }
    }

    #[test]
    fn test_frames_differ() {
        let frames = generate_noise_frames(32, 32, 10);
        assert_eq!(frames.len(), 10);
        assert!(frames.iter().all(|f| f.dimensions() == (32, 32)));
        // 512 random gray levels matching by chance is not a realistic outcome
        assert_ne!(frames[0].as_raw(), frames[1].as_raw());
    }
}
