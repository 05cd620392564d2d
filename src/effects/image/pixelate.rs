use color_quant::NeuQuant;
use image::imageops::{self, FilterType};
use rand::RngCore;

use crate::{
    effects::{ImageEffect, ImageStyle},
    error::Result,
    raster::Raster,
};

const PIXEL_SIZE: u32 = 8;
const PALETTE_COLORS: usize = 32;
const SAMPLE_FACTOR: i32 = 10;

/// Retro pixelation: nearest-neighbor down/upsample followed by adaptive
/// palette quantization to at most 32 colors
pub struct PixelateEffect;

impl PixelateEffect {
    fn quantize(raster: &Raster) -> Raster {
        let rgba: Vec<u8> = raster
            .as_image()
            .pixels()
            .flat_map(|px| [px.0[0], px.0[1], px.0[2], 255])
            .collect();
        let quantizer = NeuQuant::new(SAMPLE_FACTOR, PALETTE_COLORS, &rgba);
        let palette = quantizer.color_map_rgba();

        let mut out = raster.clone();
        for (_, _, px) in out.as_image_mut().enumerate_pixels_mut() {
            let idx = quantizer.index_of(&[px.0[0], px.0[1], px.0[2], 255]) * 4;
            px.0 = [palette[idx], palette[idx + 1], palette[idx + 2]];
        }
        out
    }
}

impl ImageEffect for PixelateEffect {
    fn style(&self) -> ImageStyle {
        ImageStyle::Pixelate
    }

    fn apply(&self, src: &Raster, _rng: &mut dyn RngCore) -> Result<Raster> {
        let (w, h) = src.dimensions();
        let small_w = (w / PIXEL_SIZE).max(1);
        let small_h = (h / PIXEL_SIZE).max(1);

        let small = imageops::resize(src.as_image(), small_w, small_h, FilterType::Nearest);
        let big = imageops::resize(&small, w, h, FilterType::Nearest);
        Ok(Self::quantize(&Raster::new(big)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::SmallRng, SeedableRng};
    use std::collections::HashSet;

    fn color_count(raster: &Raster) -> usize {
        raster
            .as_image()
            .pixels()
            .map(|px| px.0)
            .collect::<HashSet<_>>()
            .len()
    }

    #[test]
    fn output_keeps_dimensions_and_palette_bound() {
        // a noisy gradient so the input has far more than 32 colors
        let mut src = Raster::black(64, 48);
        for y in 0..48 {
            for x in 0..64 {
                src.set_pixel(x, y, [(x * 4) as u8, (y * 5) as u8, ((x + y) * 2) as u8]);
            }
        }
        assert!(color_count(&src) > PALETTE_COLORS);

        let mut rng = SmallRng::seed_from_u64(0);
        let out = PixelateEffect.apply(&src, &mut rng).unwrap();
        assert_eq!(out.dimensions(), (64, 48));
        assert!(color_count(&out) <= PALETTE_COLORS);
    }

    #[test]
    fn tiny_images_survive_downsampling() {
        let src = Raster::filled(5, 3, [9, 9, 9]);
        let mut rng = SmallRng::seed_from_u64(0);
        let out = PixelateEffect.apply(&src, &mut rng).unwrap();
        assert_eq!(out.dimensions(), (5, 3));
    }

    #[test]
    fn pixel_blocks_are_uniform() {
        let mut src = Raster::black(32, 32);
        for y in 0..32 {
            for x in 0..32 {
                src.set_pixel(x, y, [(x * 8) as u8, (y * 8) as u8, 0]);
            }
        }
        let mut rng = SmallRng::seed_from_u64(0);
        let out = PixelateEffect.apply(&src, &mut rng).unwrap();
        // every 8x8 block collapses to a single color
        let anchor = out.get_pixel(8, 8);
        for y in 8..16 {
            for x in 8..16 {
                assert_eq!(out.get_pixel(x, y), anchor);
            }
        }
    }
}
