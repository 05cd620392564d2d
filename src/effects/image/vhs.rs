use rand::{Rng, RngCore};

use crate::{
    effects::{adjust, ImageEffect, ImageStyle},
    error::Result,
    raster::Raster,
};

const MIN_BANDS: u32 = 3;
const MAX_BANDS: u32 = 8;
const MIN_BAND_HEIGHT: u32 = 5;
const MAX_BAND_HEIGHT: u32 = 30;
const MAX_SHIFT: i32 = 20;
const NOISE_AMPLITUDE: i16 = 20;
const SATURATION_BOOST: f32 = 1.3;

/// VHS tape glitch effect: displaced horizontal bands, saturation boost,
/// and per-pixel noise
pub struct VhsEffect;

impl VhsEffect {
    /// Displace a band of rows horizontally. Pixels shifted past the edge
    /// are dropped; vacated pixels keep their previous content.
    fn displace_band(&self, raster: &mut Raster, y0: u32, band_height: u32, shift: i32) {
        if shift == 0 {
            return;
        }
        let (w, h) = raster.dimensions();
        let y1 = (y0 + band_height).min(h);
        for y in y0..y1 {
            let row: Vec<[u8; 3]> = (0..w).map(|x| raster.get_pixel(x, y)).collect();
            if shift > 0 {
                for x in shift as u32..w {
                    raster.set_pixel(x, y, row[(x - shift as u32) as usize]);
                }
            } else {
                let s = (-shift) as u32;
                for x in 0..w.saturating_sub(s) {
                    raster.set_pixel(x, y, row[(x + s) as usize]);
                }
            }
        }
    }

    fn add_noise(&self, raster: &mut Raster, rng: &mut dyn RngCore) {
        for (_, _, px) in raster.as_image_mut().enumerate_pixels_mut() {
            for c in 0..3 {
                let noise = rng.gen_range(-NOISE_AMPLITUDE..=NOISE_AMPLITUDE);
                px.0[c] = (px.0[c] as i16 + noise).clamp(0, 255) as u8;
            }
        }
    }
}

impl ImageEffect for VhsEffect {
    fn style(&self) -> ImageStyle {
        ImageStyle::Vhs
    }

    fn apply(&self, src: &Raster, rng: &mut dyn RngCore) -> Result<Raster> {
        let mut out = src.clone();
        let (_, h) = out.dimensions();

        // bands are anchored at least 50px from the bottom; images shorter
        // than that just skip the displacement pass
        if h > 50 {
            let bands = rng.gen_range(MIN_BANDS..=MAX_BANDS);
            for _ in 0..bands {
                let y0 = rng.gen_range(0..h - 50);
                let band_height = rng.gen_range(MIN_BAND_HEIGHT..=MAX_BAND_HEIGHT);
                let shift = rng.gen_range(-MAX_SHIFT..=MAX_SHIFT);
                self.displace_band(&mut out, y0, band_height, shift);
            }
        }

        let mut out = adjust::saturate(&out, SATURATION_BOOST);
        self.add_noise(&mut out, rng);
        Ok(out)
    }
}
