use rand::RngCore;

use crate::{
    effects::{adjust, ImageEffect, ImageStyle},
    error::Result,
    raster::Raster,
};

const BLEND_RATIO: f32 = 0.3;
const BRIGHTNESS: f32 = 1.2;

/// Holographic effect: a sinusoidal rainbow gradient blended over the
/// source, then brightened
pub struct HolographicEffect;

impl HolographicEffect {
    /// Rainbow color for a row, as a sinusoidal function of the row index
    pub(crate) fn rainbow(y: u32, height: u32) -> [u8; 3] {
        let hue = y as f32 / height as f32 * 255.0;
        let channel = |phase: f32| (128.0 + 127.0 * (hue * 0.02 + phase).sin()) as u8;
        [channel(0.0), channel(2.0), channel(4.0)]
    }

    fn rainbow_overlay(width: u32, height: u32) -> Raster {
        let mut overlay = Raster::black(width, height);
        for y in 0..height {
            let color = Self::rainbow(y, height);
            for x in 0..width {
                overlay.set_pixel(x, y, color);
            }
        }
        overlay
    }
}

impl ImageEffect for HolographicEffect {
    fn style(&self) -> ImageStyle {
        ImageStyle::Holographic
    }

    fn apply(&self, src: &Raster, _rng: &mut dyn RngCore) -> Result<Raster> {
        let (w, h) = src.dimensions();
        let overlay = Self::rainbow_overlay(w, h);
        let blended = adjust::blend(src, &overlay, BLEND_RATIO);
        Ok(adjust::brighten(&blended, BRIGHTNESS))
    }
}
