use rand::RngCore;

use crate::{
    effects::{adjust, ImageEffect, ImageStyle},
    error::Result,
    raster::Raster,
};

const SATURATION: f32 = 2.0;
const GLOW_SIGMA: f32 = 5.0;
const GLOW_BLEND: f32 = 0.5;
const BRIGHTNESS: f32 = 1.3;

/// Neon glow effect: boosted saturation, a blurred edge map as a glow
/// layer, and a brightness lift
pub struct NeonEffect;

impl ImageEffect for NeonEffect {
    fn style(&self) -> ImageStyle {
        ImageStyle::Neon
    }

    fn apply(&self, src: &Raster, _rng: &mut dyn RngCore) -> Result<Raster> {
        let saturated = adjust::saturate(src, SATURATION);
        let edges = adjust::convolve3x3(&saturated, &adjust::FIND_EDGES);
        let glow = Raster::new(image::imageops::blur(edges.as_image(), GLOW_SIGMA));
        let blended = adjust::blend(&saturated, &glow, GLOW_BLEND);
        Ok(adjust::brighten(&blended, BRIGHTNESS))
    }
}
