use rand::RngCore;

use crate::{
    effects::{adjust, ImageEffect, ImageStyle},
    error::Result,
    raster::Raster,
};

const CONTRAST: f32 = 2.0;
const TINT: f32 = 1.1;

/// Metallic chrome effect: grayscale, hard contrast, edge enhancement,
/// and a cool red/blue tint
pub struct ChromeEffect;

impl ImageEffect for ChromeEffect {
    fn style(&self) -> ImageStyle {
        ImageStyle::Chrome
    }

    fn apply(&self, src: &Raster, _rng: &mut dyn RngCore) -> Result<Raster> {
        let gray = adjust::grayscale(src);
        let contrasted = adjust::contrast(&gray, CONTRAST);
        let mut out = adjust::convolve3x3(&contrasted, &adjust::EDGE_ENHANCE_MORE);

        for (_, _, px) in out.as_image_mut().enumerate_pixels_mut() {
            px.0[0] = (px.0[0] as f32 * TINT).min(255.0) as u8;
            px.0[2] = (px.0[2] as f32 * TINT).min(255.0) as u8;
        }
        Ok(out)
    }
}
