use rand::RngCore;

use crate::{
    effects::{ImageEffect, ImageStyle},
    error::Result,
    raster::Raster,
};

/// Scanline intensity of the overlaid horizontal lines
const SCANLINE_ALPHA: f32 = 50.0 / 255.0;

/// CRT monitor effect: RGB channel shift, scanlines, and a mild blur
pub struct CrtEffect;

impl CrtEffect {
    /// Shift the red channel 2px right and the blue channel 2px left,
    /// leaving the edge columns unchanged.
    fn shift_channels(&self, src: &Raster) -> Raster {
        let (w, h) = src.dimensions();
        let mut out = src.clone();
        for y in 0..h {
            for x in 2..w {
                let mut px = out.get_pixel(x, y);
                px[0] = src.get_pixel(x - 2, y)[0];
                out.set_pixel(x, y, px);
            }
            for x in 0..w.saturating_sub(2) {
                let mut px = out.get_pixel(x, y);
                px[2] = src.get_pixel(x + 2, y)[2];
                out.set_pixel(x, y, px);
            }
        }
        out
    }

    /// Darken every third row at low opacity
    fn overlay_scanlines(&self, raster: &mut Raster) {
        let (w, h) = raster.dimensions();
        for y in (0..h).step_by(3) {
            for x in 0..w {
                raster.blend_pixel(x as i64, y as i64, [0, 0, 0], SCANLINE_ALPHA);
            }
        }
    }
}

impl ImageEffect for CrtEffect {
    fn style(&self) -> ImageStyle {
        ImageStyle::Crt
    }

    fn apply(&self, src: &Raster, _rng: &mut dyn RngCore) -> Result<Raster> {
        let mut out = self.shift_channels(src);
        self.overlay_scanlines(&mut out);
        let blurred = image::imageops::blur(out.as_image(), 0.5);
        Ok(Raster::new(blurred))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::SmallRng, SeedableRng};

    #[test]
    fn output_keeps_dimensions() {
        let src = Raster::filled(32, 24, [90, 140, 200]);
        let mut rng = SmallRng::seed_from_u64(0);
        let out = CrtEffect.apply(&src, &mut rng).unwrap();
        assert_eq!(out.dimensions(), (32, 24));
    }

    #[test]
    fn source_is_not_mutated() {
        let src = Raster::filled(16, 16, [10, 20, 30]);
        let mut rng = SmallRng::seed_from_u64(0);
        let _ = CrtEffect.apply(&src, &mut rng).unwrap();
        assert_eq!(src.get_pixel(8, 8), [10, 20, 30]);
    }

    #[test]
    fn red_channel_shifts_right() {
        // red only in column 4, so after a 2px shift it shows up in column 6
        let mut src = Raster::black(12, 3);
        for y in 0..3 {
            src.set_pixel(4, y, [255, 0, 0]);
        }
        let shifted = CrtEffect.shift_channels(&src);
        assert_eq!(shifted.get_pixel(6, 1)[0], 255);
        assert_eq!(shifted.get_pixel(4, 1)[0], 0);
    }
}
