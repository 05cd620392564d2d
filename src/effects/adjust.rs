//! Shared per-pixel adjustments used by the image effects.
//!
//! All helpers consume a reference and return a new raster; source buffers
//! are never written through.

use crate::raster::Raster;

/// ITU-R 601 luma of an RGB pixel, the same weighting PIL uses for `L` mode
pub fn luminance(px: [u8; 3]) -> f32 {
    0.299 * px[0] as f32 + 0.587 * px[1] as f32 + 0.114 * px[2] as f32
}

/// Scale color saturation by interpolating each channel away from the
/// pixel's luma. A factor of 1.0 is the identity, 0.0 is grayscale.
pub fn saturate(src: &Raster, factor: f32) -> Raster {
    let mut out = src.clone();
    for (_, _, px) in out.as_image_mut().enumerate_pixels_mut() {
        let luma = luminance(px.0);
        for c in 0..3 {
            let v = luma + (px.0[c] as f32 - luma) * factor;
            px.0[c] = v.round().clamp(0.0, 255.0) as u8;
        }
    }
    out
}

/// Scale brightness by a constant factor, clamping to [0, 255]
pub fn brighten(src: &Raster, factor: f32) -> Raster {
    let mut out = src.clone();
    for (_, _, px) in out.as_image_mut().enumerate_pixels_mut() {
        for c in 0..3 {
            px.0[c] = (px.0[c] as f32 * factor).round().clamp(0.0, 255.0) as u8;
        }
    }
    out
}

/// Collapse to grayscale, storing the luma in all three channels
pub fn grayscale(src: &Raster) -> Raster {
    let mut out = src.clone();
    for (_, _, px) in out.as_image_mut().enumerate_pixels_mut() {
        let luma = luminance(px.0).round().clamp(0.0, 255.0) as u8;
        px.0 = [luma, luma, luma];
    }
    out
}

/// Stretch contrast around the image's mean luma by a constant factor
pub fn contrast(src: &Raster, factor: f32) -> Raster {
    let (w, h) = src.dimensions();
    let mut sum = 0.0f64;
    for (_, _, px) in src.as_image().enumerate_pixels() {
        sum += luminance(px.0) as f64;
    }
    let mean = (sum / (w as f64 * h as f64)) as f32;

    let mut out = src.clone();
    for (_, _, px) in out.as_image_mut().enumerate_pixels_mut() {
        for c in 0..3 {
            let v = mean + (px.0[c] as f32 - mean) * factor;
            px.0[c] = v.round().clamp(0.0, 255.0) as u8;
        }
    }
    out
}

/// Linear blend of two equally sized rasters: `a * (1 - ratio) + b * ratio`
pub fn blend(a: &Raster, b: &Raster, ratio: f32) -> Raster {
    debug_assert_eq!(a.dimensions(), b.dimensions());
    let mut out = a.clone();
    for (x, y, px) in out.as_image_mut().enumerate_pixels_mut() {
        let other = b.get_pixel(x, y);
        for c in 0..3 {
            let v = px.0[c] as f32 * (1.0 - ratio) + other[c] as f32 * ratio;
            px.0[c] = v.round().clamp(0.0, 255.0) as u8;
        }
    }
    out
}

/// Convolve each channel with a 3x3 kernel. Border pixels are computed by
/// clamping sample coordinates to the image edge.
pub fn convolve3x3(src: &Raster, kernel: &[f32; 9]) -> Raster {
    let (w, h) = src.dimensions();
    let mut out = src.clone();
    for y in 0..h {
        for x in 0..w {
            let mut acc = [0.0f32; 3];
            for ky in 0..3i64 {
                for kx in 0..3i64 {
                    let sx = (x as i64 + kx - 1).clamp(0, w as i64 - 1) as u32;
                    let sy = (y as i64 + ky - 1).clamp(0, h as i64 - 1) as u32;
                    let sample = src.get_pixel(sx, sy);
                    let weight = kernel[(ky * 3 + kx) as usize];
                    for c in 0..3 {
                        acc[c] += sample[c] as f32 * weight;
                    }
                }
            }
            let px = [
                acc[0].round().clamp(0.0, 255.0) as u8,
                acc[1].round().clamp(0.0, 255.0) as u8,
                acc[2].round().clamp(0.0, 255.0) as u8,
            ];
            out.set_pixel(x, y, px);
        }
    }
    out
}

/// PIL's FIND_EDGES kernel
pub const FIND_EDGES: [f32; 9] = [-1.0, -1.0, -1.0, -1.0, 8.0, -1.0, -1.0, -1.0, -1.0];

/// PIL's EDGE_ENHANCE_MORE kernel
pub const EDGE_ENHANCE_MORE: [f32; 9] = [-1.0, -1.0, -1.0, -1.0, 9.0, -1.0, -1.0, -1.0, -1.0];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saturate_leaves_gray_unchanged() {
        let gray = Raster::filled(3, 3, [100, 100, 100]);
        let out = saturate(&gray, 2.0);
        assert_eq!(out.get_pixel(1, 1), [100, 100, 100]);
    }

    #[test]
    fn saturate_zero_is_grayscale() {
        let src = Raster::filled(1, 1, [200, 50, 10]);
        let out = saturate(&src, 0.0);
        let px = out.get_pixel(0, 0);
        assert_eq!(px[0], px[1]);
        assert_eq!(px[1], px[2]);
    }

    #[test]
    fn brighten_clamps() {
        let src = Raster::filled(1, 1, [200, 10, 0]);
        let out = brighten(&src, 2.0);
        assert_eq!(out.get_pixel(0, 0), [255, 20, 0]);
    }

    #[test]
    fn blend_midpoint() {
        let a = Raster::filled(2, 2, [0, 0, 0]);
        let b = Raster::filled(2, 2, [100, 200, 50]);
        let out = blend(&a, &b, 0.5);
        assert_eq!(out.get_pixel(0, 0), [50, 100, 25]);
    }

    #[test]
    fn edges_of_uniform_image_are_black() {
        let src = Raster::filled(5, 5, [120, 120, 120]);
        let out = convolve3x3(&src, &FIND_EDGES);
        assert_eq!(out.get_pixel(2, 2), [0, 0, 0]);
    }

    #[test]
    fn contrast_preserves_mean_pixel() {
        let src = Raster::filled(4, 4, [80, 80, 80]);
        let out = contrast(&src, 2.0);
        // every pixel sits at the mean, so stretching is a no-op
        assert_eq!(out.get_pixel(0, 0), [80, 80, 80]);
    }
}
