use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageBuffer, ImageEncoder, Rgb, RgbImage};

/// An RGB8 pixel buffer.
///
/// This is a thin wrapper around an [`RgbImage`] that provides the pixel
/// access methods the effects use. Effects treat rasters as immutable:
/// every transform consumes a `&Raster` and returns a freshly allocated
/// one, so chained effects never alias each other's buffers.
#[derive(Clone, Debug)]
pub struct Raster {
    buffer: RgbImage,
}

impl Raster {
    /// Wrap an existing RGB image buffer
    pub fn new(buffer: RgbImage) -> Self {
        Self { buffer }
    }

    /// Create a raster of the given dimensions filled with the specified color
    pub fn filled(width: u32, height: u32, color: [u8; 3]) -> Self {
        let buffer = ImageBuffer::from_fn(width, height, |_, _| Rgb(color));
        Self { buffer }
    }

    /// Create a black raster of the given dimensions
    pub fn black(width: u32, height: u32) -> Self {
        Self::filled(width, height, [0, 0, 0])
    }

    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.buffer.dimensions()
    }

    /// True if either dimension is zero
    pub fn is_degenerate(&self) -> bool {
        self.buffer.width() == 0 || self.buffer.height() == 0
    }

    /// Get a pixel at the given coordinates (returns RGB array)
    pub fn get_pixel(&self, x: u32, y: u32) -> [u8; 3] {
        self.buffer.get_pixel(x, y).0
    }

    /// Set a pixel at the given coordinates
    pub fn set_pixel(&mut self, x: u32, y: u32, color: [u8; 3]) {
        self.buffer.put_pixel(x, y, Rgb(color));
    }

    /// Alpha-blend `color` over the pixel at (x, y). Out-of-bounds
    /// coordinates are ignored so callers can draw with negative offsets.
    pub fn blend_pixel(&mut self, x: i64, y: i64, color: [u8; 3], alpha: f32) {
        if x < 0 || y < 0 || x >= self.width() as i64 || y >= self.height() as i64 {
            return;
        }
        let a = alpha.clamp(0.0, 1.0);
        let px = self.buffer.get_pixel_mut(x as u32, y as u32);
        for c in 0..3 {
            let blended = px[c] as f32 * (1.0 - a) + color[c] as f32 * a;
            px[c] = blended.round().clamp(0.0, 255.0) as u8;
        }
    }

    /// Get the underlying image buffer
    pub fn as_image(&self) -> &RgbImage {
        &self.buffer
    }

    /// Get a mutable reference to the underlying image buffer
    pub fn as_image_mut(&mut self) -> &mut RgbImage {
        &mut self.buffer
    }

    /// Consume the raster and return the underlying buffer
    pub fn into_image(self) -> RgbImage {
        self.buffer
    }

    /// Encode the raster as a PNG into an in-memory buffer
    pub fn encode_png(&self) -> Result<Vec<u8>, image::ImageError> {
        let mut bytes = Vec::new();
        PngEncoder::new(&mut bytes).write_image(
            self.buffer.as_raw(),
            self.width(),
            self.height(),
            ExtendedColorType::Rgb8,
        )?;
        Ok(bytes)
    }
}

impl From<RgbImage> for Raster {
    fn from(buffer: RgbImage) -> Self {
        Self::new(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_raster_has_uniform_color() {
        let raster = Raster::filled(4, 3, [10, 20, 30]);
        assert_eq!(raster.dimensions(), (4, 3));
        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(raster.get_pixel(x, y), [10, 20, 30]);
            }
        }
    }

    #[test]
    fn blend_pixel_ignores_out_of_bounds() {
        let mut raster = Raster::black(2, 2);
        raster.blend_pixel(-1, 0, [255, 255, 255], 1.0);
        raster.blend_pixel(0, 5, [255, 255, 255], 1.0);
        for y in 0..2 {
            for x in 0..2 {
                assert_eq!(raster.get_pixel(x, y), [0, 0, 0]);
            }
        }
    }

    #[test]
    fn blend_pixel_interpolates() {
        let mut raster = Raster::black(1, 1);
        raster.blend_pixel(0, 0, [200, 100, 0], 0.5);
        assert_eq!(raster.get_pixel(0, 0), [100, 50, 0]);
    }

    #[test]
    fn encode_png_produces_signature() {
        let raster = Raster::filled(2, 2, [1, 2, 3]);
        let bytes = raster.encode_png().unwrap();
        assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n']);
    }
}
