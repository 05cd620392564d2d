use crate::{
    effects::{TextEffect, TextStyle},
    error::Result,
    font::TextRenderRequest,
    raster::Raster,
};

/// Fixed 4-color cycle: magenta, cyan, yellow, green
pub const PALETTE: [[u8; 3]; 4] = [
    [255, 0, 255],
    [0, 255, 255],
    [255, 255, 0],
    [0, 255, 0],
];

/// Per-character color cycling through a fixed 4-color palette
pub struct GradientText;

impl TextEffect for GradientText {
    fn style(&self) -> TextStyle {
        TextStyle::Gradient
    }

    fn apply(&self, canvas: &Raster, request: &TextRenderRequest) -> Result<Raster> {
        let mut out = canvas.clone();
        let (x, y) = request.centered_origin();

        let mut pen = x;
        for (i, ch) in request.text.chars().enumerate() {
            let color = PALETTE[i % PALETTE.len()];
            pen += request.font.draw_char(&mut out, pen, y, ch, color, 1.0);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::FontProvider;

    #[test]
    fn first_two_characters_use_magenta_then_cyan() {
        let canvas = Raster::black(200, 100);
        let provider = FontProvider::with_search_paths(Vec::new());
        let request = provider.request("AB", 200, 100);
        let out = GradientText.apply(&canvas, &request).unwrap();

        let advance = request.font.advance('A');
        let (x, _) = request.centered_origin();
        let mut colors_seen = [false, false];
        for (px, py, pixel) in out.as_image().enumerate_pixels() {
            if pixel.0 == PALETTE[0] {
                assert!((px as i64) < x + advance, "magenta at {},{}", px, py);
                colors_seen[0] = true;
            }
            if pixel.0 == PALETTE[1] {
                assert!((px as i64) >= x + advance, "cyan at {},{}", px, py);
                colors_seen[1] = true;
            }
        }
        assert!(colors_seen[0] && colors_seen[1]);
    }

    #[test]
    fn canvas_is_not_mutated() {
        let canvas = Raster::black(120, 60);
        let provider = FontProvider::with_search_paths(Vec::new());
        let request = provider.request("HI", 120, 60);
        let _ = GradientText.apply(&canvas, &request).unwrap();
        assert_eq!(canvas.get_pixel(60, 30), [0, 0, 0]);
    }
}
