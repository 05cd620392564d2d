use crate::{
    effects::{TextEffect, TextStyle},
    error::Result,
    font::TextRenderRequest,
    raster::Raster,
};

const GLOW_COLOR: [u8; 3] = [255, 0, 255];

/// Neon glow: five translucent magenta passes under a solid white core
pub struct NeonText;

impl TextEffect for NeonText {
    fn style(&self) -> TextStyle {
        TextStyle::Neon
    }

    fn apply(&self, canvas: &Raster, request: &TextRenderRequest) -> Result<Raster> {
        let mut out = canvas.clone();
        let (x, y) = request.centered_origin();

        // alpha walks 10/10, 8/10 ... 2/10 across the glow passes
        for pass in (1..=5).rev() {
            let alpha = (pass * 2) as f32 / 10.0;
            request
                .font
                .draw(&mut out, x, y, &request.text, GLOW_COLOR, alpha);
        }
        request
            .font
            .draw(&mut out, x, y, &request.text, [255, 255, 255], 1.0);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::FontProvider;

    #[test]
    fn core_glyphs_end_up_white() {
        let canvas = Raster::black(160, 80);
        let provider = FontProvider::with_search_paths(Vec::new());
        let request = provider.request("O", 160, 80);
        let out = NeonText.apply(&canvas, &request).unwrap();

        let white = out
            .as_image()
            .pixels()
            .filter(|px| px.0 == [255, 255, 255])
            .count();
        assert!(white > 0, "expected solid white core pixels");
    }

    #[test]
    fn empty_canvas_region_untouched() {
        let canvas = Raster::filled(160, 80, [5, 5, 5]);
        let provider = FontProvider::with_search_paths(Vec::new());
        let request = provider.request("O", 160, 80);
        let out = NeonText.apply(&canvas, &request).unwrap();
        assert_eq!(out.get_pixel(0, 0), [5, 5, 5]);
    }
}
