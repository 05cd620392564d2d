use crate::{
    effects::{TextEffect, TextStyle},
    error::Result,
    font::TextRenderRequest,
    raster::Raster,
};

/// Per-layer pixel offsets and their channel colors
const LAYERS: [((i64, i64), [u8; 3]); 3] = [
    ((0, -3), [255, 0, 0]),
    ((3, 0), [0, 255, 0]),
    ((-3, 3), [0, 0, 255]),
];

/// RGB channel-split illusion: the string rendered three times in red,
/// green, and blue at small offsets
pub struct GlitchText;

impl TextEffect for GlitchText {
    fn style(&self) -> TextStyle {
        TextStyle::Glitch
    }

    fn apply(&self, canvas: &Raster, request: &TextRenderRequest) -> Result<Raster> {
        let mut out = canvas.clone();
        let (x, y) = request.centered_origin();

        for ((dx, dy), color) in LAYERS {
            request
                .font
                .draw(&mut out, x + dx, y + dy, &request.text, color, 1.0);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::FontProvider;

    #[test]
    fn all_three_channel_layers_appear() {
        let canvas = Raster::black(160, 80);
        let provider = FontProvider::with_search_paths(Vec::new());
        let request = provider.request("X", 160, 80);
        let out = GlitchText.apply(&canvas, &request).unwrap();

        let mut red = false;
        let mut green = false;
        let mut blue = false;
        for (_, _, px) in out.as_image().enumerate_pixels() {
            red |= px.0 == [255, 0, 0];
            green |= px.0 == [0, 255, 0];
            blue |= px.0 == [0, 0, 255];
        }
        // layers are drawn in order, so blue always survives on top and
        // red/green show wherever the offsets do not overlap
        assert!(red && green && blue);
    }
}
