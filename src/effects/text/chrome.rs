use crate::{
    effects::{TextEffect, TextStyle},
    error::Result,
    font::TextRenderRequest,
    raster::Raster,
};

const SHADOW_OFFSET: i64 = 5;
const HIGHLIGHT_ALPHA: f32 = 100.0 / 255.0;

/// Chrome lettering: black drop shadow, a vertical gray-to-blue gradient
/// body, and a faint white highlight
pub struct ChromeText;

impl TextEffect for ChromeText {
    fn style(&self) -> TextStyle {
        TextStyle::Chrome
    }

    fn apply(&self, canvas: &Raster, request: &TextRenderRequest) -> Result<Raster> {
        let mut out = canvas.clone();
        let (x, y) = request.centered_origin();
        let (_, text_height) = request.font.measure(&request.text);

        request.font.draw(
            &mut out,
            x + SHADOW_OFFSET,
            y + SHADOW_OFFSET,
            &request.text,
            [0, 0, 0],
            1.0,
        );

        // luminance ramps 128 -> 255 top to bottom, with a blue-tinted third
        // channel; each band re-renders the string two pixels lower
        let mut band = 0;
        while band < text_height.max(1) {
            let shade = (128.0 + 127.0 * band as f32 / text_height.max(1) as f32) as u8;
            let color = [shade, shade, shade.saturating_add(50)];
            request
                .font
                .draw(&mut out, x, y + band, &request.text, color, 1.0);
            band += 2;
        }

        request.font.draw(
            &mut out,
            x - 1,
            y - 1,
            &request.text,
            [255, 255, 255],
            HIGHLIGHT_ALPHA,
        );
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::FontProvider;

    #[test]
    fn shadow_and_body_are_both_drawn() {
        let canvas = Raster::filled(200, 100, [20, 20, 20]);
        let provider = FontProvider::with_search_paths(Vec::new());
        let request = provider.request("M", 200, 100);
        let out = ChromeText.apply(&canvas, &request).unwrap();

        let mut black = 0usize;
        let mut bright = 0usize;
        for (_, _, px) in out.as_image().enumerate_pixels() {
            if px.0 == [0, 0, 0] {
                black += 1;
            }
            if px.0[0] >= 128 && px.0[2] > px.0[0] {
                bright += 1;
            }
        }
        assert!(black > 0, "shadow missing");
        assert!(bright > 0, "gradient body missing");
    }
}
