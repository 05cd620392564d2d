use crate::{
    effects::{TextEffect, TextStyle},
    error::Result,
    font::TextRenderRequest,
    raster::Raster,
};

/// 7-color rainbow cycle: red through violet
pub const PALETTE: [[u8; 3]; 7] = [
    [255, 0, 0],
    [255, 127, 0],
    [255, 255, 0],
    [0, 255, 0],
    [0, 0, 255],
    [75, 0, 130],
    [148, 0, 211],
];

/// Per-character rainbow cycling, like `gradient` with a 7-color sequence
pub struct RetroText;

impl TextEffect for RetroText {
    fn style(&self) -> TextStyle {
        TextStyle::Retro
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
