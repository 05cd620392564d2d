//! Font resolution and glyph rendering.
//!
//! A [`FontProvider`] resolves a font once per render call: it tries the
//! configured system font paths and silently falls back to the built-in
//! bitmap face if none can be loaded. The resolved font is handed to text
//! effects inside a [`TextRenderRequest`], so no process-wide font state
//! exists.

pub mod bitmap;

use std::path::PathBuf;

use ab_glyph::{point, Font, FontVec, PxScale, ScaleFont};
use tracing::debug;

use crate::raster::Raster;

/// Default search locations for a scalable sans-serif face
const DEFAULT_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/Library/Fonts/Arial.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Resolves fonts for text rendering
#[derive(Clone, Debug)]
pub struct FontProvider {
    search_paths: Vec<PathBuf>,
}

impl Default for FontProvider {
    fn default() -> Self {
        Self {
            search_paths: DEFAULT_FONT_PATHS.iter().map(PathBuf::from).collect(),
        }
    }
}

impl FontProvider {
    /// Create a provider with explicit search paths
    pub fn with_search_paths(search_paths: Vec<PathBuf>) -> Self {
        Self { search_paths }
    }

    /// Create a provider that tries `extra` paths before the built-in ones
    pub fn with_extra_paths(extra: Vec<PathBuf>) -> Self {
        let mut search_paths = extra;
        search_paths.extend(DEFAULT_FONT_PATHS.iter().map(PathBuf::from));
        Self { search_paths }
    }

    /// Resolve a font at the given pixel size.
    ///
    /// Font loading failure is non-fatal: if no configured path yields a
    /// usable scalable font, the built-in bitmap face is substituted.
    pub fn resolve(&self, px: f32) -> ResolvedFont {
        for path in &self.search_paths {
            let Ok(bytes) = std::fs::read(path) else {
                continue;
            };
            match FontVec::try_from_vec(bytes) {
                Ok(font) => {
                    debug!("Resolved scalable font: {:?} at {:.0}px", path, px);
                    return ResolvedFont {
                        face: FontFace::Scalable(font),
                        px,
                    };
                }
                Err(e) => debug!("Unusable font file {:?}: {}", path, e),
            }
        }
        debug!("No scalable font available, using built-in bitmap face");
        ResolvedFont {
            face: FontFace::Bitmap,
            px,
        }
    }

    /// Build a render request for text on a canvas of the given size,
    /// deriving the font size as `min(width, height) / 8`.
    pub fn request(&self, text: &str, width: u32, height: u32) -> TextRenderRequest {
        let px = (width.min(height) / 8).max(1) as f32;
        self.request_with_px(text, (width, height), px)
    }

    /// Build a render request at an explicit pixel size
    pub fn request_with_px(&self, text: &str, canvas: (u32, u32), px: f32) -> TextRenderRequest {
        TextRenderRequest {
            text: text.to_string(),
            canvas,
            font: self.resolve(px),
        }
    }
}

/// The face backing a resolved font
pub enum FontFace {
    /// A loaded system font rendered at the requested size
    Scalable(FontVec),
    /// The fixed-size built-in face
    Bitmap,
}

/// A font resolved for one render call
pub struct ResolvedFont {
    face: FontFace,
    px: f32,
}

impl ResolvedFont {
    /// True if the built-in bitmap fallback is in use
    pub fn is_fallback(&self) -> bool {
        matches!(self.face, FontFace::Bitmap)
    }

    /// Measure the bounding box of a single-line string
    pub fn measure(&self, text: &str) -> (i64, i64) {
        match &self.face {
            FontFace::Scalable(font) => {
                let scaled = font.as_scaled(PxScale::from(self.px));
                let width: f32 = text
                    .chars()
                    .map(|ch| scaled.h_advance(font.glyph_id(ch)))
                    .sum();
                let height = scaled.ascent() - scaled.descent();
                (width.ceil() as i64, height.ceil() as i64)
            }
            FontFace::Bitmap => (
                text.chars().count() as i64 * bitmap::ADVANCE,
                bitmap::LINE_HEIGHT,
            ),
        }
    }

    /// Horizontal advance of a single character
    pub fn advance(&self, ch: char) -> i64 {
        match &self.face {
            FontFace::Scalable(font) => {
                let scaled = font.as_scaled(PxScale::from(self.px));
                scaled.h_advance(font.glyph_id(ch)).ceil() as i64
            }
            FontFace::Bitmap => bitmap::ADVANCE,
        }
    }

    /// Draw a string with its top-left corner at (x, y), blending `color`
    /// at the given alpha. Pixels falling outside the raster are clipped.
    pub fn draw(&self, raster: &mut Raster, x: i64, y: i64, text: &str, color: [u8; 3], alpha: f32) {
        let mut pen = x;
        for ch in text.chars() {
            pen += self.draw_char(raster, pen, y, ch, color, alpha);
        }
    }

    /// Draw a single character, returning its advance
    pub fn draw_char(
        &self,
        raster: &mut Raster,
        x: i64,
        y: i64,
        ch: char,
        color: [u8; 3],
        alpha: f32,
    ) -> i64 {
        match &self.face {
            FontFace::Scalable(font) => {
                let scale = PxScale::from(self.px);
                let scaled = font.as_scaled(scale);
                let id = font.glyph_id(ch);
                let baseline = y as f32 + scaled.ascent();
                let glyph = id.with_scale_and_position(scale, point(x as f32, baseline));
                if let Some(outlined) = font.outline_glyph(glyph) {
                    let bounds = outlined.px_bounds();
                    outlined.draw(|gx, gy, coverage| {
                        raster.blend_pixel(
                            bounds.min.x as i64 + gx as i64,
                            bounds.min.y as i64 + gy as i64,
                            color,
                            coverage * alpha,
                        );
                    });
                }
                scaled.h_advance(id).ceil() as i64
            }
            FontFace::Bitmap => {
                let columns = bitmap::glyph(ch);
                for (col, bits) in columns.iter().enumerate() {
                    for row in 0..bitmap::GLYPH_HEIGHT {
                        if bits & (1 << row) == 0 {
                            continue;
                        }
                        let px = x + col as i64 * bitmap::SCALE;
                        let py = y + row as i64 * bitmap::SCALE;
                        for dy in 0..bitmap::SCALE {
                            for dx in 0..bitmap::SCALE {
                                raster.blend_pixel(px + dx, py + dy, color, alpha);
                            }
                        }
                    }
                }
                bitmap::ADVANCE
            }
        }
    }
}

/// Everything a text effect needs to render one string: the text, the
/// target canvas size, and the font resolved for this call.
pub struct TextRenderRequest {
    pub text: String,
    pub canvas: (u32, u32),
    pub font: ResolvedFont,
}

impl TextRenderRequest {
    /// Top-left corner that centers the text on the canvas
    pub fn centered_origin(&self) -> (i64, i64) {
        let (tw, th) = self.font.measure(&self.text);
        let (w, h) = self.canvas;
        ((w as i64 - tw) / 2, (h as i64 - th) / 2)
    }
}
