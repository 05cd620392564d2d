//! # Y2K Effect System
//!
//! Pixel-level and glyph-level transforms behind two engine facades:
//!
//! - [`ImageStyleEngine`] applies one of six raster effects
//!   (`crt`, `vhs`, `holographic`, `chrome`, `neon`, `pixelate`)
//! - [`TextStyleEngine`] composites one of five text effects
//!   (`gradient`, `glitch`, `neon`, `chrome`, `retro`) onto a canvas
//!
//! Every transform is pure: it borrows its input and returns a freshly
//! allocated raster. Randomized effects draw only from the generator the
//! caller injects, so seeded runs are reproducible.

pub mod adjust;
pub mod image;
pub mod registry;
pub mod text;
pub mod traits;

pub use registry::EffectRegistry;
pub use traits::{ImageEffect, ImageStyle, StylePick, TextEffect, TextStyle};

use rand::RngCore;
use tracing::debug;

use crate::{
    error::{MemeError, Result},
    font::FontProvider,
    raster::Raster,
};

/// Applies pixel-buffer transforms to loaded rasters
pub struct ImageStyleEngine {
    registry: EffectRegistry,
}

impl ImageStyleEngine {
    pub fn new() -> Self {
        Self {
            registry: EffectRegistry::new(),
        }
    }

    /// Apply an effect, returning a new raster.
    ///
    /// Zero-dimension inputs are rejected with `InvalidImage`.
    pub fn apply(&self, src: &Raster, style: ImageStyle, rng: &mut dyn RngCore) -> Result<Raster> {
        if src.is_degenerate() {
            return Err(MemeError::invalid_image("zero-dimension raster"));
        }
        debug!("Applying image effect '{}'", style);
        self.registry.image_effect(style).apply(src, rng)
    }

    /// Apply an effect by name; unknown names fall back to `crt`
    pub fn apply_named(&self, src: &Raster, name: &str, rng: &mut dyn RngCore) -> Result<Raster> {
        self.apply(src, ImageStyle::from_name(name), rng)
    }
}

impl Default for ImageStyleEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Composites glyph-layer effects onto canvases
pub struct TextStyleEngine {
    registry: EffectRegistry,
    fonts: FontProvider,
}

impl TextStyleEngine {
    pub fn new() -> Self {
        Self::with_fonts(FontProvider::default())
    }

    pub fn with_fonts(fonts: FontProvider) -> Self {
        Self {
            registry: EffectRegistry::new(),
            fonts,
        }
    }

    /// Render `text` onto a copy of the canvas with the given effect.
    ///
    /// An empty string is a no-op returning the canvas unchanged. The font
    /// is resolved fresh for this call, falling back to the built-in
    /// bitmap face if no system font is available.
    pub fn apply(&self, canvas: &Raster, text: &str, style: TextStyle) -> Result<Raster> {
        if canvas.is_degenerate() {
            return Err(MemeError::invalid_image("zero-dimension canvas"));
        }
        if text.is_empty() {
            return Ok(canvas.clone());
        }
        debug!("Applying text effect '{}' to {:?}", style, text);
        let request = self.fonts.request(text, canvas.width(), canvas.height());
        self.registry.text_effect(style).apply(canvas, &request)
    }

    /// Apply an effect by name; unknown names fall back to `gradient`
    pub fn apply_named(&self, canvas: &Raster, text: &str, name: &str) -> Result<Raster> {
        self.apply(canvas, text, TextStyle::from_name(name))
    }
}

impl Default for TextStyleEngine {
    fn default() -> Self {
        Self::new()
    }
}
