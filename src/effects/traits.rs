use std::fmt;

use rand::{Rng, RngCore};
use tracing::warn;

use crate::{error::Result, font::TextRenderRequest, raster::Raster};

/// The closed set of pixel-level image effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageStyle {
    Crt,
    Vhs,
    Holographic,
    Chrome,
    Neon,
    Pixelate,
}

impl ImageStyle {
    pub const ALL: [ImageStyle; 6] = [
        ImageStyle::Crt,
        ImageStyle::Vhs,
        ImageStyle::Holographic,
        ImageStyle::Chrome,
        ImageStyle::Neon,
        ImageStyle::Pixelate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ImageStyle::Crt => "crt",
            ImageStyle::Vhs => "vhs",
            ImageStyle::Holographic => "holographic",
            ImageStyle::Chrome => "chrome",
            ImageStyle::Neon => "neon",
            ImageStyle::Pixelate => "pixelate",
        }
    }

    /// Map an effect name to a style. Unknown names substitute the
    /// documented default (`crt`) rather than failing.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "crt" => ImageStyle::Crt,
            "vhs" => ImageStyle::Vhs,
            "holographic" => ImageStyle::Holographic,
            "chrome" => ImageStyle::Chrome,
            "neon" => ImageStyle::Neon,
            "pixelate" => ImageStyle::Pixelate,
            other => {
                warn!("Unknown image effect '{}', falling back to crt", other);
                ImageStyle::Crt
            }
        }
    }

    /// Draw one style uniformly at random
    pub fn pick(rng: &mut dyn RngCore) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

impl fmt::Display for ImageStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The closed set of glyph-layer text effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextStyle {
    Gradient,
    Glitch,
    Neon,
    Chrome,
    Retro,
}

impl TextStyle {
    pub const ALL: [TextStyle; 5] = [
        TextStyle::Gradient,
        TextStyle::Glitch,
        TextStyle::Neon,
        TextStyle::Chrome,
        TextStyle::Retro,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TextStyle::Gradient => "gradient",
            TextStyle::Glitch => "glitch",
            TextStyle::Neon => "neon",
            TextStyle::Chrome => "chrome",
            TextStyle::Retro => "retro",
        }
    }

    /// Map an effect name to a style, substituting `gradient` for unknown
    /// names.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "gradient" => TextStyle::Gradient,
            "glitch" => TextStyle::Glitch,
            "neon" => TextStyle::Neon,
            "chrome" => TextStyle::Chrome,
            "retro" => TextStyle::Retro,
            other => {
                warn!("Unknown text effect '{}', falling back to gradient", other);
                TextStyle::Gradient
            }
        }
    }

    /// Draw one style uniformly at random
    pub fn pick(rng: &mut dyn RngCore) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

impl fmt::Display for TextStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An effect selector as it arrives from the caller: a concrete style or
/// a request for a uniformly random one.
#[derive(Debug, Clone, Copy)]
pub enum StylePick<T> {
    Named(T),
    Random,
}

impl StylePick<ImageStyle> {
    pub fn parse(name: &str) -> Self {
        if name.eq_ignore_ascii_case("random") {
            StylePick::Random
        } else {
            StylePick::Named(ImageStyle::from_name(name))
        }
    }

    pub fn resolve(self, rng: &mut dyn RngCore) -> ImageStyle {
        match self {
            StylePick::Named(style) => style,
            StylePick::Random => ImageStyle::pick(rng),
        }
    }
}

impl StylePick<TextStyle> {
    pub fn parse(name: &str) -> Self {
        if name.eq_ignore_ascii_case("random") {
            StylePick::Random
        } else {
            StylePick::Named(TextStyle::from_name(name))
        }
    }

    pub fn resolve(self, rng: &mut dyn RngCore) -> TextStyle {
        match self {
            StylePick::Named(style) => style,
            StylePick::Random => TextStyle::pick(rng),
        }
    }
}

/// A pure pixel-buffer transform.
///
/// Implementations treat the source as read-only and return a freshly
/// allocated raster. Randomness comes only from the injected generator.
pub trait ImageEffect: Send + Sync {
    /// The style this effect implements
    fn style(&self) -> ImageStyle;

    /// Apply the effect to a raster
    fn apply(&self, src: &Raster, rng: &mut dyn RngCore) -> Result<Raster>;
}

/// A glyph-layer compositing transform.
///
/// Implementations render `request.text` onto a copy of the canvas and
/// return it; the input canvas is never written through.
pub trait TextEffect: Send + Sync {
    /// The style this effect implements
    fn style(&self) -> TextStyle;

    /// Render the request onto a copy of the canvas
    fn apply(&self, canvas: &Raster, request: &TextRenderRequest) -> Result<Raster>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::SmallRng, SeedableRng};

    #[test]
    fn unknown_image_name_falls_back_to_crt() {
        assert_eq!(ImageStyle::from_name("sparkle"), ImageStyle::Crt);
        assert_eq!(ImageStyle::from_name("VHS"), ImageStyle::Vhs);
    }

    #[test]
    fn unknown_text_name_falls_back_to_gradient() {
        assert_eq!(TextStyle::from_name("wobble"), TextStyle::Gradient);
        assert_eq!(TextStyle::from_name("Chrome"), TextStyle::Chrome);
    }

    #[test]
    fn random_pick_stays_in_closed_set() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..50 {
            let style = ImageStyle::pick(&mut rng);
            assert!(ImageStyle::ALL.contains(&style));
            let style = TextStyle::pick(&mut rng);
            assert!(TextStyle::ALL.contains(&style));
        }
    }

    #[test]
    fn style_pick_parses_random() {
        let mut rng = SmallRng::seed_from_u64(1);
        let pick = StylePick::<ImageStyle>::parse("random");
        assert!(matches!(pick, StylePick::Random));
        assert!(ImageStyle::ALL.contains(&pick.resolve(&mut rng)));

        let pick = StylePick::<TextStyle>::parse("retro");
        assert!(matches!(pick, StylePick::Named(TextStyle::Retro)));
    }
}
