use crate::effects::{
    image::{ChromeEffect, CrtEffect, HolographicEffect, NeonEffect, PixelateEffect, VhsEffect},
    text::{ChromeText, GlitchText, GradientText, NeonText, RetroText},
    traits::{ImageEffect, ImageStyle, TextEffect, TextStyle},
};

/// Registry mapping each style variant to its pure transform.
///
/// The mapping is total: every [`ImageStyle`] and [`TextStyle`] resolves to
/// exactly one implementation, checked exhaustively by the match arms, so
/// lookups cannot fail.
pub struct EffectRegistry {
    crt: CrtEffect,
    vhs: VhsEffect,
    holographic: HolographicEffect,
    chrome: ChromeEffect,
    neon: NeonEffect,
    pixelate: PixelateEffect,

    gradient_text: GradientText,
    glitch_text: GlitchText,
    neon_text: NeonText,
    chrome_text: ChromeText,
    retro_text: RetroText,
}

impl EffectRegistry {
    pub fn new() -> Self {
        Self {
            crt: CrtEffect,
            vhs: VhsEffect,
            holographic: HolographicEffect,
            chrome: ChromeEffect,
            neon: NeonEffect,
            pixelate: PixelateEffect,
            gradient_text: GradientText,
            glitch_text: GlitchText,
            neon_text: NeonText,
            chrome_text: ChromeText,
            retro_text: RetroText,
        }
    }

    /// Resolve the transform for an image style
    pub fn image_effect(&self, style: ImageStyle) -> &dyn ImageEffect {
        match style {
            ImageStyle::Crt => &self.crt,
            ImageStyle::Vhs => &self.vhs,
            ImageStyle::Holographic => &self.holographic,
            ImageStyle::Chrome => &self.chrome,
            ImageStyle::Neon => &self.neon,
            ImageStyle::Pixelate => &self.pixelate,
        }
    }

    /// Resolve the transform for a text style
    pub fn text_effect(&self, style: TextStyle) -> &dyn TextEffect {
        match style {
            TextStyle::Gradient => &self.gradient_text,
            TextStyle::Glitch => &self.glitch_text,
            TextStyle::Neon => &self.neon_text,
            TextStyle::Chrome => &self.chrome_text,
            TextStyle::Retro => &self.retro_text,
        }
    }
}

impl Default for EffectRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_image_style_resolves_to_itself() {
        let registry = EffectRegistry::new();
        for style in ImageStyle::ALL {
            assert_eq!(registry.image_effect(style).style(), style);
        }
    }

    #[test]
    fn every_text_style_resolves_to_itself() {
        let registry = EffectRegistry::new();
        for style in TextStyle::ALL {
            assert_eq!(registry.text_effect(style).style(), style);
        }
    }
}
