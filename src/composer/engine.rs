use std::path::Path;

use image::imageops::{self, FilterType};
use image::Rgb;
use imageproc::drawing::draw_filled_circle_mut;
use rand::{Rng, RngCore};
use tracing::{debug, info};

use crate::{
    config::{ComposeConfig, Config},
    effects::{ImageStyle, ImageStyleEngine, StylePick, TextStyle, TextStyleEngine},
    error::{ImageError, MemeError, Result},
    font::FontProvider,
    raster::Raster,
};

use super::MemeArtifact;

/// Y2K-era placeholder phrases for fully random memes
pub const PHRASES: [&str; 20] = [
    "UNDER CONSTRUCTION",
    "WELCOME TO MY WEBSITE",
    "BEST VIEWED IN NETSCAPE",
    "Y2K AESTHETIC",
    "CYBER DREAMS 2000",
    "POWERED BY GEOCITIES",
    "ENTER IF YOU DARE",
    "LOADING... PLEASE WAIT",
    "404 PAGE NOT FOUND",
    "GUESTBOOK - SIGN IN!",
    "WEBMASTER",
    "HIT COUNTER",
    "EMAIL ME",
    "NEW! UPDATED!",
    "COOL SITE AWARD",
    "MIDI MUSIC PLAYING",
    "FRAMES VERSION",
    "TEXT ONLY VERSION",
    "OPTIMIZED FOR 800x600",
    "MILLENNIUM BUG FREE",
];

/// Canvas sizes for fully random memes
pub const SIZES: [(u32, u32); 3] = [(800, 600), (640, 480), (1024, 768)];

const GRID_COLOR: [u8; 3] = [255, 0, 255];
const GRID_ALPHA: f32 = 30.0 / 255.0;
const DOT_COLORS: [[u8; 3]; 3] = [[255, 0, 255], [0, 255, 255], [255, 255, 0]];
const CAPTION_COLOR: [u8; 3] = [255, 255, 0];
const CAPTION_SHADOW_OFFSET: i64 = 3;

/// Orchestrates background synthesis, effect selection, text overlay, and
/// decoration into finished meme artifacts.
///
/// The pipeline is synchronous and pure apart from the injected random
/// generator and the image-load boundary: every call runs to completion on
/// values passed to it.
pub struct MemeComposer {
    compose: ComposeConfig,
    image_engine: ImageStyleEngine,
    text_engine: TextStyleEngine,
    fonts: FontProvider,
}

impl MemeComposer {
    pub fn new(config: Config) -> Self {
        let fonts = if config.font.search_paths.is_empty() {
            FontProvider::default()
        } else {
            FontProvider::with_extra_paths(config.font.search_paths)
        };
        Self {
            compose: config.compose,
            image_engine: ImageStyleEngine::new(),
            text_engine: TextStyleEngine::with_fonts(fonts.clone()),
            fonts,
        }
    }

    /// Generate a text meme: gradient background, grid, styled text, dots
    pub fn generate_text_meme(
        &self,
        text: &str,
        style: StylePick<TextStyle>,
        size: (u32, u32),
        rng: &mut dyn RngCore,
    ) -> Result<MemeArtifact> {
        let style = style.resolve(rng);
        info!("Generating {}x{} text meme with '{}' effect", size.0, size.1, style);

        let canvas = self.background(size);
        let mut canvas = self.text_engine.apply(&canvas, text, style)?;
        self.decorate(&mut canvas, rng);

        Ok(MemeArtifact {
            raster: canvas,
            effect: style.as_str(),
            text_overlaid: !text.is_empty(),
        })
    }

    /// Generate an image meme from a file on disk
    pub fn generate_image_meme<P: AsRef<Path>>(
        &self,
        path: P,
        text: &str,
        effect: StylePick<ImageStyle>,
        rng: &mut dyn RngCore,
    ) -> Result<MemeArtifact> {
        let path = path.as_ref();
        let loaded = image::open(path).map_err(|e| {
            debug!("Image load failed: {}", e);
            ImageError::LoadFailed {
                path: path.display().to_string(),
            }
        })?;
        self.compose_image_meme(Raster::new(loaded.to_rgb8()), text, effect, rng)
    }

    /// Generate an image meme from an in-memory encoded image
    pub fn generate_image_meme_from_bytes(
        &self,
        bytes: &[u8],
        text: &str,
        effect: StylePick<ImageStyle>,
        rng: &mut dyn RngCore,
    ) -> Result<MemeArtifact> {
        let loaded = image::load_from_memory(bytes).map_err(ImageError::DecodeFailed)?;
        self.compose_image_meme(Raster::new(loaded.to_rgb8()), text, effect, rng)
    }

    /// Generate a completely random meme: random phrase, size, and style
    pub fn generate_random_meme(&self, rng: &mut dyn RngCore) -> Result<MemeArtifact> {
        let phrase = PHRASES[rng.gen_range(0..PHRASES.len())];
        let size = SIZES[rng.gen_range(0..SIZES.len())];
        self.generate_text_meme(phrase, StylePick::Random, size, rng)
    }

    fn compose_image_meme(
        &self,
        raster: Raster,
        text: &str,
        effect: StylePick<ImageStyle>,
        rng: &mut dyn RngCore,
    ) -> Result<MemeArtifact> {
        if raster.is_degenerate() {
            return Err(MemeError::invalid_image("zero-dimension source image"));
        }

        let raster = self.fit_to_bounds(raster);
        let effect = effect.resolve(rng);
        info!("Generating image meme with '{}' effect", effect);

        let mut styled = self.image_engine.apply(&raster, effect, rng)?;
        if !text.is_empty() {
            self.overlay_caption(&mut styled, text);
        }

        Ok(MemeArtifact {
            raster: styled,
            effect: effect.as_str(),
            text_overlaid: !text.is_empty(),
        })
    }

    /// Rescale proportionally so the longest edge is exactly
    /// `max_dimension`, leaving smaller images untouched
    fn fit_to_bounds(&self, raster: Raster) -> Raster {
        let (w, h) = raster.dimensions();
        let longest = w.max(h);
        let max = self.compose.max_dimension;
        if longest <= max {
            return raster;
        }

        let (new_w, new_h) = if w >= h {
            (max, ((h as u64 * max as u64) / w as u64).max(1) as u32)
        } else {
            (((w as u64 * max as u64) / h as u64).max(1) as u32, max)
        };
        debug!("Rescaling {}x{} -> {}x{}", w, h, new_w, new_h);
        Raster::new(imageops::resize(
            raster.as_image(),
            new_w,
            new_h,
            FilterType::Lanczos3,
        ))
    }

    /// Diagonal two-axis color gradient overlaid with a magenta grid
    fn background(&self, (w, h): (u32, u32)) -> Raster {
        let mut canvas = Raster::black(w, h);
        let span = (w + h).max(1) as f32;
        for y in 0..h {
            for x in 0..w {
                let t = (x + y) as f32 / span;
                canvas.set_pixel(
                    x,
                    y,
                    [
                        (128.0 + 127.0 * t) as u8,
                        (128.0 * t) as u8,
                        (128.0 - 128.0 * t).max(0.0) as u8,
                    ],
                );
            }
        }

        let spacing = self.compose.grid_spacing as usize;
        for x in (0..w).step_by(spacing) {
            for y in 0..h {
                canvas.blend_pixel(x as i64, y as i64, GRID_COLOR, GRID_ALPHA);
            }
        }
        for y in (0..h).step_by(spacing) {
            for x in 0..w {
                canvas.blend_pixel(x as i64, y as i64, GRID_COLOR, GRID_ALPHA);
            }
        }
        canvas
    }

    /// Scatter colored dots over the canvas
    fn decorate(&self, canvas: &mut Raster, rng: &mut dyn RngCore) {
        let (w, h) = canvas.dimensions();
        for _ in 0..self.compose.decoration_count {
            let x = rng.gen_range(0..w) as i32;
            let y = rng.gen_range(0..h) as i32;
            let radius = rng.gen_range(2..=5);
            let color = DOT_COLORS[rng.gen_range(0..DOT_COLORS.len())];
            draw_filled_circle_mut(canvas.as_image_mut(), (x, y), radius, Rgb(color));
        }
    }

    /// Bottom-centered yellow caption with a black drop shadow
    fn overlay_caption(&self, canvas: &mut Raster, text: &str) {
        let (w, h) = canvas.dimensions();
        let px = (h as f32 * 0.1).max(1.0);
        let request = self.fonts.request_with_px(text, (w, h), px);

        let (tw, th) = request.font.measure(text);
        let x = (w as i64 - tw) / 2;
        let y = h as i64 - th - self.compose.text_margin as i64;

        request.font.draw(
            canvas,
            x + CAPTION_SHADOW_OFFSET,
            y + CAPTION_SHADOW_OFFSET,
            text,
            [0, 0, 0],
            1.0,
        );
        request.font.draw(canvas, x, y, text, CAPTION_COLOR, 1.0);
    }
}

impl Default for MemeComposer {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::SmallRng, SeedableRng};
    use tempfile::tempdir;

    fn composer() -> MemeComposer {
        MemeComposer::default()
    }

    #[test]
    fn text_meme_matches_requested_size() {
        let mut rng = SmallRng::seed_from_u64(5);
        let artifact = composer()
            .generate_text_meme("HELLO", StylePick::Named(TextStyle::Gradient), (320, 240), &mut rng)
            .unwrap();
        assert_eq!(artifact.raster.dimensions(), (320, 240));
        assert_eq!(artifact.effect, "gradient");
        assert!(artifact.text_overlaid);
    }

    #[test]
    fn empty_text_meme_reports_no_overlay() {
        let mut rng = SmallRng::seed_from_u64(5);
        let artifact = composer()
            .generate_text_meme("", StylePick::Named(TextStyle::Neon), (100, 80), &mut rng)
            .unwrap();
        assert!(!artifact.text_overlaid);
    }

    #[test]
    fn random_meme_draws_from_fixed_sets() {
        let composer = composer();
        for seed in 0..12 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let artifact = composer.generate_random_meme(&mut rng).unwrap();
            assert!(SIZES.contains(&artifact.raster.dimensions()));
            assert!(TextStyle::ALL.iter().any(|s| s.as_str() == artifact.effect));
        }
        assert_eq!(PHRASES.len(), 20);
    }

    #[test]
    fn oversized_image_is_rescaled_to_longest_edge() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("big.png");
        Raster::filled(2000, 1000, [120, 90, 60])
            .as_image()
            .save(&path)
            .unwrap();

        let mut rng = SmallRng::seed_from_u64(2);
        let artifact = composer()
            .generate_image_meme(&path, "", StylePick::Named(ImageStyle::Pixelate), &mut rng)
            .unwrap();
        assert_eq!(artifact.raster.dimensions(), (1200, 600));
        assert_eq!(artifact.effect, "pixelate");
    }

    #[test]
    fn small_image_keeps_dimensions() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("small.png");
        Raster::filled(300, 200, [10, 20, 30])
            .as_image()
            .save(&path)
            .unwrap();

        let mut rng = SmallRng::seed_from_u64(2);
        let artifact = composer()
            .generate_image_meme(&path, "LOL", StylePick::Named(ImageStyle::Crt), &mut rng)
            .unwrap();
        assert_eq!(artifact.raster.dimensions(), (300, 200));
        assert!(artifact.text_overlaid);
    }

    #[test]
    fn unreadable_image_surfaces_an_error() {
        let mut rng = SmallRng::seed_from_u64(0);
        let result = composer().generate_image_meme(
            "/nonexistent/missing.png",
            "",
            StylePick::Random,
            &mut rng,
        );
        assert!(result.is_err());
    }

    #[test]
    fn corrupt_bytes_surface_an_error() {
        let mut rng = SmallRng::seed_from_u64(0);
        let result = composer().generate_image_meme_from_bytes(
            b"definitely not an image",
            "",
            StylePick::Random,
            &mut rng,
        );
        assert!(result.is_err());
    }

    #[test]
    fn background_gradient_is_diagonal() {
        let composer = composer();
        let canvas = composer.background((200, 200));
        // red ramps up along the diagonal, blue ramps down
        let near = canvas.get_pixel(10, 10);
        let far = canvas.get_pixel(190, 190);
        assert!(far[0] > near[0]);
        assert!(far[2] < near[2]);
    }
}
