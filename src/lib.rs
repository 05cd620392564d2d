//! # y2k-memegen
//!
//! A Y2K-style meme synthesis engine: pixel-level and glyph-level visual
//! transformations that turn a text string and/or a source image into a
//! stylized raster artifact, persisted under a collision-free filename.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rand::{rngs::SmallRng, SeedableRng};
//! use y2k_memegen::{
//!     composer::MemeComposer,
//!     config::Config,
//!     effects::{StylePick, TextStyle},
//!     output::OutputManager,
//! };
//!
//! # fn main() -> anyhow::Result<()> {
//! let composer = MemeComposer::new(Config::default());
//! let mut rng = SmallRng::seed_from_u64(2000);
//!
//! let artifact = composer.generate_text_meme(
//!     "UNDER CONSTRUCTION",
//!     StylePick::Named(TextStyle::Retro),
//!     (800, 600),
//!     &mut rng,
//! )?;
//!
//! let output = OutputManager::new("output")?;
//! let path = output.save(&artifact.raster, "meme")?;
//! println!("saved {:?}", path);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`effects`] - image and text effect engines behind a closed style enum
//! - [`composer`] - background synthesis, effect selection, decoration
//! - [`font`] - per-call font resolution with a built-in bitmap fallback
//! - [`output`] - lowest-free-slot PNG persistence
//! - [`config`] - TOML configuration
//!
//! All randomness flows through generators the caller injects, so seeded
//! runs reproduce the same artifact.

pub mod composer;
pub mod config;
pub mod effects;
pub mod error;
pub mod font;
pub mod output;
pub mod raster;

// Re-export commonly used types for convenience
pub use crate::{
    composer::{MemeArtifact, MemeComposer},
    config::Config,
    effects::{ImageStyle, ImageStyleEngine, StylePick, TextStyle, TextStyleEngine},
    error::{MemeError, Result},
    output::OutputManager,
    raster::Raster,
};
