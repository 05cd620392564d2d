//! Meme composition.
//!
//! [`MemeComposer`] wires the two effect engines, the font provider, and the
//! decoration passes into the three generation entry points; the result of
//! each is a [`MemeArtifact`] carrying the finished raster and its
//! provenance.

mod engine;

pub use engine::{MemeComposer, PHRASES, SIZES};

use crate::raster::Raster;

/// A finished meme plus provenance
pub struct MemeArtifact {
    /// The final raster
    pub raster: Raster,

    /// Name of the effect that was applied
    pub effect: &'static str,

    /// Whether any text was overlaid
    pub text_overlaid: bool,
}
