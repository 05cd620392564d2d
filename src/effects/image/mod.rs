//! Pixel-level image effects.
//!
//! Each effect is a pure transform from one raster to a new one; the only
//! side input is the injected random generator.

mod chrome;
mod crt;
mod holographic;
mod neon;
mod pixelate;
mod vhs;

pub use chrome::ChromeEffect;
pub use crt::CrtEffect;
pub use holographic::HolographicEffect;
pub use neon::NeonEffect;
pub use pixelate::PixelateEffect;
pub use vhs::VhsEffect;
