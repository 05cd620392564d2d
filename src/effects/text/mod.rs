//! Glyph-layer text effects.
//!
//! Each effect renders a [`TextRenderRequest`](crate::font::TextRenderRequest)
//! onto a copy of the canvas, never mutating the caller's buffer.

mod chrome;
mod glitch;
mod gradient;
mod neon;
mod retro;

pub use chrome::ChromeText;
pub use glitch::GlitchText;
pub use gradient::GradientText;
pub use neon::NeonText;
pub use retro::RetroText;

pub use gradient::PALETTE as GRADIENT_PALETTE;
pub use retro::PALETTE as RAINBOW_PALETTE;
