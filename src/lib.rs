//! glyphforge
//!
//! Procedural writing systems: a seed becomes a style, the style shapes 26
//! center-line skeletons, and the skeletons are expanded into filled
//! outlines ready for SVG output.
//!
//! ```no_run
//! let alphabet = glyphforge::generate(42)?;
//! assert_eq!(alphabet.len(), 26);
//! # Ok::<(), glyphforge::GenerateError>(())
//! ```

pub mod alphabet;
pub mod bezier;
pub mod core;
pub mod error;
pub mod expansion;
pub mod export;
pub mod geometry;
pub mod glyph;
pub mod logging;
pub mod rng;
pub mod skeleton;
pub mod style;
#[cfg(test)]
mod tests;
pub mod validation;

pub use alphabet::{generate, Alphabet, AlphabetGenerator};
pub use crate::core::settings::Settings;
pub use error::{ConfigError, GenerateError, StyleError};
pub use glyph::{Decoration, DecorationKind, Glyph, Outline, Skeleton, Stroke};
pub use rng::SeededRng;
pub use style::AlphabetStyle;
