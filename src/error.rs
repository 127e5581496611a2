//! Error types for table rendering.
//!
//! Rendering itself never fails; the only fallible operation is strict
//! theme palette parsing.

use thiserror::Error;

/// Error type for theme palette parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    /// Input palette was empty.
    #[error("empty palette")]
    EmptyPalette,

    /// Palette had the wrong number of glyphs.
    #[error("invalid palette length: {0} (expected 12)")]
    InvalidLength(usize),
}

/// Result type alias for theme operations.
pub type ThemeResult<T> = std::result::Result<T, ThemeError>;
