//! Error types for palette computation and configuration.
//!
//! [`PaletteError`] is the single error type returned by every fallible
//! operation in this crate.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for palette, mode and configuration operations.
#[derive(Debug, Error)]
pub enum PaletteError {
    /// A color string could not be parsed.
    #[error("invalid color '{value}': {reason}")]
    InvalidColor {
        /// The offending input.
        value: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A luminance target outside `0.0..=1.0`.
    #[error("luminance must be within 0.0..=1.0, got {0}")]
    InvalidLuminance(f64),

    /// A matcher precision that is not a positive finite number.
    #[error("precision must be a positive finite number, got {0}")]
    InvalidPrecision(f64),

    /// An unrecognized mode name.
    #[error("unknown color mode '{0}' (expected light, dark or system)")]
    InvalidMode(String),

    /// Configuration could not be parsed or failed validation.
    #[error("invalid configuration{}: {message}", location(.path))]
    Config {
        /// Source file, when loaded from disk.
        path: Option<PathBuf>,
        /// Description of the problem.
        message: String,
    },

    /// I/O error (e.g., reading a config file).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn location(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" in {}", p.display()))
        .unwrap_or_default()
}

impl PaletteError {
    pub(crate) fn invalid_color(value: &str, reason: impl Into<String>) -> Self {
        PaletteError::InvalidColor {
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<serde_yaml::Error> for PaletteError {
    fn from(err: serde_yaml::Error) -> Self {
        PaletteError::Config {
            path: None,
            message: err.to_string(),
        }
    }
}
