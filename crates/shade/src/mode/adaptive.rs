//! Color mode types and OS color-scheme detection.
//!
//! [`ModePreference`] is what a user picks (light, dark, or follow the
//! system). [`ColorMode`] is what actually gets rendered. Collapsing the
//! former into the latter needs the OS preference, which [`detect_scheme`]
//! provides.
//!
//! Detection goes through a process-wide detector so tests (and embedders
//! with their own notion of "system") can override it:
//!
//! ```rust
//! use shade::{detect_scheme, set_scheme_detector, ColorMode};
//!
//! set_scheme_detector(|| Some(ColorMode::Dark));
//! assert_eq!(detect_scheme(), Some(ColorMode::Dark));
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::Mutex;

use dark_light::Mode as OsThemeMode;
use log::debug;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::PaletteError;

/// The resolved, renderable color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Light background, dark text.
    Light,
    /// Dark background, light text.
    Dark,
}

impl ColorMode {
    /// Maps a "dark is preferred" flag to a mode.
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            ColorMode::Dark
        } else {
            ColorMode::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == ColorMode::Dark
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorMode {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ColorMode::Light),
            "dark" => Ok(ColorMode::Dark),
            _ => Err(PaletteError::InvalidMode(s.to_string())),
        }
    }
}

/// A user-facing mode setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModePreference {
    /// Always light.
    Light,
    /// Always dark.
    Dark,
    /// Follow the platform's color-scheme preference.
    #[default]
    System,
}

impl ModePreference {
    pub fn as_str(self) -> &'static str {
        match self {
            ModePreference::Light => "light",
            ModePreference::Dark => "dark",
            ModePreference::System => "system",
        }
    }
}

impl fmt::Display for ModePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModePreference {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ModePreference::Light),
            "dark" => Ok(ModePreference::Dark),
            "system" => Ok(ModePreference::System),
            _ => Err(PaletteError::InvalidMode(s.to_string())),
        }
    }
}

/// Returns the OS color scheme, or `None` when it cannot be determined.
pub type SchemeDetector = fn() -> Option<ColorMode>;

static SCHEME_DETECTOR: Lazy<Mutex<SchemeDetector>> =
    Lazy::new(|| Mutex::new(os_scheme_detector));

/// Overrides the detector used to query the OS color scheme.
///
/// Useful for testing, or to force a mode regardless of the OS setting.
pub fn set_scheme_detector(detector: SchemeDetector) {
    let mut guard = SCHEME_DETECTOR
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = detector;
}

/// Restores the default, OS-backed detector.
pub fn reset_scheme_detector() {
    set_scheme_detector(os_scheme_detector);
}

/// Queries the current detector for the OS color scheme.
///
/// Returns `None` if the platform has no preference or it cannot be read.
pub fn detect_scheme() -> Option<ColorMode> {
    let detector = *SCHEME_DETECTOR
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    detector()
}

fn os_scheme_detector() -> Option<ColorMode> {
    match dark_light::detect() {
        Ok(OsThemeMode::Dark) => Some(ColorMode::Dark),
        Ok(OsThemeMode::Light) => Some(ColorMode::Light),
        Ok(OsThemeMode::Unspecified) => None,
        Err(err) => {
            debug!("OS color scheme unavailable: {}", err);
            None
        }
    }
}
