//! Light/dark mode resolution.
//!
//! A user setting is tri-state ([`ModePreference`]): light, dark, or follow
//! the system. Rendering needs a binary [`ColorMode`]. [`effective_color_mode`]
//! collapses the one into the other, asking the [`Platform`] only when the
//! preference is `System`.
//!
//! ```rust
//! use shade::{effective_color_mode, ColorMode, Headless, ModePreference};
//!
//! assert_eq!(effective_color_mode(ModePreference::Dark, &Headless), ColorMode::Dark);
//! // No media query available: system falls back to light.
//! assert_eq!(effective_color_mode(ModePreference::System, &Headless), ColorMode::Light);
//! ```

mod adaptive;
mod platform;

pub use adaptive::{
    detect_scheme, reset_scheme_detector, set_scheme_detector, ColorMode, ModePreference,
    SchemeDetector,
};
pub use platform::{Headless, Platform, StyleTarget, SystemPlatform};

/// Whether the platform reports a dark color-scheme preference.
///
/// Never fails: a platform without the capability reports `false`.
pub fn is_dark_scheme_preferred(platform: &dyn Platform) -> bool {
    platform.prefers_dark_scheme().unwrap_or(false)
}

/// Resolves a user preference to the mode that should be rendered.
pub fn effective_color_mode(preference: ModePreference, platform: &dyn Platform) -> ColorMode {
    match preference {
        ModePreference::Light => ColorMode::Light,
        ModePreference::Dark => ColorMode::Dark,
        ModePreference::System => ColorMode::from_dark(is_dark_scheme_preferred(platform)),
    }
}
