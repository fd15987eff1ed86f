//! # Shade - Luminance-Derived CSS Palettes
//!
//! `shade` turns one base color into a set of CSS custom properties whose
//! brightness is tuned for either a light or a dark page, and resolves a
//! user's light/dark/system preference into the mode to render.
//!
//! ## Core Concepts
//!
//! - [`ColorMatcher`]: finds a color of a given WCAG luminance in the base
//!   color's hue ([`LuminanceMatcher`] by default)
//! - [`PaletteBuilder`]: computes the eight `--colors-*` properties as
//!   [`CssVariables`]
//! - [`Platform`]: the environment a palette is applied in (document root,
//!   color-scheme preference)
//! - [`ModePreference`] / [`ColorMode`]: tri-state user setting and the
//!   resolved binary mode
//!
//! ## Quick Start
//!
//! ```rust
//! use shade::{effective_color_mode, Headless, ModePreference, PaletteBuilder};
//!
//! let mode = effective_color_mode(ModePreference::Dark, &Headless);
//! let vars = PaletteBuilder::new().build("#3366cc", mode).unwrap();
//!
//! let css = vars.to_css(":root");
//! assert!(css.starts_with(":root {\n  --colors-base: #"));
//! assert!(css.contains("--colors-base-overlay"));
//! ```
//!
//! ## Applying to a Document
//!
//! [`change_colors`] writes the palette onto the platform's document root
//! and does nothing at all when there is no document:
//!
//! ```rust
//! use shade::{change_colors, CssVariables, Headless, SystemPlatform};
//!
//! // No document: silently skipped.
//! change_colors(&mut Headless, "#3366cc", true).unwrap();
//!
//! let mut platform = SystemPlatform::with_root(CssVariables::new());
//! change_colors(&mut platform, "#3366cc", true).unwrap();
//! assert_eq!(platform.root().unwrap().len(), 8);
//! ```

mod color;
pub mod colorspace;
pub mod config;
pub mod error;
pub mod matcher;
pub mod mode;
pub mod palette;

pub use colorspace::{relative_luminance, Rgb};
pub use config::ThemeConfig;
pub use error::PaletteError;
pub use matcher::{ColorMatcher, LuminanceMatcher};
pub use mode::{
    detect_scheme, effective_color_mode, is_dark_scheme_preferred, reset_scheme_detector,
    set_scheme_detector, ColorMode, Headless, ModePreference, Platform, SchemeDetector,
    StyleTarget, SystemPlatform,
};
pub use palette::{
    change_colors, opacity_suffix, targets_for, CssVariables, LuminanceTarget, PaletteBuilder,
    BASE_OVERLAY, DARK_OVERLAY, DARK_TARGETS, DEFAULT_PRECISION, LIGHT_TARGETS,
};
