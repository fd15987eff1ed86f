//! Luminance-derived palettes.
//!
//! A palette is eight CSS custom properties computed from a single base
//! color. Six come from a per-mode table of luminance targets, ordered from
//! the page background (`--colors-base`) to the strongest foreground
//! (`--colors-top`):
//!
//! | Property              | Dark    | Light   |
//! |-----------------------|---------|---------|
//! | `--colors-base`       | 0.0097  | 0.99    |
//! | `--colors-ultra-low`  | 0.0203  | 0.9474  |
//! | `--colors-low`        | 0.0497  | 0.7992  |
//! | `--colors-high`       | 0.4508  | 0.09085 |
//! | `--colors-ultra-high` | 0.8469  | 0.02955 |
//! | `--colors-top`        | 0.9911  | 0.00973 |
//!
//! The remaining two are translucent overlays. `--colors-dark-overlay` is
//! the `top` color with alpha `f3` in dark mode and `b3` in light mode;
//! `--colors-base-overlay` is the `base` color with the opposite alphas.
//!
//! [`PaletteBuilder::build`] returns the properties as [`CssVariables`] and
//! has no side effects. [`PaletteBuilder::apply`] and [`change_colors`]
//! write them onto a [`Platform`](crate::Platform)'s document root.

mod builder;
mod targets;
mod vars;

pub use builder::{
    change_colors, opacity_suffix, PaletteBuilder, BASE_OVERLAY, DARK_OVERLAY, DEFAULT_PRECISION,
};
pub use targets::{targets_for, LuminanceTarget, DARK_TARGETS, LIGHT_TARGETS};
pub use vars::CssVariables;
