//! Palette computation and application.

use log::{debug, trace};

use crate::error::PaletteError;
use crate::matcher::{ColorMatcher, LuminanceMatcher};
use crate::mode::{ColorMode, Platform};
use crate::palette::targets::targets_for;
use crate::palette::vars::CssVariables;

/// Matcher precision used unless overridden.
pub const DEFAULT_PRECISION: f64 = 0.001;

/// Property holding the top color with overlay transparency.
pub const DARK_OVERLAY: &str = "--colors-dark-overlay";

/// Property holding the base color with overlay transparency.
pub const BASE_OVERLAY: &str = "--colors-base-overlay";

/// Encodes an opacity as a two-digit lowercase hex alpha suffix.
///
/// The byte is `round(256 × alpha)`, clamped to `0..=255`.
///
/// ```rust
/// use shade::opacity_suffix;
///
/// assert_eq!(opacity_suffix(0.95), "f3");
/// assert_eq!(opacity_suffix(0.7), "b3");
/// assert_eq!(opacity_suffix(0.02), "05");
/// ```
pub fn opacity_suffix(alpha: f64) -> String {
    let byte = (256.0 * alpha).round().clamp(0.0, 255.0) as u8;
    format!("{:02x}", byte)
}

/// Overlay opacities for `mode`: `(dark overlay, base overlay)`.
fn overlay_opacities(mode: ColorMode) -> (f64, f64) {
    match mode {
        ColorMode::Dark => (0.95, 0.7),
        ColorMode::Light => (0.7, 0.95),
    }
}

/// Derives a full palette from a base color.
///
/// # Example
///
/// ```rust
/// use shade::{ColorMode, PaletteBuilder};
///
/// let vars = PaletteBuilder::new().build("#3366cc", ColorMode::Dark).unwrap();
/// assert_eq!(vars.len(), 8);
/// assert!(vars.get("--colors-dark-overlay").unwrap().ends_with("f3"));
/// ```
#[derive(Debug, Clone)]
pub struct PaletteBuilder<M = LuminanceMatcher> {
    matcher: M,
    precision: f64,
}

impl PaletteBuilder<LuminanceMatcher> {
    /// A builder using [`LuminanceMatcher`] and [`DEFAULT_PRECISION`].
    pub fn new() -> Self {
        Self::with_matcher(LuminanceMatcher)
    }
}

impl Default for PaletteBuilder<LuminanceMatcher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: ColorMatcher> PaletteBuilder<M> {
    pub fn with_matcher(matcher: M) -> Self {
        Self {
            matcher,
            precision: DEFAULT_PRECISION,
        }
    }

    /// Sets the luminance precision passed to the matcher.
    pub fn precision(mut self, precision: f64) -> Self {
        self.precision = precision;
        self
    }

    pub fn matcher(&self) -> &M {
        &self.matcher
    }

    /// Computes the eight palette properties for `base` in `mode`.
    ///
    /// Order: the six mode targets, then [`DARK_OVERLAY`], then
    /// [`BASE_OVERLAY`].
    ///
    /// # Errors
    ///
    /// Propagates any matcher failure, such as an unparseable base color.
    pub fn build(&self, base: &str, mode: ColorMode) -> Result<CssVariables, PaletteError> {
        let targets = targets_for(mode);
        let mut vars = CssVariables::new();

        for target in targets {
            let color = self.closest(base, target.luminance)?;
            trace!("{} = {} (luminance {})", target.name, color, target.luminance);
            vars.insert(target.name, color);
        }

        let (dark_alpha, base_alpha) = overlay_opacities(mode);

        if let Some(top) = targets.last() {
            let overlay = self.closest(base, top.luminance)? + &opacity_suffix(dark_alpha);
            vars.insert(DARK_OVERLAY, overlay);
        }
        if let Some(first) = targets.first() {
            let overlay = self.closest(base, first.luminance)? + &opacity_suffix(base_alpha);
            vars.insert(BASE_OVERLAY, overlay);
        }

        debug!(
            "computed {} palette for {} ({} properties)",
            mode,
            base,
            vars.len()
        );
        Ok(vars)
    }

    /// Computes the palette and writes it onto the platform's document root.
    ///
    /// Returns `Ok(false)` without computing anything when the platform has
    /// no document.
    pub fn apply(
        &self,
        platform: &mut dyn Platform,
        base: &str,
        mode: ColorMode,
    ) -> Result<bool, PaletteError> {
        let Some(root) = platform.root_style() else {
            debug!("no document root; skipping palette for {}", base);
            return Ok(false);
        };

        let vars = self.build(base, mode)?;
        vars.apply_to(root);
        debug!("applied {} palette for {}", mode, base);
        Ok(true)
    }

    fn closest(&self, base: &str, luminance: f64) -> Result<String, PaletteError> {
        self.matcher.closest_color(base, luminance, self.precision)
    }
}

/// Applies the palette for `base` to the platform's document root.
///
/// A platform without a document is left untouched. Errors from color
/// matching are returned to the caller.
pub fn change_colors(
    platform: &mut dyn Platform,
    base: &str,
    is_dark_mode: bool,
) -> Result<(), PaletteError> {
    PaletteBuilder::new().apply(platform, base, ColorMode::from_dark(is_dark_mode))?;
    Ok(())
}
