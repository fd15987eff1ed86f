//! Luminance matching: find a color of a given brightness in a base hue.
//!
//! A palette is derived from one base color by asking, for each target
//! luminance, "what does the base color look like at this brightness?".
//! The [`ColorMatcher`] trait is that question. It is a trait so callers can
//! substitute their own perceptual model (or a fake in tests).
//!
//! [`LuminanceMatcher`] is the default: it binary-searches CIE LAB lightness
//! until the WCAG relative luminance of the candidate is within the requested
//! precision of the target. Chroma is kept at the base color's value at the
//! base lightness and fades linearly toward black and white, so both ends of
//! the range are reachable from any hue.

use log::{trace, warn};

use crate::colorspace::{lab_to_rgb, relative_luminance, rgb_to_lab, Rgb};
use crate::error::PaletteError;

/// Resolves a base color and a target luminance to a concrete color string.
pub trait ColorMatcher {
    /// Returns the color closest to `base` whose relative luminance is
    /// within `precision` of `luminance`.
    ///
    /// # Errors
    ///
    /// Implementations return an error for unparseable base colors and
    /// out-of-range arguments.
    fn closest_color(
        &self,
        base: &str,
        luminance: f64,
        precision: f64,
    ) -> Result<String, PaletteError>;
}

impl<M: ColorMatcher + ?Sized> ColorMatcher for &M {
    fn closest_color(
        &self,
        base: &str,
        luminance: f64,
        precision: f64,
    ) -> Result<String, PaletteError> {
        (**self).closest_color(base, luminance, precision)
    }
}

/// Maximum bisection steps; far more than `f64` lightness needs.
const MAX_ITERATIONS: usize = 64;

/// Default [`ColorMatcher`] bisecting CIE LAB lightness.
///
/// Output is always lowercase `#rrggbb`.
///
/// # Example
///
/// ```rust
/// use shade::{ColorMatcher, LuminanceMatcher};
///
/// let color = LuminanceMatcher.closest_color("#808080", 1.0, 0.001).unwrap();
/// assert_eq!(color, "#ffffff");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LuminanceMatcher;

impl LuminanceMatcher {
    /// Same as [`ColorMatcher::closest_color`] but on a parsed color.
    pub fn closest_rgb(
        &self,
        base: Rgb,
        luminance: f64,
        precision: f64,
    ) -> Result<Rgb, PaletteError> {
        validate(luminance, precision)?;

        let lab = rgb_to_lab(base);
        let (mut lo, mut hi) = (0.0_f64, 100.0_f64);
        let mut best = base;
        let mut best_delta = (relative_luminance(base) - luminance).abs();

        for step in 0..MAX_ITERATIONS {
            if best_delta <= precision {
                trace!("matched luminance {} after {} steps", luminance, step);
                return Ok(best);
            }

            let mid = (lo + hi) / 2.0;
            let candidate = lab_to_rgb(
                lab.with_lightness(mid)
                    .scale_chroma(chroma_scale(mid, lab.l)),
            );
            let actual = relative_luminance(candidate);
            let delta = (actual - luminance).abs();
            if delta < best_delta {
                best = candidate;
                best_delta = delta;
            }

            if actual < luminance {
                lo = mid;
            } else {
                hi = mid;
            }
        }

        if best_delta > precision {
            warn!(
                "no color within {} of luminance {} for {}; closest is {} (off by {:.5})",
                precision,
                luminance,
                base,
                best,
                best_delta
            );
        }
        Ok(best)
    }
}

impl ColorMatcher for LuminanceMatcher {
    fn closest_color(
        &self,
        base: &str,
        luminance: f64,
        precision: f64,
    ) -> Result<String, PaletteError> {
        let rgb = Rgb::parse(base)?;
        Ok(self.closest_rgb(rgb, luminance, precision)?.to_hex())
    }
}

/// Fraction of the base chroma kept at lightness `l`.
fn chroma_scale(l: f64, base_l: f64) -> f64 {
    let scale = if l < base_l {
        l / base_l
    } else if l > base_l {
        (100.0 - l) / (100.0 - base_l)
    } else {
        1.0
    };
    scale.clamp(0.0, 1.0)
}

fn validate(luminance: f64, precision: f64) -> Result<(), PaletteError> {
    if !(0.0..=1.0).contains(&luminance) {
        return Err(PaletteError::InvalidLuminance(luminance));
    }
    if !precision.is_finite() || precision <= 0.0 {
        return Err(PaletteError::InvalidPrecision(precision));
    }
    Ok(())
}
