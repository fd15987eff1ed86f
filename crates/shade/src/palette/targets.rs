//! Named luminance targets for each color mode.

use crate::mode::ColorMode;

/// A CSS custom property paired with the luminance its color should have.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LuminanceTarget {
    pub name: &'static str,
    pub luminance: f64,
}

impl LuminanceTarget {
    const fn new(name: &'static str, luminance: f64) -> Self {
        Self { name, luminance }
    }
}

/// Targets tuned for dark backgrounds, from background to foreground.
pub const DARK_TARGETS: [LuminanceTarget; 6] = [
    LuminanceTarget::new("--colors-base", 0.0097),
    LuminanceTarget::new("--colors-ultra-low", 0.0203),
    LuminanceTarget::new("--colors-low", 0.0497),
    LuminanceTarget::new("--colors-high", 0.4508),
    LuminanceTarget::new("--colors-ultra-high", 0.8469),
    LuminanceTarget::new("--colors-top", 0.9911),
];

/// Targets tuned for light backgrounds, from background to foreground.
pub const LIGHT_TARGETS: [LuminanceTarget; 6] = [
    LuminanceTarget::new("--colors-base", 0.99),
    LuminanceTarget::new("--colors-ultra-low", 0.9474),
    LuminanceTarget::new("--colors-low", 0.7992),
    LuminanceTarget::new("--colors-high", 0.09085),
    LuminanceTarget::new("--colors-ultra-high", 0.02955),
    LuminanceTarget::new("--colors-top", 0.00973),
];

/// Returns the target table for `mode`.
pub fn targets_for(mode: ColorMode) -> &'static [LuminanceTarget] {
    match mode {
        ColorMode::Dark => &DARK_TARGETS,
        ColorMode::Light => &LIGHT_TARGETS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_share_names_in_order() {
        let dark: Vec<_> = DARK_TARGETS.iter().map(|t| t.name).collect();
        let light: Vec<_> = LIGHT_TARGETS.iter().map(|t| t.name).collect();
        assert_eq!(dark, light);
        assert_eq!(
            dark,
            [
                "--colors-base",
                "--colors-ultra-low",
                "--colors-low",
                "--colors-high",
                "--colors-ultra-high",
                "--colors-top",
            ]
        );
    }

    #[test]
    fn test_luminances_in_unit_range() {
        for t in DARK_TARGETS.iter().chain(LIGHT_TARGETS.iter()) {
            assert!((0.0..=1.0).contains(&t.luminance), "{:?}", t);
        }
    }

    #[test]
    fn test_dark_rises_light_falls() {
        assert!(DARK_TARGETS.windows(2).all(|w| w[0].luminance < w[1].luminance));
        assert!(LIGHT_TARGETS.windows(2).all(|w| w[0].luminance > w[1].luminance));
    }

    #[test]
    fn test_targets_for_mode() {
        assert_eq!(targets_for(ColorMode::Dark)[0].luminance, 0.0097);
        assert_eq!(targets_for(ColorMode::Light)[5].luminance, 0.00973);
    }
}
