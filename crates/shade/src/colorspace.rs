//! Color space conversions used for luminance matching.
//!
//! Matching a target luminance means moving a color along a lightness axis
//! while keeping its hue recognizable. This module provides the pieces:
//!
//! - [`Rgb`]: an 8-bit sRGB triplet, the only color type exposed publicly
//! - CIE LAB (D65) conversions, where lightness `L*` can be varied
//!   independently of the chroma axes `a*` and `b*`
//! - [`relative_luminance`]: the WCAG 2.1 luminance the palette targets are
//!   expressed in
//!
//! # Example
//!
//! ```rust
//! use shade::colorspace::{relative_luminance, Rgb};
//!
//! assert_eq!(relative_luminance(Rgb(0, 0, 0)), 0.0);
//! assert!((relative_luminance(Rgb(255, 255, 255)) - 1.0).abs() < 1e-9);
//! ```

// ─── RGB type ───────────────────────────────────────────────────────────────

/// An sRGB color with 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

// ─── CIE LAB internals ─────────────────────────────────────────────────────

/// CIE LAB color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Lab {
    pub(crate) l: f64,
    pub(crate) a: f64,
    pub(crate) b: f64,
}

/// D65 reference white point for CIE XYZ → LAB conversion.
const XN: f64 = 0.95047;
const YN: f64 = 1.00000;
const ZN: f64 = 1.08883;

/// Convert an sRGB component (0–255) to linear light (0.0–1.0).
pub(crate) fn srgb_to_linear(c: u8) -> f64 {
    let c = c as f64 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert a linear light value to sRGB (0–255), clamped.
fn linear_to_srgb(c: f64) -> u8 {
    let c = c.clamp(0.0, 1.0);
    let s = if c <= 0.0031308 {
        12.92 * c
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    };
    (s * 255.0).round() as u8
}

fn lab_f(t: f64) -> f64 {
    if t > 0.008856 {
        t.cbrt()
    } else {
        7.787 * t + 16.0 / 116.0
    }
}

fn lab_f_inv(t: f64) -> f64 {
    if t > 0.206896 {
        t * t * t
    } else {
        (t - 16.0 / 116.0) / 7.787
    }
}

/// Convert an [`Rgb`] value to CIE LAB via XYZ (D65 illuminant).
pub(crate) fn rgb_to_lab(rgb: Rgb) -> Lab {
    let r = srgb_to_linear(rgb.0);
    let g = srgb_to_linear(rgb.1);
    let b = srgb_to_linear(rgb.2);

    let x = 0.4124564 * r + 0.3575761 * g + 0.1804375 * b;
    let y = 0.2126729 * r + 0.7151522 * g + 0.0721750 * b;
    let z = 0.0193339 * r + 0.1191920 * g + 0.9503041 * b;

    let fx = lab_f(x / XN);
    let fy = lab_f(y / YN);
    let fz = lab_f(z / ZN);

    Lab {
        l: 116.0 * fy - 16.0,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}

/// Convert a CIE LAB value back to [`Rgb`], clamping out-of-gamut channels.
pub(crate) fn lab_to_rgb(lab: Lab) -> Rgb {
    let fy = (lab.l + 16.0) / 116.0;
    let fx = lab.a / 500.0 + fy;
    let fz = fy - lab.b / 200.0;

    let x = XN * lab_f_inv(fx);
    let y = YN * lab_f_inv(fy);
    let z = ZN * lab_f_inv(fz);

    let r = 3.2404542 * x - 1.5371385 * y - 0.4985314 * z;
    let g = -0.9692660 * x + 1.8760108 * y + 0.0415560 * z;
    let b = 0.0556434 * x - 0.2040259 * y + 1.0572252 * z;

    Rgb(linear_to_srgb(r), linear_to_srgb(g), linear_to_srgb(b))
}

impl Lab {
    /// Returns this color with its lightness replaced, chroma unchanged.
    pub(crate) fn with_lightness(self, l: f64) -> Lab {
        Lab { l, ..self }
    }

    /// Returns this color with `a*` and `b*` multiplied by `factor`.
    pub(crate) fn scale_chroma(self, factor: f64) -> Lab {
        Lab {
            l: self.l,
            a: self.a * factor,
            b: self.b * factor,
        }
    }
}

// ─── Luminance ──────────────────────────────────────────────────────────────

/// Relative luminance of a color per WCAG 2.1.
///
/// `L = 0.2126 R + 0.7152 G + 0.0722 B` over linearized channels. Returns a
/// value in `[0.0, 1.0]`, 0 for black and 1 for white.
pub fn relative_luminance(rgb: Rgb) -> f64 {
    0.2126 * srgb_to_linear(rgb.0)
        + 0.7152 * srgb_to_linear(rgb.1)
        + 0.0722 * srgb_to_linear(rgb.2)
}
