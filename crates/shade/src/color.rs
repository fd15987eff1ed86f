//! Color string parsing and formatting.
//!
//! Supports the color notations a stylesheet author is likely to hand us:
//!
//! - Hex: `"#fff"`, `"#ff6b35"`, or `"#ff6b35cc"` (alpha is ignored)
//! - Functional: `"rgb(255, 107, 53)"`
//! - Named: `"rebeccapurple"`, `"teal"`, ... (case-insensitive)
//!
//! # Example
//!
//! ```rust
//! use shade::colorspace::Rgb;
//!
//! assert_eq!(Rgb::parse("#ff6b35").unwrap(), Rgb(255, 107, 53));
//! assert_eq!(Rgb::parse("rgb(0, 128, 255)").unwrap(), Rgb(0, 128, 255));
//! assert_eq!(Rgb::parse("Teal").unwrap(), Rgb(0, 128, 128));
//! assert_eq!(Rgb(255, 107, 53).to_hex(), "#ff6b35");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::colorspace::Rgb;
use crate::error::PaletteError;

impl Rgb {
    /// Parses a CSS color string.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::InvalidColor`] if the string is not a
    /// supported notation.
    pub fn parse(s: &str) -> Result<Self, PaletteError> {
        let trimmed = s.trim();

        if let Some(hex) = trimmed.strip_prefix('#') {
            return parse_hex(hex).map_err(|reason| PaletteError::invalid_color(s, reason));
        }

        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("rgb(") && lower.ends_with(')') {
            return parse_rgb_function(&lower[4..lower.len() - 1])
                .map_err(|reason| PaletteError::invalid_color(s, reason));
        }

        named_color(&lower).ok_or_else(|| PaletteError::invalid_color(s, "unknown color name"))
    }

    /// Formats this color as lowercase `#rrggbb`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl FromStr for Rgb {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rgb::parse(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

fn hex_pair(hex: &str) -> Result<u8, String> {
    u8::from_str_radix(hex, 16).map_err(|_| format!("invalid hex digits '{}'", hex))
}

fn parse_hex(hex: &str) -> Result<Rgb, String> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(format!("invalid hex digits '{}'", hex));
    }
    match hex.len() {
        // #rgb -> #rrggbb
        3 => {
            let r = hex_pair(&hex[0..1])? * 17;
            let g = hex_pair(&hex[1..2])? * 17;
            let b = hex_pair(&hex[2..3])? * 17;
            Ok(Rgb(r, g, b))
        }
        // #rrggbb, or #rrggbbaa with the alpha dropped
        6 | 8 => {
            if hex.len() == 8 {
                hex_pair(&hex[6..8])?;
            }
            Ok(Rgb(
                hex_pair(&hex[0..2])?,
                hex_pair(&hex[2..4])?,
                hex_pair(&hex[4..6])?,
            ))
        }
        n => Err(format!("expected 3, 6 or 8 hex digits, got {}", n)),
    }
}

fn parse_rgb_function(inner: &str) -> Result<Rgb, String> {
    let parts: Vec<&str> = inner.split(',').map(|p| p.trim()).collect();
    if parts.len() != 3 {
        return Err(format!("rgb() requires 3 components, got {}", parts.len()));
    }

    let mut channels = [0u8; 3];
    for (slot, part) in channels.iter_mut().zip(&parts) {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(format!("invalid rgb() component '{}'", part));
        }
        *slot = part
            .parse::<u8>()
            .map_err(|_| format!("invalid rgb() component '{}'", part))?;
    }
    Ok(Rgb(channels[0], channels[1], channels[2]))
}

fn named_color(name: &str) -> Option<Rgb> {
    let rgb = match name {
        "black" => Rgb(0, 0, 0),
        "silver" => Rgb(192, 192, 192),
        "gray" | "grey" => Rgb(128, 128, 128),
        "white" => Rgb(255, 255, 255),
        "maroon" => Rgb(128, 0, 0),
        "red" => Rgb(255, 0, 0),
        "purple" => Rgb(128, 0, 128),
        "fuchsia" | "magenta" => Rgb(255, 0, 255),
        "green" => Rgb(0, 128, 0),
        "lime" => Rgb(0, 255, 0),
        "olive" => Rgb(128, 128, 0),
        "yellow" => Rgb(255, 255, 0),
        "navy" => Rgb(0, 0, 128),
        "blue" => Rgb(0, 0, 255),
        "teal" => Rgb(0, 128, 128),
        "aqua" | "cyan" => Rgb(0, 255, 255),
        "orange" => Rgb(255, 165, 0),
        "brown" => Rgb(165, 42, 42),
        "pink" => Rgb(255, 192, 203),
        "gold" => Rgb(255, 215, 0),
        "indigo" => Rgb(75, 0, 130),
        "violet" => Rgb(238, 130, 238),
        "crimson" => Rgb(220, 20, 60),
        "coral" => Rgb(255, 127, 80),
        "salmon" => Rgb(250, 128, 114),
        "tomato" => Rgb(255, 99, 71),
        "orchid" => Rgb(218, 112, 214),
        "plum" => Rgb(221, 160, 221),
        "khaki" => Rgb(240, 230, 140),
        "turquoise" => Rgb(64, 224, 208),
        "slategray" | "slategrey" => Rgb(112, 128, 144),
        "steelblue" => Rgb(70, 130, 180),
        "royalblue" => Rgb(65, 105, 225),
        "dodgerblue" => Rgb(30, 144, 255),
        "seagreen" => Rgb(46, 139, 87),
        "forestgreen" => Rgb(34, 139, 34),
        "chocolate" => Rgb(210, 105, 30),
        "rebeccapurple" => Rgb(102, 51, 153),
        _ => return None,
    };
    Some(rgb)
}
