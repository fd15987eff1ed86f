//! Palette configuration files.
//!
//! A theme configuration names the base color and the mode preference, and
//! optionally tunes the matcher precision and the CSS selector the palette
//! is emitted under:
//!
//! ```yaml
//! base_color: "#3366cc"
//! mode: system        # light | dark | system (default)
//! precision: 0.001    # optional
//! selector: ":root"   # optional
//! ```
//!
//! ```rust
//! use shade::{ModePreference, ThemeConfig};
//!
//! let config = ThemeConfig::from_yaml("base_color: teal\nmode: dark\n").unwrap();
//! assert_eq!(config.base_color, "teal");
//! assert_eq!(config.mode, ModePreference::Dark);
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::colorspace::Rgb;
use crate::error::PaletteError;
use crate::mode::ModePreference;
use crate::palette::{PaletteBuilder, DEFAULT_PRECISION};

fn default_precision() -> f64 {
    DEFAULT_PRECISION
}

fn default_selector() -> String {
    ":root".to_string()
}

/// Settings for computing and emitting a palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    /// Color every palette entry is derived from.
    pub base_color: String,
    #[serde(default)]
    pub mode: ModePreference,
    #[serde(default = "default_precision")]
    pub precision: f64,
    #[serde(default = "default_selector")]
    pub selector: String,
    /// Name, typically from the config file stem.
    #[serde(skip)]
    pub name: Option<String>,
}

impl ThemeConfig {
    /// A configuration with defaults for everything except the base color.
    pub fn new(base_color: impl Into<String>) -> Self {
        Self {
            base_color: base_color.into(),
            mode: ModePreference::default(),
            precision: DEFAULT_PRECISION,
            selector: default_selector(),
            name: None,
        }
    }

    /// Parses and validates a YAML configuration.
    pub fn from_yaml(yaml: &str) -> Result<Self, PaletteError> {
        let config: ThemeConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration file; the file stem becomes the name.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::Io`] if the file cannot be read and
    /// [`PaletteError::Config`] (carrying the path) if it is invalid.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PaletteError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        let mut config = Self::from_yaml(&content).map_err(|err| with_path(err, path))?;
        config.name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .map(|s| s.to_string());
        Ok(config)
    }

    /// Checks that the base color parses and the precision is usable.
    pub fn validate(&self) -> Result<(), PaletteError> {
        Rgb::parse(&self.base_color)?;
        if !self.precision.is_finite() || self.precision <= 0.0 {
            return Err(PaletteError::InvalidPrecision(self.precision));
        }
        if self.selector.trim().is_empty() {
            return Err(PaletteError::Config {
                path: None,
                message: "selector must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// A [`PaletteBuilder`] using this configuration's precision.
    pub fn builder(&self) -> PaletteBuilder {
        PaletteBuilder::new().precision(self.precision)
    }
}

fn with_path(err: PaletteError, path: &Path) -> PaletteError {
    match err {
        PaletteError::Config { message, .. } => PaletteError::Config {
            path: Some(PathBuf::from(path)),
            message,
        },
        other => PaletteError::Config {
            path: Some(PathBuf::from(path)),
            message: other.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_applied() {
        let config = ThemeConfig::from_yaml("base_color: '#3366cc'").unwrap();
        assert_eq!(config.mode, ModePreference::System);
        assert_eq!(config.precision, DEFAULT_PRECISION);
        assert_eq!(config.selector, ":root");
        assert_eq!(config.name, None);
        assert_eq!(config, ThemeConfig::new("#3366cc"));
    }

    #[test]
    fn test_all_fields() {
        let config = ThemeConfig::from_yaml(
            r#"
base_color: navy
mode: light
precision: 0.005
selector: "html[data-theme]"
"#,
        )
        .unwrap();
        assert_eq!(config.mode, ModePreference::Light);
        assert_eq!(config.precision, 0.005);
        assert_eq!(config.selector, "html[data-theme]");
    }

    #[test]
    fn test_missing_base_color() {
        let err = ThemeConfig::from_yaml("mode: dark").unwrap_err();
        assert!(matches!(err, PaletteError::Config { .. }));
        assert!(err.to_string().contains("base_color"));
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(ThemeConfig::from_yaml("base_color: red\ncolour: blue").is_err());
    }

    #[test]
    fn test_invalid_mode_rejected() {
        assert!(ThemeConfig::from_yaml("base_color: red\nmode: auto").is_err());
    }

    #[test]
    fn test_validation_errors() {
        assert!(matches!(
            ThemeConfig::from_yaml("base_color: notacolor"),
            Err(PaletteError::InvalidColor { .. })
        ));
        assert!(matches!(
            ThemeConfig::from_yaml("base_color: red\nprecision: 0"),
            Err(PaletteError::InvalidPrecision(_))
        ));
        assert!(ThemeConfig::from_yaml("base_color: red\nselector: '  '").is_err());
    }

    #[test]
    fn test_from_file_sets_name() {
        let mut file = tempfile::Builder::new()
            .prefix("ocean")
            .suffix(".yaml")
            .tempfile()
            .unwrap();
        writeln!(file, "base_color: teal").unwrap();

        let config = ThemeConfig::from_file(file.path()).unwrap();
        assert_eq!(config.base_color, "teal");
        let name = config.name.unwrap();
        assert!(name.starts_with("ocean"), "name was {}", name);
    }

    #[test]
    fn test_from_file_error_carries_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "base_color: notacolor").unwrap();

        match ThemeConfig::from_file(file.path()) {
            Err(PaletteError::Config { path: Some(p), .. }) => assert_eq!(p, file.path()),
            other => panic!("expected Config error with path, got {:?}", other),
        }
    }

    #[test]
    fn test_from_file_missing() {
        let err = ThemeConfig::from_file("/nonexistent/theme.yaml").unwrap_err();
        assert!(matches!(err, PaletteError::Io(_)));
    }

    #[test]
    fn test_builder_uses_precision() {
        let config = ThemeConfig::from_yaml("base_color: red\nprecision: 0.01").unwrap();
        let vars = config
            .builder()
            .build(&config.base_color, crate::ColorMode::Dark)
            .unwrap();
        assert_eq!(vars.len(), 8);
    }
}
