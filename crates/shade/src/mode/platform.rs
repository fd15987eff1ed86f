//! Platform capabilities consumed by the palette and mode logic.
//!
//! A [`Platform`] answers two questions: is there a document root to write
//! style properties to, and does the user prefer a dark color scheme? Either
//! capability may be missing, and both missing cases are normal outcomes
//! rather than errors.

use crate::mode::adaptive::{detect_scheme, ColorMode};
use crate::palette::CssVariables;

/// Something that accepts CSS custom property writes.
///
/// Writing a property that already exists replaces its value.
pub trait StyleTarget {
    fn set_property(&mut self, name: &str, value: &str);
}

impl<T: StyleTarget + ?Sized> StyleTarget for &mut T {
    fn set_property(&mut self, name: &str, value: &str) {
        (**self).set_property(name, value);
    }
}

/// The environment a palette is applied in.
pub trait Platform {
    /// The document root's style, or `None` when no document is present.
    fn root_style(&mut self) -> Option<&mut dyn StyleTarget>;

    /// Whether the `prefers-color-scheme: dark` media feature matches.
    ///
    /// `None` means the platform cannot answer the question at all.
    fn prefers_dark_scheme(&self) -> Option<bool>;
}

/// A platform with neither a document nor a color-scheme query.
#[derive(Debug, Clone, Copy, Default)]
pub struct Headless;

impl Platform for Headless {
    fn root_style(&mut self) -> Option<&mut dyn StyleTarget> {
        None
    }

    fn prefers_dark_scheme(&self) -> Option<bool> {
        None
    }
}

/// The host system: color scheme from [`detect_scheme`], plus an optional
/// document root supplied by the caller.
///
/// # Example
///
/// ```rust
/// use shade::{change_colors, CssVariables, SystemPlatform};
///
/// let mut platform = SystemPlatform::with_root(CssVariables::new());
/// change_colors(&mut platform, "#3366cc", true).unwrap();
///
/// let vars = platform.into_root().unwrap();
/// assert_eq!(vars.len(), 8);
/// ```
#[derive(Debug, Clone)]
pub struct SystemPlatform<T = CssVariables> {
    root: Option<T>,
}

impl SystemPlatform<CssVariables> {
    /// A system platform with no document root.
    pub fn new() -> Self {
        Self { root: None }
    }
}

impl Default for SystemPlatform<CssVariables> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: StyleTarget> SystemPlatform<T> {
    /// A system platform writing styles into `root`.
    pub fn with_root(root: T) -> Self {
        Self { root: Some(root) }
    }

    pub fn root(&self) -> Option<&T> {
        self.root.as_ref()
    }

    pub fn into_root(self) -> Option<T> {
        self.root
    }
}

impl<T: StyleTarget> Platform for SystemPlatform<T> {
    fn root_style(&mut self) -> Option<&mut dyn StyleTarget> {
        self.root.as_mut().map(|root| root as &mut dyn StyleTarget)
    }

    fn prefers_dark_scheme(&self) -> Option<bool> {
        detect_scheme().map(ColorMode::is_dark)
    }
}
