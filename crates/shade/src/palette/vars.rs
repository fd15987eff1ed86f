//! An ordered set of CSS custom properties.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::mode::StyleTarget;

/// CSS custom properties in the order they were first written.
///
/// This is both the return value of palette computation and an in-memory
/// [`StyleTarget`], so a computed palette can be applied to another set of
/// variables the same way it would be applied to a document root.
///
/// # Example
///
/// ```rust
/// use shade::CssVariables;
///
/// let mut vars = CssVariables::new();
/// vars.insert("--colors-base", "#101010");
/// assert_eq!(vars.to_css(":root"), ":root {\n  --colors-base: #101010;\n}\n");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CssVariables {
    entries: IndexMap<String, String>,
}

impl CssVariables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name` to `value`, keeping the original position on overwrite.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Writes every property onto `target`, in order.
    pub fn apply_to(&self, target: &mut dyn StyleTarget) {
        for (name, value) in self.iter() {
            target.set_property(name, value);
        }
    }

    /// Renders the properties as a CSS rule for `selector`.
    pub fn to_css(&self, selector: &str) -> String {
        let mut css = format!("{} {{\n", selector);
        for (name, value) in self.iter() {
            css.push_str(&format!("  {}: {};\n", name, value));
        }
        css.push_str("}\n");
        css
    }
}

impl StyleTarget for CssVariables {
    fn set_property(&mut self, name: &str, value: &str) {
        self.insert(name, value);
    }
}

impl<'a> IntoIterator for &'a CssVariables {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_preserves_order() {
        let mut vars = CssVariables::new();
        vars.insert("--b", "2");
        vars.insert("--a", "1");
        let names: Vec<_> = vars.iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["--b", "--a"]);
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut vars = CssVariables::new();
        vars.insert("--a", "1");
        vars.insert("--b", "2");
        vars.insert("--a", "3");
        assert_eq!(vars.len(), 2);
        assert_eq!(vars.get("--a"), Some("3"));
        assert_eq!(vars.iter().next(), Some(("--a", "3")));
    }

    #[test]
    fn test_to_css_empty() {
        assert_eq!(CssVariables::new().to_css("html"), "html {\n}\n");
    }

    #[test]
    fn test_apply_to_other_target() {
        let mut src = CssVariables::new();
        src.insert("--x", "red");
        let mut dst = CssVariables::new();
        dst.insert("--x", "blue");
        dst.insert("--y", "green");

        src.apply_to(&mut dst);
        assert_eq!(dst.get("--x"), Some("red"));
        assert_eq!(dst.get("--y"), Some("green"));
    }

    #[test]
    fn test_serializes_as_ordered_map() {
        let mut vars = CssVariables::new();
        vars.insert("--z", "#000000");
        vars.insert("--a", "#ffffff");
        let json = serde_json::to_string(&vars).unwrap();
        assert_eq!(json, r##"{"--z":"#000000","--a":"#ffffff"}"##);

        let back: CssVariables = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vars);
    }
}
