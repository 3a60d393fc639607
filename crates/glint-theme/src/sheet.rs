//! Style sheets — symbolic style names mapped to concrete color tokens.
//!
//! A `StyleSheet` is the first of two resolution stages: it turns a name
//! like `"error"` into a token like `"c00"`. The second stage, token to
//! escape code, belongs to `glint_term::color` and never sees symbolic
//! names. A sheet is assembled once (preset + overrides) and read-only
//! afterwards.

use std::collections::BTreeMap;

use serde::Deserialize;

use glint_term::color::TermColor;

use crate::builtin;
use crate::error::{Result, ThemeError};

// ---------------------------------------------------------------------------
// StyleSheet
// ---------------------------------------------------------------------------

/// A named, immutable alias table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSheet {
    name: String,
    styles: BTreeMap<String, String>,
}

impl StyleSheet {
    /// An empty sheet: every name resolves to itself.
    #[must_use]
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            styles: BTreeMap::new(),
        }
    }

    /// Build a sheet from `(alias, token)` pairs.
    ///
    /// # Errors
    ///
    /// Fails if any alias or token is empty.
    pub fn from_pairs<I, K, V>(name: impl Into<String>, pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::empty(name).with_overrides(pairs)
    }

    /// The sheet glint uses when nothing else is configured.
    #[must_use]
    pub fn default_sheet() -> Self {
        builtin::default_sheet()
    }

    /// Parse a sheet from TOML.
    ///
    /// ```toml
    /// base = "default"   # optional preset, defaults to "default"
    ///
    /// [styles]
    /// error = "red"
    /// path = "0cc"
    /// ```
    ///
    /// # Errors
    ///
    /// Fails on malformed TOML, an unknown `base`, or empty names/tokens.
    pub fn from_toml(src: &str) -> Result<Self> {
        #[derive(Deserialize)]
        #[serde(deny_unknown_fields)]
        struct SheetFile {
            base: Option<String>,
            #[serde(default)]
            styles: BTreeMap<String, String>,
        }

        let file: SheetFile = toml::from_str(src)?;
        let base = match file.base {
            Some(name) => builtin::builtin_sheet(&name).ok_or(ThemeError::UnknownBase(name))?,
            None => Self::default_sheet(),
        };
        base.with_overrides(file.styles)
    }

    /// Return a copy with `pairs` layered over the existing aliases.
    ///
    /// # Errors
    ///
    /// Fails if any alias or token is empty.
    pub fn with_overrides<I, K, V>(mut self, pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (name, token) in pairs {
            let name = name.into();
            let token = token.into();
            if name.is_empty() {
                return Err(ThemeError::EmptyName);
            }
            if token.is_empty() {
                return Err(ThemeError::EmptyToken { name });
            }
            if TermColor::parse(&token).is_none() {
                log::warn!("style {name:?} maps to {token:?}, which is not a known color");
            }
            if let Some(previous) = self.styles.get(&name) {
                log::debug!("style {name:?}: {previous:?} overridden by {token:?}");
            }
            self.styles.insert(name, token);
        }
        Ok(self)
    }

    /// Name of this sheet (e.g. `"default"`).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The token an alias maps to, if it is an alias.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.styles.get(name).map(String::as_str)
    }

    /// Substitute `name` if it is an alias; otherwise return it untouched.
    ///
    /// Substitution is a single step. An alias whose token is itself an
    /// alias name is not followed further.
    #[must_use]
    pub fn resolve<'a>(&'a self, name: &'a str) -> &'a str {
        self.get(name).unwrap_or(name)
    }

    /// All `(alias, token)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.styles.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of aliases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Whether the sheet has no aliases.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self::default_sheet()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_aliases() {
        let sheet = StyleSheet::default();
        assert_eq!(sheet.name(), "default");
        assert_eq!(sheet.get("dim"), Some("888"));
        assert_eq!(sheet.get("timestamp"), Some("0cc"));
        assert_eq!(sheet.get("warning"), Some("f60"));
        assert_eq!(sheet.get("error"), Some("c00"));
        assert_eq!(sheet.len(), 4);
    }

    #[test]
    fn resolve_passes_through_non_aliases() {
        let sheet = StyleSheet::default();
        assert_eq!(sheet.resolve("error"), "c00");
        assert_eq!(sheet.resolve("green"), "green");
        assert_eq!(sheet.resolve("abc"), "abc");
    }

    #[test]
    fn resolve_is_single_step() {
        let sheet = StyleSheet::from_pairs("t", [("a", "b"), ("b", "red")]).unwrap();
        assert_eq!(sheet.resolve("a"), "b");
    }

    #[test]
    fn overrides_replace_and_extend() {
        let sheet = StyleSheet::default()
            .with_overrides([("error", "red"), ("path", "0c0")])
            .unwrap();
        assert_eq!(sheet.resolve("error"), "red");
        assert_eq!(sheet.resolve("path"), "0c0");
        assert_eq!(sheet.resolve("warning"), "f60");
    }

    #[test]
    fn empty_name_is_rejected() {
        let err = StyleSheet::default().with_overrides([("", "red")]).unwrap_err();
        assert!(matches!(err, ThemeError::EmptyName));
    }

    #[test]
    fn empty_token_is_rejected() {
        let err = StyleSheet::default().with_overrides([("error", "")]).unwrap_err();
        assert!(matches!(err, ThemeError::EmptyToken { ref name } if name == "error"));
        assert_eq!(err.to_string(), "style alias \"error\" has an empty color token");
    }

    #[test]
    fn unknown_token_is_kept() {
        // Unresolvable tokens are legal; they render unstyled.
        let sheet = StyleSheet::default().with_overrides([("odd", "nope")]).unwrap();
        assert_eq!(sheet.resolve("odd"), "nope");
    }

    #[test]
    fn iter_is_name_ordered() {
        let sheet = StyleSheet::default();
        let names: Vec<_> = sheet.iter().map(|(k, _)| k).collect();
        assert_eq!(names, ["dim", "error", "timestamp", "warning"]);
    }

    // ── TOML ────────────────────────────────────────────────────────────

    #[test]
    fn toml_overrides_default() {
        let sheet = StyleSheet::from_toml("[styles]\nerror = \"red\"\n").unwrap();
        assert_eq!(sheet.name(), "default");
        assert_eq!(sheet.resolve("error"), "red");
        assert_eq!(sheet.resolve("dim"), "888");
    }

    #[test]
    fn toml_with_base() {
        let sheet = StyleSheet::from_toml("base = \"basic\"").unwrap();
        assert_eq!(sheet.name(), "basic");
        assert_eq!(sheet.resolve("error"), "red");
    }

    #[test]
    fn toml_empty_is_default() {
        assert_eq!(StyleSheet::from_toml("").unwrap(), StyleSheet::default());
    }

    #[test]
    fn toml_unknown_base() {
        let err = StyleSheet::from_toml("base = \"neon\"").unwrap_err();
        assert!(matches!(err, ThemeError::UnknownBase(ref n) if n == "neon"));
    }

    #[test]
    fn toml_syntax_error() {
        let err = StyleSheet::from_toml("[styles\n").unwrap_err();
        assert!(matches!(err, ThemeError::Parse(_)));
    }

    #[test]
    fn toml_unknown_field() {
        assert!(StyleSheet::from_toml("colour = 1").is_err());
    }
}
