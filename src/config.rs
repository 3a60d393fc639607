// SPDX-License-Identifier: MIT
//
// Console options — what the caller (or a TOML file) may configure.
//
// Every field is optional. Missing values are filled in from the terminal
// at construction time (width, color) or from fixed defaults (frequency,
// quiet, styles).

use std::collections::BTreeMap;
use std::time::Duration;

use serde::Deserialize;

use glint_term::status::DEFAULT_FREQUENCY;
use glint_theme::StyleSheet;

/// Settings for a [`Console`](crate::Console).
///
/// ```toml
/// width = 100
/// frequency_ms = 100
/// use_color = true
/// quiet = false
/// theme = "basic"
///
/// [styles]
/// path = "0c0"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Options {
    /// Status line width. Defaults to the terminal width (80 if unknown).
    pub width: Option<usize>,
    /// Minimum milliseconds between status redraws.
    pub frequency_ms: Option<u64>,
    /// Force color on or off. Defaults to "on when stdout is a terminal".
    pub use_color: Option<bool>,
    /// Suppress verbose output and the status line.
    pub quiet: Option<bool>,
    /// Builtin style sheet to start from. Defaults to `"default"`.
    pub theme: Option<String>,
    /// Style alias overrides layered over the theme.
    pub styles: BTreeMap<String, String>,
}

impl Options {
    /// Parse options from TOML.
    ///
    /// # Errors
    ///
    /// Fails on malformed TOML or unknown keys.
    pub fn from_toml(src: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(src)
    }

    /// Layer `other` over `self`: any value set in `other` wins.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        self.width = other.width.or(self.width);
        self.frequency_ms = other.frequency_ms.or(self.frequency_ms);
        self.use_color = other.use_color.or(self.use_color);
        self.quiet = other.quiet.or(self.quiet);
        self.theme = other.theme.or(self.theme);
        self.styles.extend(other.styles);
        self
    }

    /// The throttle window for the status line.
    #[must_use]
    pub fn frequency(&self) -> Duration {
        self.frequency_ms.map_or(DEFAULT_FREQUENCY, Duration::from_millis)
    }

    /// Build the style sheet: the chosen theme plus overrides.
    ///
    /// # Errors
    ///
    /// Fails if the theme is unknown or an override is empty.
    pub fn style_sheet(&self) -> glint_theme::Result<StyleSheet> {
        let base = match &self.theme {
            Some(name) => glint_theme::builtin_sheet(name)
                .ok_or_else(|| glint_theme::ThemeError::UnknownBase(name.clone()))?,
            None => StyleSheet::default(),
        };
        base.with_overrides(self.styles.clone())
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
