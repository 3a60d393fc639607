//! Named preset style sheets — ready-to-use alias tables.
//!
//! `default` uses hex shorthands and needs a 256-color terminal. `basic`
//! keeps to the eight standard colors for terminals that have nothing else.

use crate::sheet::StyleSheet;

const DEFAULT_STYLES: [(&str, &str); 4] = [
    ("dim", "888"),
    ("timestamp", "0cc"),
    ("warning", "f60"),
    ("error", "c00"),
];

const BASIC_STYLES: [(&str, &str); 4] = [
    ("dim", "white"),
    ("timestamp", "cyan"),
    ("warning", "yellow"),
    ("error", "red"),
];

/// Look up a builtin sheet by name.
///
/// Returns `None` if the name is not recognized.
#[must_use]
pub fn builtin_sheet(name: &str) -> Option<StyleSheet> {
    let pairs = match name {
        "default" => DEFAULT_STYLES,
        "basic" => BASIC_STYLES,
        _ => return None,
    };
    Some(preset(name, pairs))
}

/// List all available builtin sheet names.
#[must_use]
pub const fn builtin_names() -> &'static [&'static str] {
    &["default", "basic"]
}

pub(crate) fn default_sheet() -> StyleSheet {
    preset("default", DEFAULT_STYLES)
}

fn preset(name: &str, pairs: [(&str, &str); 4]) -> StyleSheet {
    // Preset tables are non-empty literals, so no override can fail.
    StyleSheet::from_pairs(name, pairs).unwrap_or_else(|_| StyleSheet::empty(name))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
