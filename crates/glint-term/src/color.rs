// SPDX-License-Identifier: MIT
//
// glint color resolution — color tokens to terminal palette entries.
//
// Two token shapes are understood:
//
//   basic name   "black" .. "white"   → SGR 30–37 / 40–47
//   hex shorthand "rgb" (3 hex digits) → 256-color cube entry (16–231)
//
// A hex shorthand is widened to 24-bit by doubling each digit, then every
// channel snaps to the nearest of the six cube levels. The cube index is
// `16 + 36·r + 6·g + b` over the chosen level indices.
//
// Anything else is not an error. It resolves to `None` and the caller
// renders the text without styling.
//
// Symbolic style names ("error", "warning") never reach this module; they
// are substituted by the style sheet before resolution.

use std::fmt;

// ─── Basic Palette ───────────────────────────────────────────────────────────

/// One of the eight standard terminal colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BasicColor {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
}

impl BasicColor {
    /// All eight colors in palette order.
    pub const ALL: [Self; 8] = [
        Self::Black,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Magenta,
        Self::Cyan,
        Self::White,
    ];

    /// Look up a basic color by its lowercase name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "black" => Self::Black,
            "red" => Self::Red,
            "green" => Self::Green,
            "yellow" => Self::Yellow,
            "blue" => Self::Blue,
            "magenta" => Self::Magenta,
            "cyan" => Self::Cyan,
            "white" => Self::White,
            _ => return None,
        })
    }

    /// The lowercase name of this color.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
        }
    }

    /// Position in the palette (0–7).
    #[inline]
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }
}

// ─── Layer ───────────────────────────────────────────────────────────────────

/// Which side of the glyph a color applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    Foreground,
    Background,
}

impl Layer {
    /// The SGR sequence that restores this layer's default color.
    #[inline]
    #[must_use]
    pub const fn reset(self) -> &'static str {
        match self {
            Self::Foreground => "\x1b[39m",
            Self::Background => "\x1b[49m",
        }
    }
}

// ─── TermColor ───────────────────────────────────────────────────────────────

/// A resolved, terminal-ready color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TermColor {
    /// Standard palette entry, emitted as SGR 3X / 4X.
    Basic(BasicColor),
    /// Extended palette entry, emitted as SGR 38;5;N / 48;5;N.
    Indexed(u8),
}

impl TermColor {
    /// Parse a color token. Returns `None` for anything unrecognized.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        if let Some(basic) = BasicColor::from_name(token) {
            return Some(Self::Basic(basic));
        }
        cube_index(token).map(Self::Indexed)
    }

    /// The SGR sequence that starts this color on `layer`.
    #[must_use]
    pub fn start(self, layer: Layer) -> String {
        match (self, layer) {
            (Self::Basic(c), Layer::Foreground) => format!("\x1b[{}m", 30 + c.index()),
            (Self::Basic(c), Layer::Background) => format!("\x1b[{}m", 40 + c.index()),
            (Self::Indexed(idx), Layer::Foreground) => format!("\x1b[38;5;{idx}m"),
            (Self::Indexed(idx), Layer::Background) => format!("\x1b[48;5;{idx}m"),
        }
    }
}

impl fmt::Display for TermColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic(c) => f.write_str(c.name()),
            Self::Indexed(idx) => write!(f, "ansi256({idx})"),
        }
    }
}

// ─── Resolution ──────────────────────────────────────────────────────────────

/// Resolve a color token to the escape sequence that starts it on `layer`.
///
/// Returns `None` when the token is neither a basic name nor a 3-digit hex
/// shorthand. Callers treat that as "no styling".
#[must_use]
pub fn resolve(token: &str, layer: Layer) -> Option<String> {
    let resolved = TermColor::parse(token).map(|color| color.start(layer));
    if resolved.is_none() {
        log::debug!("color token {token:?} did not resolve; rendering unstyled");
    }
    resolved
}

/// Resolve a 3-digit hex shorthand (`"c00"`) to its 256-color cube index.
///
/// ```
/// use glint_term::color::cube_index;
///
/// assert_eq!(cube_index("c00"), Some(160));
/// assert_eq!(cube_index("fff"), Some(231));
/// assert_eq!(cube_index("red"), None);
/// ```
#[must_use]
pub fn cube_index(token: &str) -> Option<u8> {
    let (r, g, b) = parse_hex_triplet(token)?;
    Some(16 + 36 * nearest_level(r) + 6 * nearest_level(g) + nearest_level(b))
}

// ─── Cube Quantization ───────────────────────────────────────────────────────

/// Channel values of the six levels of the xterm 256-color cube.
pub const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

/// Index (0–5) of the cube level closest to `value`.
///
/// When `value` sits exactly between two levels the higher one wins, which
/// is how terminal palettes conventionally round.
#[must_use]
pub fn nearest_level(value: u8) -> u8 {
    let mut best = 0u8;
    let mut best_dist = u8::MAX;
    for (i, &level) in (0u8..).zip(CUBE_LEVELS.iter()) {
        let dist = value.abs_diff(level);
        if dist <= best_dist {
            best_dist = dist;
            best = i;
        }
    }
    best
}

/// Convert a 256-color cube index (16–231) back to its RGB channel values.
///
/// Returns `None` for indices outside the cube (the 16 system colors and
/// the grayscale ramp).
#[must_use]
pub fn cube_to_rgb(idx: u8) -> Option<(u8, u8, u8)> {
    if !(16..=231).contains(&idx) {
        return None;
    }
    let idx = idx - 16;
    let level = |i: u8| CUBE_LEVELS[usize::from(i)];
    Some((level(idx / 36), level((idx % 36) / 6), level(idx % 6)))
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

/// Expand `"rgb"` to 8-bit channels by doubling each digit (`c` → `0xcc`).
fn parse_hex_triplet(s: &str) -> Option<(u8, u8, u8)> {
    let &[r, g, b] = s.as_bytes() else {
        return None;
    };
    let widen = |d: u8| d << 4 | d;
    Some((
        widen(parse_hex_digit(r)?),
        widen(parse_hex_digit(g)?),
        widen(parse_hex_digit(b)?),
    ))
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
