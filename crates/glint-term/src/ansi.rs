// SPDX-License-Identifier: MIT
//
// ANSI escape sequence generation.
//
// Pure functions that write escape sequences to any `impl Write`. No state,
// no decisions about when to emit — spans and the status updater decide
// that. This module only knows the byte-level encoding of the handful of
// SGR codes glint uses, plus the single-line clear.
//
// All functions return `io::Result` propagated from the underlying writer.
// Writing into a `Vec<u8>` never fails.

use std::io::{self, Write};

use crate::color::{Layer, TermColor};

// ─── Foreground Color ────────────────────────────────────────────────────────

/// Set the foreground (text) color.
///
/// Basic colors use SGR 30–37, cube entries the 256-color form `38;5;N`.
#[inline]
pub fn fg(w: &mut impl Write, color: TermColor) -> io::Result<()> {
    w.write_all(color.start(Layer::Foreground).as_bytes())
}

/// Restore the default foreground color (SGR 39).
#[inline]
pub fn fg_reset(w: &mut impl Write) -> io::Result<()> {
    w.write_all(Layer::Foreground.reset().as_bytes())
}

// ─── Background Color ────────────────────────────────────────────────────────

/// Set the background color.
///
/// Same encoding strategy as [`fg`] with the background codes
/// (40–47, `48;5;N`).
#[inline]
pub fn bg(w: &mut impl Write, color: TermColor) -> io::Result<()> {
    w.write_all(color.start(Layer::Background).as_bytes())
}

/// Restore the default background color (SGR 49).
#[inline]
pub fn bg_reset(w: &mut impl Write) -> io::Result<()> {
    w.write_all(Layer::Background.reset().as_bytes())
}

// ─── Underline ───────────────────────────────────────────────────────────────

/// Start underlining (SGR 4).
#[inline]
pub fn underline_on(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[4m")
}

/// Stop underlining (SGR 24).
#[inline]
pub fn underline_off(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[24m")
}

// ─── Line Clear ──────────────────────────────────────────────────────────────

/// The sequence that blanks the current line: `\r`, `width - 1` spaces, `\r`.
///
/// One column short of the full width so terminals that wrap at the last
/// column never scroll. A width of 0 is treated as 1.
#[must_use]
pub fn clear_line_sequence(width: usize) -> String {
    let mut seq = String::with_capacity(width + 2);
    seq.push('\r');
    seq.extend(std::iter::repeat_n(' ', width.saturating_sub(1)));
    seq.push('\r');
    seq
}

// ─── Tests ───────────────────────────────────────────────────────────────────
