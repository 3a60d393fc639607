// SPDX-License-Identifier: MIT
//
// glint — styled terminal text for command-line tools.
//
// This crate wires the workspace together:
//
//   glint-term   → colors, spans, ANSI rendering, status line, TTY queries
//   glint-theme  → style aliases ("error" → "c00")
//   glint-units  → significant-digit rounding, "1.2M" magnitudes
//
// `Console` is the entry point: it owns the writers, the style sheet and
// the status line, and builds spans that carry the right color setting.

pub mod config;
pub mod console;

pub use config::Options;
pub use console::Console;

pub use glint_term::content;
pub use glint_term::span::{Content, Formatter, Span, Style};
pub use glint_theme::StyleSheet;
pub use glint_units::{Rounding, magnitude, round_to_precision};
