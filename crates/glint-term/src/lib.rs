// SPDX-License-Identifier: MIT
//
// glint-term — terminal styling engine for glint.
//
// Composes styled text into spans, renders them as SGR-escaped or plain
// strings, and throttles a single self-clearing status line. Colors are
// either one of the eight basic names or a 3-digit hex shorthand snapped
// onto the xterm 256-color cube.
//
// Everything here returns strings or writes into a caller-supplied
// `impl Write`. No module holds a reference to a process stream.

pub mod ansi;
pub mod color;
pub mod span;
pub mod status;
pub mod terminal;

pub use color::{Layer, TermColor};
pub use span::{Content, Formatter, Span, Style};
pub use status::{Clock, ManualClock, StatusUpdater, SystemClock};
