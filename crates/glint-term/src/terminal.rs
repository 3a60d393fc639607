// SPDX-License-Identifier: MIT
//
// Terminal queries — is a stream a TTY, and how wide is it.
//
// Safety: This module necessarily uses `unsafe` for isatty and ioctl
// (TIOCGWINSZ). These are the standard POSIX interfaces for terminal
// queries — there is no safe alternative in std. Each unsafe block is a
// single libc call on a well-known file descriptor.
#![allow(unsafe_code)]
//
// Nothing here is consulted by spans or the status updater. The facade
// asks once at construction and hands plain values (width, interactive)
// to the core.

/// Width used when the terminal size cannot be queried.
pub const FALLBACK_WIDTH: u16 = 80;

// ─── Size ───────────────────────────────────────────────────────────────────

/// Terminal dimensions in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    /// Number of columns (width in character cells).
    pub cols: u16,
    /// Number of rows (height in character cells).
    pub rows: u16,
}

// ─── Streams ────────────────────────────────────────────────────────────────

/// A standard stream of the current process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

impl Stream {
    #[cfg(unix)]
    const fn fd(self) -> libc::c_int {
        match self {
            Self::Stdout => libc::STDOUT_FILENO,
            Self::Stderr => libc::STDERR_FILENO,
        }
    }
}

// ─── Terminal Queries ───────────────────────────────────────────────────────

/// Query the size of the terminal attached to `stream` via `ioctl(TIOCGWINSZ)`.
///
/// Returns `None` if the stream is not a terminal or the query fails.
#[cfg(unix)]
#[must_use]
pub fn get_size(stream: Stream) -> Option<Size> {
    let mut ws: libc::winsize = unsafe { std::mem::zeroed() };
    let result = unsafe { libc::ioctl(stream.fd(), libc::TIOCGWINSZ, &mut ws) };

    if result == 0 && ws.ws_col > 0 && ws.ws_row > 0 {
        Some(Size {
            cols: ws.ws_col,
            rows: ws.ws_row,
        })
    } else {
        None
    }
}

#[cfg(not(unix))]
#[must_use]
pub fn get_size(_stream: Stream) -> Option<Size> {
    None
}

/// Check whether `stream` is connected to a terminal (TTY).
#[cfg(unix)]
#[must_use]
pub fn is_tty(stream: Stream) -> bool {
    unsafe { libc::isatty(stream.fd()) != 0 }
}

#[cfg(not(unix))]
#[must_use]
pub fn is_tty(_stream: Stream) -> bool {
    false
}

/// Column count of the terminal on stdout, else on stderr, else
/// [`FALLBACK_WIDTH`].
///
/// Stderr covers `tool | less`, where stdout is a pipe but the user is
/// still looking at a terminal.
#[must_use]
pub fn screen_width() -> u16 {
    [Stream::Stdout, Stream::Stderr]
        .into_iter()
        .filter(|&stream| is_tty(stream))
        .find_map(get_size)
        .map_or(FALLBACK_WIDTH, |size| size.cols)
}

// ─── Tests ──────────────────────────────────────────────────────────────────
