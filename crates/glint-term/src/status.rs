// SPDX-License-Identifier: MIT
//
// Status line — a throttled, self-clearing single-line redraw.
//
// The updater never writes anything itself. It returns the bytes a caller
// should write, which keeps it free of stream handling and trivially
// testable.
//
// Two independent gates:
//
//   throttle — `update` emits at most once per `frequency`. A suppressed
//              request still replaces the pending text, so the next emit
//              shows the latest text, not the first one.
//
//   shown    — set by every emit, cleared by `clear`. Only a shown line is
//              erased, so `clear` is idempotent and never erases a line
//              that was never drawn.
//
// Time comes from an injected `Clock`. `SystemClock` wraps `Instant`;
// `ManualClock` lets tests step time explicitly.
//
// Not thread-safe by design of its API (`&mut self`); callers that share
// one status line across tasks serialize access themselves.

use std::cell::Cell;
use std::time::{Duration, Instant};

use crate::ansi;

/// Default minimum interval between two redraws.
pub const DEFAULT_FREQUENCY: Duration = Duration::from_millis(250);

// ─── Clock ───────────────────────────────────────────────────────────────────

/// A monotonic time source, measured from an arbitrary origin.
pub trait Clock {
    /// Time elapsed since this clock's origin.
    fn now(&self) -> Duration;
}

/// Wall-clock time relative to when the clock was created.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// A clock that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    /// A clock reading `start`.
    #[must_use]
    pub const fn at(start: Duration) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    /// Move the clock forward by `by`.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Duration {
        (**self).now()
    }
}

// ─── StatusUpdater ───────────────────────────────────────────────────────────

/// Throttled redraw state for one status line.
#[derive(Debug)]
pub struct StatusUpdater<C = SystemClock> {
    width: usize,
    frequency: Duration,
    clock: C,
    /// `None` until the first emit, which therefore always passes.
    last_emit: Option<Duration>,
    pending: Option<String>,
    shown: bool,
}

impl StatusUpdater<SystemClock> {
    /// A status line `width` columns wide backed by the system clock.
    #[must_use]
    pub fn new(width: usize, frequency: Duration) -> Self {
        Self::with_clock(width, frequency, SystemClock::new())
    }
}

impl<C: Clock> StatusUpdater<C> {
    /// A status line with an explicit time source.
    #[must_use]
    pub const fn with_clock(width: usize, frequency: Duration, clock: C) -> Self {
        Self {
            width,
            frequency,
            clock,
            last_emit: None,
            pending: None,
            shown: false,
        }
    }

    /// Request a redraw, reading the time from the clock.
    ///
    /// Returns the bytes to write: empty when there is nothing to show or
    /// the request falls inside the throttle window.
    pub fn update(&mut self, text: Option<&str>) -> String {
        let now = self.clock.now();
        self.update_at(now, text)
    }

    /// Request a redraw at an explicit time. See [`update`](Self::update).
    pub fn update_at(&mut self, now: Duration, text: Option<&str>) -> String {
        if let Some(text) = text {
            self.pending = Some(text.to_owned());
        }
        let Some(pending) = self.pending.as_deref() else {
            return String::new();
        };

        if let Some(last) = self.last_emit {
            if now.saturating_sub(last) < self.frequency {
                log::trace!("status redraw suppressed ({:?} since last)", now.saturating_sub(last));
                return String::new();
            }
        }

        let mut out = self.clear_sequence();
        out.push_str(pending);
        self.last_emit = Some(now);
        self.shown = true;
        out
    }

    /// Erase the line if something is on it.
    ///
    /// Returns the clear sequence once, then empty strings until the next
    /// emitted update.
    pub fn clear(&mut self) -> String {
        if self.shown {
            self.shown = false;
            self.clear_sequence()
        } else {
            String::new()
        }
    }

    /// `\r`, `width - 1` spaces, `\r`.
    #[must_use]
    pub fn clear_sequence(&self) -> String {
        ansi::clear_line_sequence(self.width)
    }

    /// Whether an emitted redraw is currently on the line.
    #[inline]
    #[must_use]
    pub const fn is_shown(&self) -> bool {
        self.shown
    }

    /// The most recently requested text.
    #[must_use]
    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[inline]
    #[must_use]
    pub const fn frequency(&self) -> Duration {
        self.frequency
    }

    /// The time source driving this updater.
    #[inline]
    pub const fn clock(&self) -> &C {
        &self.clock
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
