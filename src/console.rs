// SPDX-License-Identifier: MIT
//
// Console — the facade that binds spans, style aliases and the status line
// to a pair of writers.
//
// The console owns its output and error writers; nothing here touches a
// process-wide stream unless the caller asked for `Console::stdio`. Style
// names go through the console's sheet before they reach a span, so spans
// only ever carry concrete color tokens.
//
// Color is decided per span at build time: the console stamps its current
// `plaintext` flag on every span it creates. Flipping `use_color` later does
// not restyle spans that already exist.

use std::io::{self, Stderr, Stdout, Write};

use glint_term::span::{self, Content, Formatter, Span, Style};
use glint_term::status::{Clock, StatusUpdater, SystemClock};
use glint_term::terminal::{self, Stream};
use glint_theme::StyleSheet;

use crate::config::Options;

/// Styled output to a pair of writers, plus a throttled status line.
#[derive(Debug)]
pub struct Console<O, E, C = SystemClock> {
    out: O,
    err: E,
    styles: StyleSheet,
    updater: StatusUpdater<C>,
    plaintext: bool,
    quiet: bool,
    interactive: bool,
}

impl Console<Stdout, Stderr> {
    /// A console on the process's stdout and stderr.
    ///
    /// Interactive (status line, line clearing) when stdout is a terminal;
    /// colored by default under the same condition.
    ///
    /// # Errors
    ///
    /// Fails if the configured style sheet cannot be built.
    pub fn stdio(options: &Options) -> glint_theme::Result<Self> {
        let interactive = terminal::is_tty(Stream::Stdout);
        Self::new(io::stdout(), io::stderr(), options, interactive)
    }
}

impl<O: Write, E: Write> Console<O, E> {
    /// A console on arbitrary writers.
    ///
    /// `interactive` says whether `out` is a terminal that understands `\r`
    /// redraws. Without an explicit width the terminal width is queried.
    ///
    /// # Errors
    ///
    /// Fails if the configured style sheet cannot be built.
    pub fn new(out: O, err: E, options: &Options, interactive: bool) -> glint_theme::Result<Self> {
        Self::with_clock(out, err, options, interactive, SystemClock::new())
    }
}

impl<O: Write, E: Write, C: Clock> Console<O, E, C> {
    /// A console whose status line reads time from `clock`.
    ///
    /// # Errors
    ///
    /// Fails if the configured style sheet cannot be built.
    pub fn with_clock(
        out: O,
        err: E,
        options: &Options,
        interactive: bool,
        clock: C,
    ) -> glint_theme::Result<Self> {
        let styles = options.style_sheet()?;
        let width = options
            .width
            .unwrap_or_else(|| usize::from(terminal::screen_width()))
            .max(1);
        let plaintext = !options.use_color.unwrap_or(interactive);
        let quiet = options.quiet.unwrap_or(false);

        log::debug!(
            "console: width={width} color={} interactive={interactive} theme={}",
            !plaintext,
            styles.name()
        );

        Ok(Self {
            out,
            err,
            styles,
            updater: StatusUpdater::with_clock(width, options.frequency(), clock),
            plaintext,
            quiet,
            interactive,
        })
    }

    // ─── Settings ───────────────────────────────────────────────────────

    /// Emit escape codes in spans built from now on.
    pub fn use_color(&mut self, enabled: bool) {
        self.plaintext = !enabled;
    }

    /// Suppress verbose output and the status line.
    pub fn quiet(&mut self, quiet: bool) {
        self.quiet = quiet;
    }

    #[must_use]
    pub const fn is_plaintext(&self) -> bool {
        self.plaintext
    }

    #[must_use]
    pub const fn is_quiet(&self) -> bool {
        self.quiet
    }

    #[must_use]
    pub const fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// The alias table used by [`color`](Self::color) and friends.
    #[must_use]
    pub const fn styles(&self) -> &StyleSheet {
        &self.styles
    }

    /// Width of the status line, in columns.
    #[must_use]
    pub const fn screen_width(&self) -> usize {
        self.updater.width()
    }

    /// The status line state.
    #[must_use]
    pub const fn status_line(&self) -> &StatusUpdater<C> {
        &self.updater
    }

    #[must_use]
    pub const fn out(&self) -> &O {
        &self.out
    }

    #[must_use]
    pub const fn err(&self) -> &E {
        &self.err
    }

    /// Give back the writers.
    pub fn into_writers(self) -> (O, E) {
        (self.out, self.err)
    }

    // ─── Spans ──────────────────────────────────────────────────────────

    /// Unstyled span.
    pub fn paint(&self, content: impl Into<Content>) -> Span {
        Span::plain(content, self.plaintext)
    }

    /// Foreground color; `name` may be a style alias or a color token.
    pub fn color(&self, name: &str, content: impl Into<Content>) -> Span {
        Span::new(Style::fg(self.styles.resolve(name)), content, self.plaintext)
    }

    /// Background color; `name` may be a style alias or a color token.
    pub fn background_color(&self, name: &str, content: impl Into<Content>) -> Span {
        Span::new(Style::bg(self.styles.resolve(name)), content, self.plaintext)
    }

    pub fn underline(&self, content: impl Into<Content>) -> Span {
        Span::new(Style::underlined(), content, self.plaintext)
    }

    /// Right-align `content` in `width` columns.
    pub fn pad_left(&self, width: usize, content: impl Into<Content>) -> Span {
        self.paint(content).pad_left(width)
    }

    /// Left-align `content` in `width` columns.
    pub fn pad_right(&self, width: usize, content: impl Into<Content>) -> Span {
        self.paint(content).pad_right(width)
    }

    /// Apply `formatters` positionally to `contents`, resolving style aliases.
    pub fn format(&self, formatters: &[Formatter], contents: Vec<Content>) -> Span {
        let resolved: Vec<Formatter> = formatters
            .iter()
            .map(|f| Formatter {
                color: f.color.as_deref().map(|n| self.styles.resolve(n).to_owned()),
                background: f
                    .background
                    .as_deref()
                    .map(|n| self.styles.resolve(n).to_owned()),
                ..f.clone()
            })
            .collect();
        span::format(&resolved, contents, self.plaintext)
    }

    /// `magnitude(number, base)` — e.g. `"1.2M"`.
    #[must_use]
    pub fn to_magnitude(&self, number: f64, base: f64) -> String {
        glint_units::magnitude(number, base)
    }

    // ─── Output ─────────────────────────────────────────────────────────

    /// Write a line to the output writer, erasing the status line first.
    ///
    /// # Errors
    ///
    /// Returns any error reported by the writer.
    pub fn display(&mut self, content: impl Into<Content>) -> io::Result<()> {
        let line = self.line(content);
        self.out.write_all(line.as_bytes())
    }

    /// Write a line to the error writer, erasing the status line first.
    ///
    /// # Errors
    ///
    /// Returns any error reported by the writer.
    pub fn display_to_err(&mut self, content: impl Into<Content>) -> io::Result<()> {
        let line = self.line(content);
        self.err.write_all(line.as_bytes())
    }

    /// Like [`display`](Self::display), but silent when quiet.
    ///
    /// # Errors
    ///
    /// Returns any error reported by the writer.
    pub fn display_verbose(&mut self, content: impl Into<Content>) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.display(content)
    }

    /// `ERROR: <content>` on the error writer, the label in the `error` style.
    ///
    /// # Errors
    ///
    /// Returns any error reported by the writer.
    pub fn display_error(&mut self, content: impl Into<Content>) -> io::Result<()> {
        let label = self.color("error", "ERROR");
        self.display_to_err(vec![Content::from(label), ": ".into(), content.into()])
    }

    /// `WARNING: <content>` on the error writer, the label in the `warning` style.
    ///
    /// # Errors
    ///
    /// Returns any error reported by the writer.
    pub fn display_warning(&mut self, content: impl Into<Content>) -> io::Result<()> {
        let label = self.color("warning", "WARNING");
        self.display_to_err(vec![Content::from(label), ": ".into(), content.into()])
    }

    /// Redraw the status line with `content`, or erase it with `None`.
    ///
    /// Does nothing unless the console is interactive and not quiet.
    /// Redraws are throttled; see [`StatusUpdater`].
    ///
    /// # Errors
    ///
    /// Returns any error reported by the writer.
    pub fn status(&mut self, content: Option<Content>) -> io::Result<()> {
        if !self.interactive || self.quiet {
            return Ok(());
        }
        let bytes = match content {
            Some(content) => {
                let text = self.paint(content).render_ansi();
                self.updater.update(Some(&text))
            }
            None => self.updater.clear(),
        };
        if bytes.is_empty() {
            return Ok(());
        }
        self.out.write_all(bytes.as_bytes())?;
        self.out.flush()
    }

    /// Render `content` as a full line, prefixed by a status clear if needed.
    fn line(&mut self, content: impl Into<Content>) -> String {
        let mut line = if self.interactive {
            self.updater.clear()
        } else {
            String::new()
        };
        line.push_str(&self.paint(content).render_ansi());
        line.push('\n');
        line
    }
}
