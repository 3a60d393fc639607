// SPDX-License-Identifier: MIT
//
// Span — the styled-text composition tree.
//
// A Span owns an ordered list of children (literal text or nested spans)
// and an optional style: foreground token, background token, underline.
// Spans are built once and never mutated; larger output is made by
// composing spans into new spans.
//
// Rendering has two projections:
//
//   plain  — the literal text of every descendant, in order.
//   ansi   — the same text wrapped in SGR codes, scoped per span:
//
//              bg-start fg-start ul-start  children  ul-end fg-reset bg-reset
//
//            Attributes that are absent (or whose token does not resolve)
//            emit nothing on either side.
//
// A span built with `plaintext = true` renders plain no matter what
// styling it or its ancestors carry. The flag is fixed at construction,
// so toggling color on the facade only affects spans built afterwards.
//
// Visible length never looks at escape codes: it is the grapheme count of
// the plain projection, which is what padding is computed against.

use std::fmt;
use std::io::{self, Write};

use unicode_segmentation::UnicodeSegmentation;

use crate::ansi;
use crate::color::TermColor;

// ─── Style ───────────────────────────────────────────────────────────────────

/// Styling attributes of a single span.
///
/// Color fields hold concrete tokens (`"green"`, `"c00"`). Symbolic names
/// must already be substituted by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    /// Foreground color token.
    pub color: Option<String>,
    /// Background color token.
    pub background: Option<String>,
    /// Underline the content.
    pub underline: bool,
}

impl Style {
    /// No attributes at all.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            color: None,
            background: None,
            underline: false,
        }
    }

    /// Only a foreground color.
    #[must_use]
    pub fn fg(token: impl Into<String>) -> Self {
        Self {
            color: Some(token.into()),
            ..Self::none()
        }
    }

    /// Only a background color.
    #[must_use]
    pub fn bg(token: impl Into<String>) -> Self {
        Self {
            background: Some(token.into()),
            ..Self::none()
        }
    }

    /// Only underline.
    #[must_use]
    pub fn underlined() -> Self {
        Self {
            underline: true,
            ..Self::none()
        }
    }
}

// ─── Content ─────────────────────────────────────────────────────────────────

/// Anything that can be placed inside a span.
///
/// Call sites mix strings, numbers and nested spans freely; every shape is
/// normalized into span children when the span is built. Sequences are
/// spliced in place, they do not introduce a styling scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Literal(String),
    Span(Span),
    Sequence(Vec<Content>),
}

impl Content {
    /// The empty sequence.
    #[must_use]
    pub const fn empty() -> Self {
        Self::Sequence(Vec::new())
    }
}

impl From<&str> for Content {
    fn from(s: &str) -> Self {
        Self::Literal(s.to_owned())
    }
}

impl From<&String> for Content {
    fn from(s: &String) -> Self {
        Self::Literal(s.clone())
    }
}

impl From<String> for Content {
    fn from(s: String) -> Self {
        Self::Literal(s)
    }
}

impl From<char> for Content {
    fn from(c: char) -> Self {
        Self::Literal(c.to_string())
    }
}

impl From<Span> for Content {
    fn from(span: Span) -> Self {
        Self::Span(span)
    }
}

impl<T: Into<Self>> From<Vec<T>> for Content {
    fn from(items: Vec<T>) -> Self {
        Self::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Self>, const N: usize> From<[T; N]> for Content {
    fn from(items: [T; N]) -> Self {
        Self::Sequence(items.into_iter().map(Into::into).collect())
    }
}

macro_rules! content_from_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Content {
                fn from(value: $ty) -> Self {
                    Self::Literal(value.to_string())
                }
            }
        )*
    };
}

content_from_display!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

/// Build a [`Content::Sequence`] from mixed items.
///
/// ```
/// use glint_term::content;
/// use glint_term::span::{Span, Style};
///
/// let inner = Span::new(Style::fg("green"), "kermit", true);
/// let span = Span::plain(content!["it's ", inner, " and ", 42], true);
/// assert_eq!(span.render_plain(), "it's kermit and 42");
/// ```
#[macro_export]
macro_rules! content {
    ($($item:expr),* $(,)?) => {
        $crate::span::Content::Sequence(vec![$($crate::span::Content::from($item)),*])
    };
}

// ─── Span ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
enum Child {
    Text(String),
    Span(Span),
}

/// An immutable node of styled text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    style: Style,
    children: Vec<Child>,
    plaintext: bool,
}

impl Span {
    /// Build a span, flattening `content` into its children.
    #[must_use]
    pub fn new(style: Style, content: impl Into<Content>, plaintext: bool) -> Self {
        let mut children = Vec::new();
        flatten_into(content.into(), &mut children);
        Self {
            style,
            children,
            plaintext,
        }
    }

    /// A span with no styling of its own.
    #[must_use]
    pub fn plain(content: impl Into<Content>, plaintext: bool) -> Self {
        Self::new(Style::none(), content, plaintext)
    }

    /// Whether this span suppresses escape codes.
    #[inline]
    #[must_use]
    pub const fn is_plaintext(&self) -> bool {
        self.plaintext
    }

    /// Number of visible characters (grapheme clusters), ignoring styling.
    #[must_use]
    pub fn visible_length(&self) -> usize {
        self.children
            .iter()
            .map(|child| match child {
                Child::Text(text) => text.graphemes(true).count(),
                Child::Span(span) => span.visible_length(),
            })
            .sum()
    }

    /// The literal text of all descendants, with every style ignored.
    #[must_use]
    pub fn render_plain(&self) -> String {
        let mut out = String::new();
        self.push_plain(&mut out);
        out
    }

    /// The text wrapped in SGR codes, or plain text if `plaintext` is set.
    #[must_use]
    pub fn render_ansi(&self) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec<u8> never fails.
        let _ = self.write_ansi(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Stream the ANSI projection into `w`.
    ///
    /// # Errors
    ///
    /// Returns any error reported by the writer.
    pub fn write_ansi(&self, w: &mut impl Write) -> io::Result<()> {
        if self.plaintext {
            return w.write_all(self.render_plain().as_bytes());
        }

        let bg = lookup(self.style.background.as_deref());
        let fg = lookup(self.style.color.as_deref());
        let underline = self.style.underline;

        if let Some(color) = bg {
            ansi::bg(w, color)?;
        }
        if let Some(color) = fg {
            ansi::fg(w, color)?;
        }
        if underline {
            ansi::underline_on(w)?;
        }

        for child in &self.children {
            match child {
                Child::Text(text) => w.write_all(text.as_bytes())?,
                Child::Span(span) => span.write_ansi(w)?,
            }
        }

        if underline {
            ansi::underline_off(w)?;
        }
        if fg.is_some() {
            ansi::fg_reset(w)?;
        }
        if bg.is_some() {
            ansi::bg_reset(w)?;
        }
        Ok(())
    }

    /// Prepend spaces until the span is `target` characters wide.
    ///
    /// Never truncates: a span already at or past `target` comes back as is.
    #[must_use]
    pub fn pad_left(self, target: usize) -> Self {
        let len = self.visible_length();
        if target <= len {
            return self;
        }
        let plaintext = self.plaintext;
        Self {
            style: Style::none(),
            children: vec![Child::Text(spaces(target - len)), Child::Span(self)],
            plaintext,
        }
    }

    /// Append spaces until the span is `target` characters wide.
    ///
    /// Never truncates: a span already at or past `target` comes back as is.
    #[must_use]
    pub fn pad_right(self, target: usize) -> Self {
        let len = self.visible_length();
        if target <= len {
            return self;
        }
        let plaintext = self.plaintext;
        Self {
            style: Style::none(),
            children: vec![Child::Span(self), Child::Text(spaces(target - len))],
            plaintext,
        }
    }

    fn push_plain(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Child::Text(text) => out.push_str(text),
                Child::Span(span) => span.push_plain(out),
            }
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_ansi())
    }
}

fn flatten_into(content: Content, children: &mut Vec<Child>) {
    match content {
        Content::Literal(text) => children.push(Child::Text(text)),
        Content::Span(span) => children.push(Child::Span(span)),
        Content::Sequence(items) => {
            for item in items {
                flatten_into(item, children);
            }
        }
    }
}

fn lookup(token: Option<&str>) -> Option<TermColor> {
    let token = token?;
    let color = TermColor::parse(token);
    if color.is_none() {
        log::debug!("color token {token:?} did not resolve; rendering unstyled");
    }
    color
}

/// A run of `n` spaces.
#[must_use]
pub fn spaces(n: usize) -> String {
    " ".repeat(n)
}

// ─── Formatter ───────────────────────────────────────────────────────────────

/// One column of a [`format`] call: the styling applied to one content item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Formatter {
    pub color: Option<String>,
    pub background: Option<String>,
    pub underline: bool,
    pub pad_left: Option<usize>,
    pub pad_right: Option<usize>,
}

impl Formatter {
    #[must_use]
    pub fn color(mut self, token: impl Into<String>) -> Self {
        self.color = Some(token.into());
        self
    }

    #[must_use]
    pub fn background(mut self, token: impl Into<String>) -> Self {
        self.background = Some(token.into());
        self
    }

    #[must_use]
    pub const fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    #[must_use]
    pub const fn pad_left(mut self, width: usize) -> Self {
        self.pad_left = Some(width);
        self
    }

    #[must_use]
    pub const fn pad_right(mut self, width: usize) -> Self {
        self.pad_right = Some(width);
        self
    }

    /// Wrap `content` in this formatter's layers.
    ///
    /// Layers go on innermost first: color, background, underline, then
    /// left and right padding.
    #[must_use]
    pub fn apply(&self, content: Content, plaintext: bool) -> Span {
        let mut span = Span::plain(content, plaintext);
        if let Some(token) = &self.color {
            span = Span::new(Style::fg(token.as_str()), span, plaintext);
        }
        if let Some(token) = &self.background {
            span = Span::new(Style::bg(token.as_str()), span, plaintext);
        }
        if self.underline {
            span = Span::new(Style::underlined(), span, plaintext);
        }
        if let Some(width) = self.pad_left {
            span = span.pad_left(width);
        }
        if let Some(width) = self.pad_right {
            span = span.pad_right(width);
        }
        span
    }
}

/// Apply `formatters` positionally to `contents` and join the results.
///
/// A formatter with no matching content formats an empty string; content
/// past the last formatter is appended unformatted.
#[must_use]
pub fn format(formatters: &[Formatter], contents: Vec<Content>, plaintext: bool) -> Span {
    let mut contents = contents.into_iter();
    let mut parts: Vec<Content> = formatters
        .iter()
        .map(|formatter| {
            let content = contents.next().unwrap_or_else(Content::empty);
            Content::Span(formatter.apply(content, plaintext))
        })
        .collect();
    parts.extend(contents);
    Span::plain(parts, plaintext)
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // ── Helpers ───────────────────────────────────────────────────────────

    fn ansi(style: Style, content: impl Into<Content>) -> Span {
        Span::new(style, content, false)
    }

    fn strip(s: &str) -> String {
        String::from_utf8(strip_ansi_escapes::strip(s)).unwrap()
    }

    // ── Rendering ───────────────────────────────────────────────────────

    #[test]
    fn green_kermit() {
        let span = ansi(Style::fg("green"), "kermit");
        assert_eq!(span.render_ansi(), "\x1b[32mkermit\x1b[39m");
        assert_eq!(span.to_string(), "\x1b[32mkermit\x1b[39m");
    }

    #[test]
    fn nested_hex_color() {
        let easy = ansi(Style::fg("c00"), "easy");
        let span = Span::plain(content!["it's so ", easy, "!"], false);
        assert_eq!(span.render_ansi(), "it's so \x1b[38;5;160measy\x1b[39m!");
        assert_eq!(span.render_plain(), "it's so easy!");
    }

    #[test]
    fn attribute_order_is_bg_fg_underline() {
        let style = Style {
            color: Some("red".into()),
            background: Some("blue".into()),
            underline: true,
        };
        assert_eq!(
            ansi(style, "x").render_ansi(),
            "\x1b[44m\x1b[31m\x1b[4mx\x1b[24m\x1b[39m\x1b[49m"
        );
    }

    #[test]
    fn underline_only() {
        assert_eq!(ansi(Style::underlined(), "u").render_ansi(), "\x1b[4mu\x1b[24m");
    }

    #[test]
    fn background_only() {
        assert_eq!(ansi(Style::bg("0cc"), "b").render_ansi(), "\x1b[48;5;44mb\x1b[49m");
    }

    #[test]
    fn unresolvable_token_passes_text_through() {
        let span = ansi(Style::fg("not-a-color"), "hi");
        assert_eq!(span.render_ansi(), "hi");
    }

    #[test]
    fn unresolvable_fg_keeps_resolvable_bg() {
        let style = Style {
            color: Some("zzz".into()),
            background: Some("green".into()),
            underline: false,
        };
        assert_eq!(ansi(style, "hi").render_ansi(), "\x1b[42mhi\x1b[49m");
    }

    #[test]
    fn children_keep_insertion_order() {
        let span = Span::plain(content!["a", ansi(Style::fg("red"), "b"), "c", 1, 2.5], false);
        assert_eq!(span.render_plain(), "abc12.5");
    }

    // ── Plaintext ───────────────────────────────────────────────────────

    #[test]
    fn plaintext_span_renders_plain() {
        let span = Span::new(Style::fg("green"), "kermit", true);
        assert_eq!(span.render_ansi(), "kermit");
        assert_eq!(span.to_string(), "kermit");
    }

    #[test]
    fn plaintext_parent_hides_styled_children() {
        let inner = ansi(Style::fg("c00"), "easy");
        let outer = Span::new(Style::underlined(), content!["so ", inner], true);
        assert_eq!(outer.render_ansi(), outer.render_plain());
    }

    #[test]
    fn plaintext_child_inside_styled_parent() {
        let inner = Span::new(Style::fg("red"), "in", true);
        let outer = ansi(Style::underlined(), content!["<", inner, ">"]);
        assert_eq!(outer.render_ansi(), "\x1b[4m<in>\x1b[24m");
    }

    // ── Visible length ──────────────────────────────────────────────────

    #[test]
    fn visible_length_ignores_escapes() {
        let span = Span::plain(
            content!["it's so ", ansi(Style::fg("c00"), "easy"), "!"],
            false,
        );
        assert_eq!(span.visible_length(), 13);
        assert_eq!(span.visible_length(), span.render_plain().len());
    }

    #[test]
    fn visible_length_counts_graphemes() {
        let span = Span::plain(content!["e\u{301}", "日本"], false);
        assert_eq!(span.visible_length(), 3);
    }

    #[test]
    fn combining_marks_count_once_not_per_char() {
        // A decomposed "é" is two chars but one visible column.
        let span = Span::plain("e\u{301}", false);
        assert_eq!(span.render_plain().chars().count(), 2);
        assert_eq!(span.visible_length(), 1);
        assert_eq!(span.pad_left(3).render_plain(), "  e\u{301}");
    }

    #[test]
    fn underlined_style_sets_only_underline() {
        let style = Style::underlined();
        assert!(style.underline);
        assert_eq!(style.color, None);
        assert_eq!(style.background, None);
    }

    #[test]
    fn stripping_ansi_gives_plain_text() {
        for color in crate::color::BasicColor::ALL {
            let span = ansi(Style::fg(color.name()), "x");
            assert_eq!(strip(&span.render_ansi()), "x");
        }
        let tree = Span::plain(
            content![
                ansi(Style::bg("f60"), content!["warn", ansi(Style::underlined(), "ing")]),
                ": ",
                ansi(Style::fg("blue"), "deep")
            ],
            false,
        );
        assert_eq!(strip(&tree.render_ansi()), tree.render_plain());
    }

    // ── Padding ─────────────────────────────────────────────────────────

    #[test]
    fn pad_left_uses_visible_length() {
        let span = ansi(Style::fg("green"), "abc").pad_left(6);
        assert_eq!(span.render_plain(), "   abc");
        assert_eq!(span.render_ansi(), "   \x1b[32mabc\x1b[39m");
        assert_eq!(span.visible_length(), 6);
    }

    #[test]
    fn pad_right_appends() {
        let span = ansi(Style::fg("green"), "abc").pad_right(5);
        assert_eq!(span.render_ansi(), "\x1b[32mabc\x1b[39m  ");
    }

    #[test]
    fn padding_never_truncates() {
        let span = Span::plain("abcdef", false);
        assert_eq!(span.clone().pad_left(3), span);
        assert_eq!(span.clone().pad_right(6), span);
    }

    // ── Format ──────────────────────────────────────────────────────────

    #[test]
    fn format_applies_positionally() {
        let formatters = [
            Formatter::default().color("red").pad_left(4),
            Formatter::default().underline().pad_right(3),
        ];
        let span = format(&formatters, vec!["ab".into(), "c".into()], false);
        assert_eq!(span.render_plain(), "  abc  ");
        assert_eq!(
            span.render_ansi(),
            "  \x1b[31mab\x1b[39m\x1b[4mc\x1b[24m  "
        );
    }

    #[test]
    fn format_layers_color_then_background_then_underline() {
        let f = Formatter::default().color("red").background("white").underline();
        let span = format(&[f], vec!["x".into()], false);
        assert_eq!(
            span.render_ansi(),
            "\x1b[4m\x1b[47m\x1b[31mx\x1b[39m\x1b[49m\x1b[24m"
        );
    }

    #[test]
    fn format_sequence_content() {
        let f = Formatter::default().pad_left(5);
        let span = format(&[f], vec![content!["a", "b"]], true);
        assert_eq!(span.render_ansi(), "   ab");
    }

    #[test]
    fn format_extra_content_is_unformatted() {
        let span = format(&[Formatter::default().color("red")], vec!["a".into(), "b".into()], false);
        assert_eq!(span.render_ansi(), "\x1b[31ma\x1b[39mb");
    }

    #[test]
    fn format_missing_content_is_empty() {
        let f = Formatter::default().pad_right(2);
        let span = format(&[f], Vec::new(), true);
        assert_eq!(span.render_plain(), "  ");
    }
}
