//! Styling for prompt output.
//!
//! Prompt text is written for a shell's line editor, not for a terminal
//! directly: every escape sequence is wrapped in the shell's zero-width
//! markers so the editor doesn't count it toward the prompt width.
//! [`printable_length`] reverses both layers to measure what the user sees.
//!
//! Color codes come from anstyle. Prompt output bypasses anstream's
//! auto-detection: the shell captures it through a pipe, where anstream
//! would strip the colors.

use std::borrow::Cow;
use std::sync::LazyLock;

use ansi_str::AnsiStr;
use anstyle::{AnsiColor, Effects, Reset};
use regex::Regex;
use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

mod constants;

pub use constants::*;

/// Auto-detecting eprintln for diagnostics (respects NO_COLOR and friends)
pub use anstream::eprintln;

// ============================================================================
// Colors
// ============================================================================

/// The eight base ANSI colors a prompt part may use.
///
/// Names are lowercase everywhere they appear as text (config files,
/// environment overrides).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl From<Color> for AnsiColor {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => AnsiColor::Black,
            Color::Red => AnsiColor::Red,
            Color::Green => AnsiColor::Green,
            Color::Yellow => AnsiColor::Yellow,
            Color::Blue => AnsiColor::Blue,
            Color::Magenta => AnsiColor::Magenta,
            Color::Cyan => AnsiColor::Cyan,
            Color::White => AnsiColor::White,
        }
    }
}

// ============================================================================
// Zero-Width Markers
// ============================================================================

/// Which shell's zero-width markers wrap escape sequences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Markers {
    /// `%{ ... %}`
    #[default]
    Zsh,
    /// `\[ ... \]`
    Bash,
    /// Raw escape sequences, for plain terminals
    None,
}

impl Markers {
    fn delimiters(self) -> (&'static str, &'static str) {
        match self {
            Markers::Zsh => ("%{", "%}"),
            Markers::Bash => ("\\[", "\\]"),
            Markers::None => ("", ""),
        }
    }

    /// Wrap `s` so the shell treats it as occupying no columns.
    pub fn zero_width(self, s: impl AsRef<str>) -> String {
        let (open, close) = self.delimiters();
        format!("{open}{}{close}", s.as_ref())
    }

    /// A line break that doesn't disturb prompt width accounting.
    ///
    /// zsh wants the newline inside its markers; bash miscounts if it is.
    pub fn newline(self) -> String {
        match self {
            Markers::Zsh => self.zero_width("\n"),
            Markers::Bash | Markers::None => "\n".to_string(),
        }
    }
}

// ============================================================================
// Styling
// ============================================================================

/// Colors and attributes for one styled unit. `None` colors inherit the
/// terminal default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextStyle {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub bold: bool,
    pub underline: bool,
    pub reverse: bool,
}

impl TextStyle {
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            bold: false,
            underline: false,
            reverse: false,
        }
    }

    pub const fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    pub const fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    pub const fn colors(mut self, fg: Option<Color>, bg: Option<Color>) -> Self {
        self.fg = fg;
        self.bg = bg;
        self
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub const fn reverse(mut self) -> Self {
        self.reverse = true;
        self
    }
}

/// Apply `style` to `text`, ending with a full attribute reset so adjacent
/// units never bleed into each other.
///
/// Empty text is returned untouched: a styled empty string would still paint
/// a background block in some terminals.
pub fn style(text: &str, style: TextStyle, markers: Markers) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut out = String::with_capacity(text.len() + 48);
    if style.reverse {
        out.push_str(&markers.zero_width(Effects::INVERT.render().to_string()));
    }
    if style.underline {
        out.push_str(&markers.zero_width(Effects::UNDERLINE.render().to_string()));
    }
    if style.bold {
        out.push_str(&bold_on(markers));
    }
    if let Some(bg) = style.bg {
        out.push_str(&markers.zero_width(AnsiColor::from(bg).render_bg().to_string()));
    }
    if let Some(fg) = style.fg {
        out.push_str(&markers.zero_width(AnsiColor::from(fg).render_fg().to_string()));
    }
    out.push_str(text);
    out.push_str(&markers.zero_width(Reset.render().to_string()));
    out
}

/// The bold-on code alone, for spans that run to the end of a styled unit.
pub fn bold_on(markers: Markers) -> String {
    markers.zero_width(Effects::BOLD.render().to_string())
}

/// Bold a sub-span inside a larger styled run.
///
/// Only intensity is switched back off afterwards, so the surrounding
/// colors survive.
pub fn quick_bold(text: &str, markers: Markers) -> String {
    format!(
        "{}{text}{}",
        bold_on(markers),
        markers.zero_width(NORMAL_INTENSITY)
    )
}

// ============================================================================
// Width
// ============================================================================

/// Zero-width regions for every marker dialect, contents included.
static ZERO_WIDTH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)%\{.*?%\}|\\\[.*?\\\]").expect("zero-width pattern is valid")
});

/// Strip zero-width regions and raw ANSI codes, leaving only visible text.
pub fn strip_styling(s: &str) -> Cow<'_, str> {
    let visible = ZERO_WIDTH.replace_all(s, "");
    match visible {
        Cow::Borrowed(text) => text.ansi_strip(),
        Cow::Owned(text) => Cow::Owned(text.ansi_strip().into_owned()),
    }
}

/// Number of terminal columns `s` occupies once the shell has interpreted it.
///
/// Only used for width arithmetic. Wide glyphs count as two columns.
pub fn printable_length(s: &str) -> usize {
    strip_styling(s).width()
}

// ============================================================================
// Tests
// ============================================================================
