//! Glyphs, escape codes and style constants for prompt output
//!
//! The glyphs live in Nerd Font private-use ranges, so the prompt needs a
//! patched font to look right. Every glyph here is a single terminal column.

use anstyle::{AnsiColor, Color as AnstyleColor, Style};

// ============================================================================
// Separators
// ============================================================================

/// Rounded separator pointing right (closes a block on its right edge)
pub const SEP_RIGHT: &str = "\u{e0b4}";

/// Rounded separator pointing left (opens a block on its left edge)
pub const SEP_LEFT: &str = "\u{e0b6}";

/// Default fill between the left and right halves of the prompt
pub const SPACER: &str = "\u{b7}";

/// Second-line input chevron
pub const CHEVRON: &str = "\u{f054}";

// ============================================================================
// Part Glyphs
// ============================================================================

/// Shown instead of `user@host` outside SSH sessions. The trailing space keeps
/// the glyph from touching the part padding in fonts that draw it wide.
pub const USER_PLACEHOLDER: &str = "\u{f31b} ";

/// Used when `USER` is unset
pub const UNKNOWN_USER: &str = "????";

/// Used when the host name can't be resolved
pub const UNKNOWN_HOST: &str = "[unknown host]";

/// Used when the working directory no longer exists
pub const NOT_FOUND: &str = "[not found]";

pub const BRANCH_SYMBOL: &str = "\u{e0a0}";
pub const DIR_SYMBOL: &str = "\u{f07c}";
pub const VENV_SYMBOL: &str = "\u{e73c}";

// ============================================================================
// Git Status Markers
// ============================================================================

pub const GIT_AHEAD: &str = "↑";
pub const GIT_BEHIND: &str = "↓";
pub const GIT_STAGED: &str = "+";
pub const GIT_UNSTAGED: &str = "~";
pub const GIT_UNTRACKED: &str = "?";
pub const GIT_STASHED: &str = "*";
pub const GIT_UNMERGED: &str = "!";

// ============================================================================
// Limits
// ============================================================================

/// Path budget (in columns) before parent directories get collapsed
pub const MAX_PATH_LENGTH: usize = 70;

// ============================================================================
// Raw Codes
// ============================================================================

/// Turns bold (and dim) off without touching colors
pub(crate) const NORMAL_INTENSITY: &str = "\x1b[22m";

// ============================================================================
// Diagnostic Styles (stderr only)
// ============================================================================

/// Error style (red) - use as `{ERROR}text{ERROR:#}`
pub const ERROR: Style = Style::new().fg_color(Some(AnstyleColor::Ansi(AnsiColor::Red)));
