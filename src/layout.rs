//! Fitting assembled segments to the terminal width.
//!
//! Three prompt shapes exist:
//!
//! - `bash`: left segment, fill, right-aligned right segment, then the
//!   chevron on a new line
//! - `left`: just the left segment and chevron (for shells with their own
//!   right prompt)
//! - `right`: just the right segment

use crate::config::PromptConfig;
use crate::parts::{PromptParts, chevron, path_part};
use crate::path::shorten_path;
use crate::render::{Side, assemble};
use crate::styling::{Markers, printable_length};

/// Columns left over between `left` and `right` on a line `width` wide.
///
/// One column is held back so the line never wraps. Negative means the two
/// halves overlap.
pub fn gap(width: usize, left: &str, right: &str) -> isize {
    let used = printable_length(left) + printable_length(right) + 1;
    width as isize - used as isize
}

/// `gap` copies of `fill`; nothing when the gap isn't positive.
pub fn spacer(gap: isize, fill: &str) -> String {
    fill.repeat(gap.max(0) as usize)
}

/// The full two-sided prompt.
///
/// If both halves don't fit, the path gets one more shortening pass with a
/// budget reduced by the overflow. Whatever that produces is used; a line
/// that still overflows just gets no fill.
pub fn bash_prompt(
    parts: &PromptParts,
    config: &PromptConfig,
    width: usize,
    markers: Markers,
) -> String {
    let mut left = assemble(parts.left(), Side::Left, markers);
    let right = assemble(parts.right(), Side::Right, markers);

    let mut space = gap(width, &left, &right);
    if space < 0 {
        let budget = printable_length(&parts.path_text) as isize + space - 2;
        let path_text = shorten_path(&parts.path_text, None, budget.max(0) as usize);
        log::debug!(
            "Prompt overflows {width} columns by {}; path shortened to {path_text}",
            -space
        );

        let path = path_part(&path_text, config, markers);
        left = assemble([&parts.user, &path, &parts.vcs], Side::Left, markers);
        space = gap(width, &left, &right);
    }

    format!(
        "{left}{}{right}{}{} ",
        spacer(space, &config.spacer),
        markers.newline(),
        chevron(parts.failed(), markers)
    )
}

/// Left segment and chevron, on a fresh line.
pub fn left_prompt(parts: &PromptParts, markers: Markers) -> String {
    format!(
        "{}{} {} ",
        markers.newline(),
        assemble(parts.left(), Side::Left, markers),
        chevron(parts.failed(), markers)
    )
}

/// Right segment only.
pub fn right_prompt(parts: &PromptParts, markers: Markers) -> String {
    assemble(parts.right(), Side::Right, markers)
}
