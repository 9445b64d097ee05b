//! Joining parts into one powerline-style segment.

use crate::parts::Part;
use crate::styling::{Markers, SEP_LEFT, SEP_RIGHT, TextStyle, style};

/// Which way the chevrons between parts point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Blocks flow rightwards; used for the left half of a prompt
    Left,
    /// Mirror image, for the right half
    Right,
}

/// Render `parts` as one styled segment.
///
/// Empty parts are skipped entirely. The segment opens with a rounded cap in
/// the first part's background and closes with one in the last part's; each
/// boundary in between blends the neighbouring backgrounds.
///
/// Returns an empty string when every part is empty.
pub fn assemble<'a>(
    parts: impl IntoIterator<Item = &'a Part>,
    side: Side,
    markers: Markers,
) -> String {
    let parts: Vec<&Part> = parts.into_iter().filter(|part| !part.is_empty()).collect();
    let Some(last) = parts.last() else {
        return String::new();
    };

    let mut out = String::new();
    let mut previous_bg = None;
    for (i, part) in parts.iter().enumerate() {
        let separator = if i == 0 {
            style(SEP_LEFT, TextStyle::new().colors(part.bg(), None), markers)
        } else {
            match side {
                Side::Left => style(
                    SEP_RIGHT,
                    TextStyle::new().colors(previous_bg, part.bg()),
                    markers,
                ),
                Side::Right => style(
                    SEP_LEFT,
                    TextStyle::new().colors(part.bg(), previous_bg),
                    markers,
                ),
            }
        };
        out.push_str(&separator);
        out.push_str(&style(&format!(" {} ", part.text), part.style, markers));
        previous_bg = part.bg();
    }
    out.push_str(&style(SEP_RIGHT, TextStyle::new().colors(last.bg(), None), markers));

    out
}
