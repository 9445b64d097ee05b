//! Path shortening for the directory part.
//!
//! Works on plain text and returns plain text; styling is applied by the
//! part builder afterwards.

use std::borrow::Cow;
use std::path::{MAIN_SEPARATOR, MAIN_SEPARATOR_STR, Path};

use unicode_width::UnicodeWidthStr;

/// Shorten `path` to fit `max_length` columns if possible.
///
/// The home directory becomes `~`. If the result is still too long, parent
/// directories are collapsed to their first character, starting from the
/// root, until it fits. The last component is never touched, so the result
/// can still exceed `max_length`.
///
/// Absolute paths outside the home directory keep their leading separator,
/// so `/var/log` stays `/var/log` and shortens to `/v/log`.
///
/// Examples (home `/home/ubuntu`):
/// - `/home/ubuntu` -> `~`
/// - `/home/ubuntu/repos/django3g/core` -> `~/repos/django3g/core`
/// - `/home/ubuntu/repos/django3g/core/management/commands/superimporter`
///   -> `~/r/d/c/m/c/superimporter` (at a small enough budget)
pub fn shorten_path(path: &str, home: Option<&Path>, max_length: usize) -> String {
    let path = replace_home(path, home);
    let is_absolute = path.starts_with(MAIN_SEPARATOR);

    let mut segments: Vec<String> = path
        .split(MAIN_SEPARATOR)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect();

    let join = |segments: &[String]| {
        let joined = segments.join(MAIN_SEPARATOR_STR);
        if is_absolute {
            format!("{MAIN_SEPARATOR}{joined}")
        } else {
            joined
        }
    };

    let mut shortened = join(&segments);
    let parents = segments.len().saturating_sub(1);
    for i in 0..parents {
        if shortened.width() <= max_length {
            break;
        }
        let mut chars = segments[i].chars();
        if let Some(first) = chars.next()
            && chars.next().is_some()
        {
            segments[i] = first.to_string();
            shortened = join(&segments);
        }
    }

    shortened
}

fn replace_home<'a>(path: &'a str, home: Option<&Path>) -> Cow<'a, str> {
    if path.starts_with('~') {
        return Cow::Borrowed(path);
    }
    // A root or empty home would turn every path into `~/...`
    let Some(home) = home.filter(|home| home.parent().is_some()) else {
        return Cow::Borrowed(path);
    };

    match Path::new(path).strip_prefix(home) {
        Ok(rest) if rest.as_os_str().is_empty() => Cow::Owned("~".to_string()),
        Ok(rest) => Cow::Owned(format!("~{MAIN_SEPARATOR}{}", rest.display())),
        Err(_) => Cow::Borrowed(path),
    }
}

/// Split a shortened path into everything up to and including the last
/// separator, and the last component.
pub fn split_last_segment(path: &str) -> (&str, &str) {
    match path.rfind(MAIN_SEPARATOR) {
        Some(idx) => path.split_at(idx + MAIN_SEPARATOR.len_utf8()),
        None => ("", path),
    }
}
