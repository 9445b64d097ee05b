//! Terminal geometry.

/// Used when nothing reports a width
pub const FALLBACK_WIDTH: usize = 80;

/// Get terminal width, defaulting to 80 if detection fails.
///
/// The prompt runs with stdout captured by the shell, so the controlling
/// terminal is looked for on stderr and stdin too. `COLUMNS` wins when set,
/// since shells export it precisely for programs in this position.
pub fn get_terminal_width() -> usize {
    if let Some(width) = std::env::var("COLUMNS").ok().as_deref().and_then(parse_columns) {
        return width;
    }

    let detected = terminal_size::terminal_size()
        .or_else(|| terminal_size::terminal_size_of(std::io::stderr()))
        .or_else(|| terminal_size::terminal_size_of(std::io::stdin()))
        .map(|(terminal_size::Width(w), _)| w as usize);

    detected.unwrap_or_else(|| {
        log::debug!("Terminal width unknown; assuming {FALLBACK_WIDTH} columns");
        FALLBACK_WIDTH
    })
}

fn parse_columns(value: &str) -> Option<usize> {
    value.trim().parse().ok().filter(|&width| width > 0)
}
