//! Terminal display width helpers.
//!
//! Layout itself counts one cell per character. These helpers measure what a
//! terminal will actually show for an already rendered frame, with escape
//! sequences stripped.

/// Compute the display width of a string after stripping ANSI escapes.
pub fn display_width(text: &str) -> usize {
    let clean = strip_ansi_escapes::strip(text);
    let clean_str = String::from_utf8_lossy(&clean);
    unicode_width::UnicodeWidthStr::width(&*clean_str)
}

/// Visible width of every line in a rendered frame.
pub fn row_widths(frame: &str) -> Vec<usize> {
    frame
        .lines()
        .map(|line| display_width(line.trim_end_matches('\r')))
        .collect()
}
