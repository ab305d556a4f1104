//! String utilities for the domain layer.

/// Truncate a string to a maximum byte length with ellipsis (UTF-8 safe)
///
/// The cut backs off to the previous character boundary, so the result may
/// be a few bytes shorter than `max_len`.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }
    let mut end = max_len.saturating_sub(3).min(s.len());
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &s[..end])
}

/// One-line preview of user or model text for log fields and headers.
///
/// Line breaks collapse to single spaces before truncation.
pub fn preview(s: &str, max_len: usize) -> String {
    let single_line = s.split_whitespace().collect::<Vec<_>>().join(" ");
    truncate(&single_line, max_len)
}
