//! Generic string helpers used across core modules.

/// Marker appended to truncated text.
pub const ELLIPSIS: &str = "...";

/// Keep the first `max` characters of `s`, appending [`ELLIPSIS`] when anything was cut.
/// The marker is not counted against `max`.
pub fn ellipsis(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((cut, _)) => format!("{}{}", &s[..cut], ELLIPSIS),
        None => s.to_string(),
    }
}

/// Display width of `s` in characters.
pub fn char_width(s: &str) -> usize {
    s.chars().count()
}
