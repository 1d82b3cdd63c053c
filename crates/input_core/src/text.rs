//! UTF-8 helpers shared by the value store's editing operations.
//!
//! Carets and selection ends are byte offsets; every helper here keeps them on
//! character boundaries so slicing a control value can never panic.

use std::borrow::Cow;

/// Clamp a byte offset into `s` and snap it back onto a character boundary.
///
/// ```
/// use input_core::clamp_to_char_boundary;
///
/// let s = "ab€"; // '€' occupies bytes 2..5
/// assert_eq!(clamp_to_char_boundary(s, 2), 2);
/// assert_eq!(clamp_to_char_boundary(s, 3), 2);
/// assert_eq!(clamp_to_char_boundary(s, 64), 5);
/// ```
#[inline]
pub fn clamp_to_char_boundary(s: &str, index: usize) -> usize {
    let mut index = index.min(s.len());
    while index > 0 && !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Offset of the character that ends at `i`, or 0 at the start of the value.
pub fn prev_cursor_boundary(s: &str, i: usize) -> usize {
    let i = clamp_to_char_boundary(s, i);
    s[..i].char_indices().next_back().map_or(0, |(idx, _)| idx)
}

/// Offset just past the character starting at `i`, or `s.len()` at the end.
pub fn next_cursor_boundary(s: &str, i: usize) -> usize {
    let i = clamp_to_char_boundary(s, i);
    s[i..].chars().next().map_or(s.len(), |ch| i + ch.len_utf8())
}

/// Drop CR and LF from text headed for a single-line control.
///
/// ```
/// use input_core::filter_single_line;
///
/// assert_eq!(filter_single_line("read"), "read");
/// assert_eq!(filter_single_line("read\r\nwrite"), "readwrite");
/// ```
pub fn filter_single_line(s: &str) -> Cow<'_, str> {
    if !s.contains(['\n', '\r']) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(s.chars().filter(|c| !matches!(c, '\n' | '\r')).collect())
}

/// Rewrite CRLF and lone CR as LF, the line ending textarea values are stored with.
///
/// ```
/// use input_core::normalize_newlines;
///
/// assert_eq!(normalize_newlines("a\r\nb\rc"), "a\nb\nc");
/// ```
pub fn normalize_newlines(s: &str) -> Cow<'_, str> {
    if !s.contains('\r') {
        return Cow::Borrowed(s);
    }
    Cow::Owned(s.replace("\r\n", "\n").replace('\r', "\n"))
}
