//! Parsing and validation of permission codes.
//!
//! Raw text is split on runs of newlines and commas; every piece is trimmed and
//! lowercased. A piece is a valid code when it is non-empty and made of
//! `a-z`, `0-9`, `_` and `-` only. Serialization is the newline join.

use std::iter::FusedIterator;

#[inline]
fn is_delimiter(ch: char) -> bool {
    ch == '\n' || ch == ','
}

#[inline]
fn is_trimmed(ch: char) -> bool {
    // U+FEFF is not White_Space, but pasted text and seeded values often lead with it.
    ch.is_whitespace() || ch == '\u{FEFF}'
}

/// Trim surrounding whitespace (including a byte order mark) and lowercase.
pub fn normalize(raw: &str) -> String {
    raw.trim_matches(is_trimmed).to_lowercase()
}

/// Full-string match of `^[a-z0-9_-]+$`.
pub fn is_valid(code: &str) -> bool {
    !code.is_empty()
        && code
            .bytes()
            .all(|b| matches!(b, b'a'..=b'z' | b'0'..=b'9' | b'_' | b'-'))
}

/// Lazily split `raw` into normalized, non-empty pieces.
///
/// Pieces are not validated or deduplicated here. The iterator is `Clone`,
/// so a copy taken before iteration replays the same sequence.
///
/// ```
/// let codes: Vec<String> = chip_input::parse(" Read\n\n,WRITE-all ,").collect();
/// assert_eq!(codes, ["read", "write-all"]);
/// ```
pub fn parse(raw: &str) -> Codes<'_> {
    Codes {
        rest: raw,
        done: false,
    }
}

/// Newline join, one code per line, no trailing newline.
pub fn serialize<I>(codes: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut out = String::new();
    for (i, code) in codes.into_iter().enumerate() {
        if i != 0 {
            out.push('\n');
        }
        out.push_str(code.as_ref());
    }
    out
}

#[derive(Clone, Debug)]
pub struct Codes<'a> {
    rest: &'a str,
    done: bool,
}

impl Iterator for Codes<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while !self.done {
            let piece = match self.rest.find(is_delimiter) {
                Some(at) => {
                    let (piece, tail) = self.rest.split_at(at);
                    // Delimiters are single-byte.
                    self.rest = &tail[1..];
                    piece
                }
                None => {
                    self.done = true;
                    self.rest
                }
            };
            let code = normalize(piece);
            if !code.is_empty() {
                return Some(code);
            }
        }
        None
    }
}

impl FusedIterator for Codes<'_> {}
