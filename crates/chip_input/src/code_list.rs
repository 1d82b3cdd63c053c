use crate::codes::{is_valid, normalize, parse, serialize};

/// Why [`CodeList::try_add`] turned a piece of text away.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    Empty,
    InvalidCharset,
    Duplicate,
}

/// Ordered, duplicate-free list of valid codes.
///
/// Codes keep the order they were first admitted in. Every entry satisfies
/// [`is_valid`], so the serialized form only ever carries `[a-z0-9_-]` lines.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodeList {
    codes: Vec<String>,
}

impl CodeList {
    pub fn new() -> Self {
        Self { codes: Vec::new() }
    }

    /// Builds a list from serialized (or any newline/comma separated) text.
    pub fn from_serialized(raw: &str) -> Self {
        let mut list = Self::new();
        list.extend_parsed(raw);
        list
    }

    pub fn try_add(&mut self, raw: &str) -> Result<&str, Rejection> {
        let code = normalize(raw);
        if code.is_empty() {
            return Err(Rejection::Empty);
        }
        if !is_valid(&code) {
            return Err(Rejection::InvalidCharset);
        }
        if self.contains(&code) {
            return Err(Rejection::Duplicate);
        }
        self.codes.push(code);
        Ok(self.codes.last().map_or("", String::as_str))
    }

    /// Admits `raw` if it normalizes to a new valid code. Rejections are silent.
    pub fn add(&mut self, raw: &str) -> bool {
        self.try_add(raw).is_ok()
    }

    /// Parses `raw` and adds every piece in order. Returns how many were admitted.
    pub fn extend_parsed(&mut self, raw: &str) -> usize {
        parse(raw).filter(|code| self.add(code)).count()
    }

    pub fn remove(&mut self, index: usize) -> Option<String> {
        (index < self.codes.len()).then(|| self.codes.remove(index))
    }

    pub fn pop(&mut self) -> Option<String> {
        self.codes.pop()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.codes.iter().any(|c| c == code)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.codes.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.codes
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.codes.iter().map(String::as_str)
    }

    pub fn serialize(&self) -> String {
        serialize(&self.codes)
    }
}
