//! The question being played back.

use std::fmt;

use serde::Serialize;

/// A non-empty question.
///
/// The playback can only be built from a `Query`, so an empty string never
/// reaches the timeline; hosts show the empty state instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Query(String);

impl Query {
    /// Wrap `text` as-is. Returns `None` for the empty string.
    ///
    /// Whitespace is kept: a decoded link is played back exactly as encoded.
    pub fn new(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        if text.is_empty() { None } else { Some(Self(text)) }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters (Unicode scalar values).
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }

    /// The first `chars` characters, clamped to the full text.
    pub fn prefix(&self, chars: usize) -> &str {
        char_prefix(&self.0, chars)
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Query {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Slice the first `chars` characters of `s` without splitting a code point.
pub(crate) fn char_prefix(s: &str, chars: usize) -> &str {
    match s.char_indices().nth(chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
