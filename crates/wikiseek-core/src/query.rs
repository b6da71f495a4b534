//! Query capture: trim and percent-encode the text read at trigger time.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Bytes escaped in a path segment: everything except ALPHA, DIGIT and
/// `- _ . ! ~ * ' ( )`, the same set a browser's `encodeURIComponent` keeps.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Text captured from the search field for a single trigger.
///
/// Created per event and consumed immediately; nothing is retained between
/// triggers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query<'a> {
    raw: &'a str,
    trimmed: &'a str,
}

impl<'a> Query<'a> {
    pub fn capture(raw: &'a str) -> Self {
        Self {
            raw,
            trimmed: trim(raw),
        }
    }

    pub fn raw(&self) -> &'a str {
        self.raw
    }

    pub fn trimmed(&self) -> &'a str {
        self.trimmed
    }

    /// True when nothing but whitespace was captured.
    pub fn is_empty(&self) -> bool {
        self.trimmed.is_empty()
    }

    /// Percent-encoded trimmed text, safe to append as a URL path segment.
    pub fn encoded(&self) -> String {
        utf8_percent_encode(self.trimmed, SEGMENT).to_string()
    }
}

/// Strips leading and trailing whitespace, including U+FEFF which
/// `char::is_whitespace` does not cover.
fn trim(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}
