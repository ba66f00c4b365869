//! Known-plaintext match predicate
//!
//! A decrypted candidate counts as a match when it contains the known
//! plaintext fragment as a byte substring. The searcher is built once per
//! worker and reused across every candidate in the sub-range.

use memchr::memmem;

/// Substring-containment test against a known plaintext fragment
pub struct MatchPredicate<'f> {
    finder: memmem::Finder<'f>,
}

impl<'f> MatchPredicate<'f> {
    /// Build a predicate for `fragment`
    ///
    /// An empty fragment matches every successfully decrypted candidate, by
    /// the usual substring convention.
    pub fn new(fragment: &'f str) -> Self {
        Self {
            finder: memmem::Finder::new(fragment.as_bytes()),
        }
    }

    /// True when `plaintext` contains the fragment
    pub fn matches(&self, plaintext: &[u8]) -> bool {
        self.finder.find(plaintext).is_some()
    }

    /// The fragment bytes this predicate searches for
    pub fn fragment(&self) -> &[u8] {
        self.finder.needle()
    }
}
