//! Match ranges and the matcher capability.
//!
//! All indices count `char`s, not bytes.

use serde::{Deserialize, Serialize};

/// Half-open `[start, end)` char range into a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Match {
    pub start: usize,
    pub end: usize,
}

impl Match {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of chars covered.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// Outcome of a matcher: `None` when absent, otherwise the ranges in the
/// order the matcher produced them. `Some(vec![])` still counts as a match.
pub type MatchResult = Option<Vec<Match>>;

/// A string-matching predicate over `(word, candidate)`.
///
/// Implemented for any `Fn(&str, &str) -> MatchResult`, so closures can be
/// handed to the orchestrator directly.
pub trait Matcher {
    fn matches(&self, word: &str, candidate: &str) -> MatchResult;
}

impl<F> Matcher for F
where
    F: Fn(&str, &str) -> MatchResult,
{
    fn matches(&self, word: &str, candidate: &str) -> MatchResult {
        self(word, candidate)
    }
}

/// Prepend `head` to `tail`, merging it into the first range when adjacent.
pub(crate) fn join(head: Match, mut tail: Vec<Match>) -> Vec<Match> {
    match tail.first_mut() {
        Some(first) if first.start == head.end => {
            first.start = head.start;
        }
        _ => tail.insert(0, head),
    }
    tail
}
