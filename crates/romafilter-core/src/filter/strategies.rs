//! Built-in matching strategies
//!
//! Every strategy compares case-insensitively using a one-to-one char fold,
//! so reported ranges index the original candidate chars directly. An empty
//! word never matches.
//!
//! Platform-specific implementations:
//! - Native: SIMD substring via memchr
//! - Otherwise: pure Rust fallbacks

use serde::{Deserialize, Serialize};
use strsim::{jaro_winkler, levenshtein};

use crate::matcher::{join, Match, MatchResult, Matcher};

/// Longest word the camel-case strategy will try.
const MAX_CAMEL_WORD_LEN: usize = 60;

/// Jaro-Winkler similarity required by the fuzzy strategy.
const FUZZY_JARO_WINKLER: f64 = 0.85;

/// Maximum Levenshtein distance accepted by the fuzzy strategy.
const FUZZY_MAX_EDIT_DISTANCE: usize = 2;

/// Words shorter than this skip the edit-distance check.
const FUZZY_MIN_LENGTH: usize = 3;

/// Named built-in matcher, selectable from config, JSON and the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Exact,
    Prefix,
    ContiguousSubstring,
    Subsequence,
    CamelCase,
    Fuzzy,
}

impl Strategy {
    pub const ALL: [Strategy; 6] = [
        Strategy::Exact,
        Strategy::Prefix,
        Strategy::ContiguousSubstring,
        Strategy::Subsequence,
        Strategy::CamelCase,
        Strategy::Fuzzy,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Exact => "exact",
            Strategy::Prefix => "prefix",
            Strategy::ContiguousSubstring => "contiguous_substring",
            Strategy::Subsequence => "subsequence",
            Strategy::CamelCase => "camel_case",
            Strategy::Fuzzy => "fuzzy",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }
}

impl Matcher for Strategy {
    fn matches(&self, word: &str, candidate: &str) -> MatchResult {
        match self {
            Strategy::Exact => exact_match(word, candidate),
            Strategy::Prefix => prefix_match(word, candidate),
            Strategy::ContiguousSubstring => contiguous_substring_match(word, candidate),
            Strategy::Subsequence => subsequence_match(word, candidate),
            Strategy::CamelCase => camel_case_match(word, candidate),
            Strategy::Fuzzy => fuzzy_match(word, candidate),
        }
    }
}

#[inline]
fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

fn folded(s: &str) -> Vec<char> {
    s.chars().map(fold).collect()
}

/// Whole candidate equals word
#[inline]
pub fn exact_match(word: &str, candidate: &str) -> MatchResult {
    let word = folded(word);
    if !word.is_empty() && word == folded(candidate) {
        Some(vec![Match::new(0, word.len())])
    } else {
        None
    }
}

/// Candidate starts with word
#[inline]
pub fn prefix_match(word: &str, candidate: &str) -> MatchResult {
    let word = folded(word);
    let candidate = folded(candidate);
    if !word.is_empty() && candidate.starts_with(&word) {
        Some(vec![Match::new(0, word.len())])
    } else {
        None
    }
}

/// First contiguous occurrence of word
/// Uses SIMD via memchr on native, pure Rust otherwise
#[inline]
pub fn contiguous_substring_match(word: &str, candidate: &str) -> MatchResult {
    let word: String = word.chars().map(fold).collect();
    if word.is_empty() {
        return None;
    }
    let candidate: String = candidate.chars().map(fold).collect();
    let word_len = word.chars().count();

    #[cfg(feature = "simd")]
    {
        // SIMD-accelerated substring search
        use memchr::memmem;
        let finder = memmem::Finder::new(word.as_bytes());
        if let Some(pos) = finder.find(candidate.as_bytes()) {
            let start = candidate[..pos].chars().count();
            return Some(vec![Match::new(start, start + word_len)]);
        }
    }

    #[cfg(not(feature = "simd"))]
    {
        // Pure Rust fallback
        if let Some(pos) = candidate.find(&word) {
            let start = candidate[..pos].chars().count();
            return Some(vec![Match::new(start, start + word_len)]);
        }
    }

    None
}

/// Word chars appear in order, not necessarily adjacent.
/// Hits are taken greedily left to right; adjacent hits merge into one range.
pub fn subsequence_match(word: &str, candidate: &str) -> MatchResult {
    let word = folded(word);
    if word.is_empty() {
        return None;
    }

    let mut ranges: Vec<Match> = Vec::new();
    let mut wi = 0;
    for (ci, c) in candidate.chars().map(fold).enumerate() {
        if wi == word.len() {
            break;
        }
        if c != word[wi] {
            continue;
        }
        wi += 1;
        match ranges.last_mut() {
            Some(last) if last.end == ci => last.end = ci + 1,
            _ => ranges.push(Match::new(ci, ci + 1)),
        }
    }

    (wi == word.len()).then_some(ranges)
}

/// Word chars match word-start anchors of the candidate, allowing a run of
/// consecutive chars inside one segment ("zhg" hits `ZhongGuo` as Zh + G).
pub fn camel_case_match(word: &str, candidate: &str) -> MatchResult {
    let word = folded(word);
    if word.is_empty() || word.len() > MAX_CAMEL_WORD_LEN {
        return None;
    }
    let candidate: Vec<char> = candidate.chars().collect();
    let mut search = CamelSearch::new(&word, &candidate);

    let mut start = 0;
    while start < candidate.len() {
        if let Some(ranges) = search.from(0, start) {
            return Some(ranges);
        }
        start = next_anchor(&candidate, start + 1);
    }
    None
}

/// Backtracking search over anchors. Failed `(wi, ci)` states are recorded,
/// so each state is explored at most once.
struct CamelSearch<'a> {
    word: &'a [char],
    candidate: &'a [char],
    failed: Vec<bool>,
}

impl<'a> CamelSearch<'a> {
    fn new(word: &'a [char], candidate: &'a [char]) -> Self {
        Self {
            word,
            candidate,
            failed: vec![false; (word.len() + 1) * (candidate.len() + 1)],
        }
    }

    fn from(&mut self, wi: usize, ci: usize) -> MatchResult {
        if wi == self.word.len() {
            return Some(Vec::new());
        }
        if ci == self.candidate.len() || self.word[wi] != fold(self.candidate[ci]) {
            return None;
        }
        let state = wi * (self.candidate.len() + 1) + ci;
        if self.failed[state] {
            return None;
        }

        let mut rest = self.from(wi + 1, ci + 1);
        let mut anchor = next_anchor(self.candidate, ci + 1);
        while rest.is_none() && anchor < self.candidate.len() {
            rest = self.from(wi + 1, anchor);
            anchor = next_anchor(self.candidate, anchor + 1);
        }

        if rest.is_none() {
            self.failed[state] = true;
        }
        rest.map(|tail| join(Match::new(ci, ci + 1), tail))
    }
}

/// Index of the next word-start at or after `from`, or `candidate.len()`.
fn next_anchor(candidate: &[char], from: usize) -> usize {
    (from..candidate.len())
        .find(|&i| is_anchor(candidate, i))
        .unwrap_or(candidate.len())
}

fn is_anchor(candidate: &[char], i: usize) -> bool {
    let c = candidate[i];
    if c.is_uppercase() || c.is_ascii_digit() {
        return true;
    }
    i > 0 && !candidate[i - 1].is_alphanumeric() && c.is_alphanumeric()
}

/// Whole-candidate similarity: Jaro-Winkler, then bounded edit distance.
pub fn fuzzy_match(word: &str, candidate: &str) -> MatchResult {
    let word: String = word.chars().map(fold).collect();
    if word.is_empty() {
        return None;
    }
    let candidate: String = candidate.chars().map(fold).collect();
    let whole = || Some(vec![Match::new(0, candidate.chars().count())]);

    if candidate.is_empty() {
        return None;
    }
    if jaro_winkler(&word, &candidate) > FUZZY_JARO_WINKLER {
        return whole();
    }
    if word.chars().count() >= FUZZY_MIN_LENGTH
        && levenshtein(&word, &candidate) <= FUZZY_MAX_EDIT_DISTANCE
    {
        return whole();
    }
    None
}
