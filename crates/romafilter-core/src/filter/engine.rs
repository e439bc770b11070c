//! OrFilter - romanizing or-combinator over matchers

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::combine::combine;
use crate::config::FilterConfig;
use crate::matcher::{Match, MatchResult, Matcher};
use crate::romanize::RomanizationExpander;

#[cfg(feature = "pinyin")]
use crate::romanize::PinyinExpander;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A matcher the filter can own and share across threads.
pub type BoxedMatcher = Box<dyn Matcher + Send + Sync>;

/// One matching candidate from a batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterHit {
    /// Position of the candidate in the input batch
    pub index: usize,
    /// Ranges in the candidate's own char coordinates
    pub ranges: Vec<Match>,
}

/// Or-combinator that runs its matchers against romanized renderings of
/// each candidate before falling back to the candidate itself.
///
/// For every matcher in order, each combination of readings is tried in
/// generation order; the first hit is mapped back to source coordinates and
/// returned. Only if no combination hits is the raw candidate tried with the
/// same matcher, before moving on to the next one.
pub struct OrFilter<E> {
    expander: E,
    config: FilterConfig,
    matchers: Vec<BoxedMatcher>,
}

#[cfg(feature = "pinyin")]
impl OrFilter<PinyinExpander> {
    /// Filter over the bundled pinyin dictionary
    pub fn pinyin(config: FilterConfig) -> Self {
        Self::new(PinyinExpander::new(), config)
    }
}

impl<E: RomanizationExpander> OrFilter<E> {
    /// Create a filter with no matchers; it matches nothing until one is added
    pub fn new(expander: E, config: FilterConfig) -> Self {
        Self {
            expander,
            config,
            matchers: Vec::new(),
        }
    }

    /// Append a matcher, tried after every matcher already present
    pub fn with_matcher<M>(mut self, matcher: M) -> Self
    where
        M: Matcher + Send + Sync + 'static,
    {
        self.matchers.push(Box::new(matcher));
        self
    }

    pub fn with_matchers<I>(mut self, matchers: I) -> Self
    where
        I: IntoIterator<Item = BoxedMatcher>,
    {
        self.matchers.extend(matchers);
        self
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    pub fn expander(&self) -> &E {
        &self.expander
    }

    pub fn matcher_count(&self) -> usize {
        self.matchers.len()
    }

    /// Match `word` against `candidate`, returning ranges in the candidate's
    /// own char coordinates.
    pub fn find(&self, word: &str, candidate: &str) -> MatchResult {
        if self.matchers.is_empty() {
            return None;
        }

        let table = self.expander.expand(candidate);
        trace!(
            "expanded {:?}: {} ambiguous chars, {:?} combinations",
            candidate,
            table.ambiguous_count(),
            table.combination_count()
        );

        for (idx, matcher) in self.matchers.iter().enumerate() {
            for tuple in table.combinations() {
                let combined = combine(
                    candidate,
                    &tuple,
                    &self.config.separator,
                    self.config.capitalize_first,
                );
                if let Some(matches) = matcher.matches(word, &combined.text) {
                    debug!("matcher {} hit romanized form {:?}", idx, combined.text);
                    return Some(combined.remap(matches));
                }
            }

            if let Some(matches) = matcher.matches(word, candidate) {
                debug!("matcher {} hit raw candidate {:?}", idx, candidate);
                return Some(matches);
            }
        }

        None
    }
}

impl<E: RomanizationExpander + Sync> OrFilter<E> {
    /// Match `word` against a batch, keeping hits in input order
    ///
    /// With the `parallel` feature, batches of at least
    /// `config.parallel_threshold` candidates are matched with rayon.
    pub fn filter_all<S>(&self, word: &str, candidates: &[S]) -> Vec<FilterHit>
    where
        S: AsRef<str> + Sync,
    {
        debug!("filtering {} candidates for {:?}", candidates.len(), word);
        self.filter_batch(word, candidates)
    }

    #[cfg(feature = "parallel")]
    fn filter_batch<S>(&self, word: &str, candidates: &[S]) -> Vec<FilterHit>
    where
        S: AsRef<str> + Sync,
    {
        if candidates.len() >= self.config.parallel_threshold {
            // rayon keeps the indexed order on collect
            candidates
                .par_iter()
                .enumerate()
                .filter_map(|(index, candidate)| self.hit(word, index, candidate.as_ref()))
                .collect()
        } else {
            self.filter_sequential(word, candidates)
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn filter_batch<S>(&self, word: &str, candidates: &[S]) -> Vec<FilterHit>
    where
        S: AsRef<str> + Sync,
    {
        self.filter_sequential(word, candidates)
    }

    fn filter_sequential<S>(&self, word: &str, candidates: &[S]) -> Vec<FilterHit>
    where
        S: AsRef<str>,
    {
        candidates
            .iter()
            .enumerate()
            .filter_map(|(index, candidate)| self.hit(word, index, candidate.as_ref()))
            .collect()
    }

    fn hit(&self, word: &str, index: usize, candidate: &str) -> Option<FilterHit> {
        self.find(word, candidate)
            .map(|ranges| FilterHit { index, ranges })
    }
}

impl<E: RomanizationExpander> Matcher for OrFilter<E> {
    fn matches(&self, word: &str, candidate: &str) -> MatchResult {
        self.find(word, candidate)
    }
}

/// Combine `matchers` into one pinyin-aware matcher with the given separator
/// and first-letter capitalization.
#[cfg(feature = "pinyin")]
pub fn or_match<I>(separator: &str, matchers: I) -> OrFilter<PinyinExpander>
where
    I: IntoIterator<Item = BoxedMatcher>,
{
    OrFilter::pinyin(FilterConfig::new().separator(separator)).with_matchers(matchers)
}
