//! JSON bridge
//!
//! String-in, string-out entry point for hosts that cannot link Rust types
//! directly. Errors come back as `{"error": "..."}` rather than panicking.

use serde::{Deserialize, Serialize};

use crate::config::FilterConfig;
use crate::filter::{OrFilter, Strategy};
use crate::matcher::Match;
use crate::romanize::RomanizationExpander;

/// Strategies used when the request names none.
pub const DEFAULT_STRATEGIES: [Strategy; 4] = [
    Strategy::Prefix,
    Strategy::CamelCase,
    Strategy::ContiguousSubstring,
    Strategy::Subsequence,
];

/// Input for [`filter_json`].
#[derive(Debug, Deserialize)]
pub struct FilterInput {
    pub word: String,
    pub candidates: Vec<String>,
    #[serde(default)]
    pub strategies: Vec<Strategy>,
    #[serde(default)]
    pub config: FilterConfig,
}

/// One matching candidate in a [`FilterOutput`].
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchedCandidate {
    pub index: usize,
    pub candidate: String,
    pub ranges: Vec<Match>,
}

/// Output of [`filter_json`].
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterOutput {
    pub matches: Vec<MatchedCandidate>,
    pub total: usize,
}

/// Run a parsed request against `expander`.
pub fn run_filter<E>(expander: E, input: FilterInput) -> FilterOutput
where
    E: RomanizationExpander + Sync,
{
    let strategies = if input.strategies.is_empty() {
        DEFAULT_STRATEGIES.to_vec()
    } else {
        input.strategies
    };

    let filter = strategies
        .into_iter()
        .fold(OrFilter::new(expander, input.config), |filter, s| {
            filter.with_matcher(s)
        });

    let hits = filter.filter_all(&input.word, &input.candidates);
    let mut candidates: Vec<Option<String>> = input.candidates.into_iter().map(Some).collect();
    let matches: Vec<MatchedCandidate> = hits
        .into_iter()
        .map(|hit| MatchedCandidate {
            index: hit.index,
            candidate: candidates[hit.index].take().unwrap_or_default(),
            ranges: hit.ranges,
        })
        .collect();

    let total = matches.len();
    FilterOutput { matches, total }
}

/// JSON entry point over an explicit expander.
pub fn filter_json_with<E>(expander: E, input: &str) -> String
where
    E: RomanizationExpander + Sync,
{
    let parsed: FilterInput = match serde_json::from_str(input) {
        Ok(v) => v,
        Err(e) => {
            return error_json(&format!("invalid filter input: {}", e));
        }
    };
    if let Err(e) = parsed.config.validate() {
        return error_json(&e.to_string());
    }

    match serde_json::to_string(&run_filter(expander, parsed)) {
        Ok(json) => json,
        Err(e) => error_json(&format!("serialization failed: {}", e)),
    }
}

/// JSON entry point over the bundled pinyin dictionary.
#[cfg(feature = "pinyin")]
pub fn filter_json(input: &str) -> String {
    filter_json_with(crate::romanize::PinyinExpander::new(), input)
}

fn error_json(message: &str) -> String {
    serde_json::json!({ "error": message }).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::romanize::TableExpander;
    use pretty_assertions::assert_eq;

    fn dictionary() -> TableExpander {
        [('中', vec!["zhong"]), ('国', vec!["guo"]), ('人', vec!["ren"])]
            .into_iter()
            .collect()
    }

    #[test]
    fn filters_with_default_strategies() {
        let out = filter_json_with(
            dictionary(),
            r#"{"word": "zg", "candidates": ["中国", "人", "zig"]}"#,
        );
        let parsed: FilterOutput = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed.total, 2);
        assert_eq!(parsed.matches[0].candidate, "中国");
        assert_eq!(
            parsed.matches[0].ranges,
            vec![Match::new(0, 1), Match::new(1, 2)]
        );
        assert_eq!(parsed.matches[1].index, 2);
    }

    #[test]
    fn honors_explicit_strategies_and_config() {
        let out = filter_json_with(
            dictionary(),
            r#"{"word": "zhong-g", "candidates": ["中国"],
                "strategies": ["prefix"], "config": {"separator": "-"}}"#,
        );
        let parsed: FilterOutput = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed.total, 1);
        assert_eq!(parsed.matches[0].ranges, vec![Match::new(0, 2)]);
    }

    #[test]
    fn reports_invalid_input() {
        let out = filter_json_with(dictionary(), "not json");
        assert!(out.contains("invalid filter input"));
    }

    #[test]
    fn reports_unknown_strategy() {
        let out = filter_json_with(
            dictionary(),
            r#"{"word": "a", "candidates": [], "strategies": ["soundex"]}"#,
        );
        assert!(out.contains("error"));
    }

    #[test]
    fn reports_invalid_config() {
        let out = filter_json_with(
            dictionary(),
            r#"{"word": "a", "candidates": [], "config": {"parallel_threshold": 0}}"#,
        );
        assert!(out.contains("parallel_threshold"));
    }
}
