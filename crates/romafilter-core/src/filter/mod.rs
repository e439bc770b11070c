//! Romanizing Or-Filter
//!
//! Runs an ordered list of matchers against every romanized rendering of a
//! candidate, then against the candidate itself:
//!
//! 1. Expand the candidate into per-char readings
//! 2. For each matcher, try each reading combination in order
//! 3. First hit wins; its ranges are mapped back to source chars
//! 4. Otherwise the same matcher sees the raw candidate
//!
//! # Example
//!
//! ```rust
//! use romafilter_core::filter::{OrFilter, Strategy};
//! use romafilter_core::romanize::TableExpander;
//! use romafilter_core::{FilterConfig, Match};
//!
//! let dictionary: TableExpander = [('中', vec!["zhong"]), ('国', vec!["guo"])]
//!     .into_iter()
//!     .collect();
//! let filter = OrFilter::new(dictionary, FilterConfig::default())
//!     .with_matcher(Strategy::Prefix);
//!
//! assert_eq!(filter.find("zhongg", "中国"), Some(vec![Match::new(0, 2)]));
//! ```

mod engine;
mod strategies;

#[cfg(feature = "pinyin")]
pub use engine::or_match;
pub use engine::{BoxedMatcher, FilterHit, OrFilter};
pub use strategies::{
    camel_case_match, contiguous_substring_match, exact_match, fuzzy_match, prefix_match,
    subsequence_match, Strategy,
};
