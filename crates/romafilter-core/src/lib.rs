//! romafilter core engine
//!
//! Lets Latin-alphabet queries match strings that contain hanzi. Candidates
//! are expanded into their pinyin readings, every combination of readings is
//! rendered into a comparison string with a position map, and an ordered set
//! of matchers is run against those renderings before the raw candidate.
//! Match ranges always come back in the candidate's own char coordinates.
//!
//! # Features
//!
//! - `pinyin` (default) - Bundled pinyin dictionary ([`romanize::PinyinExpander`])
//! - `native` - Enable all native optimizations (SIMD, parallel)
//! - `simd` - SIMD-accelerated substring search via memchr
//! - `parallel` - Parallel batch filtering via rayon
//!
//! # Example
//!
//! ```rust
//! use romafilter_core::filter::{or_match, BoxedMatcher, Strategy};
//! use romafilter_core::{Match, Matcher};
//!
//! let matchers: Vec<BoxedMatcher> = vec![Box::new(Strategy::CamelCase)];
//! let filter = or_match("", matchers);
//!
//! // "中国" is compared as "ZhongGuo"
//! let ranges = filter.matches("zg", "中国").unwrap();
//! assert_eq!(ranges, vec![Match::new(0, 1), Match::new(1, 2)]);
//! ```

pub mod bridge;
pub mod combine;
pub mod config;
pub mod error;
pub mod filter;
pub mod matcher;
pub mod romanize;

// Re-export main types at crate root
#[cfg(feature = "pinyin")]
pub use bridge::filter_json;
pub use bridge::{filter_json_with, FilterInput, FilterOutput, MatchedCandidate};
pub use combine::{combine, Combinations, CombinedCandidate};
pub use config::FilterConfig;
pub use error::{Error, Result};
#[cfg(feature = "pinyin")]
pub use filter::or_match;
pub use filter::{BoxedMatcher, FilterHit, OrFilter, Strategy};
pub use matcher::{Match, MatchResult, Matcher};
#[cfg(feature = "pinyin")]
pub use romanize::PinyinExpander;
pub use romanize::{RomanizationExpander, TableExpander, VariantTable};
