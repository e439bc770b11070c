//! # romafilter command-line support
//!
//! Line filtering, highlighting and logging setup behind the `romafilter`
//! binary, kept in a library so they can be tested without a process.
//!
//! ```text
//! $ printf '中国\n美国\nzig\n' | romafilter zg
//! [中][国]
//! [z]i[g]
//! ```

pub mod output;
pub mod tracing;

pub use output::{filter_lines, highlight, parse_strategy, DEFAULT_STRATEGIES};
