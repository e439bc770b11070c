//! Romanization expansion
//!
//! Turns a candidate string into a [`VariantTable`]: one ordered set of
//! romanizations per source char. Chars without a known romanization keep a
//! single-element set holding the char itself (a *passthrough* char).
//!
//! # Example
//!
//! ```rust
//! use romafilter_core::romanize::{RomanizationExpander, TableExpander};
//!
//! let expander: TableExpander = [('中', vec!["zhong"]), ('国', vec!["guo"])]
//!     .into_iter()
//!     .collect();
//! let table = expander.expand("中国x");
//! assert_eq!(table.len(), 3);
//! assert_eq!(table.sets()[2], vec!["x".to_string()]);
//! ```

#[cfg(feature = "pinyin")]
mod pinyin;
mod table;

#[cfg(feature = "pinyin")]
pub use self::pinyin::PinyinExpander;
pub use table::TableExpander;

use crate::combine::Combinations;

/// Produces per-char romanization variants for a candidate string.
///
/// Implementations must be deterministic and must emit exactly one set per
/// `char` of the input, in order.
pub trait RomanizationExpander {
    fn expand(&self, candidate: &str) -> VariantTable;
}

impl<E: RomanizationExpander + ?Sized> RomanizationExpander for &E {
    fn expand(&self, candidate: &str) -> VariantTable {
        (**self).expand(candidate)
    }
}

/// Ordered romanization sets, one per source char.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantTable {
    sets: Vec<Vec<String>>,
}

impl VariantTable {
    pub fn from_sets(sets: Vec<Vec<String>>) -> Self {
        Self { sets }
    }

    /// Table where every char romanizes to itself.
    pub fn passthrough(candidate: &str) -> Self {
        Self {
            sets: candidate.chars().map(|c| vec![c.to_string()]).collect(),
        }
    }

    pub fn sets(&self) -> &[Vec<String>] {
        &self.sets
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Lazy Cartesian product of the sets, last char varying fastest.
    pub fn combinations(&self) -> Combinations<'_> {
        Combinations::new(&self.sets)
    }

    /// Size of the Cartesian product, `None` on overflow.
    pub fn combination_count(&self) -> Option<usize> {
        self.sets
            .iter()
            .try_fold(1usize, |acc, set| acc.checked_mul(set.len()))
    }

    /// Number of chars with more than one reading.
    pub fn ambiguous_count(&self) -> usize {
        self.sets.iter().filter(|set| set.len() > 1).count()
    }
}
