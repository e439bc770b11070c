//! Pinyin expander backed by the `pinyin` crate's heteronym tables

use ::pinyin::ToPinyinMulti;

use super::{RomanizationExpander, VariantTable};

/// Expands hanzi into their toneless pinyin readings.
///
/// Readings differing only by tone collapse into one spelling, so `为`
/// yields `["wei"]` rather than one entry per tone.
#[derive(Debug, Clone, Copy, Default)]
pub struct PinyinExpander;

impl PinyinExpander {
    pub fn new() -> Self {
        Self
    }

    /// Plain readings for one char, first-seen order, or `None` when the
    /// char is not in the dictionary.
    pub fn readings(&self, c: char) -> Option<Vec<String>> {
        let multi = c.to_pinyin_multi()?;
        let mut readings: Vec<String> = Vec::new();
        for reading in multi {
            let plain = reading.plain();
            if !readings.iter().any(|r| r == plain) {
                readings.push(plain.to_string());
            }
        }
        if readings.is_empty() {
            None
        } else {
            Some(readings)
        }
    }
}

impl RomanizationExpander for PinyinExpander {
    fn expand(&self, candidate: &str) -> VariantTable {
        let sets = candidate
            .chars()
            .map(|c| self.readings(c).unwrap_or_else(|| vec![c.to_string()]))
            .collect();
        VariantTable::from_sets(sets)
    }
}
