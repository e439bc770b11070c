//! In-memory romanization dictionary

use std::collections::HashMap;

use super::{RomanizationExpander, VariantTable};

/// Expander backed by an explicit `char -> readings` map.
///
/// Chars missing from the map, or mapped to an empty reading list, pass
/// through unchanged.
#[derive(Debug, Clone, Default)]
pub struct TableExpander {
    readings: HashMap<char, Vec<String>>,
}

impl TableExpander {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add readings for `c`, appending to any already present. Duplicate
    /// spellings are ignored.
    pub fn insert<I, S>(&mut self, c: char, readings: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entry = self.readings.entry(c).or_default();
        for reading in readings {
            let reading = reading.into();
            if !entry.contains(&reading) {
                entry.push(reading);
            }
        }
        self
    }

    pub fn readings(&self, c: char) -> Option<&[String]> {
        self.readings
            .get(&c)
            .filter(|r| !r.is_empty())
            .map(|r| r.as_slice())
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}

impl RomanizationExpander for TableExpander {
    fn expand(&self, candidate: &str) -> VariantTable {
        let sets = candidate
            .chars()
            .map(|c| match self.readings(c) {
                Some(readings) => readings.to_vec(),
                None => vec![c.to_string()],
            })
            .collect();
        VariantTable::from_sets(sets)
    }
}

impl<S: Into<String>> FromIterator<(char, Vec<S>)> for TableExpander {
    fn from_iter<T: IntoIterator<Item = (char, Vec<S>)>>(iter: T) -> Self {
        let mut expander = Self::new();
        for (c, readings) in iter {
            expander.insert(c, readings);
        }
        expander
    }
}
