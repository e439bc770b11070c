//! Variant combination
//!
//! A [`VariantTable`](crate::romanize::VariantTable) with N sets of sizes
//! k1..kN describes k1 × … × kN full romanizations of the candidate.
//! [`Combinations`] walks that product lazily, and [`combine`] turns one
//! chosen tuple into the string the matchers actually see, together with a
//! position map back to source chars.
//!
//! ```text
//! source:    a  b  中
//! tuple:     a  b  zhong
//! combined:  a  b  -  Z  h  o  n  g      (separator "-")
//! positions: 0  1  2  2  2  2  2  2
//! ```

use crate::matcher::Match;

/// Lazy Cartesian product over per-char variant sets.
///
/// Yields one `Vec<&str>` per combination. The first char is the outermost
/// loop, so the last char varies fastest. An empty table yields a single
/// empty tuple; a table holding an empty set yields nothing.
#[derive(Debug, Clone)]
pub struct Combinations<'a> {
    sets: &'a [Vec<String>],
    cursor: Vec<usize>,
    done: bool,
}

impl<'a> Combinations<'a> {
    pub fn new(sets: &'a [Vec<String>]) -> Self {
        Self {
            sets,
            cursor: vec![0; sets.len()],
            done: sets.iter().any(|set| set.is_empty()),
        }
    }

    /// Step the odometer. Returns false once every digit has wrapped.
    fn advance(&mut self) -> bool {
        for pos in (0..self.cursor.len()).rev() {
            self.cursor[pos] += 1;
            if self.cursor[pos] < self.sets[pos].len() {
                return true;
            }
            self.cursor[pos] = 0;
        }
        false
    }
}

impl<'a> Iterator for Combinations<'a> {
    type Item = Vec<&'a str>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let tuple = self
            .cursor
            .iter()
            .zip(self.sets)
            .map(|(&idx, set)| set[idx].as_str())
            .collect();

        self.done = !self.advance();
        Some(tuple)
    }
}

/// A romanized rendering of a candidate plus its char-level position map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinedCandidate {
    pub text: String,
    /// Source char index for each char of `text`. Non-decreasing.
    pub positions: Vec<usize>,
}

impl CombinedCandidate {
    /// Translate a range over `text` into source-char coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `m` is empty or reaches past the end of `text`. Matchers
    /// must only report ranges inside the string they were given.
    pub fn source_range(&self, m: Match) -> Match {
        assert!(
            m.start < m.end && m.end <= self.positions.len(),
            "match {}..{} out of bounds for combined candidate of {} chars",
            m.start,
            m.end,
            self.positions.len()
        );
        Match::new(self.positions[m.start], self.positions[m.end - 1] + 1)
    }

    pub fn remap(&self, matches: Vec<Match>) -> Vec<Match> {
        matches.into_iter().map(|m| self.source_range(m)).collect()
    }
}

/// Concatenate one variant per source char into a comparison string.
///
/// A variant equal to its source char passes through untouched. Any other
/// variant is a transliteration: optionally capitalized, preceded by
/// `separator` when the previous char passed through, and followed by
/// `separator` unless it is the last char. Two adjacent transliterations
/// therefore share the single trailing separator of the first.
pub fn combine(
    source: &str,
    tuple: &[&str],
    separator: &str,
    capitalize_first: bool,
) -> CombinedCandidate {
    debug_assert_eq!(
        source.chars().count(),
        tuple.len(),
        "variant tuple length must equal source char count"
    );

    let mut text = String::new();
    let mut positions = Vec::new();
    let mut prev_passthrough = false;
    let last = tuple.len().saturating_sub(1);

    for (i, (c, variant)) in source.chars().zip(tuple.iter()).enumerate() {
        if is_passthrough(c, variant) {
            text.push(c);
            positions.push(i);
            prev_passthrough = true;
            continue;
        }

        let mut py = String::new();
        if i > 0 && prev_passthrough {
            py.push_str(separator);
        }
        if capitalize_first {
            py.push_str(&capitalize(variant));
        } else {
            py.push_str(variant);
        }
        if i < last {
            py.push_str(separator);
        }

        positions.extend(std::iter::repeat(i).take(py.chars().count()));
        text.push_str(&py);
        prev_passthrough = false;
    }

    CombinedCandidate { text, positions }
}

fn is_passthrough(c: char, variant: &str) -> bool {
    let mut chars = variant.chars();
    chars.next() == Some(c) && chars.next().is_none()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sets(raw: &[&[&str]]) -> Vec<Vec<String>> {
        raw.iter()
            .map(|set| set.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[test]
    fn product_order_last_varies_fastest() {
        let sets = sets(&[&["a", "b"], &["x"], &["1", "2"]]);
        let all: Vec<Vec<&str>> = Combinations::new(&sets).collect();
        assert_eq!(
            all,
            vec![
                vec!["a", "x", "1"],
                vec!["a", "x", "2"],
                vec!["b", "x", "1"],
                vec!["b", "x", "2"],
            ]
        );
    }

    #[test]
    fn empty_table_yields_single_empty_tuple() {
        let sets: Vec<Vec<String>> = Vec::new();
        let all: Vec<Vec<&str>> = Combinations::new(&sets).collect();
        assert_eq!(all, vec![Vec::<&str>::new()]);
    }

    #[test]
    fn empty_set_yields_nothing() {
        let sets = sets(&[&["a"], &[]]);
        assert_eq!(Combinations::new(&sets).count(), 0);
    }

    #[test]
    fn identity_combination() {
        let combined = combine("abc", &["a", "b", "c"], "-", true);
        assert_eq!(combined.text, "abc");
        assert_eq!(combined.positions, vec![0, 1, 2]);
    }

    #[test]
    fn two_hanzi_without_separator() {
        let combined = combine("中国", &["zhong", "guo"], "", true);
        assert_eq!(combined.text, "ZhongGuo");
        assert_eq!(combined.positions, vec![0, 0, 0, 0, 0, 1, 1, 1]);
    }

    #[test]
    fn plain_to_hanzi_boundary_gets_leading_separator() {
        let combined = combine("ab中", &["a", "b", "zhong"], "-", true);
        assert_eq!(combined.text, "ab-Zhong");
        assert_eq!(combined.positions, vec![0, 1, 2, 2, 2, 2, 2, 2]);
    }

    #[test]
    fn adjacent_hanzi_share_one_separator() {
        let combined = combine("中国人", &["zhong", "guo", "ren"], "-", true);
        assert_eq!(combined.text, "Zhong-Guo-Ren");
    }

    #[test]
    fn hanzi_before_plain_gets_trailing_separator() {
        let combined = combine("中a", &["zhong", "a"], " ", false);
        assert_eq!(combined.text, "zhong a");
        assert_eq!(combined.positions, vec![0, 0, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn single_hanzi_never_separated() {
        let combined = combine("中", &["zhong"], "-", true);
        assert_eq!(combined.text, "Zhong");
    }

    #[test]
    fn source_range_spans_whole_syllables() {
        let combined = combine("中国", &["zhong", "guo"], "", true);
        assert_eq!(combined.source_range(Match::new(0, 6)), Match::new(0, 2));
        assert_eq!(combined.source_range(Match::new(1, 3)), Match::new(0, 1));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn source_range_rejects_overrun() {
        let combined = combine("中", &["zhong"], "", true);
        combined.source_range(Match::new(2, 9));
    }
}
