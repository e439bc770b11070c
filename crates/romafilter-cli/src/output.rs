//! Line filtering and match rendering

use std::io::{BufRead, Write};

use romafilter_core::{Error, Match, MatchedCandidate, OrFilter, RomanizationExpander, Strategy};
use tracing::debug;

pub use romafilter_core::bridge::DEFAULT_STRATEGIES;

/// Parse a strategy name for clap.
pub fn parse_strategy(name: &str) -> Result<Strategy, Error> {
    Strategy::from_name(name).ok_or_else(|| Error::UnknownStrategy(name.to_string()))
}

/// Wrap each matched char range of `candidate` in brackets.
///
/// Ranges may arrive unsorted or overlapping (several romanized ranges can
/// land on one hanzi); overlapping ones are rendered as their union.
pub fn highlight(candidate: &str, ranges: &[Match]) -> String {
    let spans = union(ranges);
    let mut out = String::with_capacity(candidate.len() + spans.len() * 2);
    let mut spans = spans.iter().peekable();
    for (i, c) in candidate.chars().enumerate() {
        if spans.peek().is_some_and(|m| m.start == i) {
            out.push('[');
        }
        out.push(c);
        if spans.peek().is_some_and(|m| m.end == i + 1) {
            out.push(']');
            spans.next();
        }
    }
    out
}

/// Sort ranges and merge the overlapping ones. Touching ranges stay apart.
fn union(ranges: &[Match]) -> Vec<Match> {
    let mut sorted: Vec<Match> = ranges.iter().copied().filter(|m| !m.is_empty()).collect();
    sorted.sort_by_key(|m| (m.start, m.end));

    let mut merged: Vec<Match> = Vec::with_capacity(sorted.len());
    for m in sorted {
        match merged.last_mut() {
            Some(last) if m.start < last.end => last.end = last.end.max(m.end),
            _ => merged.push(m),
        }
    }
    merged
}

/// Filter every line of `reader`, writing matches to `writer`.
///
/// Plain mode prints the highlighted line; JSON mode prints one
/// `{"index","candidate","ranges"}` object per match. Returns the number of
/// matching lines.
pub fn filter_lines<E, R, W>(
    filter: &OrFilter<E>,
    query: &str,
    reader: R,
    mut writer: W,
    json: bool,
) -> Result<usize, Error>
where
    E: RomanizationExpander + Sync,
    R: BufRead,
    W: Write,
{
    let lines: Vec<String> = reader.lines().collect::<Result<_, _>>()?;
    debug!("read {} candidate lines", lines.len());

    let hits = filter.filter_all(query, &lines);
    for hit in &hits {
        let candidate = &lines[hit.index];
        if json {
            let record = MatchedCandidate {
                index: hit.index,
                candidate: candidate.clone(),
                ranges: hit.ranges.clone(),
            };
            serde_json::to_writer(&mut writer, &record)?;
            writeln!(writer)?;
        } else {
            writeln!(writer, "{}", highlight(candidate, &hit.ranges))?;
        }
    }
    writer.flush()?;

    Ok(hits.len())
}
