//! End-to-end matching scenarios over the romanizing or-filter

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use pretty_assertions::assert_eq;
use romafilter_core::{
    combine, BoxedMatcher, FilterConfig, Match, MatchResult, Matcher, OrFilter, RomanizationExpander, Strategy,
    TableExpander, VariantTable,
};

fn dictionary() -> TableExpander {
    [
        ('中', vec!["zhong"]),
        ('国', vec!["guo"]),
        ('重', vec!["zhong", "chong"]),
        ('庆', vec!["qing"]),
        ('行', vec!["xing", "hang"]),
    ]
    .into_iter()
    .collect()
}

/// Single span from the first to the last camel-case hit.
fn span_camel_case(word: &str, candidate: &str) -> MatchResult {
    let hits = romafilter_core::filter::camel_case_match(word, candidate)?;
    let first = hits.first()?;
    let last = hits.last()?;
    Some(vec![Match::new(first.start, last.end)])
}

#[test]
fn test_two_hanzi_span_remaps_to_whole_candidate() {
    let table = dictionary().expand("中国");
    let tuple = table.combinations().next().unwrap();
    let combined = combine("中国", &tuple, "", true);
    assert_eq!(combined.text, "ZhongGuo");

    let filter = OrFilter::new(dictionary(), FilterConfig::default())
        .with_matcher(span_camel_case);
    assert_eq!(filter.find("zg", "中国"), Some(vec![Match::new(0, 2)]));
}

#[test]
fn test_plain_to_hanzi_boundary() {
    let table = dictionary().expand("ab中");
    let tuple = table.combinations().next().unwrap();
    let combined = combine("ab中", &tuple, "-", true);
    assert_eq!(combined.text, "ab-Zhong");
    assert_eq!(combined.positions, vec![0, 1, 2, 2, 2, 2, 2, 2]);
}

#[test]
fn test_identity_table_has_single_identity_combination() {
    let table = dictionary().expand("hello");
    assert_eq!(table, VariantTable::passthrough("hello"));

    let all: Vec<Vec<&str>> = table.combinations().collect();
    assert_eq!(all, vec![vec!["h", "e", "l", "l", "o"]]);

    let combined = combine("hello", &all[0], "-", true);
    assert_eq!(combined.text, "hello");
    assert_eq!(combined.positions, vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_heteronyms_tried_in_generation_order() {
    let seen = Arc::new(std::sync::Mutex::new(Vec::new()));
    let log = Arc::clone(&seen);
    let filter = OrFilter::new(dictionary(), FilterConfig::new().separator(" "))
        .with_matcher(move |_: &str, c: &str| -> MatchResult {
            if let Ok(mut log) = log.lock() {
                log.push(c.to_string());
            }
            None
        });

    assert_eq!(filter.find("x", "重行"), None);
    let seen = seen.lock().unwrap().clone();
    assert_eq!(
        seen,
        vec![
            "Zhong Xing".to_string(),
            "Zhong Hang".to_string(),
            "Chong Xing".to_string(),
            "Chong Hang".to_string(),
            "重行".to_string(),
        ]
    );
}

#[test]
fn test_first_matcher_short_circuits_second() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let filter = OrFilter::new(dictionary(), FilterConfig::default())
        .with_matcher(Strategy::CamelCase)
        .with_matcher(move |_: &str, _: &str| -> MatchResult {
            counter.fetch_add(1, Ordering::SeqCst);
            Some(Vec::new())
        });

    assert!(filter.find("cq", "重庆").is_some());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_raw_candidate_fallback() {
    let filter = OrFilter::new(dictionary(), FilterConfig::default())
        .with_matcher(Strategy::ContiguousSubstring);
    // "国x" never appears in "ZhongGuox" but does in the raw string
    assert_eq!(
        filter.find("国x", "中国x"),
        Some(vec![Match::new(1, 3)])
    );
}

#[test]
fn test_later_matcher_used_when_earlier_fails() {
    let filter = OrFilter::new(dictionary(), FilterConfig::default())
        .with_matcher(Strategy::Exact)
        .with_matcher(Strategy::Prefix);
    assert_eq!(filter.find("zhongg", "中国"), Some(vec![Match::new(0, 2)]));
}

#[test]
fn test_empty_candidate_and_word() {
    let filter = OrFilter::new(dictionary(), FilterConfig::default())
        .with_matcher(Strategy::Subsequence);
    assert_eq!(filter.find("a", ""), None);
    assert_eq!(filter.find("", "中国"), None);
}

#[test]
fn test_empty_match_list_counts_as_success() {
    let filter = OrFilter::new(dictionary(), FilterConfig::default())
        .with_matcher(|_: &str, _: &str| -> MatchResult { Some(Vec::new()) });
    assert_eq!(filter.find("anything", "中国"), Some(Vec::new()));
}

#[test]
fn test_capitalization_can_be_disabled() {
    let filter = OrFilter::new(dictionary(), FilterConfig::new().capitalize_first(false))
        .with_matcher(Strategy::CamelCase);
    // no uppercase anchors left, so "g" cannot jump to the second syllable
    assert_eq!(filter.find("zg", "中国"), None);
}

#[test]
fn test_filter_is_a_matcher() {
    let filter = OrFilter::new(dictionary(), FilterConfig::default())
        .with_matcher(Strategy::Prefix);
    let as_matcher: &dyn Matcher = &filter;
    assert_eq!(
        as_matcher.matches("chong", "重庆"),
        Some(vec![Match::new(0, 1)])
    );
}

#[cfg(feature = "pinyin")]
#[test]
fn test_bundled_pinyin_dictionary() {
    let filter = romafilter_core::or_match("", vec![Box::new(Strategy::Prefix) as BoxedMatcher]);
    assert_eq!(
        filter.find("beijing", "北京大学"),
        Some(vec![Match::new(0, 2)])
    );
    assert_eq!(filter.find("shanghai", "北京大学"), None);
}
