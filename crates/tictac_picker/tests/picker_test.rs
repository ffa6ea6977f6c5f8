//! Tests for picker state.

use std::io::Write;
use tictac_picker::{
    CandidateMatch, Direction, MatchRange, MatchSource, MatchedOption, Picker, PickerConfig,
    TextSegment,
};

/// Matches candidates containing the query as a substring, in list order.
struct SubstringSource;

impl MatchSource for SubstringSource {
    fn search(&mut self, query: &str, candidates: &[String]) -> Vec<CandidateMatch> {
        candidates
            .iter()
            .enumerate()
            .filter_map(|(index, candidate)| {
                let byte = candidate.find(query)?;
                let start = candidate[..byte].chars().count();
                let end = start + query.chars().count() - 1;
                Some(CandidateMatch {
                    index,
                    score: 1,
                    ranges: vec![MatchRange::new(start, end)],
                })
            })
            .collect()
    }
}

/// Reports ranges past the end of every candidate.
struct BrokenSource;

impl MatchSource for BrokenSource {
    fn search(&mut self, _query: &str, candidates: &[String]) -> Vec<CandidateMatch> {
        candidates
            .iter()
            .enumerate()
            .map(|(index, candidate)| CandidateMatch {
                index,
                score: 1,
                ranges: vec![MatchRange::new(0, candidate.chars().count())],
            })
            .collect()
    }
}

fn options() -> Vec<String> {
    [
        "harness real-time",
        "engage viral",
        "unleash bleeding-edge",
        "synergize scalable",
        "enable strategic",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

#[test]
fn test_blank_search_shows_first_options_unmatched() {
    let mut picker = Picker::new(SubstringSource, options(), 3);
    picker.set_search_text("   ");

    let shown = picker.matched_options();
    assert_eq!(shown.len(), 3);
    assert_eq!(shown[0], MatchedOption::unmatched("harness real-time"));
    assert!(shown.iter().all(|o| o.segments.iter().all(|s| !s.matched)));
}

#[test]
fn test_search_highlights_matches() {
    let mut picker = Picker::new(SubstringSource, options(), 10);
    picker.set_search_text("ea");

    let shown = picker.matched_options();
    let originals: Vec<&str> = shown.iter().map(|o| o.original.as_str()).collect();
    assert_eq!(originals, vec!["harness real-time", "unleash bleeding-edge"]);
    assert_eq!(
        shown[0].segments,
        vec![
            TextSegment::new("harness r", false),
            TextSegment::new("ea", true),
            TextSegment::new("l-time", false),
        ]
    );
}

#[test]
fn test_results_truncated_to_max() {
    let mut picker = Picker::new(SubstringSource, options(), 2);
    picker.set_search_text("e");
    assert_eq!(picker.matched_options().len(), 2);
}

#[test]
fn test_navigation_wraps() {
    let mut picker = Picker::new(SubstringSource, options(), 3);
    assert_eq!(picker.highlight_index(), 0);

    picker.navigate(Direction::Up);
    assert_eq!(picker.highlight_index(), 2);

    picker.navigate(Direction::Down);
    assert_eq!(picker.highlight_index(), 0);

    picker.navigate(Direction::Down);
    picker.navigate(Direction::Down);
    assert_eq!(picker.select_highlighted(), Some("unleash bleeding-edge"));
}

#[test]
fn test_navigation_on_empty_list_is_noop() {
    let mut picker = Picker::new(SubstringSource, options(), 5);
    picker.set_search_text("zzz");

    picker.navigate(Direction::Down);
    picker.navigate(Direction::Up);
    assert_eq!(picker.highlight_index(), 0);
    assert_eq!(picker.select_highlighted(), None);
}

#[test]
fn test_new_search_resets_highlight() {
    let mut picker = Picker::new(SubstringSource, options(), 5);
    picker.navigate(Direction::Down);
    picker.navigate(Direction::Down);
    assert_eq!(picker.highlight_index(), 2);

    picker.set_search_text("en");
    assert_eq!(picker.highlight_index(), 0);
}

#[test]
fn test_shrinking_options_clamps_highlight() {
    let mut picker = Picker::new(SubstringSource, options(), 5);
    picker.navigate(Direction::Up);
    assert_eq!(picker.highlight_index(), 4);

    picker.set_options(vec!["only".to_string()]);
    assert_eq!(picker.highlight_index(), 0);
    assert_eq!(picker.select_highlighted(), Some("only"));
}

#[test]
fn test_bad_ranges_fall_back_to_plain_text() {
    let mut picker = Picker::new(BrokenSource, options(), 5);
    picker.set_search_text("x");

    let shown = picker.matched_options();
    assert_eq!(shown.len(), 5);
    assert_eq!(shown[1], MatchedOption::unmatched("engage viral"));
}

#[test]
fn test_nucleo_picker_from_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
max_displayed_options = 2
options = ["harness real-time", "engage viral", "enable strategic"]
"#
    )
    .unwrap();

    let config = PickerConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.max_displayed_options(), 2);

    let mut picker = Picker::from_config(&config);
    assert_eq!(picker.matched_options().len(), 2);

    picker.set_search_text("viral");
    let shown = picker.matched_options();
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].original, "engage viral");
    assert_eq!(
        shown[0].segments,
        vec![
            TextSegment::new("engage ", false),
            TextSegment::new("viral", true),
        ]
    );
}

#[test]
fn test_missing_config_file() {
    let err = PickerConfig::from_file("/nonexistent/picker.toml").unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}
