//! Tests for the terminal picker output.

use std::io::Write;
use tictac::pick::{render_segments, run, search};
use tictac_picker::{Picker, PickerConfig, TextSegment};

fn config() -> PickerConfig {
    PickerConfig::new(
        ["harness real-time", "engage viral", "enable strategic"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
    )
}

#[test]
fn test_render_segments_brackets_matches() {
    let segments = vec![
        TextSegment::new("har", true),
        TextSegment::new("ness", false),
    ];
    assert_eq!(render_segments(&segments), "[har]ness");
}

#[test]
fn test_blank_search_lists_everything() {
    let mut picker = Picker::from_config(&config());
    let mut out = Vec::new();
    let selected = search(&mut picker, "", 1, &mut out).unwrap();

    assert_eq!(selected.as_deref(), Some("engage viral"));
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "  harness real-time\n> engage viral\n  enable strategic\nselected: engage viral\n"
    );
}

#[test]
fn test_search_without_matches() {
    let mut picker = Picker::from_config(&config());
    let mut out = Vec::new();
    let selected = search(&mut picker, "qqq", 0, &mut out).unwrap();

    assert_eq!(selected, None);
    assert_eq!(String::from_utf8(out).unwrap(), "no matches\n");
}

#[test]
fn test_run_from_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, r#"options = ["engage viral", "enable strategic"]"#).unwrap();

    let mut out = Vec::new();
    run(file.path(), "viral", 0, &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "> engage [viral]\nselected: engage viral\n"
    );
}
