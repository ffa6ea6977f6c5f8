//! Terminal rendering of picker results.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tictac_picker::{Direction, MatchSource, Picker, PickerConfig, TextSegment};
use tracing::instrument;

/// Joins segments, wrapping matched ones in brackets.
pub fn render_segments(segments: &[TextSegment]) -> String {
    segments
        .iter()
        .map(|segment| {
            if segment.matched {
                format!("[{}]", segment.text)
            } else {
                segment.text.clone()
            }
        })
        .collect()
}

/// Prints the visible rows, marking the highlighted one with `>`.
pub fn render<S: MatchSource>(picker: &Picker<S>, out: &mut impl Write) -> Result<()> {
    for (i, option) in picker.matched_options().iter().enumerate() {
        let marker = if i == picker.highlight_index() { '>' } else { ' ' };
        writeln!(out, "{} {}", marker, render_segments(&option.segments))?;
    }
    Ok(())
}

/// Searches, moves the highlight `down` rows, and prints rows and selection.
#[instrument(skip(picker, out))]
pub fn search<S: MatchSource>(
    picker: &mut Picker<S>,
    query: &str,
    down: usize,
    out: &mut impl Write,
) -> Result<Option<String>> {
    picker.set_search_text(query);
    for _ in 0..down {
        picker.navigate(Direction::Down);
    }
    render(picker, out)?;

    let selected = picker.select_highlighted().map(str::to_string);
    match &selected {
        Some(option) => writeln!(out, "selected: {}", option)?,
        None => writeln!(out, "no matches")?,
    }
    Ok(selected)
}

/// Loads the picker config and runs one search.
#[instrument(skip(config_path, out), fields(config = %config_path.display()))]
pub fn run(config_path: &Path, query: &str, down: usize, out: &mut impl Write) -> Result<()> {
    let config = PickerConfig::from_file(config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    let mut picker = Picker::from_config(&config);
    search(&mut picker, query, down, out)?;
    Ok(())
}
