//! Option picker state: search text, visible matches and the highlight.

use crate::{MatchSource, NucleoSource, PickerConfig, TextSegment, build_segments};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// An option as shown in the picker list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedOption {
    /// The option text as configured.
    pub original: String,
    /// The option text cut into matched/unmatched pieces.
    pub segments: Vec<TextSegment>,
}

impl MatchedOption {
    /// An option shown without any highlighting.
    pub fn unmatched(original: &str) -> Self {
        let segments = if original.is_empty() {
            Vec::new()
        } else {
            vec![TextSegment::new(original, false)]
        };
        Self {
            original: original.to_string(),
            segments,
        }
    }
}

/// Direction to move the highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Towards the first option, wrapping to the last.
    Up,
    /// Towards the last option, wrapping to the first.
    Down,
}

/// Searchable option list.
#[derive(Debug)]
pub struct Picker<S> {
    source: S,
    options: Vec<String>,
    max_displayed_options: usize,
    search_text: String,
    highlight_index: usize,
    matched: Vec<MatchedOption>,
}

impl Picker<NucleoSource> {
    /// Builds a picker over the configured options using `nucleo`.
    #[instrument(skip(config))]
    pub fn from_config(config: &PickerConfig) -> Self {
        Self::new(
            NucleoSource::new(*config.case_sensitive()),
            config.options().clone(),
            *config.max_displayed_options(),
        )
    }
}

impl<S: MatchSource> Picker<S> {
    /// Creates a picker with an empty search.
    #[instrument(skip(source, options), fields(options = options.len()))]
    pub fn new(source: S, options: Vec<String>, max_displayed_options: usize) -> Self {
        let mut picker = Self {
            source,
            options,
            max_displayed_options,
            search_text: String::new(),
            highlight_index: 0,
            matched: Vec::new(),
        };
        picker.refresh();
        picker
    }

    /// Current search text.
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Options currently shown, best match first.
    pub fn matched_options(&self) -> &[MatchedOption] {
        &self.matched
    }

    /// Index of the highlighted row.
    pub fn highlight_index(&self) -> usize {
        self.highlight_index
    }

    /// The highlighted row, if the list is not empty.
    pub fn highlighted(&self) -> Option<&MatchedOption> {
        self.matched.get(self.highlight_index)
    }

    /// Replaces the search text and recomputes the visible options.
    ///
    /// The highlight returns to the first row.
    #[instrument(skip(self, text))]
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
        self.highlight_index = 0;
        self.refresh();
    }

    /// Replaces the option list and recomputes the visible options.
    #[instrument(skip(self, options), fields(options = options.len()))]
    pub fn set_options(&mut self, options: Vec<String>) {
        self.options = options;
        self.refresh();
    }

    /// Moves the highlight one row, wrapping at both ends.
    #[instrument(skip(self))]
    pub fn navigate(&mut self, direction: Direction) {
        let Some(last) = self.matched.len().checked_sub(1) else {
            return;
        };
        self.highlight_index = match direction {
            Direction::Down if self.highlight_index >= last => 0,
            Direction::Down => self.highlight_index + 1,
            Direction::Up if self.highlight_index == 0 => last,
            Direction::Up => self.highlight_index - 1,
        };
        debug!(highlight = self.highlight_index, "Highlight moved");
    }

    /// Text of the highlighted option, if any.
    #[instrument(skip(self))]
    pub fn select_highlighted(&self) -> Option<&str> {
        let selected = self.highlighted().map(|option| option.original.as_str());
        debug!(?selected, "Option selected");
        selected
    }

    fn refresh(&mut self) {
        self.matched = if self.search_text.trim().is_empty() {
            self.options
                .iter()
                .take(self.max_displayed_options)
                .map(|option| MatchedOption::unmatched(option))
                .collect()
        } else {
            self.source
                .search(&self.search_text, &self.options)
                .into_iter()
                .filter_map(|found| {
                    let Some(option) = self.options.get(found.index) else {
                        warn!(index = found.index, "Search returned unknown option");
                        return None;
                    };
                    let segments = build_segments(option, &found.ranges).unwrap_or_else(|error| {
                        warn!(%error, option = %option, "Discarding match highlighting");
                        MatchedOption::unmatched(option).segments
                    });
                    Some(MatchedOption {
                        original: option.clone(),
                        segments,
                    })
                })
                .take(self.max_displayed_options)
                .collect()
        };

        if self.highlight_index >= self.matched.len() {
            self.highlight_index = 0;
        }
        debug!(shown = self.matched.len(), "Options refreshed");
    }
}
