//! Gap/match span view of a sorted list of match ranges.

use crate::{InvalidRange, MatchRange};
use serde::{Deserialize, Serialize};
use std::ops::Range;
use tracing::instrument;

/// Half-open char span tagged as matched or unmatched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Char offsets `start..end`.
    pub range: Range<usize>,
    /// Whether the span is a match.
    pub matched: bool,
}

impl Span {
    /// Creates a span.
    pub fn new(range: Range<usize>, matched: bool) -> Self {
        Self { range, matched }
    }
}

/// Turns ascending, non-overlapping ranges into adjacent spans over `text`.
///
/// Every gap before a match becomes an unmatched span, every match becomes
/// a matched span with an exclusive end, and a trailing unmatched span
/// covers whatever follows the last match.
#[instrument(skip(text, ranges), fields(ranges = ranges.len()))]
pub fn ranges_to_adjacent_spans(
    text: &str,
    ranges: &[MatchRange],
) -> Result<Vec<Span>, InvalidRange> {
    let len = text.chars().count();
    let mut spans = Vec::with_capacity(ranges.len() * 2 + 1);
    let mut last = 0;

    for range in ranges {
        range.validate(len)?;
        if range.start < last {
            return Err(InvalidRange::Unordered {
                start: range.start,
                end: range.end,
                previous_end: last,
            });
        }
        if range.start > last {
            spans.push(Span::new(last..range.start, false));
        }
        spans.push(Span::new(range.start..range.end_exclusive(), true));
        last = range.end_exclusive();
    }

    if last < len {
        spans.push(Span::new(last..len, false));
    }
    Ok(spans)
}
