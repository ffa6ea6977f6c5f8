//! Splitting text into matched and unmatched segments.
//!
//! A [`SegmentList`] starts as one unmatched span over the whole text.
//! Each match range is laid over the span that contains it, splitting
//! that span into at most three parts:
//!
//! ```text
//! "harness real-time"   overlay 0..=2, 4..=4, 7..=10, 16..=16
//!
//! [harness real-time]
//! (har)[ness real-time]
//! (har)[n](e)[ss real-time]
//! (har)[n](e)[ss]( rea)[l-time]
//! (har)[n](e)[ss]( rea)[l-tim](e)
//! ```

use crate::{InvalidRange, MatchRange};
use serde::{Deserialize, Serialize};
use std::ops::Range;
use tracing::{debug, instrument, trace};

/// A piece of text tagged as matched or unmatched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextSegment {
    /// The text of this piece.
    pub text: String,
    /// Whether the matcher marked this piece.
    pub matched: bool,
}

impl TextSegment {
    /// Creates a segment.
    pub fn new(text: impl Into<String>, matched: bool) -> Self {
        Self {
            text: text.into(),
            matched,
        }
    }
}

/// Half-open char span `start..end` with its matched flag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Interval {
    /// Char span covered.
    pub span: Range<usize>,
    /// Whether the span is matched.
    pub matched: bool,
}

impl Interval {
    fn new(span: Range<usize>, matched: bool) -> Self {
        Self { span, matched }
    }

    fn contains(&self, span: &Range<usize>) -> bool {
        self.span.start <= span.start && span.end <= self.span.end
    }
}

/// Ordered, disjoint char intervals covering `0..len` without gaps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentList {
    intervals: Vec<Interval>,
    len: usize,
}

impl SegmentList {
    /// One unmatched interval over `len` chars (none when `len` is zero).
    pub fn new(len: usize) -> Self {
        let intervals = if len == 0 {
            Vec::new()
        } else {
            vec![Interval::new(0..len, false)]
        };
        Self { intervals, len }
    }

    /// Intervals in left-to-right order.
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// Marks `range` as matched by splitting the interval that holds it.
    ///
    /// The parts before and after the range keep the flag of the interval
    /// they were cut from; zero-length parts are dropped. A range that
    /// straddles two intervals, or lands on characters already matched,
    /// overlaps an earlier overlay and is rejected without changing the list.
    #[instrument(skip(self), fields(len = self.len))]
    pub fn overlay(&mut self, range: MatchRange) -> Result<(), InvalidRange> {
        range.validate(self.len)?;
        let span = range.start..range.end_exclusive();
        let overlapping = InvalidRange::Overlapping {
            start: range.start,
            end: range.end,
        };

        let index = self
            .intervals
            .iter()
            .position(|interval| interval.contains(&span))
            .ok_or(overlapping)?;
        let host = &self.intervals[index];
        if host.matched {
            return Err(overlapping);
        }

        let parts = [
            Interval::new(host.span.start..span.start, host.matched),
            Interval::new(span.clone(), true),
            Interval::new(span.end..host.span.end, host.matched),
        ];
        let parts: Vec<Interval> = parts
            .into_iter()
            .filter(|part| !part.span.is_empty())
            .collect();
        trace!(index, parts = parts.len(), "Splitting interval");

        self.intervals.splice(index..=index, parts);
        Ok(())
    }

    /// Cuts `text` along the intervals.
    ///
    /// `text` must be the string this list was built for.
    pub(crate) fn to_segments(&self, text: &str) -> Vec<TextSegment> {
        let bounds = char_boundaries(text);
        self.intervals
            .iter()
            .map(|interval| {
                let bytes = bounds[interval.span.start]..bounds[interval.span.end];
                TextSegment::new(&text[bytes], interval.matched)
            })
            .collect()
    }
}

/// Byte offset of every char, plus the end of the string.
pub(crate) fn char_boundaries(text: &str) -> Vec<usize> {
    text.char_indices()
        .map(|(offset, _)| offset)
        .chain(std::iter::once(text.len()))
        .collect()
}

/// Splits `input` into segments, marking every char covered by `ranges`.
///
/// Ranges are inclusive char offsets and may come in any order, but must
/// not overlap. Concatenating the returned texts gives back `input`, and no
/// returned segment is empty.
#[instrument(skip(input, ranges), fields(chars = input.chars().count(), ranges = ranges.len()))]
pub fn build_segments(input: &str, ranges: &[MatchRange]) -> Result<Vec<TextSegment>, InvalidRange> {
    let mut list = SegmentList::new(input.chars().count());
    for &range in ranges {
        list.overlay(range).inspect_err(|error| {
            debug!(%error, "Rejecting match ranges");
        })?;
    }
    Ok(list.to_segments(input))
}
