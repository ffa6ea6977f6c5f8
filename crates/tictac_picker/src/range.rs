//! Match ranges reported by a fuzzy matcher.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Inclusive run of matched characters, `start..=end`, in char offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchRange {
    /// First matched character.
    pub start: usize,
    /// Last matched character (inclusive).
    pub end: usize,
}

impl MatchRange {
    /// Creates a range covering `start..=end`.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// One past the last matched character.
    pub fn end_exclusive(&self) -> usize {
        self.end + 1
    }

    /// Checks the range names valid characters of a string `len` chars long.
    pub fn validate(&self, len: usize) -> Result<(), InvalidRange> {
        if self.start > self.end {
            return Err(InvalidRange::Reversed {
                start: self.start,
                end: self.end,
            });
        }
        if self.end >= len {
            return Err(InvalidRange::OutOfBounds {
                start: self.start,
                end: self.end,
                len,
            });
        }
        Ok(())
    }
}

impl From<(usize, usize)> for MatchRange {
    fn from((start, end): (usize, usize)) -> Self {
        Self::new(start, end)
    }
}

impl From<[usize; 2]> for MatchRange {
    fn from([start, end]: [usize; 2]) -> Self {
        Self::new(start, end)
    }
}

/// A match range that cannot be laid over its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum InvalidRange {
    /// The range reaches past the end of the text.
    #[display("Range {}..={} out of bounds for text of {} chars", start, end, len)]
    OutOfBounds {
        /// First character of the range.
        start: usize,
        /// Last character of the range.
        end: usize,
        /// Length of the text in chars.
        len: usize,
    },

    /// The range ends before it starts.
    #[display("Range {}..={} ends before it starts", start, end)]
    Reversed {
        /// First character of the range.
        start: usize,
        /// Last character of the range.
        end: usize,
    },

    /// The range shares characters with a range already applied.
    #[display("Range {}..={} overlaps an earlier range", start, end)]
    Overlapping {
        /// First character of the range.
        start: usize,
        /// Last character of the range.
        end: usize,
    },

    /// The range starts before the previous range ended.
    #[display(
        "Range {}..={} starts before the previous range ended at {}",
        start,
        end,
        previous_end
    )]
    Unordered {
        /// First character of the range.
        start: usize,
        /// Last character of the range.
        end: usize,
        /// Exclusive end of the previous range.
        previous_end: usize,
    },
}
