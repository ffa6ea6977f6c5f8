//! Fuzzy search collaborators that report where a query matched.

use crate::MatchRange;
use nucleo::{
    Config, Matcher, Utf32Str,
    pattern::{Atom, AtomKind, CaseMatching, Normalization},
};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use tracing::{debug, instrument};

/// One candidate accepted by a [`MatchSource`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateMatch {
    /// Index of the candidate in the searched list.
    pub index: usize,
    /// Ranking score, higher is better.
    pub score: u32,
    /// Ascending, non-overlapping matched runs within the candidate.
    pub ranges: Vec<MatchRange>,
}

/// A fuzzy search engine.
///
/// Implementations decide which candidates match a query and how they
/// rank; callers only rely on the reported ranges being ascending,
/// non-overlapping char offsets into the candidate.
pub trait MatchSource {
    /// Returns matching candidates, best first.
    fn search(&mut self, query: &str, candidates: &[String]) -> Vec<CandidateMatch>;
}

/// [`MatchSource`] backed by the `nucleo` fuzzy matcher.
pub struct NucleoSource {
    matcher: Matcher,
    case_matching: CaseMatching,
}

impl NucleoSource {
    /// Creates a source; `case_sensitive = false` folds case on both sides.
    pub fn new(case_sensitive: bool) -> Self {
        Self {
            matcher: Matcher::new(Config::DEFAULT),
            case_matching: if case_sensitive {
                CaseMatching::Respect
            } else {
                CaseMatching::Ignore
            },
        }
    }
}

impl Default for NucleoSource {
    fn default() -> Self {
        Self::new(false)
    }
}

impl std::fmt::Debug for NucleoSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NucleoSource")
            .field("case_matching", &self.case_matching)
            .finish_non_exhaustive()
    }
}

impl MatchSource for NucleoSource {
    #[instrument(skip(self, candidates), fields(candidates = candidates.len()))]
    fn search(&mut self, query: &str, candidates: &[String]) -> Vec<CandidateMatch> {
        let atom = Atom::new(
            query,
            self.case_matching,
            Normalization::Smart,
            AtomKind::Fuzzy,
            false,
        );

        let mut buf = Vec::new();
        let mut indices = Vec::new();
        let mut matches = Vec::new();
        for (index, candidate) in candidates.iter().enumerate() {
            indices.clear();
            let haystack = char_haystack(candidate, &mut buf);
            if let Some(score) = atom.indices(haystack, &mut self.matcher, &mut indices) {
                indices.sort_unstable();
                indices.dedup();
                matches.push(CandidateMatch {
                    index,
                    score: u32::from(score),
                    ranges: indices_to_ranges(&indices),
                });
            }
        }

        matches.sort_by_key(|m| (Reverse(m.score), m.index));
        debug!(matched = matches.len(), "Search complete");
        matches
    }
}

/// Views `text` as one matcher unit per char.
///
/// `Utf32Str::new` folds grapheme clusters into single units, which would
/// shift reported indices after a combining mark.
fn char_haystack<'a>(text: &'a str, buf: &'a mut Vec<char>) -> Utf32Str<'a> {
    if text.is_ascii() {
        Utf32Str::Ascii(text.as_bytes())
    } else {
        buf.clear();
        buf.extend(text.chars());
        Utf32Str::Unicode(buf)
    }
}

/// Merges sorted, deduplicated char indices into inclusive runs.
///
/// `[0, 1, 2, 4, 7, 8]` becomes `0..=2, 4..=4, 7..=8`.
pub fn indices_to_ranges(indices: &[u32]) -> Vec<MatchRange> {
    let mut ranges: Vec<MatchRange> = Vec::new();
    for &index in indices {
        let index = index as usize;
        match ranges.last_mut() {
            Some(last) if last.end + 1 == index => last.end = index,
            _ => ranges.push(MatchRange::new(index, index)),
        }
    }
    ranges
}
