//! Searchable option picker with fuzzy-match highlighting.
//!
//! A fuzzy matcher reports, for each accepted option, the character runs
//! that matched the query. [`build_segments`] turns those runs into
//! matched/unmatched pieces a view can style:
//!
//! ```
//! use tictac_picker::{MatchRange, build_segments};
//!
//! let segments = build_segments("harness", &[MatchRange::new(0, 2)]).unwrap();
//! let rendered: String = segments
//!     .iter()
//!     .map(|s| if s.matched { format!("[{}]", s.text) } else { s.text.clone() })
//!     .collect();
//! assert_eq!(rendered, "[har]ness");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod picker;
mod range;
mod segment;
mod source;
mod spans;

pub use config::{ConfigError, PickerConfig};
pub use picker::{Direction, MatchedOption, Picker};
pub use range::{InvalidRange, MatchRange};
pub use segment::{Interval, SegmentList, TextSegment, build_segments};
pub use source::{CandidateMatch, MatchSource, NucleoSource, indices_to_ranges};
pub use spans::{Span, ranges_to_adjacent_spans};
