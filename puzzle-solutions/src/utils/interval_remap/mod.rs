//! Interval Remapping Through Stages of Translation Rules
//!
//! This module maps sets of integer ranges through a pipeline of stages. Each
//! stage is a list of [`TranslationRule`]s, each shifting a source range by a
//! constant; values outside every rule of a stage keep their value.
//!
//! # Types
//!
//! - [`Interval`]: half-open `[start, start + length)` range
//! - [`TranslationRule`]: `dest_start source_start range`, as written in an almanac
//! - [`Stage`]: rules that are disjoint in source space, applied together
//! - [`IntervalRemapper`]: current interval population, replaced stage by stage
//!
//! # Splitting
//!
//! When a rule covers only part of an interval, the interval is split at the
//! rule's boundaries ([`Overlap`]). The covered piece is shifted and is final
//! for the stage; uncovered pieces are offered to the remaining rules of the
//! same stage. A stage never shifts a value twice, and the total length of the
//! population is preserved.
//!
//! # Preconditions
//!
//! Rules of one stage must not overlap in source space. [`Stage::new`]
//! rejects overlapping rules with [`RemapError::MalformedRule`].
//!
//! # Example
//!
//! ```rust
//! use puzzle_solutions::utils::interval_remap::{IntervalRemapper, Stage, TranslationRule};
//!
//! let seed_to_soil = Stage::new(vec![
//!     TranslationRule::new(50, 98, 2).unwrap(),
//!     TranslationRule::new(52, 50, 48).unwrap(),
//! ])
//! .unwrap();
//!
//! // Seeds 79..93 and 55..68
//! let mut remapper = IntervalRemapper::new([(79, 14), (55, 13)]).unwrap();
//! remapper.apply_stage(&seed_to_soil);
//!
//! assert_eq!(remapper.minimum(), Some(57));
//! assert_eq!(remapper.total_length(), 27);
//! ```

mod error;
mod interval;
mod remapper;
mod stage;


pub use error::RemapError;
pub use interval::Interval;
pub use remapper::IntervalRemapper;
pub use stage::{Overlap, Split, Stage, TranslationRule};
