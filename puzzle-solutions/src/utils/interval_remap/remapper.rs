//! Drives a set of intervals through successive stages

use super::{Interval, RemapError, Stage};
use tracing::{debug, trace};

/// Owns the current interval population and replaces it stage by stage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntervalRemapper {
    intervals: Vec<Interval>,
    stages_applied: usize,
}

impl IntervalRemapper {
    /// Start from `(start, length)` pairs.
    ///
    /// Negative lengths and overflowing ranges are rejected. Empty ranges are
    /// kept: they cover no values but still move with the rule containing
    /// their start and count towards [`minimum`](Self::minimum).
    pub fn new<I>(seed_pairs: I) -> Result<Self, RemapError>
    where
        I: IntoIterator<Item = (i64, i64)>,
    {
        let intervals = seed_pairs
            .into_iter()
            .map(|(start, length)| Interval::new(start, length))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            intervals,
            stages_applied: 0,
        })
    }

    /// Start from single values, each a length-1 interval.
    pub fn from_values<I>(values: I) -> Result<Self, RemapError>
    where
        I: IntoIterator<Item = i64>,
    {
        Self::new(values.into_iter().map(|value| (value, 1)))
    }

    pub fn apply_stage(&mut self, stage: &Stage) {
        let before = self.intervals.len();
        self.intervals = stage.apply(&self.intervals);
        self.stages_applied += 1;

        debug!(
            stage = stage.name().unwrap_or("<unnamed>"),
            rules = stage.len(),
            before,
            after = self.intervals.len(),
            "applied stage"
        );
        trace!(intervals = ?self.intervals, "intervals after stage");
    }

    pub fn apply_all<'a, I>(&mut self, stages: I)
    where
        I: IntoIterator<Item = &'a Stage>,
    {
        for stage in stages {
            self.apply_stage(stage);
        }
    }

    /// Lowest value covered by any interval, `None` when nothing is covered
    pub fn minimum(&self) -> Option<i64> {
        self.intervals.iter().map(Interval::start).min()
    }

    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    pub fn into_intervals(self) -> Vec<Interval> {
        self.intervals
    }

    /// Number of covered values, counting overlapping images once per interval
    pub fn total_length(&self) -> i64 {
        self.intervals.iter().map(Interval::length).sum()
    }

    pub fn stages_applied(&self) -> usize {
        self.stages_applied
    }
}
