//! Translation rules and the stages that group them

use super::{Interval, RemapError};
use std::fmt;

/// Maps `[source_start, source_start + range)` onto
/// `[dest_start, dest_start + range)` by a constant shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslationRule {
    dest_start: i64,
    source_start: i64,
    range: i64,
}

/// Which part of an interval a rule's source range covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlap {
    /// The rule covers the whole interval
    Whole,
    /// The rule lies strictly inside the interval
    Middle,
    /// The rule starts inside the interval and covers it to its end
    Tail,
    /// The rule ends inside the interval and covers it from its start
    Head,
    Disjoint,
}

/// Result of offering one interval to one rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Split {
    /// The shifted piece, if the rule matched
    pub mapped: Option<Interval>,
    /// Pieces the rule did not touch, in ascending order
    pub unmapped: [Option<Interval>; 2],
}

impl Split {
    fn untouched(interval: Interval) -> Self {
        Self {
            mapped: None,
            unmapped: [Some(interval), None],
        }
    }

    pub fn unmapped(&self) -> impl Iterator<Item = Interval> {
        self.unmapped.into_iter().flatten()
    }
}

impl TranslationRule {
    /// Arguments follow the almanac line order: destination, source, length.
    pub fn new(dest_start: i64, source_start: i64, range: i64) -> Result<Self, RemapError> {
        if range < 0 {
            return Err(RemapError::InvalidInput(format!(
                "rule {dest_start} {source_start} {range} has negative length"
            )));
        }
        if source_start.checked_add(range).is_none() || dest_start.checked_add(range).is_none() {
            return Err(RemapError::InvalidInput(format!(
                "rule {dest_start} {source_start} {range} overflows"
            )));
        }
        dest_start.checked_sub(source_start).ok_or_else(|| {
            RemapError::InvalidInput(format!(
                "rule {dest_start} {source_start} {range} shift overflows"
            ))
        })?;
        Ok(Self {
            dest_start,
            source_start,
            range,
        })
    }

    pub fn source_start(&self) -> i64 {
        self.source_start
    }

    pub fn source_end(&self) -> i64 {
        self.source_start + self.range
    }

    pub fn dest_start(&self) -> i64 {
        self.dest_start
    }

    pub fn range(&self) -> i64 {
        self.range
    }

    pub fn shift(&self) -> i64 {
        self.dest_start - self.source_start
    }

    pub fn is_empty(&self) -> bool {
        self.range == 0
    }

    pub fn map_value(&self, value: i64) -> Option<i64> {
        (self.source_start <= value && value < self.source_end()).then(|| value + self.shift())
    }

    /// Classify how this rule's source range meets `interval`.
    ///
    /// Checked in a fixed order: whole, middle, tail, head. Touching
    /// boundaries (`source_end == start` or `source_start == end`) are
    /// disjoint for non-empty intervals. An empty interval is `Whole` when
    /// `source_start <= start <= source_end`. Empty rules never overlap.
    pub fn overlap(&self, interval: &Interval) -> Overlap {
        if self.is_empty() {
            return Overlap::Disjoint;
        }
        let (start, end) = (interval.start(), interval.end());
        let (source_start, source_end) = (self.source_start, self.source_end());

        if source_start <= start && source_end >= end {
            Overlap::Whole
        } else if source_start > start && source_end < end {
            Overlap::Middle
        } else if source_start > start && source_start < end {
            Overlap::Tail
        } else if source_end > start && source_end < end {
            Overlap::Head
        } else {
            Overlap::Disjoint
        }
    }

    /// Shift the covered part of `interval`, returning uncovered remainders
    /// separately.
    pub fn split(&self, interval: Interval) -> Split {
        let (start, end) = (interval.start(), interval.end());
        let (source_start, source_end) = (self.source_start, self.source_end());
        let shift = self.shift();

        match self.overlap(&interval) {
            Overlap::Whole => Split {
                mapped: Some(interval.shifted(shift)),
                unmapped: [None, None],
            },
            Overlap::Middle => Split {
                mapped: Some(Interval::from_bounds(source_start, source_end).shifted(shift)),
                unmapped: [
                    Some(Interval::from_bounds(start, source_start)),
                    Some(Interval::from_bounds(source_end, end)),
                ],
            },
            Overlap::Tail => Split {
                mapped: Some(Interval::from_bounds(source_start, end).shifted(shift)),
                unmapped: [Some(Interval::from_bounds(start, source_start)), None],
            },
            Overlap::Head => Split {
                mapped: Some(Interval::from_bounds(start, source_end).shifted(shift)),
                unmapped: [Some(Interval::from_bounds(source_end, end)), None],
            },
            Overlap::Disjoint => Split::untouched(interval),
        }
    }
}

impl fmt::Display for TranslationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.dest_start, self.source_start, self.range)
    }
}

/// Rules applied together, disjoint in source space
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stage {
    name: Option<String>,
    rules: Vec<TranslationRule>,
}

impl Stage {
    /// Fails with [`RemapError::MalformedRule`] when two non-empty rules
    /// share a source value.
    pub fn new(rules: Vec<TranslationRule>) -> Result<Self, RemapError> {
        let mut by_source: Vec<&TranslationRule> = rules.iter().filter(|r| !r.is_empty()).collect();
        by_source.sort_by_key(|r| r.source_start);

        if let Some(pair) = by_source
            .windows(2)
            .find(|pair| pair[0].source_end() > pair[1].source_start)
        {
            return Err(RemapError::MalformedRule {
                first: *pair[0],
                second: *pair[1],
            });
        }

        Ok(Self { name: None, rules })
    }

    /// Label used in logs, e.g. the almanac header `seed-to-soil`
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn rules(&self) -> &[TranslationRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Map one value; values outside every rule map to themselves.
    pub fn map_value(&self, value: i64) -> i64 {
        self.rules
            .iter()
            .find_map(|rule| rule.map_value(value))
            .unwrap_or(value)
    }

    /// Map every interval through this stage, producing a fresh collection.
    ///
    /// A piece shifted by one rule is final for the stage; only unshifted
    /// remainders are offered to the following rules. Pieces no rule
    /// matched come out unchanged.
    pub fn apply(&self, intervals: &[Interval]) -> Vec<Interval> {
        let mut mapped = Vec::with_capacity(intervals.len());
        let mut pending = intervals.to_vec();

        for rule in &self.rules {
            if pending.is_empty() {
                break;
            }
            let mut remaining = Vec::with_capacity(pending.len());
            for interval in pending {
                let split = rule.split(interval);
                mapped.extend(split.mapped);
                remaining.extend(split.unmapped());
            }
            pending = remaining;
        }

        mapped.extend(pending);
        mapped
    }
}
