//! Half-open integer intervals

use super::RemapError;
use std::fmt;

/// The half-open range `[start, start + length)`
///
/// `length` is never negative and `end()` never overflows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Interval {
    start: i64,
    length: i64,
}

impl Interval {
    pub fn new(start: i64, length: i64) -> Result<Self, RemapError> {
        if length < 0 {
            return Err(RemapError::InvalidInput(format!(
                "interval starting at {start} has negative length {length}"
            )));
        }
        start.checked_add(length).ok_or_else(|| {
            RemapError::InvalidInput(format!(
                "interval starting at {start} with length {length} overflows"
            ))
        })?;
        Ok(Self { start, length })
    }

    /// The single value `[value, value + 1)`
    pub fn point(value: i64) -> Result<Self, RemapError> {
        Self::new(value, 1)
    }

    /// Caller guarantees `start <= end`.
    pub(super) fn from_bounds(start: i64, end: i64) -> Self {
        debug_assert!(start <= end);
        Self {
            start,
            length: end - start,
        }
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn length(&self) -> i64 {
        self.length
    }

    /// Exclusive upper bound
    pub fn end(&self) -> i64 {
        self.start + self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn contains(&self, value: i64) -> bool {
        self.start <= value && value < self.end()
    }

    /// Move the interval by `diff`, keeping its length.
    ///
    /// Only called with the shift of a rule whose destination range holds
    /// the result, so this cannot overflow.
    pub(super) fn shifted(self, diff: i64) -> Self {
        Self {
            start: self.start + diff,
            length: self.length,
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        let interval = Interval::new(10, 10).unwrap();
        assert_eq!(interval.start(), 10);
        assert_eq!(interval.end(), 20);
        assert!(interval.contains(10));
        assert!(interval.contains(19));
        assert!(!interval.contains(20));
        assert!(!interval.contains(9));
        assert_eq!(interval.to_string(), "[10, 20)");
    }

    #[test]
    fn test_empty_interval_contains_nothing() {
        let interval = Interval::new(5, 0).unwrap();
        assert!(interval.is_empty());
        assert!(!interval.contains(5));
    }

    #[test]
    fn test_negative_length_rejected() {
        assert!(matches!(Interval::new(0, -1), Err(RemapError::InvalidInput(_))));
    }

    #[test]
    fn test_overflow_rejected() {
        assert!(Interval::new(i64::MAX, 1).is_err());
        assert!(Interval::point(i64::MAX).is_err());
        assert!(Interval::new(i64::MAX, 0).is_ok());
    }
}
