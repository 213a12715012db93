use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::primitives::{clamp_instant, span_millis};

/// Ordered `(start, end)` pair of wall-clock instants.
///
/// Used for the bound range, the view extent and the selection alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DateRange {
    /// Builds a range, swapping the ends when given in reverse.
    #[must_use]
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        if end < start {
            Self {
                start: end,
                end: start,
            }
        } else {
            Self { start, end }
        }
    }

    #[must_use]
    pub fn width_millis(self) -> i64 {
        span_millis(self.start, self.end)
    }

    #[must_use]
    pub fn contains(self, instant: NaiveDateTime) -> bool {
        self.start <= instant && instant <= self.end
    }

    /// `true` when `other` lies inside `self` and differs from it.
    #[must_use]
    pub fn strictly_contains(self, other: DateRange) -> bool {
        self.start <= other.start && other.end <= self.end && other != self
    }

    #[must_use]
    pub fn overlaps(self, other: DateRange) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Clamps both ends into `bounds`.
    #[must_use]
    pub fn clamp_into(self, bounds: DateRange) -> Self {
        Self {
            start: clamp_instant(self.start, bounds.start, bounds.end),
            end: clamp_instant(self.end, bounds.start, bounds.end),
        }
    }

    /// Smallest range covering both `self` and `other`.
    #[must_use]
    pub fn union(self, other: DateRange) -> Self {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

/// Last-in-first-out history of previously active view extents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZoomStack {
    entries: Vec<DateRange>,
}

impl ZoomStack {
    pub fn push(&mut self, extent: DateRange) {
        self.entries.push(extent);
    }

    pub fn pop(&mut self) -> Option<DateRange> {
        self.entries.pop()
    }

    #[must_use]
    pub fn peek(&self) -> Option<DateRange> {
        self.entries.last().copied()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries from the oldest to the most recent.
    #[must_use]
    pub fn as_slice(&self) -> &[DateRange] {
        &self.entries
    }
}
