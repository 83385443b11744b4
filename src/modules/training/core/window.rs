use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Inclusive calendar range `[start_date, end_date]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl DateRange {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Ranges sharing a single boundary day overlap.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.start_date <= other.end_date && self.end_date >= other.start_date
    }

    /// Number of calendar days covered, counting both ends.
    pub fn span_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

/// A course's calendar range plus the daily half-open time slot `[start_time, end_time)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseWindow {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

impl CourseWindow {
    pub fn dates(&self) -> DateRange {
        DateRange::new(self.start_date, self.end_date)
    }

    pub fn times_overlap(&self, other: &CourseWindow) -> bool {
        self.start_time < other.end_time && self.end_time > other.start_time
    }

    /// Inclusive on dates, strict on times. Both must hold.
    pub fn conflicts_with(&self, other: &CourseWindow) -> bool {
        self.dates().overlaps(&other.dates()) && self.times_overlap(other)
    }
}
