//! Pure structural checks over course and period data. No I/O, no hidden state.

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};

use crate::modules::training::core::errors::DomainError;
use crate::modules::training::core::window::DateRange;
use crate::shared::core::primitives::WorkerId;

pub const MIN_INSTRUCTORS: usize = 1;
pub const MAX_INSTRUCTORS: usize = 2;
pub const MAX_COURSE_DAYS: i64 = 5;

/// Collapses repeated ids, keeping first-seen order.
pub fn distinct_workers(ids: &[WorkerId]) -> Vec<WorkerId> {
    let mut distinct = Vec::with_capacity(ids.len());
    for id in ids {
        if !distinct.contains(id) {
            distinct.push(*id);
        }
    }
    distinct
}

/// Counts after deduplication.
pub fn validate_instructor_count(ids: &[WorkerId]) -> Result<Vec<WorkerId>, DomainError> {
    let distinct = distinct_workers(ids);
    if !(MIN_INSTRUCTORS..=MAX_INSTRUCTORS).contains(&distinct.len()) {
        return Err(DomainError::InvalidInstructorCount {
            actual: distinct.len(),
            min: MIN_INSTRUCTORS,
            max: MAX_INSTRUCTORS,
        });
    }
    Ok(distinct)
}

pub fn validate_date_window(start_date: NaiveDate, end_date: NaiveDate) -> Result<(), DomainError> {
    if start_date >= end_date {
        return Err(DomainError::InvalidDateRange {
            start_date,
            end_date,
        });
    }
    Ok(())
}

/// Duration is checked before weekdays: an over-long span reports `InvalidDuration`
/// even when it also contains a weekend.
pub fn validate_duration_and_weekdays(
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<(), DomainError> {
    let days = DateRange::new(start_date, end_date).span_days();
    if days > MAX_COURSE_DAYS {
        return Err(DomainError::InvalidDuration {
            days,
            max_days: MAX_COURSE_DAYS,
        });
    }

    let weekend_day = start_date
        .iter_days()
        .take(days.max(0) as usize)
        .find(|date| matches!(date.weekday(), Weekday::Sat | Weekday::Sun));
    if let Some(date) = weekend_day {
        return Err(DomainError::WeekendNotAllowed {
            date,
            weekday: date.weekday(),
        });
    }
    Ok(())
}

pub fn validate_time_window(start_time: NaiveTime, end_time: NaiveTime) -> Result<(), DomainError> {
    if start_time >= end_time {
        return Err(DomainError::InvalidTimeRange {
            start_time,
            end_time,
        });
    }
    Ok(())
}

/// Inclusive on both period boundaries.
pub fn validate_period_membership(course: &DateRange, period: &DateRange) -> Result<(), DomainError> {
    if !period.contains(course.start_date) || !period.contains(course.end_date) {
        return Err(DomainError::OutOfPeriodRange {
            start_date: course.start_date,
            end_date: course.end_date,
            period_start: period.start_date,
            period_end: period.end_date,
        });
    }
    Ok(())
}
