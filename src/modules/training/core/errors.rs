use chrono::{NaiveDate, NaiveTime, Weekday};
use thiserror::Error;

use crate::shared::core::primitives::{CourseId, EnrollmentId, PeriodId, WorkerId};

fn join<T: ToString>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("a course must have between {min} and {max} distinct instructors, got {actual}")]
    InvalidInstructorCount {
        actual: usize,
        min: usize,
        max: usize,
    },

    #[error("invalid instructors, unknown workers: {}", join(.unknown))]
    InvalidInstructors { unknown: Vec<WorkerId> },

    #[error("instructor {worker_id} is not available, already teaching course {course_id} in an overlapping window")]
    InstructorUnavailable {
        worker_id: WorkerId,
        course_id: CourseId,
    },

    #[error("start date {start_date} must be before end date {end_date}")]
    InvalidDateRange {
        start_date: NaiveDate,
        end_date: NaiveDate,
    },

    #[error("a course may span at most {max_days} days, got {days}")]
    InvalidDuration { days: i64, max_days: i64 },

    #[error("courses cannot take place on weekends, {date} is a {weekday}")]
    WeekendNotAllowed { date: NaiveDate, weekday: Weekday },

    #[error("start time {start_time} must be before end time {end_time}")]
    InvalidTimeRange {
        start_time: NaiveTime,
        end_time: NaiveTime,
    },

    #[error("course dates {start_date} to {end_date} must fall within the period range {period_start} to {period_end}")]
    OutOfPeriodRange {
        start_date: NaiveDate,
        end_date: NaiveDate,
        period_start: NaiveDate,
        period_end: NaiveDate,
    },

    #[error("worker {worker_id} is already enrolled in course {course_id}")]
    DuplicateEnrollment {
        worker_id: WorkerId,
        course_id: CourseId,
    },

    #[error("course {course_id} is full, it already has {capacity} enrollments")]
    CapacityExceeded { course_id: CourseId, capacity: usize },

    #[error("period {0} not found")]
    PeriodNotFound(PeriodId),

    #[error("course {0} not found")]
    CourseNotFound(CourseId),

    #[error("worker {0} not found")]
    WorkerNotFound(WorkerId),

    #[error("enrollment {0} not found")]
    EnrollmentNotFound(EnrollmentId),

    #[error("a period named {name:?} already exists")]
    DuplicatePeriodName { name: String },

    #[error("period dates overlap with existing period(s): {}", .names.join(", "))]
    OverlappingPeriods { names: Vec<String> },

    #[error("course {course_id} ({start_date} to {end_date}) would fall outside the period range {period_start} to {period_end}")]
    CourseOutsidePeriod {
        course_id: CourseId,
        start_date: NaiveDate,
        end_date: NaiveDate,
        period_start: NaiveDate,
        period_end: NaiveDate,
    },

    #[error("a worker with email {email:?} already exists")]
    DuplicateWorkerEmail { email: String },
}

impl DomainError {
    /// Stable machine-readable code for API clients.
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::InvalidInstructorCount { .. } => "INVALID_INSTRUCTOR_COUNT",
            DomainError::InvalidInstructors { .. } => "INVALID_INSTRUCTORS",
            DomainError::InstructorUnavailable { .. } => "INSTRUCTOR_UNAVAILABLE",
            DomainError::InvalidDateRange { .. } => "INVALID_DATE_RANGE",
            DomainError::InvalidDuration { .. } => "INVALID_DURATION",
            DomainError::WeekendNotAllowed { .. } => "WEEKEND_NOT_ALLOWED",
            DomainError::InvalidTimeRange { .. } => "INVALID_TIME_RANGE",
            DomainError::OutOfPeriodRange { .. } => "OUT_OF_PERIOD_RANGE",
            DomainError::DuplicateEnrollment { .. } => "DUPLICATE_ENROLLMENT",
            DomainError::CapacityExceeded { .. } => "CAPACITY_EXCEEDED",
            DomainError::PeriodNotFound(_) => "PERIOD_NOT_FOUND",
            DomainError::CourseNotFound(_) => "COURSE_NOT_FOUND",
            DomainError::WorkerNotFound(_) => "WORKER_NOT_FOUND",
            DomainError::EnrollmentNotFound(_) => "ENROLLMENT_NOT_FOUND",
            DomainError::DuplicatePeriodName { .. } => "DUPLICATE_PERIOD_NAME",
            DomainError::OverlappingPeriods { .. } => "OVERLAPPING_PERIODS",
            DomainError::CourseOutsidePeriod { .. } => "COURSE_OUTSIDE_PERIOD",
            DomainError::DuplicateWorkerEmail { .. } => "DUPLICATE_WORKER_EMAIL",
        }
    }
}
