//! Instructor double-booking detection.
//!
//! A worker is unavailable for a window when one of their existing assignments
//! overlaps it on dates (inclusive) and on daily times (half-open). The course
//! being edited can be excluded so it does not conflict with itself.

use crate::modules::training::application::errors::ApplicationError;
use crate::modules::training::core::entities::InstructorAssignment;
use crate::modules::training::core::errors::DomainError;
use crate::modules::training::core::ports::{InstructorSchedule, StoreError};
use crate::modules::training::core::window::CourseWindow;
use crate::shared::core::primitives::{CourseId, WorkerId};

pub async fn find_conflicts<R>(
    schedule: &R,
    workers: &[WorkerId],
    window: &CourseWindow,
    exclude_course: Option<CourseId>,
) -> Result<Vec<InstructorAssignment>, StoreError>
where
    R: InstructorSchedule + ?Sized,
{
    let assignments = schedule.assignments_for(workers, exclude_course).await?;
    Ok(assignments
        .into_iter()
        .filter(|assignment| Some(assignment.course_id) != exclude_course)
        .filter(|assignment| assignment.window.conflicts_with(window))
        .collect())
}

/// `true` when none of `workers` has a conflicting assignment. Never fails for
/// business reasons, only when the schedule cannot be read.
pub async fn check_availability<R>(
    schedule: &R,
    workers: &[WorkerId],
    window: &CourseWindow,
    exclude_course: Option<CourseId>,
) -> Result<bool, StoreError>
where
    R: InstructorSchedule + ?Sized,
{
    Ok(find_conflicts(schedule, workers, window, exclude_course)
        .await?
        .is_empty())
}

/// Maps the first conflict to `InstructorUnavailable`.
pub async fn ensure_available<R>(
    schedule: &R,
    workers: &[WorkerId],
    window: &CourseWindow,
    exclude_course: Option<CourseId>,
) -> Result<(), ApplicationError>
where
    R: InstructorSchedule + ?Sized,
{
    let conflicts = find_conflicts(schedule, workers, window, exclude_course).await?;
    match conflicts.first() {
        Some(conflict) => Err(DomainError::InstructorUnavailable {
            worker_id: conflict.worker_id,
            course_id: conflict.course_id,
        }
        .into()),
        None => Ok(()),
    }
}
