//! Referential checks run before a course or an enrollment is written.

use crate::modules::training::application::errors::ApplicationError;
use crate::modules::training::core::entities::{Course, Period};
use crate::modules::training::core::errors::DomainError;
use crate::modules::training::core::ports::{CourseCatalog, PeriodCatalog, WorkerDirectory};
use crate::modules::training::core::rules::validate_instructor_count;
use crate::shared::core::primitives::{CourseId, PeriodId, WorkerId};

/// Duplicates collapse before the count check. Returns the distinct ids in
/// submission order.
pub async fn validate_instructor_set<D>(
    directory: &D,
    ids: &[WorkerId],
) -> Result<Vec<WorkerId>, ApplicationError>
where
    D: WorkerDirectory + ?Sized,
{
    let distinct = validate_instructor_count(ids)?;
    let existing = directory.existing_workers(&distinct).await?;
    let unknown: Vec<WorkerId> = distinct
        .iter()
        .filter(|id| !existing.contains(id))
        .copied()
        .collect();
    if !unknown.is_empty() {
        return Err(DomainError::InvalidInstructors { unknown }.into());
    }
    Ok(distinct)
}

pub async fn require_worker<D>(directory: &D, worker_id: WorkerId) -> Result<(), ApplicationError>
where
    D: WorkerDirectory + ?Sized,
{
    if directory.existing_workers(&[worker_id]).await?.is_empty() {
        return Err(DomainError::WorkerNotFound(worker_id).into());
    }
    Ok(())
}

pub async fn require_period<C>(catalog: &C, period_id: PeriodId) -> Result<Period, ApplicationError>
where
    C: PeriodCatalog + ?Sized,
{
    catalog
        .get_period(period_id)
        .await?
        .ok_or_else(|| DomainError::PeriodNotFound(period_id).into())
}

pub async fn require_course<C>(catalog: &C, course_id: CourseId) -> Result<Course, ApplicationError>
where
    C: CourseCatalog + ?Sized,
{
    catalog
        .get_course(course_id)
        .await?
        .ok_or_else(|| DomainError::CourseNotFound(course_id).into())
}
