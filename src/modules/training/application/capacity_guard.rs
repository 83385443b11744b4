use crate::modules::training::application::errors::ApplicationError;
use crate::modules::training::core::errors::DomainError;
use crate::modules::training::core::ports::EnrollmentLedger;
use crate::shared::core::primitives::{CourseId, EnrollmentId, WorkerId};

pub const COURSE_CAPACITY: usize = 30;

/// `exclude` is the enrollment being updated, so it does not count as its own duplicate.
pub async fn ensure_not_duplicate<L>(
    ledger: &L,
    worker_id: WorkerId,
    course_id: CourseId,
    exclude: Option<EnrollmentId>,
) -> Result<(), ApplicationError>
where
    L: EnrollmentLedger + ?Sized,
{
    if ledger
        .find_enrollment(worker_id, course_id, exclude)
        .await?
        .is_some()
    {
        return Err(DomainError::DuplicateEnrollment {
            worker_id,
            course_id,
        }
        .into());
    }
    Ok(())
}

pub async fn ensure_capacity<L>(ledger: &L, course_id: CourseId) -> Result<(), ApplicationError>
where
    L: EnrollmentLedger + ?Sized,
{
    if ledger.count_enrollments(course_id).await? >= COURSE_CAPACITY {
        return Err(DomainError::CapacityExceeded {
            course_id,
            capacity: COURSE_CAPACITY,
        }
        .into());
    }
    Ok(())
}
