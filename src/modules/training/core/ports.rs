// Ports define what the training core needs from storage, without implementing it.
//
// Validators only read through the reader traits. Command handlers open a
// `TrainingTransaction`, validate against it, write through it and commit, so the
// check and the write observe the same state.

use async_trait::async_trait;
use std::collections::HashSet;
use thiserror::Error;

use crate::modules::training::core::entities::{
    Course, Enrollment, InstructorAssignment, Period, Worker,
};
use crate::modules::training::core::window::DateRange;
use crate::shared::core::primitives::{CourseId, EnrollmentId, PeriodId, WorkerId};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait InstructorSchedule: Send + Sync {
    /// Assignment rows of the given workers joined with their course window.
    async fn assignments_for(
        &self,
        workers: &[WorkerId],
        exclude_course: Option<CourseId>,
    ) -> Result<Vec<InstructorAssignment>, StoreError>;
}

#[async_trait]
pub trait EnrollmentLedger: Send + Sync {
    async fn count_enrollments(&self, course_id: CourseId) -> Result<usize, StoreError>;

    async fn find_enrollment(
        &self,
        worker_id: WorkerId,
        course_id: CourseId,
        exclude: Option<EnrollmentId>,
    ) -> Result<Option<Enrollment>, StoreError>;

    async fn get_enrollment(
        &self,
        enrollment_id: EnrollmentId,
    ) -> Result<Option<Enrollment>, StoreError>;
}

#[async_trait]
pub trait WorkerDirectory: Send + Sync {
    /// The subset of `ids` that belong to registered workers.
    async fn existing_workers(&self, ids: &[WorkerId]) -> Result<HashSet<WorkerId>, StoreError>;

    async fn find_worker_by_email(&self, email: &str) -> Result<Option<Worker>, StoreError>;
}

#[async_trait]
pub trait PeriodCatalog: Send + Sync {
    async fn get_period(&self, period_id: PeriodId) -> Result<Option<Period>, StoreError>;

    async fn find_period_by_name(&self, name: &str) -> Result<Option<Period>, StoreError>;

    async fn overlapping_periods(
        &self,
        range: DateRange,
        exclude: Option<PeriodId>,
    ) -> Result<Vec<Period>, StoreError>;
}

#[async_trait]
pub trait CourseCatalog: Send + Sync {
    async fn get_course(&self, course_id: CourseId) -> Result<Option<Course>, StoreError>;

    async fn courses_in_period(&self, period_id: PeriodId) -> Result<Vec<Course>, StoreError>;
}

/// A unit of work. Writes are staged until `commit`; dropping the transaction
/// discards them. Deletes cascade to dependent rows.
#[async_trait]
pub trait TrainingTransaction:
    InstructorSchedule + EnrollmentLedger + WorkerDirectory + PeriodCatalog + CourseCatalog
{
    async fn save_worker(&mut self, worker: Worker) -> Result<(), StoreError>;

    async fn save_period(&mut self, period: Period) -> Result<(), StoreError>;

    /// Inserts or replaces the course and its instructor assignments.
    async fn save_course(&mut self, course: Course) -> Result<(), StoreError>;

    async fn save_enrollment(&mut self, enrollment: Enrollment) -> Result<(), StoreError>;

    /// Returns `false` if the enrollment does not exist.
    async fn delete_enrollment(&mut self, enrollment_id: EnrollmentId) -> Result<bool, StoreError>;

    /// Removes the course, its instructor assignments and its enrollments.
    /// Returns `false` if the course does not exist.
    async fn delete_course(&mut self, course_id: CourseId) -> Result<bool, StoreError>;

    /// Removes the period and every course in it, with their dependents.
    /// Returns `false` if the period does not exist.
    async fn delete_period(&mut self, period_id: PeriodId) -> Result<bool, StoreError>;

    async fn commit(self) -> Result<(), StoreError>;
}

#[async_trait]
pub trait TrainingStore: Send + Sync {
    type Transaction: TrainingTransaction + 'static;

    /// Transactions are serialized: a second `begin` waits until the first one
    /// commits or is dropped.
    async fn begin(&self) -> Result<Self::Transaction, StoreError>;
}
