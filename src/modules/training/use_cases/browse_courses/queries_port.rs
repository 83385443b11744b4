use async_trait::async_trait;

use crate::modules::training::core::entities::{Course, Enrollment, Period};
use crate::shared::core::primitives::{CourseId, PeriodId, WorkerId};

pub const DEFAULT_OFFSET: u64 = 0;
pub const DEFAULT_LIMIT: u64 = 100;

/// Committed state only.
#[async_trait]
pub trait TrainingQueries {
    async fn get_course(&self, course_id: CourseId) -> anyhow::Result<Option<Course>>;

    /// Ordered by start date, then start time.
    async fn list_courses_by_period(
        &self,
        period_id: PeriodId,
        offset: u64,
        limit: u64,
    ) -> anyhow::Result<Vec<Course>>;

    async fn list_enrollments_by_course(
        &self,
        course_id: CourseId,
    ) -> anyhow::Result<Vec<Enrollment>>;

    async fn list_enrollments_by_worker(
        &self,
        worker_id: WorkerId,
        offset: u64,
        limit: u64,
    ) -> anyhow::Result<Vec<Enrollment>>;

    async fn get_period(&self, period_id: PeriodId) -> anyhow::Result<Option<Period>>;

    /// Ordered by start date.
    async fn list_periods(&self, offset: u64, limit: u64) -> anyhow::Result<Vec<Period>>;
}
