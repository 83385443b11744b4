use std::sync::Arc;

use crate::modules::training::application::capacity_guard::{ensure_capacity, ensure_not_duplicate};
use crate::modules::training::application::entity_existence_validator::{
    require_course, require_worker,
};
use crate::modules::training::application::errors::ApplicationError;
use crate::modules::training::core::entities::Enrollment;
use crate::modules::training::core::ports::{TrainingStore, TrainingTransaction};
use crate::modules::training::use_cases::enroll_worker::command::EnrollWorker;

pub struct EnrollWorkerHandler<TStore>
where
    TStore: TrainingStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> EnrollWorkerHandler<TStore>
where
    TStore: TrainingStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// Worker and course must exist, the pair must be new, and the course must
    /// have a free seat. Checked in that order.
    pub async fn handle(&self, command: EnrollWorker) -> Result<Enrollment, ApplicationError> {
        let mut tx = self.store.begin().await?;

        let checked = async {
            require_worker(&tx, command.worker_id).await?;
            require_course(&tx, command.course_id).await?;
            ensure_not_duplicate(&tx, command.worker_id, command.course_id, None).await?;
            ensure_capacity(&tx, command.course_id).await
        }
        .await;
        if let Err(error) = checked {
            if let Some(domain) = error.domain() {
                tracing::warn!(
                    worker_id = %command.worker_id,
                    course_id = %command.course_id,
                    code = domain.code(),
                    "enrollment rejected: {domain}"
                );
            }
            return Err(error);
        }

        let enrollment = Enrollment {
            enrollment_id: command.enrollment_id,
            worker_id: command.worker_id,
            course_id: command.course_id,
            final_grade: command.final_grade,
        };
        tx.save_enrollment(enrollment.clone()).await?;
        tx.commit().await?;

        tracing::info!(
            enrollment_id = %enrollment.enrollment_id,
            course_id = %enrollment.course_id,
            "worker enrolled"
        );
        Ok(enrollment)
    }
}
