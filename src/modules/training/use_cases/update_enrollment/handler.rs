use std::sync::Arc;

use crate::modules::training::application::capacity_guard::{ensure_capacity, ensure_not_duplicate};
use crate::modules::training::application::entity_existence_validator::{
    require_course, require_worker,
};
use crate::modules::training::application::errors::ApplicationError;
use crate::modules::training::core::entities::Enrollment;
use crate::modules::training::core::errors::DomainError;
use crate::modules::training::core::ports::{EnrollmentLedger, TrainingStore, TrainingTransaction};
use crate::modules::training::use_cases::update_enrollment::command::UpdateEnrollmentCommand;

pub struct UpdateEnrollmentHandler<TStore>
where
    TStore: TrainingStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> UpdateEnrollmentHandler<TStore>
where
    TStore: TrainingStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// A changed worker or course must exist. The merged pair must not collide
    /// with another enrollment, and moving to another course takes a seat there.
    pub async fn handle(
        &self,
        command: UpdateEnrollmentCommand,
    ) -> Result<Enrollment, ApplicationError> {
        let mut tx = self.store.begin().await?;

        let current = tx
            .get_enrollment(command.enrollment_id)
            .await?
            .ok_or(DomainError::EnrollmentNotFound(command.enrollment_id))?;
        let enrollment = command.changes.apply_to(&current);
        let worker_changed = enrollment.worker_id != current.worker_id;
        let course_changed = enrollment.course_id != current.course_id;

        let checked = async {
            if worker_changed {
                require_worker(&tx, enrollment.worker_id).await?;
            }
            if course_changed {
                require_course(&tx, enrollment.course_id).await?;
            }
            ensure_not_duplicate(
                &tx,
                enrollment.worker_id,
                enrollment.course_id,
                Some(enrollment.enrollment_id),
            )
            .await?;
            if course_changed {
                ensure_capacity(&tx, enrollment.course_id).await?;
            }
            Ok::<(), ApplicationError>(())
        }
        .await;
        if let Err(error) = checked {
            if let Some(domain) = error.domain() {
                tracing::warn!(
                    enrollment_id = %enrollment.enrollment_id,
                    code = domain.code(),
                    "enrollment update rejected: {domain}"
                );
            }
            return Err(error);
        }

        tx.save_enrollment(enrollment.clone()).await?;
        tx.commit().await?;

        tracing::info!(enrollment_id = %enrollment.enrollment_id, "enrollment updated");
        Ok(enrollment)
    }
}
