use std::sync::Arc;

use crate::modules::training::application::errors::ApplicationError;
use crate::modules::training::core::errors::DomainError;
use crate::modules::training::core::ports::{TrainingStore, TrainingTransaction};
use crate::shared::core::primitives::EnrollmentId;

pub struct WithdrawEnrollmentHandler<TStore>
where
    TStore: TrainingStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> WithdrawEnrollmentHandler<TStore>
where
    TStore: TrainingStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// Frees the seat held by the enrollment.
    pub async fn handle(&self, enrollment_id: EnrollmentId) -> Result<(), ApplicationError> {
        let mut tx = self.store.begin().await?;
        if !tx.delete_enrollment(enrollment_id).await? {
            let error = DomainError::EnrollmentNotFound(enrollment_id);
            tracing::warn!(enrollment_id = %enrollment_id, code = error.code(), "withdrawal rejected: {error}");
            return Err(error.into());
        }
        tx.commit().await?;

        tracing::info!(enrollment_id = %enrollment_id, "enrollment withdrawn");
        Ok(())
    }
}
