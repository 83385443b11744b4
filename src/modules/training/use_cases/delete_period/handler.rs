use std::sync::Arc;

use crate::modules::training::application::errors::ApplicationError;
use crate::modules::training::core::errors::DomainError;
use crate::modules::training::core::ports::{TrainingStore, TrainingTransaction};
use crate::shared::core::primitives::PeriodId;

pub struct DeletePeriodHandler<TStore>
where
    TStore: TrainingStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> DeletePeriodHandler<TStore>
where
    TStore: TrainingStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// Removes the period with its courses, their instructor assignments and enrollments.
    pub async fn handle(&self, period_id: PeriodId) -> Result<(), ApplicationError> {
        let mut tx = self.store.begin().await?;
        if !tx.delete_period(period_id).await? {
            return Err(DomainError::PeriodNotFound(period_id).into());
        }
        tx.commit().await?;

        tracing::info!(period_id = %period_id, "period deleted");
        Ok(())
    }
}
