use std::sync::Arc;

use crate::modules::training::application::entity_existence_validator::require_period;
use crate::modules::training::application::errors::ApplicationError;
use crate::modules::training::application::period_validation::{
    ensure_courses_fit, validate_period,
};
use crate::modules::training::core::entities::Period;
use crate::modules::training::core::ports::{TrainingStore, TrainingTransaction};
use crate::modules::training::use_cases::update_period::command::UpdatePeriodCommand;

pub struct UpdatePeriodHandler<TStore>
where
    TStore: TrainingStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> UpdatePeriodHandler<TStore>
where
    TStore: TrainingStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// The merged period is checked like a new one, ignoring itself, and must
    /// still contain every course already scheduled in it.
    pub async fn handle(&self, command: UpdatePeriodCommand) -> Result<Period, ApplicationError> {
        let mut tx = self.store.begin().await?;

        let current = require_period(&tx, command.period_id).await?;
        let period = command.changes.apply_to(&current);

        let checked = async {
            validate_period(&tx, &period.name, period.range(), Some(period.period_id)).await?;
            ensure_courses_fit(&tx, period.period_id, period.range()).await
        }
        .await;
        if let Err(error) = checked {
            if let Some(domain) = error.domain() {
                tracing::warn!(period_id = %period.period_id, code = domain.code(), "period update rejected: {domain}");
            }
            return Err(error);
        }

        tx.save_period(period.clone()).await?;
        tx.commit().await?;

        tracing::info!(period_id = %period.period_id, "period updated");
        Ok(period)
    }
}
