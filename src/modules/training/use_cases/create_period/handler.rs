use std::sync::Arc;

use crate::modules::training::application::errors::ApplicationError;
use crate::modules::training::application::period_validation::validate_period;
use crate::modules::training::core::entities::Period;
use crate::modules::training::core::ports::{TrainingStore, TrainingTransaction};
use crate::modules::training::use_cases::create_period::command::CreatePeriod;

pub struct CreatePeriodHandler<TStore>
where
    TStore: TrainingStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> CreatePeriodHandler<TStore>
where
    TStore: TrainingStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: CreatePeriod) -> Result<Period, ApplicationError> {
        let mut tx = self.store.begin().await?;

        let period = Period::from(command);
        if let Err(error) = validate_period(&tx, &period.name, period.range(), None).await {
            if let Some(domain) = error.domain() {
                tracing::warn!(code = domain.code(), "period rejected: {domain}");
            }
            return Err(error);
        }

        tx.save_period(period.clone()).await?;
        tx.commit().await?;

        tracing::info!(period_id = %period.period_id, name = %period.name, "period created");
        Ok(period)
    }
}
