use std::sync::Arc;

use crate::modules::training::application::errors::ApplicationError;
use crate::modules::training::core::entities::Worker;
use crate::modules::training::core::errors::DomainError;
use crate::modules::training::core::ports::{TrainingStore, TrainingTransaction, WorkerDirectory};
use crate::modules::training::use_cases::register_worker::command::RegisterWorker;

pub struct RegisterWorkerHandler<TStore>
where
    TStore: TrainingStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> RegisterWorkerHandler<TStore>
where
    TStore: TrainingStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// Emails are unique, compared case-insensitively.
    pub async fn handle(&self, command: RegisterWorker) -> Result<Worker, ApplicationError> {
        let mut tx = self.store.begin().await?;

        if tx.find_worker_by_email(&command.email).await?.is_some() {
            let error = DomainError::DuplicateWorkerEmail {
                email: command.email,
            };
            tracing::warn!(code = error.code(), "worker rejected: {error}");
            return Err(error.into());
        }

        let worker = Worker::from(command);
        tx.save_worker(worker.clone()).await?;
        tx.commit().await?;

        tracing::info!(worker_id = %worker.worker_id, "worker registered");
        Ok(worker)
    }
}
