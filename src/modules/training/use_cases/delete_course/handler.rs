use std::sync::Arc;

use crate::modules::training::application::errors::ApplicationError;
use crate::modules::training::core::errors::DomainError;
use crate::modules::training::core::ports::{TrainingStore, TrainingTransaction};
use crate::shared::core::primitives::CourseId;

pub struct DeleteCourseHandler<TStore>
where
    TStore: TrainingStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> DeleteCourseHandler<TStore>
where
    TStore: TrainingStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, course_id: CourseId) -> Result<(), ApplicationError> {
        let mut tx = self.store.begin().await?;
        if !tx.delete_course(course_id).await? {
            return Err(DomainError::CourseNotFound(course_id).into());
        }
        tx.commit().await?;

        tracing::info!(course_id = %course_id, "course deleted");
        Ok(())
    }
}
