use std::sync::Arc;

use crate::modules::training::application::course_validation::validate_course;
use crate::modules::training::application::entity_existence_validator::require_course;
use crate::modules::training::application::errors::ApplicationError;
use crate::modules::training::core::entities::Course;
use crate::modules::training::core::ports::{TrainingStore, TrainingTransaction};
use crate::modules::training::use_cases::update_course::command::UpdateCourseCommand;

pub struct UpdateCourseHandler<TStore>
where
    TStore: TrainingStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> UpdateCourseHandler<TStore>
where
    TStore: TrainingStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// Re-validates the merged course in full. The course's own assignments
    /// are left out of the availability check.
    pub async fn handle(&self, command: UpdateCourseCommand) -> Result<Course, ApplicationError> {
        let mut tx = self.store.begin().await?;

        let current = require_course(&tx, command.course_id).await?;
        let mut course = command.changes.apply_to(current);

        let checked = validate_course(
            &tx,
            course.period_id,
            &course.window,
            &course.instructors,
            Some(course.course_id),
        )
        .await;
        match checked {
            Ok(instructors) => course.instructors = instructors,
            Err(error) => {
                if let Some(domain) = error.domain() {
                    tracing::warn!(course_id = %course.course_id, code = domain.code(), "course update rejected: {domain}");
                }
                return Err(error);
            }
        }

        tx.save_course(course.clone()).await?;
        tx.commit().await?;

        tracing::info!(course_id = %course.course_id, "course updated");
        Ok(course)
    }
}
