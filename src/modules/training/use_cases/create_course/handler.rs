use std::sync::Arc;

use crate::modules::training::application::course_validation::validate_course;
use crate::modules::training::application::errors::ApplicationError;
use crate::modules::training::core::entities::Course;
use crate::modules::training::core::ports::{TrainingStore, TrainingTransaction};
use crate::modules::training::use_cases::create_course::command::CreateCourse;

pub struct CreateCourseHandler<TStore>
where
    TStore: TrainingStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> CreateCourseHandler<TStore>
where
    TStore: TrainingStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// Validates and writes the course with its instructor assignments in one
    /// transaction. Nothing is written when any check fails.
    pub async fn handle(&self, command: CreateCourse) -> Result<Course, ApplicationError> {
        let mut tx = self.store.begin().await?;

        let window = command.window();
        let instructors = validate_course(
            &tx,
            command.period_id,
            &window,
            &command.instructors,
            None,
        )
        .await
        .inspect_err(|e| log_rejection(e, &command))?;

        let course = Course {
            course_id: command.course_id,
            period_id: command.period_id,
            target: command.target,
            name: command.name,
            window,
            course_type: command.course_type,
            modality: command.modality,
            course_profile: command.course_profile,
            goal: command.goal,
            details: command.details,
            instructors,
        };
        tx.save_course(course.clone()).await?;
        tx.commit().await?;

        tracing::info!(course_id = %course.course_id, period_id = %course.period_id, "course created");
        Ok(course)
    }
}

fn log_rejection(error: &ApplicationError, command: &CreateCourse) {
    if let Some(domain) = error.domain() {
        tracing::warn!(course_id = %command.course_id, code = domain.code(), "course rejected: {domain}");
    }
}
