use crate::modules::training::application::entity_existence_validator::{
    require_period, validate_instructor_set,
};
use crate::modules::training::application::errors::ApplicationError;
use crate::modules::training::application::schedule_conflict_checker::ensure_available;
use crate::modules::training::core::ports::{InstructorSchedule, PeriodCatalog, WorkerDirectory};
use crate::modules::training::core::rules::{
    validate_date_window, validate_duration_and_weekdays, validate_period_membership,
    validate_time_window,
};
use crate::modules::training::core::window::CourseWindow;
use crate::shared::core::primitives::{CourseId, PeriodId, WorkerId};

/// Runs every course check in a fixed order and stops at the first failure:
/// instructors, date range, duration and weekdays, time range, period membership,
/// then instructor availability. `exclude_course` is the course being edited.
///
/// Returns the distinct instructor ids to persist.
pub async fn validate_course<R>(
    reader: &R,
    period_id: PeriodId,
    window: &CourseWindow,
    instructors: &[WorkerId],
    exclude_course: Option<CourseId>,
) -> Result<Vec<WorkerId>, ApplicationError>
where
    R: WorkerDirectory + PeriodCatalog + InstructorSchedule + ?Sized,
{
    let instructors = validate_instructor_set(reader, instructors).await?;
    validate_date_window(window.start_date, window.end_date)?;
    validate_duration_and_weekdays(window.start_date, window.end_date)?;
    validate_time_window(window.start_time, window.end_time)?;
    let period = require_period(reader, period_id).await?;
    validate_period_membership(&window.dates(), &period.range())?;
    ensure_available(reader, &instructors, window, exclude_course).await?;
    Ok(instructors)
}
