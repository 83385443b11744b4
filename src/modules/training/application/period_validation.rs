//! Checks shared by the period create and update commands.

use crate::modules::training::application::errors::ApplicationError;
use crate::modules::training::core::errors::DomainError;
use crate::modules::training::core::ports::{CourseCatalog, PeriodCatalog};
use crate::modules::training::core::rules::{validate_date_window, validate_period_membership};
use crate::modules::training::core::window::DateRange;
use crate::shared::core::primitives::PeriodId;

/// Unique name, then a strict date range, then no overlap with another period.
/// `exclude` is the period being edited.
pub async fn validate_period<C>(
    catalog: &C,
    name: &str,
    range: DateRange,
    exclude: Option<PeriodId>,
) -> Result<(), ApplicationError>
where
    C: PeriodCatalog + ?Sized,
{
    if let Some(existing) = catalog.find_period_by_name(name).await?
        && Some(existing.period_id) != exclude
    {
        return Err(DomainError::DuplicatePeriodName {
            name: name.to_string(),
        }
        .into());
    }

    validate_date_window(range.start_date, range.end_date)?;

    let overlapping = catalog.overlapping_periods(range, exclude).await?;
    if !overlapping.is_empty() {
        return Err(DomainError::OverlappingPeriods {
            names: overlapping.into_iter().map(|p| p.name).collect(),
        }
        .into());
    }
    Ok(())
}

/// Every course already scheduled in the period must still fit in `range`.
pub async fn ensure_courses_fit<C>(
    catalog: &C,
    period_id: PeriodId,
    range: DateRange,
) -> Result<(), ApplicationError>
where
    C: CourseCatalog + ?Sized,
{
    for course in catalog.courses_in_period(period_id).await? {
        let dates = course.window.dates();
        if validate_period_membership(&dates, &range).is_err() {
            return Err(DomainError::CourseOutsidePeriod {
                course_id: course.course_id,
                start_date: dates.start_date,
                end_date: dates.end_date,
                period_start: range.start_date,
                period_end: range.end_date,
            }
            .into());
        }
    }
    Ok(())
}
