use chrono::{NaiveDate, NaiveTime};

use crate::modules::training::core::entities::{Course, CourseProfile, CourseType, Modality};
use crate::modules::training::core::window::CourseWindow;
use crate::shared::core::primitives::{CourseId, PeriodId, WorkerId};

/// Fields left as `None` keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateCourse {
    pub period_id: Option<PeriodId>,
    pub target: Option<String>,
    pub name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub course_type: Option<CourseType>,
    pub modality: Option<Modality>,
    pub course_profile: Option<CourseProfile>,
    pub goal: Option<String>,
    pub details: Option<String>,
    pub instructors: Option<Vec<WorkerId>>,
}

impl UpdateCourse {
    /// The merged course, instructors not yet deduplicated.
    pub fn apply_to(self, current: Course) -> Course {
        let window = CourseWindow {
            start_date: self.start_date.unwrap_or(current.window.start_date),
            end_date: self.end_date.unwrap_or(current.window.end_date),
            start_time: self.start_time.unwrap_or(current.window.start_time),
            end_time: self.end_time.unwrap_or(current.window.end_time),
        };
        Course {
            course_id: current.course_id,
            period_id: self.period_id.unwrap_or(current.period_id),
            target: self.target.unwrap_or(current.target),
            name: self.name.unwrap_or(current.name),
            window,
            course_type: self.course_type.unwrap_or(current.course_type),
            modality: self.modality.unwrap_or(current.modality),
            course_profile: self.course_profile.unwrap_or(current.course_profile),
            goal: self.goal.unwrap_or(current.goal),
            details: self.details.or(current.details),
            instructors: self.instructors.unwrap_or(current.instructors),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCourseCommand {
    pub course_id: CourseId,
    pub changes: UpdateCourse,
}
