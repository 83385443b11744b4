use chrono::{NaiveDate, NaiveTime};

use crate::modules::training::core::entities::{CourseProfile, CourseType, Modality};
use crate::modules::training::core::window::CourseWindow;
use crate::shared::core::primitives::{CourseId, PeriodId, WorkerId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCourse {
    pub course_id: CourseId,
    pub period_id: PeriodId,
    pub target: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub course_type: CourseType,
    pub modality: Modality,
    pub course_profile: CourseProfile,
    pub goal: String,
    pub details: Option<String>,
    pub instructors: Vec<WorkerId>,
}

impl CreateCourse {
    pub fn window(&self) -> CourseWindow {
        CourseWindow {
            start_date: self.start_date,
            end_date: self.end_date,
            start_time: self.start_time,
            end_time: self.end_time,
        }
    }
}
