use serde::{Deserialize, Serialize};

use crate::modules::training::core::window::{CourseWindow, DateRange};
use crate::shared::core::primitives::{CourseId, EnrollmentId, PeriodId, WorkerId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    pub worker_id: WorkerId,
    pub name: String,
    pub fathers_surname: String,
    pub mother_surname: Option<String>,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub period_id: PeriodId,
    pub name: String,
    pub start_date: chrono::NaiveDate,
    pub end_date: chrono::NaiveDate,
}

impl Period {
    pub fn range(&self) -> DateRange {
        DateRange::new(self.start_date, self.end_date)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, async_graphql::Enum)]
#[serde(rename_all = "snake_case")]
pub enum CourseType {
    Diploma,
    Workshop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, async_graphql::Enum)]
#[serde(rename_all = "snake_case")]
pub enum Modality {
    Virtual,
    InPerson,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, async_graphql::Enum)]
#[serde(rename_all = "snake_case")]
pub enum CourseProfile {
    Training,
    TeacherUpdate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub course_id: CourseId,
    pub period_id: PeriodId,
    pub target: String,
    pub name: String,
    #[serde(flatten)]
    pub window: CourseWindow,
    pub course_type: CourseType,
    pub modality: Modality,
    pub course_profile: CourseProfile,
    pub goal: String,
    pub details: Option<String>,
    /// Distinct, one or two workers.
    pub instructors: Vec<WorkerId>,
}

/// One row of the instructor-to-course association, joined with the course window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstructorAssignment {
    pub worker_id: WorkerId,
    pub course_id: CourseId,
    pub window: CourseWindow,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    pub enrollment_id: EnrollmentId,
    pub worker_id: WorkerId,
    pub course_id: CourseId,
    pub final_grade: Option<f64>,
}
