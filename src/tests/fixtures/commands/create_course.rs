// Shared test fixture for the CreateCourse command.
// Defaults to a Monday-to-Wednesday morning workshop in March 2025 with no
// period and no instructors; tests set both to seeded ids.

use chrono::{NaiveDate, NaiveTime};

use crate::modules::training::core::entities::{CourseProfile, CourseType, Modality};
use crate::modules::training::use_cases::create_course::command::CreateCourse;
use crate::shared::core::primitives::{CourseId, PeriodId, WorkerId};
use crate::tests::fixtures::march_window;

pub struct CreateCourseBuilder {
    inner: CreateCourse,
}

impl Default for CreateCourseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl CreateCourseBuilder {
    pub fn new() -> Self {
        let window = march_window(3, 5, 9, 12);
        Self {
            inner: CreateCourse {
                course_id: CourseId::generate(),
                period_id: PeriodId::generate(),
                target: "Teaching staff".to_string(),
                name: "Active learning".to_string(),
                start_date: window.start_date,
                end_date: window.end_date,
                start_time: window.start_time,
                end_time: window.end_time,
                course_type: CourseType::Workshop,
                modality: Modality::InPerson,
                course_profile: CourseProfile::TeacherUpdate,
                goal: "Apply active learning techniques".to_string(),
                details: None,
                instructors: Vec::new(),
            },
        }
    }

    pub fn course_id(mut self, v: CourseId) -> Self {
        self.inner.course_id = v;
        self
    }

    pub fn period_id(mut self, v: PeriodId) -> Self {
        self.inner.period_id = v;
        self
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn dates(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.inner.start_date = start;
        self.inner.end_date = end;
        self
    }

    pub fn times(mut self, start: NaiveTime, end: NaiveTime) -> Self {
        self.inner.start_time = start;
        self.inner.end_time = end;
        self
    }

    /// March 2025 days and whole hours.
    pub fn march(mut self, start_day: u32, end_day: u32, from_hour: u32, to_hour: u32) -> Self {
        let window = march_window(start_day, end_day, from_hour, to_hour);
        self.inner.start_date = window.start_date;
        self.inner.end_date = window.end_date;
        self.inner.start_time = window.start_time;
        self.inner.end_time = window.end_time;
        self
    }

    pub fn instructors(mut self, v: Vec<WorkerId>) -> Self {
        self.inner.instructors = v;
        self
    }

    pub fn build(self) -> CreateCourse {
        self.inner
    }
}

#[cfg(test)]
mod create_course_builder_tests {
    use super::*;
    use crate::tests::fixtures::march;
    use rstest::rstest;

    #[rstest]
    fn setters_override_the_defaults() {
        let period_id = PeriodId::generate();
        let worker_id = WorkerId::generate();
        let command = CreateCourseBuilder::new()
            .period_id(period_id)
            .name("Rubrics")
            .march(10, 11, 14, 16)
            .instructors(vec![worker_id])
            .build();

        assert_eq!(command.period_id, period_id);
        assert_eq!(command.name, "Rubrics");
        assert_eq!(command.start_date, march(10));
        assert_eq!(command.end_date, march(11));
        assert_eq!(command.instructors, vec![worker_id]);
    }
}
