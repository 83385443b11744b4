use crate::modules::training::core::entities::Enrollment;
use crate::shared::core::primitives::{CourseId, EnrollmentId, WorkerId};

/// Fields left as `None` keep their stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateEnrollment {
    pub worker_id: Option<WorkerId>,
    pub course_id: Option<CourseId>,
    pub final_grade: Option<f64>,
}

impl UpdateEnrollment {
    pub fn apply_to(&self, current: &Enrollment) -> Enrollment {
        Enrollment {
            enrollment_id: current.enrollment_id,
            worker_id: self.worker_id.unwrap_or(current.worker_id),
            course_id: self.course_id.unwrap_or(current.course_id),
            final_grade: self.final_grade.or(current.final_grade),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateEnrollmentCommand {
    pub enrollment_id: EnrollmentId,
    pub changes: UpdateEnrollment,
}
