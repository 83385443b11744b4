use crate::shared::core::primitives::{CourseId, EnrollmentId, WorkerId};

#[derive(Debug, Clone, PartialEq)]
pub struct EnrollWorker {
    pub enrollment_id: EnrollmentId,
    pub worker_id: WorkerId,
    pub course_id: CourseId,
    pub final_grade: Option<f64>,
}
