use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::training::adapters::inbound::http_error::invalid_body;
use crate::modules::training::use_cases::enroll_worker::command::EnrollWorker;
use crate::shared::core::primitives::{CourseId, EnrollmentId, WorkerId};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct EnrollWorkerBody {
    pub worker_id: WorkerId,
    pub course_id: CourseId,
    #[serde(default)]
    pub final_grade: Option<f64>,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<EnrollWorkerBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return invalid_body(rejection),
    };

    let command = EnrollWorker {
        enrollment_id: EnrollmentId::generate(),
        worker_id: body.worker_id,
        course_id: body.course_id,
        final_grade: body.final_grade,
    };

    match state.enroll_worker.handle(command).await {
        Ok(enrollment) => (StatusCode::CREATED, Json(enrollment)).into_response(),
        Err(error) => error.into_response(),
    }
}
