use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::training::adapters::inbound::http_error::invalid_body;
use crate::modules::training::use_cases::update_enrollment::command::{
    UpdateEnrollment, UpdateEnrollmentCommand,
};
use crate::shared::core::primitives::{CourseId, EnrollmentId, WorkerId};
use crate::shell::state::AppState;

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct UpdateEnrollmentBody {
    pub worker_id: Option<WorkerId>,
    pub course_id: Option<CourseId>,
    pub final_grade: Option<f64>,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(enrollment_id): Path<EnrollmentId>,
    body: Result<Json<UpdateEnrollmentBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return invalid_body(rejection),
    };

    let command = UpdateEnrollmentCommand {
        enrollment_id,
        changes: UpdateEnrollment {
            worker_id: body.worker_id,
            course_id: body.course_id,
            final_grade: body.final_grade,
        },
    };

    match state.update_enrollment.handle(command).await {
        Ok(enrollment) => Json(enrollment).into_response(),
        Err(error) => error.into_response(),
    }
}
