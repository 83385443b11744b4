use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::shared::core::primitives::EnrollmentId;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(enrollment_id): Path<EnrollmentId>,
) -> Response {
    match state.withdraw_enrollment.handle(enrollment_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error.into_response(),
    }
}
