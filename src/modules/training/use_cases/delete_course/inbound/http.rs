use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::shared::core::primitives::CourseId;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(course_id): Path<CourseId>) -> Response {
    match state.delete_course.handle(course_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error.into_response(),
    }
}
