use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::shared::core::primitives::PeriodId;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(period_id): Path<PeriodId>) -> Response {
    match state.delete_period.handle(period_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error.into_response(),
    }
}
