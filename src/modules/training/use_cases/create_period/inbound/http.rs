use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::modules::training::adapters::inbound::http_error::invalid_body;
use crate::modules::training::use_cases::create_period::command::CreatePeriod;
use crate::shared::core::primitives::PeriodId;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CreatePeriodBody {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<CreatePeriodBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return invalid_body(rejection),
    };

    let command = CreatePeriod {
        period_id: PeriodId::generate(),
        name: body.name,
        start_date: body.start_date,
        end_date: body.end_date,
    };

    match state.create_period.handle(command).await {
        Ok(period) => (StatusCode::CREATED, Json(period)).into_response(),
        Err(error) => error.into_response(),
    }
}
