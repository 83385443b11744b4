use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::modules::training::adapters::inbound::http_error::invalid_body;
use crate::modules::training::use_cases::update_period::command::{
    UpdatePeriod, UpdatePeriodCommand,
};
use crate::shared::core::primitives::PeriodId;
use crate::shell::state::AppState;

#[derive(Deserialize, Default)]
pub struct UpdatePeriodBody {
    pub name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(period_id): Path<PeriodId>,
    body: Result<Json<UpdatePeriodBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return invalid_body(rejection),
    };

    let command = UpdatePeriodCommand {
        period_id,
        changes: UpdatePeriod {
            name: body.name,
            start_date: body.start_date,
            end_date: body.end_date,
        },
    };

    match state.update_period.handle(command).await {
        Ok(period) => Json(period).into_response(),
        Err(error) => error.into_response(),
    }
}
