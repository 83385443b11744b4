use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::training::adapters::inbound::http_error::invalid_body;
use crate::modules::training::use_cases::register_worker::command::RegisterWorker;
use crate::shared::core::primitives::WorkerId;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct RegisterWorkerBody {
    pub name: String,
    pub fathers_surname: String,
    #[serde(default)]
    pub mother_surname: Option<String>,
    pub email: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<RegisterWorkerBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return invalid_body(rejection),
    };

    let command = RegisterWorker {
        worker_id: WorkerId::generate(),
        name: body.name,
        fathers_surname: body.fathers_surname,
        mother_surname: body.mother_surname,
        email: body.email,
    };

    match state.register_worker.handle(command).await {
        Ok(worker) => (StatusCode::CREATED, Json(worker)).into_response(),
        Err(error) => error.into_response(),
    }
}
