use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::training::adapters::inbound::http_error::query_failure;
use crate::modules::training::application::errors::ApplicationError;
use crate::modules::training::core::errors::DomainError;
use crate::modules::training::use_cases::browse_courses::queries_port::{
    DEFAULT_LIMIT, DEFAULT_OFFSET,
};
use crate::shared::core::primitives::{CourseId, PeriodId, WorkerId};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct PageParams {
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

impl PageParams {
    fn offset(&self) -> u64 {
        self.offset.unwrap_or(DEFAULT_OFFSET)
    }

    fn limit(&self) -> u64 {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }
}

pub async fn get_course(
    State(state): State<AppState>,
    Path(course_id): Path<CourseId>,
) -> Response {
    match state.queries.get_course(course_id).await {
        Ok(Some(course)) => Json(course).into_response(),
        Ok(None) => ApplicationError::from(DomainError::CourseNotFound(course_id)).into_response(),
        Err(error) => query_failure(error),
    }
}

pub async fn list_courses_by_period(
    State(state): State<AppState>,
    Path(period_id): Path<PeriodId>,
    Query(params): Query<PageParams>,
) -> Response {
    match state
        .queries
        .list_courses_by_period(period_id, params.offset(), params.limit())
        .await
    {
        Ok(courses) => Json(courses).into_response(),
        Err(error) => query_failure(error),
    }
}

pub async fn list_enrollments_by_course(
    State(state): State<AppState>,
    Path(course_id): Path<CourseId>,
) -> Response {
    match state.queries.list_enrollments_by_course(course_id).await {
        Ok(enrollments) => Json(enrollments).into_response(),
        Err(error) => query_failure(error),
    }
}

pub async fn list_enrollments_by_worker(
    State(state): State<AppState>,
    Path(worker_id): Path<WorkerId>,
    Query(params): Query<PageParams>,
) -> Response {
    match state
        .queries
        .list_enrollments_by_worker(worker_id, params.offset(), params.limit())
        .await
    {
        Ok(enrollments) => Json(enrollments).into_response(),
        Err(error) => query_failure(error),
    }
}

pub async fn get_period(
    State(state): State<AppState>,
    Path(period_id): Path<PeriodId>,
) -> Response {
    match state.queries.get_period(period_id).await {
        Ok(Some(period)) => Json(period).into_response(),
        Ok(None) => ApplicationError::from(DomainError::PeriodNotFound(period_id)).into_response(),
        Err(error) => query_failure(error),
    }
}

pub async fn list_periods(State(state): State<AppState>, Query(params): Query<PageParams>) -> Response {
    match state
        .queries
        .list_periods(params.offset(), params.limit())
        .await
    {
        Ok(periods) => Json(periods).into_response(),
        Err(error) => query_failure(error),
    }
}
