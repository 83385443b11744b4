use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::modules::training::application::errors::ApplicationError;
use crate::modules::training::core::errors::DomainError;

/// Error body returned by every route.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

pub fn status_of(error: &DomainError) -> StatusCode {
    match error {
        DomainError::InvalidInstructorCount { .. }
        | DomainError::InvalidInstructors { .. }
        | DomainError::InvalidDateRange { .. }
        | DomainError::InvalidDuration { .. }
        | DomainError::WeekendNotAllowed { .. }
        | DomainError::InvalidTimeRange { .. }
        | DomainError::OutOfPeriodRange { .. } => StatusCode::BAD_REQUEST,
        DomainError::PeriodNotFound(_)
        | DomainError::CourseNotFound(_)
        | DomainError::WorkerNotFound(_)
        | DomainError::EnrollmentNotFound(_) => StatusCode::NOT_FOUND,
        DomainError::InstructorUnavailable { .. }
        | DomainError::DuplicateEnrollment { .. }
        | DomainError::CapacityExceeded { .. }
        | DomainError::DuplicatePeriodName { .. }
        | DomainError::OverlappingPeriods { .. }
        | DomainError::CourseOutsidePeriod { .. }
        | DomainError::DuplicateWorkerEmail { .. } => StatusCode::CONFLICT,
    }
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        match self {
            ApplicationError::Domain(error) => (
                status_of(&error),
                Json(ApiError::new(error.code(), error.to_string())),
            )
                .into_response(),
            ApplicationError::Store(error) => {
                tracing::error!(error = %error, "store failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiError::new("STORE_ERROR", error.to_string())),
                )
                    .into_response()
            }
        }
    }
}

pub fn invalid_body(rejection: JsonRejection) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ApiError::new("INVALID_BODY", rejection.body_text())),
    )
        .into_response()
}

/// Read-side failures surface as 500 with the error chain as message.
pub fn query_failure(error: anyhow::Error) -> Response {
    tracing::error!(error = %error, "query failure");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiError::new("STORE_ERROR", format!("{error:#}"))),
    )
        .into_response()
}
