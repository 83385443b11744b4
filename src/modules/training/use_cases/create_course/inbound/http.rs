use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;

use crate::modules::training::adapters::inbound::http_error::invalid_body;
use crate::modules::training::core::entities::{CourseProfile, CourseType, Modality};
use crate::modules::training::use_cases::create_course::command::CreateCourse;
use crate::shared::core::primitives::{CourseId, PeriodId, WorkerId};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CreateCourseBody {
    pub period_id: PeriodId,
    pub target: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub course_type: CourseType,
    pub modality: Modality,
    pub course_profile: CourseProfile,
    pub goal: String,
    #[serde(default)]
    pub details: Option<String>,
    pub instructors: Vec<WorkerId>,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<CreateCourseBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return invalid_body(rejection),
    };

    let command = CreateCourse {
        course_id: CourseId::generate(),
        period_id: body.period_id,
        target: body.target,
        name: body.name,
        start_date: body.start_date,
        end_date: body.end_date,
        start_time: body.start_time,
        end_time: body.end_time,
        course_type: body.course_type,
        modality: body.modality,
        course_profile: body.course_profile,
        goal: body.goal,
        details: body.details,
        instructors: body.instructors,
    };

    match state.create_course.handle(command).await {
        Ok(course) => (StatusCode::CREATED, Json(course)).into_response(),
        Err(error) => error.into_response(),
    }
}
