use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;

use crate::modules::training::adapters::inbound::http_error::invalid_body;
use crate::modules::training::core::entities::{CourseProfile, CourseType, Modality};
use crate::modules::training::use_cases::update_course::command::{
    UpdateCourse, UpdateCourseCommand,
};
use crate::shared::core::primitives::{CourseId, PeriodId, WorkerId};
use crate::shell::state::AppState;

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct UpdateCourseBody {
    pub period_id: Option<PeriodId>,
    pub target: Option<String>,
    pub name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub course_type: Option<CourseType>,
    pub modality: Option<Modality>,
    pub course_profile: Option<CourseProfile>,
    pub goal: Option<String>,
    pub details: Option<String>,
    pub instructors: Option<Vec<WorkerId>>,
}

impl From<UpdateCourseBody> for UpdateCourse {
    fn from(body: UpdateCourseBody) -> Self {
        UpdateCourse {
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
        }
    }
}

pub async fn handle(
    State(state): State<AppState>,
    Path(course_id): Path<CourseId>,
    body: Result<Json<UpdateCourseBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return invalid_body(rejection),
    };

    let command = UpdateCourseCommand {
        course_id,
        changes: body.into(),
    };

    match state.update_course.handle(command).await {
        Ok(course) => Json(course).into_response(),
        Err(error) => error.into_response(),
    }
}
