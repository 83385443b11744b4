use async_graphql::{Context, Object, Result as GqlResult};
use chrono::{NaiveDate, NaiveTime};
use uuid::Uuid;

use crate::modules::training::core::entities::{
    Course, CourseProfile, CourseType, Enrollment, Modality, Period,
};
use crate::modules::training::use_cases::browse_courses::queries_port::{
    DEFAULT_LIMIT, DEFAULT_OFFSET,
};
use crate::shared::core::primitives::{CourseId, PeriodId, WorkerId};
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlCourse {
    pub course_id: String,
    pub period_id: String,
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
    pub details: Option<String>,
    pub instructors: Vec<String>,
}

impl From<Course> for GqlCourse {
    fn from(c: Course) -> Self {
        Self {
            course_id: c.course_id.to_string(),
            period_id: c.period_id.to_string(),
            target: c.target,
            name: c.name,
            start_date: c.window.start_date,
            end_date: c.window.end_date,
            start_time: c.window.start_time,
            end_time: c.window.end_time,
            course_type: c.course_type,
            modality: c.modality,
            course_profile: c.course_profile,
            goal: c.goal,
            details: c.details,
            instructors: c.instructors.iter().map(ToString::to_string).collect(),
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlEnrollment {
    pub enrollment_id: String,
    pub worker_id: String,
    pub course_id: String,
    pub final_grade: Option<f64>,
}

impl From<Enrollment> for GqlEnrollment {
    fn from(e: Enrollment) -> Self {
        Self {
            enrollment_id: e.enrollment_id.to_string(),
            worker_id: e.worker_id.to_string(),
            course_id: e.course_id.to_string(),
            final_grade: e.final_grade,
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlPeriod {
    pub period_id: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl From<Period> for GqlPeriod {
    fn from(p: Period) -> Self {
        Self {
            period_id: p.period_id.to_string(),
            name: p.name,
            start_date: p.start_date,
            end_date: p.end_date,
        }
    }
}

fn page(offset: Option<i64>, limit: Option<i64>) -> (u64, u64) {
    (
        offset.map_or(DEFAULT_OFFSET, |o| o.max(0) as u64),
        limit.map_or(DEFAULT_LIMIT, |l| l.max(0) as u64),
    )
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn course(&self, context: &Context<'_>, course_id: Uuid) -> GqlResult<Option<GqlCourse>> {
        let state = context.data_unchecked::<AppState>();
        let course = state.queries.get_course(CourseId(course_id)).await?;
        Ok(course.map(Into::into))
    }

    async fn courses_by_period(
        &self,
        context: &Context<'_>,
        period_id: Uuid,
        offset: Option<i64>,
        limit: Option<i64>,
    ) -> GqlResult<Vec<GqlCourse>> {
        let state = context.data_unchecked::<AppState>();
        let (offset, limit) = page(offset, limit);
        let list = state
            .queries
            .list_courses_by_period(PeriodId(period_id), offset, limit)
            .await?;
        Ok(list.into_iter().map(Into::into).collect())
    }

    async fn enrollments_by_course(
        &self,
        context: &Context<'_>,
        course_id: Uuid,
    ) -> GqlResult<Vec<GqlEnrollment>> {
        let state = context.data_unchecked::<AppState>();
        let list = state
            .queries
            .list_enrollments_by_course(CourseId(course_id))
            .await?;
        Ok(list.into_iter().map(Into::into).collect())
    }

    async fn enrollments_by_worker(
        &self,
        context: &Context<'_>,
        worker_id: Uuid,
        offset: Option<i64>,
        limit: Option<i64>,
    ) -> GqlResult<Vec<GqlEnrollment>> {
        let state = context.data_unchecked::<AppState>();
        let (offset, limit) = page(offset, limit);
        let list = state
            .queries
            .list_enrollments_by_worker(WorkerId(worker_id), offset, limit)
            .await?;
        Ok(list.into_iter().map(Into::into).collect())
    }

    async fn period(&self, context: &Context<'_>, period_id: Uuid) -> GqlResult<Option<GqlPeriod>> {
        let state = context.data_unchecked::<AppState>();
        let period = state.queries.get_period(PeriodId(period_id)).await?;
        Ok(period.map(Into::into))
    }

    async fn periods(
        &self,
        context: &Context<'_>,
        offset: Option<i64>,
        limit: Option<i64>,
    ) -> GqlResult<Vec<GqlPeriod>> {
        let state = context.data_unchecked::<AppState>();
        let (offset, limit) = page(offset, limit);
        let list = state.queries.list_periods(offset, limit).await?;
        Ok(list.into_iter().map(Into::into).collect())
    }
}
