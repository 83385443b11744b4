use axum::{
    Extension, Router,
    routing::{get, post, put},
};

use crate::modules::training::use_cases::browse_courses::inbound::http as browse_http;
use crate::modules::training::use_cases::create_course::inbound::http as create_course_http;
use crate::modules::training::use_cases::create_period::inbound::http as create_period_http;
use crate::modules::training::use_cases::delete_course::inbound::http as delete_course_http;
use crate::modules::training::use_cases::delete_period::inbound::http as delete_period_http;
use crate::modules::training::use_cases::enroll_worker::inbound::http as enroll_http;
use crate::modules::training::use_cases::register_worker::inbound::http as register_worker_http;
use crate::modules::training::use_cases::update_course::inbound::http as update_course_http;
use crate::modules::training::use_cases::update_enrollment::inbound::http as update_enrollment_http;
use crate::modules::training::use_cases::update_period::inbound::http as update_period_http;
use crate::modules::training::use_cases::withdraw_enrollment::inbound::http as withdraw_enrollment_http;
use crate::shell::graphql::{self, AppSchema};
use crate::shell::state::AppState;

async fn health() -> &'static str {
    "ok"
}

pub fn router(state: AppState) -> Router {
    let schema: AppSchema = graphql::schema(state.clone());
    Router::new()
        .route("/health", get(health))
        .route("/workers", post(register_worker_http::handle))
        .route(
            "/workers/{worker_id}/enrollments",
            get(browse_http::list_enrollments_by_worker),
        )
        .route(
            "/periods",
            get(browse_http::list_periods).post(create_period_http::handle),
        )
        .route(
            "/periods/{period_id}",
            get(browse_http::get_period)
                .put(update_period_http::handle)
                .delete(delete_period_http::handle),
        )
        .route(
            "/periods/{period_id}/courses",
            get(browse_http::list_courses_by_period),
        )
        .route("/courses", post(create_course_http::handle))
        .route(
            "/courses/{course_id}",
            get(browse_http::get_course)
                .put(update_course_http::handle)
                .delete(delete_course_http::handle),
        )
        .route(
            "/courses/{course_id}/enrollments",
            get(browse_http::list_enrollments_by_course),
        )
        .route("/enrollments", post(enroll_http::handle))
        .route(
            "/enrollments/{enrollment_id}",
            put(update_enrollment_http::handle).delete(withdraw_enrollment_http::handle),
        )
        .route("/gql", get(graphql::graphiql).post(graphql::graphql))
        .layer(Extension(schema))
        .with_state(state)
}
