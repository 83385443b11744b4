// End-to-end scheduling flows through the router and the shared handlers.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::NaiveTime;
use http_body_util::BodyExt;
use rstest::rstest;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::modules::training::application::errors::ApplicationError;
use crate::modules::training::core::errors::DomainError;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::commands::create_course::CreateCourseBuilder;
use crate::tests::fixtures::{Seeded, make_enrollment, seeded_store};

fn send(method: &str, uri: String, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);
    match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn call(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

fn course_json(seeded: &Seeded, dates: (&str, &str), times: (&str, &str)) -> Value {
    json!({
        "period_id": seeded.period.period_id,
        "target": "Teaching staff",
        "name": "Assessment design",
        "start_date": dates.0,
        "end_date": dates.1,
        "start_time": times.0,
        "end_time": times.1,
        "course_type": "diploma",
        "modality": "virtual",
        "course_profile": "training",
        "goal": "Design rubrics",
        "instructors": [seeded.instructors[0].worker_id, seeded.instructors[1].worker_id],
    })
}

#[rstest]
#[case::back_to_back(("2025-03-05", "2025-03-07"), ("12:00:00", "14:00:00"), StatusCode::CREATED)]
#[case::shared_boundary_day(("2025-03-05", "2025-03-07"), ("11:59:00", "14:00:00"), StatusCode::CONFLICT)]
#[case::disjoint_days(("2025-03-06", "2025-03-07"), ("09:00:00", "12:00:00"), StatusCode::CREATED)]
#[tokio::test]
async fn it_should_apply_the_conflict_boundaries(
    #[case] dates: (&str, &str),
    #[case] times: (&str, &str),
    #[case] expected: StatusCode,
) {
    let seeded = seeded_store().await;
    let app = router(AppState::new(seeded.store.clone()));
    let (created, _) = call(
        &app,
        send(
            "POST",
            "/courses".into(),
            Some(course_json(&seeded, ("2025-03-03", "2025-03-05"), ("09:00:00", "12:00:00"))),
        ),
    )
    .await;
    assert_eq!(created, StatusCode::CREATED);

    let (status, _) = call(
        &app,
        send("POST", "/courses".into(), Some(course_json(&seeded, dates, times))),
    )
    .await;

    assert_eq!(status, expected);
}

#[tokio::test]
async fn it_should_let_a_course_be_edited_in_place() {
    let seeded = seeded_store().await;
    let app = router(AppState::new(seeded.store.clone()));
    let (_, course) = call(
        &app,
        send(
            "POST",
            "/courses".into(),
            Some(course_json(&seeded, ("2025-03-03", "2025-03-05"), ("09:00:00", "12:00:00"))),
        ),
    )
    .await;
    let uri = format!("/courses/{}", course["course_id"].as_str().unwrap());

    let (status, updated) = call(
        &app,
        send("PUT", uri.clone(), Some(json!({"start_time": "10:00:00", "name": "Rubrics"}))),
    )
    .await;
    let (_, fetched) = call(&app, send("GET", uri, None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["start_time"], "10:00:00");
    assert_eq!(fetched["name"], "Rubrics");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn it_should_let_only_one_of_two_concurrent_bookings_through() {
    let seeded = seeded_store().await;
    let state = AppState::new(seeded.store.clone());
    let worker_id = seeded.instructors[0].worker_id;
    let first = CreateCourseBuilder::new()
        .period_id(seeded.period.period_id)
        .instructors(vec![worker_id])
        .march(3, 5, 9, 12)
        .build();
    let second = CreateCourseBuilder::new()
        .period_id(seeded.period.period_id)
        .instructors(vec![worker_id])
        .march(4, 6, 11, 13)
        .build();

    let left = tokio::spawn({
        let state = state.clone();
        async move { state.create_course.handle(first).await }
    });
    let right = tokio::spawn({
        let state = state.clone();
        async move { state.create_course.handle(second).await }
    });
    let (left, right) = tokio::join!(left, right);
    let results = [left.unwrap(), right.unwrap()];

    let accepted = results.iter().filter(|r| r.is_ok()).count();
    let rejected = results
        .iter()
        .filter(|r| {
            matches!(
                r,
                Err(ApplicationError::Domain(DomainError::InstructorUnavailable { .. }))
            )
        })
        .count();
    assert_eq!((accepted, rejected), (1, 1));

    let listed = state
        .queries
        .list_courses_by_period(seeded.period.period_id, 0, 100)
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);
}

#[tokio::test]
async fn it_should_cascade_a_period_delete_to_courses_and_enrollments() {
    let seeded = seeded_store().await;
    let state = AppState::new(seeded.store.clone());
    let app = router(state.clone());
    let course = state
        .create_course
        .handle(
            CreateCourseBuilder::new()
                .period_id(seeded.period.period_id)
                .instructors(vec![seeded.instructors[0].worker_id])
                .times(
                    NaiveTime::from_hms_opt(8, 30, 0).unwrap(),
                    NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
                )
                .build(),
        )
        .await
        .unwrap();
    let enrollment = make_enrollment(seeded.instructors[1].worker_id, course.course_id);
    let (enrolled, _) = call(
        &app,
        send(
            "POST",
            "/enrollments".into(),
            Some(json!({"worker_id": enrollment.worker_id, "course_id": enrollment.course_id})),
        ),
    )
    .await;
    assert_eq!(enrolled, StatusCode::CREATED);

    let (deleted, _) = call(
        &app,
        send("DELETE", format!("/periods/{}", seeded.period.period_id), None),
    )
    .await;
    let (course_status, _) = call(&app, send("GET", format!("/courses/{}", course.course_id), None)).await;
    let (_, enrollments) = call(
        &app,
        send("GET", format!("/courses/{}/enrollments", course.course_id), None),
    )
    .await;

    assert_eq!(deleted, StatusCode::NO_CONTENT);
    assert_eq!(course_status, StatusCode::NOT_FOUND);
    assert_eq!(enrollments, json!([]));

    // the instructor is free again once the period is recreated
    let (_, period) = call(
        &app,
        send(
            "POST",
            "/periods".into(),
            Some(json!({"name": "Spring 2025", "start_date": "2025-03-01", "end_date": "2025-06-30"})),
        ),
    )
    .await;
    let rebooked = state
        .create_course
        .handle(
            CreateCourseBuilder::new()
                .period_id(serde_json::from_value(period["period_id"].clone()).unwrap())
                .instructors(vec![seeded.instructors[0].worker_id])
                .build(),
        )
        .await;
    assert!(rebooked.is_ok());
}
