// End-to-end enrollment flows against the capacity ceiling.

use rstest::{fixture, rstest};

use crate::modules::training::application::capacity_guard::COURSE_CAPACITY;
use crate::modules::training::application::errors::ApplicationError;
use crate::modules::training::core::errors::DomainError;
use crate::modules::training::core::ports::{EnrollmentLedger, TrainingStore, TrainingTransaction};
use crate::modules::training::use_cases::enroll_worker::command::EnrollWorker;
use crate::shared::core::primitives::{CourseId, EnrollmentId, WorkerId};
use crate::shell::state::AppState;
use crate::tests::fixtures::{
    Seeded, make_course, make_enrollment, march_window, seed_course, seed_workers, seeded_store,
};

struct Setup {
    seeded: Seeded,
    state: AppState,
    course_id: CourseId,
    other_course_id: CourseId,
}

#[fixture]
async fn before_each() -> Setup {
    let seeded = seeded_store().await;
    let instructor = seeded.instructors[0].worker_id;
    let course = make_course(seeded.period.period_id, vec![instructor], march_window(3, 5, 9, 12));
    let other = make_course(seeded.period.period_id, vec![instructor], march_window(10, 12, 9, 12));
    seed_course(&seeded.store, course.clone()).await;
    seed_course(&seeded.store, other.clone()).await;
    let state = AppState::new(seeded.store.clone());
    Setup {
        seeded,
        state,
        course_id: course.course_id,
        other_course_id: other.course_id,
    }
}

fn enroll(worker_id: WorkerId, course_id: CourseId) -> EnrollWorker {
    EnrollWorker {
        enrollment_id: EnrollmentId::generate(),
        worker_id,
        course_id,
        final_grade: None,
    }
}

async fn fill(setup: &Setup, course_id: CourseId, count: usize) {
    let workers = seed_workers(&setup.seeded.store, count).await;
    let mut tx = setup.seeded.store.begin().await.unwrap();
    for worker_id in workers {
        tx.save_enrollment(make_enrollment(worker_id, course_id))
            .await
            .unwrap();
    }
    tx.commit().await.unwrap();
}

#[rstest]
#[tokio::test]
async fn it_should_accept_the_thirtieth_and_refuse_the_thirty_first(#[future] before_each: Setup) {
    let setup = before_each.await;
    fill(&setup, setup.course_id, COURSE_CAPACITY - 1).await;
    let latecomers: Vec<WorkerId> = setup
        .seeded
        .instructors
        .iter()
        .map(|w| w.worker_id)
        .collect();

    let thirtieth = setup
        .state
        .enroll_worker
        .handle(enroll(latecomers[0], setup.course_id))
        .await;
    let thirty_first = setup
        .state
        .enroll_worker
        .handle(enroll(latecomers[1], setup.course_id))
        .await;

    assert!(thirtieth.is_ok());
    assert!(matches!(
        thirty_first,
        Err(ApplicationError::Domain(DomainError::CapacityExceeded { capacity: 30, .. }))
    ));
    let listed = setup
        .state
        .queries
        .list_enrollments_by_course(setup.course_id)
        .await
        .unwrap();
    assert_eq!(listed.len(), COURSE_CAPACITY);
}

#[rstest]
#[tokio::test]
async fn it_should_allow_the_same_worker_in_different_courses(#[future] before_each: Setup) {
    let setup = before_each.await;
    let worker_id = setup.seeded.instructors[1].worker_id;
    let handler = &setup.state.enroll_worker;

    handler.handle(enroll(worker_id, setup.course_id)).await.unwrap();
    let again = handler.handle(enroll(worker_id, setup.course_id)).await;
    let elsewhere = handler
        .handle(enroll(worker_id, setup.other_course_id))
        .await;

    assert!(matches!(
        again,
        Err(ApplicationError::Domain(DomainError::DuplicateEnrollment { .. }))
    ));
    assert!(elsewhere.is_ok());
}

#[rstest]
#[tokio::test]
async fn it_should_report_the_duplicate_before_the_full_course(#[future] before_each: Setup) {
    let setup = before_each.await;
    let worker_id = setup.seeded.instructors[1].worker_id;
    setup
        .state
        .enroll_worker
        .handle(enroll(worker_id, setup.course_id))
        .await
        .unwrap();
    fill(&setup, setup.course_id, COURSE_CAPACITY - 1).await;

    let result = setup
        .state
        .enroll_worker
        .handle(enroll(worker_id, setup.course_id))
        .await;

    assert!(matches!(
        result,
        Err(ApplicationError::Domain(DomainError::DuplicateEnrollment { .. }))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn it_should_not_oversell_the_last_seat(#[future] before_each: Setup) {
    let setup = before_each.await;
    fill(&setup, setup.course_id, COURSE_CAPACITY - 1).await;
    let course_id = setup.course_id;

    let tasks: Vec<_> = setup
        .seeded
        .instructors
        .iter()
        .map(|w| {
            let state = setup.state.clone();
            let command = enroll(w.worker_id, course_id);
            tokio::spawn(async move { state.enroll_worker.handle(command).await })
        })
        .collect();
    let mut accepted = 0;
    for task in tasks {
        if task.await.unwrap().is_ok() {
            accepted += 1;
        }
    }

    assert_eq!(accepted, 1);
    let tx = setup.seeded.store.begin().await.unwrap();
    assert_eq!(tx.count_enrollments(course_id).await.unwrap(), COURSE_CAPACITY);
}

#[rstest]
#[tokio::test]
async fn it_should_free_a_seat_when_an_enrollment_is_withdrawn(#[future] before_each: Setup) {
    let setup = before_each.await;
    fill(&setup, setup.course_id, COURSE_CAPACITY - 1).await;
    let [first, second] = [0, 1].map(|i| setup.seeded.instructors[i].worker_id);
    let last_seat = setup
        .state
        .enroll_worker
        .handle(enroll(first, setup.course_id))
        .await
        .unwrap();
    let refused = setup
        .state
        .enroll_worker
        .handle(enroll(second, setup.course_id))
        .await;

    setup
        .state
        .withdraw_enrollment
        .handle(last_seat.enrollment_id)
        .await
        .unwrap();
    let admitted = setup
        .state
        .enroll_worker
        .handle(enroll(second, setup.course_id))
        .await;

    assert!(matches!(
        refused,
        Err(ApplicationError::Domain(DomainError::CapacityExceeded { .. }))
    ));
    assert!(admitted.is_ok());
    let tx = setup.seeded.store.begin().await.unwrap();
    assert_eq!(tx.count_enrollments(setup.course_id).await.unwrap(), COURSE_CAPACITY);
    assert!(
        tx.find_enrollment(first, setup.course_id, None)
            .await
            .unwrap()
            .is_none()
    );
}
