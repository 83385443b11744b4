// Shared test fixtures: canonical entities, windows in March 2025 and command builders.
// Compiled into the crate only under cfg(test).

pub mod commands {
    pub mod create_course;
}

use chrono::{NaiveDate, NaiveTime};
use std::sync::Arc;

use crate::modules::training::adapters::outbound::in_memory_store::InMemoryTrainingStore;
use crate::modules::training::core::entities::{
    Course, CourseProfile, CourseType, Enrollment, Modality, Period, Worker,
};
use crate::modules::training::core::ports::{TrainingStore, TrainingTransaction};
use crate::modules::training::core::window::CourseWindow;
use crate::shared::core::primitives::{CourseId, EnrollmentId, PeriodId, WorkerId};

/// A window in March 2025. The 3rd is a Monday.
pub fn march_window(start_day: u32, end_day: u32, from_hour: u32, to_hour: u32) -> CourseWindow {
    CourseWindow {
        start_date: march(start_day),
        end_date: march(end_day),
        start_time: NaiveTime::from_hms_opt(from_hour, 0, 0).unwrap(),
        end_time: NaiveTime::from_hms_opt(to_hour, 0, 0).unwrap(),
    }
}

pub fn march(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, day).unwrap()
}

pub fn make_worker(email: &str) -> Worker {
    Worker {
        worker_id: WorkerId::generate(),
        name: "Ana".to_string(),
        fathers_surname: "Lopez".to_string(),
        mother_surname: None,
        email: email.to_string(),
    }
}

/// Covers March through June 2025.
pub fn make_period(name: &str) -> Period {
    Period {
        period_id: PeriodId::generate(),
        name: name.to_string(),
        start_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
    }
}

pub fn make_course(period_id: PeriodId, instructors: Vec<WorkerId>, window: CourseWindow) -> Course {
    Course {
        course_id: CourseId::generate(),
        period_id,
        target: "Teaching staff".to_string(),
        name: "Active learning".to_string(),
        window,
        course_type: CourseType::Workshop,
        modality: Modality::InPerson,
        course_profile: CourseProfile::TeacherUpdate,
        goal: "Apply active learning techniques".to_string(),
        details: None,
        instructors,
    }
}

pub fn make_enrollment(worker_id: WorkerId, course_id: CourseId) -> Enrollment {
    Enrollment {
        enrollment_id: EnrollmentId::generate(),
        worker_id,
        course_id,
        final_grade: None,
    }
}

pub struct Seeded {
    pub store: Arc<InMemoryTrainingStore>,
    pub period: Period,
    pub instructors: Vec<Worker>,
}

/// A store holding one period and two instructors.
pub async fn seeded_store() -> Seeded {
    let store = Arc::new(InMemoryTrainingStore::new());
    let period = make_period("Spring 2025");
    let instructors = vec![
        make_worker("ana@example.com"),
        make_worker("luis@example.com"),
    ];
    let mut tx = store.begin().await.unwrap();
    tx.save_period(period.clone()).await.unwrap();
    for worker in &instructors {
        tx.save_worker(worker.clone()).await.unwrap();
    }
    tx.commit().await.unwrap();
    Seeded {
        store,
        period,
        instructors,
    }
}

/// Registers `count` fresh workers and returns their ids.
pub async fn seed_workers(store: &InMemoryTrainingStore, count: usize) -> Vec<WorkerId> {
    let mut tx = store.begin().await.unwrap();
    let mut ids = Vec::with_capacity(count);
    for index in 0..count {
        let worker = make_worker(&format!("worker-{index}@example.com"));
        ids.push(worker.worker_id);
        tx.save_worker(worker).await.unwrap();
    }
    tx.commit().await.unwrap();
    ids
}

pub async fn seed_course(store: &InMemoryTrainingStore, course: Course) {
    let mut tx = store.begin().await.unwrap();
    tx.save_course(course).await.unwrap();
    tx.commit().await.unwrap();
}
