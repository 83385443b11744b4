use std::sync::Arc;

use crate::modules::training::adapters::outbound::in_memory_store::InMemoryTrainingStore;
use crate::modules::training::use_cases::browse_courses::queries_port::TrainingQueries;
use crate::modules::training::use_cases::create_course::handler::CreateCourseHandler;
use crate::modules::training::use_cases::create_period::handler::CreatePeriodHandler;
use crate::modules::training::use_cases::delete_course::handler::DeleteCourseHandler;
use crate::modules::training::use_cases::delete_period::handler::DeletePeriodHandler;
use crate::modules::training::use_cases::enroll_worker::handler::EnrollWorkerHandler;
use crate::modules::training::use_cases::register_worker::handler::RegisterWorkerHandler;
use crate::modules::training::use_cases::update_course::handler::UpdateCourseHandler;
use crate::modules::training::use_cases::update_enrollment::handler::UpdateEnrollmentHandler;
use crate::modules::training::use_cases::update_period::handler::UpdatePeriodHandler;
use crate::modules::training::use_cases::withdraw_enrollment::handler::WithdrawEnrollmentHandler;

type Store = InMemoryTrainingStore;

#[derive(Clone)]
pub struct AppState {
    pub queries: Arc<dyn TrainingQueries + Send + Sync>,
    pub register_worker: Arc<RegisterWorkerHandler<Store>>,
    pub create_period: Arc<CreatePeriodHandler<Store>>,
    pub update_period: Arc<UpdatePeriodHandler<Store>>,
    pub delete_period: Arc<DeletePeriodHandler<Store>>,
    pub create_course: Arc<CreateCourseHandler<Store>>,
    pub update_course: Arc<UpdateCourseHandler<Store>>,
    pub delete_course: Arc<DeleteCourseHandler<Store>>,
    pub enroll_worker: Arc<EnrollWorkerHandler<Store>>,
    pub update_enrollment: Arc<UpdateEnrollmentHandler<Store>>,
    pub withdraw_enrollment: Arc<WithdrawEnrollmentHandler<Store>>,
}

impl AppState {
    /// Every handler and the read side share one store.
    pub fn new(store: Arc<Store>) -> Self {
        Self {
            queries: store.clone(),
            register_worker: Arc::new(RegisterWorkerHandler::new(store.clone())),
            create_period: Arc::new(CreatePeriodHandler::new(store.clone())),
            update_period: Arc::new(UpdatePeriodHandler::new(store.clone())),
            delete_period: Arc::new(DeletePeriodHandler::new(store.clone())),
            create_course: Arc::new(CreateCourseHandler::new(store.clone())),
            update_course: Arc::new(UpdateCourseHandler::new(store.clone())),
            delete_course: Arc::new(DeleteCourseHandler::new(store.clone())),
            enroll_worker: Arc::new(EnrollWorkerHandler::new(store.clone())),
            update_enrollment: Arc::new(UpdateEnrollmentHandler::new(store.clone())),
            withdraw_enrollment: Arc::new(WithdrawEnrollmentHandler::new(store)),
        }
    }
}
