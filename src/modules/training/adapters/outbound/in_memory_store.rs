// In memory implementation of the training store and read queries.
//
// Purpose
// - Support command handler tests and local development without a database.
// - Not a production pattern: `begin` clones every table into the staged copy,
//   so each write costs time proportional to the whole store.
//
// Responsibilities
// - Keep every table behind one lock.
// - Serialize transactions: `begin` takes the write lock and holds it until the
//   transaction commits or is dropped. Writes go to a staged copy that replaces
//   the tables on commit.
// - Cascade deletes from periods to courses, and from courses to instructor
//   assignments and enrollments.

use async_trait::async_trait;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::{OwnedRwLockWriteGuard, RwLock};

use crate::modules::training::core::entities::{
    Course, Enrollment, InstructorAssignment, Period, Worker,
};
use crate::modules::training::core::ports::{
    CourseCatalog, EnrollmentLedger, InstructorSchedule, PeriodCatalog, StoreError,
    TrainingStore, TrainingTransaction, WorkerDirectory,
};
use crate::modules::training::core::window::DateRange;
use crate::modules::training::use_cases::browse_courses::queries_port::TrainingQueries;
use crate::shared::core::primitives::{CourseId, EnrollmentId, PeriodId, WorkerId};

#[derive(Debug, Clone, Default)]
pub struct Tables {
    workers: HashMap<WorkerId, Worker>,
    periods: HashMap<PeriodId, Period>,
    courses: HashMap<CourseId, Course>,
    assignments: BTreeSet<(WorkerId, CourseId)>,
    enrollments: HashMap<EnrollmentId, Enrollment>,
}

impl Tables {
    fn assignments_for(
        &self,
        workers: &[WorkerId],
        exclude_course: Option<CourseId>,
    ) -> Vec<InstructorAssignment> {
        self.assignments
            .iter()
            .filter(|(worker_id, course_id)| {
                workers.contains(worker_id) && Some(*course_id) != exclude_course
            })
            .filter_map(|(worker_id, course_id)| {
                self.courses
                    .get(course_id)
                    .map(|course| InstructorAssignment {
                        worker_id: *worker_id,
                        course_id: *course_id,
                        window: course.window,
                    })
            })
            .collect()
    }

    fn count_enrollments(&self, course_id: CourseId) -> usize {
        self.enrollments
            .values()
            .filter(|e| e.course_id == course_id)
            .count()
    }

    fn find_enrollment(
        &self,
        worker_id: WorkerId,
        course_id: CourseId,
        exclude: Option<EnrollmentId>,
    ) -> Option<Enrollment> {
        self.enrollments
            .values()
            .find(|e| {
                e.worker_id == worker_id
                    && e.course_id == course_id
                    && Some(e.enrollment_id) != exclude
            })
            .cloned()
    }

    fn existing_workers(&self, ids: &[WorkerId]) -> HashSet<WorkerId> {
        ids.iter()
            .filter(|id| self.workers.contains_key(id))
            .copied()
            .collect()
    }

    fn overlapping_periods(&self, range: DateRange, exclude: Option<PeriodId>) -> Vec<Period> {
        let mut periods: Vec<Period> = self
            .periods
            .values()
            .filter(|p| Some(p.period_id) != exclude && p.range().overlaps(&range))
            .cloned()
            .collect();
        periods.sort_by_key(|p| p.start_date);
        periods
    }

    fn courses_in_period(&self, period_id: PeriodId) -> Vec<Course> {
        let mut courses: Vec<Course> = self
            .courses
            .values()
            .filter(|c| c.period_id == period_id)
            .cloned()
            .collect();
        courses.sort_by_key(|c| (c.window.start_date, c.window.start_time));
        courses
    }

    fn enrollments_of_course(&self, course_id: CourseId) -> Vec<Enrollment> {
        let mut enrollments: Vec<Enrollment> = self
            .enrollments
            .values()
            .filter(|e| e.course_id == course_id)
            .cloned()
            .collect();
        enrollments.sort_by_key(|e| e.enrollment_id);
        enrollments
    }

    fn enrollments_of_worker(&self, worker_id: WorkerId) -> Vec<Enrollment> {
        let mut enrollments: Vec<Enrollment> = self
            .enrollments
            .values()
            .filter(|e| e.worker_id == worker_id)
            .cloned()
            .collect();
        enrollments.sort_by_key(|e| e.enrollment_id);
        enrollments
    }

    fn periods_by_start(&self) -> Vec<Period> {
        let mut periods: Vec<Period> = self.periods.values().cloned().collect();
        periods.sort_by_key(|p| (p.start_date, p.period_id));
        periods
    }

    fn save_course(&mut self, course: Course) {
        self.assignments
            .retain(|(_, course_id)| *course_id != course.course_id);
        for worker_id in &course.instructors {
            self.assignments.insert((*worker_id, course.course_id));
        }
        self.courses.insert(course.course_id, course);
    }

    fn delete_course(&mut self, course_id: CourseId) -> bool {
        if self.courses.remove(&course_id).is_none() {
            return false;
        }
        self.assignments.retain(|(_, c)| *c != course_id);
        self.enrollments.retain(|_, e| e.course_id != course_id);
        true
    }

    fn delete_period(&mut self, period_id: PeriodId) -> bool {
        if self.periods.remove(&period_id).is_none() {
            return false;
        }
        let courses: Vec<CourseId> = self
            .courses
            .values()
            .filter(|c| c.period_id == period_id)
            .map(|c| c.course_id)
            .collect();
        for course_id in courses {
            self.delete_course(course_id);
        }
        true
    }
}

#[derive(Default)]
pub struct InMemoryTrainingStore {
    tables: Arc<RwLock<Tables>>,
    is_offline: bool,
}

impl InMemoryTrainingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Training store offline".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl TrainingStore for InMemoryTrainingStore {
    type Transaction = InMemoryTransaction;

    async fn begin(&self) -> Result<Self::Transaction, StoreError> {
        self.ensure_online()?;
        let guard = self.tables.clone().write_owned().await;
        let staged = (*guard).clone();
        Ok(InMemoryTransaction { guard, staged })
    }
}

pub struct InMemoryTransaction {
    guard: OwnedRwLockWriteGuard<Tables>,
    staged: Tables,
}

#[async_trait]
impl InstructorSchedule for InMemoryTransaction {
    async fn assignments_for(
        &self,
        workers: &[WorkerId],
        exclude_course: Option<CourseId>,
    ) -> Result<Vec<InstructorAssignment>, StoreError> {
        Ok(self.staged.assignments_for(workers, exclude_course))
    }
}

#[async_trait]
impl EnrollmentLedger for InMemoryTransaction {
    async fn count_enrollments(&self, course_id: CourseId) -> Result<usize, StoreError> {
        Ok(self.staged.count_enrollments(course_id))
    }

    async fn find_enrollment(
        &self,
        worker_id: WorkerId,
        course_id: CourseId,
        exclude: Option<EnrollmentId>,
    ) -> Result<Option<Enrollment>, StoreError> {
        Ok(self.staged.find_enrollment(worker_id, course_id, exclude))
    }

    async fn get_enrollment(
        &self,
        enrollment_id: EnrollmentId,
    ) -> Result<Option<Enrollment>, StoreError> {
        Ok(self.staged.enrollments.get(&enrollment_id).cloned())
    }
}

#[async_trait]
impl WorkerDirectory for InMemoryTransaction {
    async fn existing_workers(&self, ids: &[WorkerId]) -> Result<HashSet<WorkerId>, StoreError> {
        Ok(self.staged.existing_workers(ids))
    }

    async fn find_worker_by_email(&self, email: &str) -> Result<Option<Worker>, StoreError> {
        Ok(self
            .staged
            .workers
            .values()
            .find(|w| w.email.eq_ignore_ascii_case(email))
            .cloned())
    }
}

#[async_trait]
impl PeriodCatalog for InMemoryTransaction {
    async fn get_period(&self, period_id: PeriodId) -> Result<Option<Period>, StoreError> {
        Ok(self.staged.periods.get(&period_id).cloned())
    }

    async fn find_period_by_name(&self, name: &str) -> Result<Option<Period>, StoreError> {
        Ok(self
            .staged
            .periods
            .values()
            .find(|p| p.name == name)
            .cloned())
    }

    async fn overlapping_periods(
        &self,
        range: DateRange,
        exclude: Option<PeriodId>,
    ) -> Result<Vec<Period>, StoreError> {
        Ok(self.staged.overlapping_periods(range, exclude))
    }
}

#[async_trait]
impl CourseCatalog for InMemoryTransaction {
    async fn get_course(&self, course_id: CourseId) -> Result<Option<Course>, StoreError> {
        Ok(self.staged.courses.get(&course_id).cloned())
    }

    async fn courses_in_period(&self, period_id: PeriodId) -> Result<Vec<Course>, StoreError> {
        Ok(self.staged.courses_in_period(period_id))
    }
}

#[async_trait]
impl TrainingTransaction for InMemoryTransaction {
    async fn save_worker(&mut self, worker: Worker) -> Result<(), StoreError> {
        self.staged.workers.insert(worker.worker_id, worker);
        Ok(())
    }

    async fn save_period(&mut self, period: Period) -> Result<(), StoreError> {
        self.staged.periods.insert(period.period_id, period);
        Ok(())
    }

    async fn save_course(&mut self, course: Course) -> Result<(), StoreError> {
        self.staged.save_course(course);
        Ok(())
    }

    async fn save_enrollment(&mut self, enrollment: Enrollment) -> Result<(), StoreError> {
        self.staged
            .enrollments
            .insert(enrollment.enrollment_id, enrollment);
        Ok(())
    }

    async fn delete_enrollment(&mut self, enrollment_id: EnrollmentId) -> Result<bool, StoreError> {
        Ok(self.staged.enrollments.remove(&enrollment_id).is_some())
    }

    async fn delete_course(&mut self, course_id: CourseId) -> Result<bool, StoreError> {
        Ok(self.staged.delete_course(course_id))
    }

    async fn delete_period(&mut self, period_id: PeriodId) -> Result<bool, StoreError> {
        Ok(self.staged.delete_period(period_id))
    }

    async fn commit(self) -> Result<(), StoreError> {
        let InMemoryTransaction { mut guard, staged } = self;
        *guard = staged;
        Ok(())
    }
}

#[async_trait]
impl TrainingQueries for InMemoryTrainingStore {
    async fn get_course(&self, course_id: CourseId) -> anyhow::Result<Option<Course>> {
        self.ensure_online()?;
        Ok(self.tables.read().await.courses.get(&course_id).cloned())
    }

    async fn list_courses_by_period(
        &self,
        period_id: PeriodId,
        offset: u64,
        limit: u64,
    ) -> anyhow::Result<Vec<Course>> {
        self.ensure_online()?;
        let courses = self.tables.read().await.courses_in_period(period_id);
        Ok(page(courses, offset, limit))
    }

    async fn list_enrollments_by_course(
        &self,
        course_id: CourseId,
    ) -> anyhow::Result<Vec<Enrollment>> {
        self.ensure_online()?;
        Ok(self.tables.read().await.enrollments_of_course(course_id))
    }

    async fn list_enrollments_by_worker(
        &self,
        worker_id: WorkerId,
        offset: u64,
        limit: u64,
    ) -> anyhow::Result<Vec<Enrollment>> {
        self.ensure_online()?;
        let enrollments = self.tables.read().await.enrollments_of_worker(worker_id);
        Ok(page(enrollments, offset, limit))
    }

    async fn get_period(&self, period_id: PeriodId) -> anyhow::Result<Option<Period>> {
        self.ensure_online()?;
        Ok(self.tables.read().await.periods.get(&period_id).cloned())
    }

    async fn list_periods(&self, offset: u64, limit: u64) -> anyhow::Result<Vec<Period>> {
        self.ensure_online()?;
        let periods = self.tables.read().await.periods_by_start();
        Ok(page(periods, offset, limit))
    }
}

fn page<T>(rows: Vec<T>, offset: u64, limit: u64) -> Vec<T> {
    rows.into_iter()
        .skip(offset as usize)
        .take(limit as usize)
        .collect()
}
