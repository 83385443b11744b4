use crate::modules::training::core::entities::Worker;
use crate::shared::core::primitives::WorkerId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterWorker {
    pub worker_id: WorkerId,
    pub name: String,
    pub fathers_surname: String,
    pub mother_surname: Option<String>,
    pub email: String,
}

impl From<RegisterWorker> for Worker {
    fn from(command: RegisterWorker) -> Self {
        Worker {
            worker_id: command.worker_id,
            name: command.name,
            fathers_surname: command.fathers_surname,
            mother_surname: command.mother_surname,
            email: command.email,
        }
    }
}
