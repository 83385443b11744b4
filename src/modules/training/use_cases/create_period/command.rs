use chrono::NaiveDate;

use crate::modules::training::core::entities::Period;
use crate::shared::core::primitives::PeriodId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePeriod {
    pub period_id: PeriodId,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl From<CreatePeriod> for Period {
    fn from(command: CreatePeriod) -> Self {
        Period {
            period_id: command.period_id,
            name: command.name,
            start_date: command.start_date,
            end_date: command.end_date,
        }
    }
}
