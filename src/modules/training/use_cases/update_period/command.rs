use chrono::NaiveDate;

use crate::modules::training::core::entities::Period;
use crate::shared::core::primitives::PeriodId;

/// Fields left as `None` keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdatePeriod {
    pub name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl UpdatePeriod {
    pub fn apply_to(self, current: &Period) -> Period {
        Period {
            period_id: current.period_id,
            name: self.name.unwrap_or_else(|| current.name.clone()),
            start_date: self.start_date.unwrap_or(current.start_date),
            end_date: self.end_date.unwrap_or(current.end_date),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatePeriodCommand {
    pub period_id: PeriodId,
    pub changes: UpdatePeriod,
}
