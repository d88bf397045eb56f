use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use super::PeriodKey;

/// One row of the ledger. A `None` cost means the sheet cell was empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ExpenseRecord {
    pub(crate) date: NaiveDate,
    pub(crate) category: String,
    pub(crate) cost: Option<Decimal>,
}

impl ExpenseRecord {
    pub(crate) fn new(date: NaiveDate, category: impl Into<String>, cost: Option<Decimal>) -> Self {
        Self {
            date,
            category: category.into(),
            cost,
        }
    }

    pub(crate) fn period(&self) -> PeriodKey {
        PeriodKey::new(self.date.year(), self.date.month())
    }

    pub(crate) fn has_cost(&self) -> bool {
        self.cost.is_some()
    }
}
