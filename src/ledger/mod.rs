//! Loading the expense ledger from the sheet export.

mod columns;
mod csv_source;
mod error;

use std::collections::BTreeSet;

pub(crate) use columns::detect_columns;
pub(crate) use csv_source::{read_ledger, CsvLedgerSource};
pub(crate) use error::LoadError;

use crate::models::{ExpenseRecord, PeriodKey};

/// Anything that can hand over the whole ledger in one blocking call.
pub(crate) trait LedgerSource {
    /// Human-readable location, for status lines and logs.
    fn describe(&self) -> String;

    fn fetch(&self) -> Result<Ledger, LoadError>;
}

/// Every expense record, for all time. Immutable once loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Ledger {
    records: Vec<ExpenseRecord>,
}

impl Ledger {
    pub(crate) fn new(records: Vec<ExpenseRecord>) -> Self {
        Self { records }
    }

    pub(crate) fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct periods present, oldest first.
    pub(crate) fn periods(&self) -> Vec<PeriodKey> {
        let set: BTreeSet<PeriodKey> = self.records.iter().map(|r| r.period()).collect();
        set.into_iter().collect()
    }

    /// Distinct years present, ascending.
    pub(crate) fn years(&self) -> Vec<i32> {
        let set: BTreeSet<i32> = self.records.iter().map(|r| r.period().year).collect();
        set.into_iter().collect()
    }

    /// Distinct months present in `year`, ascending.
    pub(crate) fn months_in(&self, year: i32) -> Vec<u32> {
        let set: BTreeSet<u32> = self
            .records
            .iter()
            .map(|r| r.period())
            .filter(|p| p.year == year)
            .map(|p| p.month)
            .collect();
        set.into_iter().collect()
    }

    pub(crate) fn latest_period(&self) -> Option<PeriodKey> {
        self.records.iter().map(|r| r.period()).max()
    }

    pub(crate) fn contains_period(&self, period: PeriodKey) -> bool {
        self.records.iter().any(|r| r.period() == period)
    }
}

#[cfg(test)]
#[path = "ledger_tests.rs"]
mod tests;
