//! Month-over-month comparison of the expense ledger.
//!
//! Everything here is a pure function of its inputs. Front-ends call these
//! on every selection change and throw the results away afterwards.

mod report;

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::models::{ExpenseRecord, PeriodKey};

pub(crate) use report::{build_report, MonthReport};

/// Aggregates for one subset of the ledger.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct PeriodSummary {
    pub(crate) total_cost: Decimal,
    /// Every record in the subset, including ones with a missing cost.
    pub(crate) transaction_count: usize,
    pub(crate) cost_by_category: BTreeMap<String, Decimal>,
    pub(crate) cost_by_month: BTreeMap<PeriodKey, Decimal>,
}

/// Current month measured against the previous one.
///
/// Only `compare` builds one, and only when the previous period has data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Comparison {
    /// previous - current; positive means spending went down.
    pub(crate) delta_cost: Decimal,
    /// current - previous.
    pub(crate) delta_count: i64,
    pub(crate) previous_total: Decimal,
    pub(crate) previous_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ComparisonOutcome {
    Compared(Comparison),
    /// The previous period had no records, so there is nothing to compare to.
    NoPreviousData,
}

impl ComparisonOutcome {
    pub(crate) fn comparison(&self) -> Option<&Comparison> {
        match self {
            Self::Compared(c) => Some(c),
            Self::NoPreviousData => None,
        }
    }
}

/// Direction of change from the previous month to the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Trend<T> {
    Decreased(T),
    Increased(T),
    Unchanged,
}

impl Comparison {
    pub(crate) fn cost_trend(&self) -> Trend<Decimal> {
        match self.delta_cost.cmp(&Decimal::ZERO) {
            std::cmp::Ordering::Greater => Trend::Decreased(self.delta_cost),
            std::cmp::Ordering::Less => Trend::Increased(self.delta_cost.abs()),
            std::cmp::Ordering::Equal => Trend::Unchanged,
        }
    }

    pub(crate) fn count_trend(&self) -> Trend<u64> {
        match self.delta_count.cmp(&0) {
            std::cmp::Ordering::Greater => Trend::Increased(self.delta_count.unsigned_abs()),
            std::cmp::Ordering::Less => Trend::Decreased(self.delta_count.unsigned_abs()),
            std::cmp::Ordering::Equal => Trend::Unchanged,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BudgetStatus {
    /// Spent more than budgeted; carries the overspend.
    Exceeded(Decimal),
    /// Spent less than budgeted; carries the amount left.
    Saved(Decimal),
    Exact,
}

impl BudgetStatus {
    pub(crate) fn classify(variance: Decimal) -> Self {
        match variance.cmp(&Decimal::ZERO) {
            std::cmp::Ordering::Less => Self::Exceeded(variance.abs()),
            std::cmp::Ordering::Greater => Self::Saved(variance),
            std::cmp::Ordering::Equal => Self::Exact,
        }
    }
}

/// Records whose date falls in `period`.
pub(crate) fn partition(ledger: &[ExpenseRecord], period: PeriodKey) -> Vec<&ExpenseRecord> {
    ledger.iter().filter(|r| r.period() == period).collect()
}

pub(crate) fn summarize<'a>(subset: impl IntoIterator<Item = &'a ExpenseRecord>) -> PeriodSummary {
    let mut summary = PeriodSummary::default();

    for record in subset {
        summary.transaction_count += 1;
        let Some(cost) = record.cost else {
            continue;
        };
        summary.total_cost += cost;
        *summary
            .cost_by_category
            .entry(record.category.clone())
            .or_insert(Decimal::ZERO) += cost;
        *summary
            .cost_by_month
            .entry(record.period())
            .or_insert(Decimal::ZERO) += cost;
    }

    summary
}

pub(crate) fn compare(current: &PeriodSummary, previous: &PeriodSummary) -> ComparisonOutcome {
    if previous.transaction_count == 0 {
        return ComparisonOutcome::NoPreviousData;
    }

    let current_count = i64::try_from(current.transaction_count).unwrap_or(i64::MAX);
    let previous_count = i64::try_from(previous.transaction_count).unwrap_or(i64::MAX);

    ComparisonOutcome::Compared(Comparison {
        delta_cost: previous.total_cost - current.total_cost,
        delta_count: current_count - previous_count,
        previous_total: previous.total_cost,
        previous_count: previous.transaction_count,
    })
}

/// Positive means under budget, negative means over.
pub(crate) fn budget_variance(current: &PeriodSummary, budget_total: Decimal) -> Decimal {
    budget_total - current.total_cost
}
