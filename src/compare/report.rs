use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::{budget_variance, compare, partition, summarize};
use super::{BudgetStatus, ComparisonOutcome, PeriodSummary};
use crate::ledger::Ledger;
use crate::models::{BudgetTable, ExpenseRecord, PeriodKey};

/// Everything the dashboard shows for one month/year selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MonthReport {
    pub(crate) period: PeriodKey,
    pub(crate) previous_period: PeriodKey,
    pub(crate) current: PeriodSummary,
    pub(crate) previous: PeriodSummary,
    pub(crate) outcome: ComparisonOutcome,
    pub(crate) budget_total: Decimal,
    pub(crate) variance: Decimal,
    pub(crate) budget_status: BudgetStatus,
    /// Records per calendar day of the selected month, for the histogram.
    pub(crate) daily_frequency: Vec<(NaiveDate, usize)>,
}

impl MonthReport {
    pub(crate) fn is_empty_selection(&self) -> bool {
        self.current.transaction_count == 0
    }

    /// Height difference between the current and previous month bars.
    pub(crate) fn month_gap(&self) -> Option<Decimal> {
        self.outcome.comparison().map(|c| c.delta_cost.abs())
    }

    /// Category totals largest first, the order the charts draw them in.
    pub(crate) fn categories_by_cost(&self) -> Vec<(&str, Decimal)> {
        let mut cats: Vec<(&str, Decimal)> = self
            .current
            .cost_by_category
            .iter()
            .map(|(name, cost)| (name.as_str(), *cost))
            .collect();
        cats.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        cats
    }
}

pub(crate) fn build_report(ledger: &Ledger, period: PeriodKey, budget: &BudgetTable) -> MonthReport {
    let previous_period = period.preceding();

    let current_subset = partition(ledger.records(), period);
    let previous_subset = partition(ledger.records(), previous_period);

    let current = summarize(current_subset.iter().copied());
    let previous = summarize(previous_subset.iter().copied());

    let outcome = compare(&current, &previous);
    if outcome == ComparisonOutcome::NoPreviousData {
        tracing::warn!(%period, %previous_period, "no data available for comparison");
    }

    let budget_total = budget.total();
    let variance = budget_variance(&current, budget_total);

    tracing::debug!(
        %period,
        total = %current.total_cost,
        count = current.transaction_count,
        %variance,
        "built month report"
    );

    MonthReport {
        period,
        previous_period,
        daily_frequency: daily_frequency(current_subset.iter().copied()),
        current,
        previous,
        outcome,
        budget_total,
        variance,
        budget_status: BudgetStatus::classify(variance),
    }
}

/// Number of records on each date, oldest first. Missing costs still count.
pub(crate) fn daily_frequency<'a>(
    subset: impl IntoIterator<Item = &'a ExpenseRecord>,
) -> Vec<(NaiveDate, usize)> {
    let mut counts: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for record in subset {
        *counts.entry(record.date).or_insert(0) += 1;
    }
    counts.into_iter().collect()
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
