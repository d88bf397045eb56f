#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::compare::Trend;
use crate::models::BudgetLine;

fn rec(date: &str, category: &str, cost: Option<Decimal>) -> ExpenseRecord {
    ExpenseRecord::new(
        NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        category,
        cost,
    )
}

fn ledger() -> Ledger {
    Ledger::new(vec![
        rec("2024-01-03", "food", Some(dec!(400))),
        rec("2024-02-01", "food", Some(dec!(900))),
        rec("2024-02-01", "transportation", Some(dec!(300))),
        rec("2024-03-04", "food", Some(dec!(700))),
        rec("2024-03-04", "transportation", Some(dec!(200))),
        rec("2024-03-09", "food", Some(dec!(100))),
        rec("2024-03-15", "food", None),
    ])
}

fn budget(amount: Decimal) -> BudgetTable {
    BudgetTable::new(vec![BudgetLine {
        category: "all".into(),
        amount,
    }])
}

#[test]
fn test_report_compares_with_previous_month() {
    let report = build_report(&ledger(), PeriodKey::new(2024, 3), &budget(dec!(1500)));
    assert_eq!(report.previous_period, PeriodKey::new(2024, 2));
    assert_eq!(report.current.total_cost, dec!(1000));
    assert_eq!(report.current.transaction_count, 4);
    assert_eq!(report.previous.total_cost, dec!(1200));

    let cmp = report.outcome.comparison().unwrap();
    assert_eq!(cmp.delta_cost, dec!(200));
    assert_eq!(cmp.delta_count, 2);
    assert_eq!(cmp.cost_trend(), Trend::Decreased(dec!(200)));
    assert_eq!(report.month_gap(), Some(dec!(200)));
}

#[test]
fn test_report_budget() {
    let report = build_report(&ledger(), PeriodKey::new(2024, 3), &budget(dec!(900)));
    assert_eq!(report.budget_total, dec!(900));
    assert_eq!(report.variance, dec!(-100));
    assert_eq!(report.budget_status, BudgetStatus::Exceeded(dec!(100)));
}

#[test]
fn test_report_january_has_no_previous_data() {
    let report = build_report(&ledger(), PeriodKey::new(2024, 1), &BudgetTable::default());
    assert_eq!(report.previous_period, PeriodKey::new(2024, 0));
    assert_eq!(report.outcome, ComparisonOutcome::NoPreviousData);
    assert_eq!(report.month_gap(), None);
    // Current metrics still available standalone
    assert_eq!(report.current.total_cost, dec!(400));
    assert_eq!(report.variance, dec!(4500));
}

#[test]
fn test_report_empty_selection_degrades_to_zero() {
    let report = build_report(&ledger(), PeriodKey::new(2024, 6), &budget(dec!(100)));
    assert!(report.is_empty_selection());
    assert_eq!(report.current, PeriodSummary::default());
    assert!(report.daily_frequency.is_empty());
    assert_eq!(report.budget_status, BudgetStatus::Saved(dec!(100)));
    assert_eq!(report.outcome, ComparisonOutcome::NoPreviousData);
}

#[test]
fn test_report_categories_by_cost_descending() {
    let report = build_report(&ledger(), PeriodKey::new(2024, 3), &BudgetTable::default());
    assert_eq!(
        report.categories_by_cost(),
        vec![("food", dec!(800)), ("transportation", dec!(200))]
    );
}

#[test]
fn test_daily_frequency_counts_every_record() {
    let data = ledger();
    let march: Vec<&ExpenseRecord> = data
        .records()
        .iter()
        .filter(|r| r.period() == PeriodKey::new(2024, 3))
        .collect();
    let freq = daily_frequency(march);
    let day = |d: u32| NaiveDate::from_ymd_opt(2024, 3, d).unwrap();
    assert_eq!(freq, vec![(day(4), 2), (day(9), 1), (day(15), 1)]);
}
