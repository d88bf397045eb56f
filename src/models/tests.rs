#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ── ExpenseRecord ─────────────────────────────────────────────

#[test]
fn test_record_period() {
    let rec = ExpenseRecord::new(date(2024, 3, 31), "food", Some(dec!(120)));
    assert_eq!(rec.period(), PeriodKey::new(2024, 3));
}

#[test]
fn test_record_missing_cost() {
    let rec = ExpenseRecord::new(date(2024, 3, 1), "food", None);
    assert!(!rec.has_cost());
    assert!(ExpenseRecord::new(date(2024, 3, 1), "food", Some(Decimal::ZERO)).has_cost());
}

// ── PeriodKey ─────────────────────────────────────────────────

#[test]
fn test_period_ordering() {
    assert!(PeriodKey::new(2023, 12) < PeriodKey::new(2024, 1));
    assert!(PeriodKey::new(2024, 2) < PeriodKey::new(2024, 10));
}

#[test]
fn test_period_preceding_same_year() {
    assert_eq!(PeriodKey::new(2024, 5).preceding(), PeriodKey::new(2024, 4));
}

#[test]
fn test_period_preceding_january_has_no_rollover() {
    let prev = PeriodKey::new(2024, 1).preceding();
    assert_eq!(prev, PeriodKey::new(2024, 0));
    assert!(!prev.is_valid());
}

#[test]
fn test_period_parse_year_first() {
    assert_eq!(PeriodKey::parse("2024-01"), Some(PeriodKey::new(2024, 1)));
    assert_eq!(PeriodKey::parse("2024/3"), Some(PeriodKey::new(2024, 3)));
    assert_eq!(PeriodKey::parse(" 2024.12 "), Some(PeriodKey::new(2024, 12)));
}

#[test]
fn test_period_parse_month_first() {
    assert_eq!(PeriodKey::parse("03/2024"), Some(PeriodKey::new(2024, 3)));
    assert_eq!(PeriodKey::parse("7-2023"), Some(PeriodKey::new(2023, 7)));
}

#[test]
fn test_period_parse_rejects_out_of_range_month() {
    assert_eq!(PeriodKey::parse("2024-13"), None);
    assert_eq!(PeriodKey::parse("2024-00"), None);
}

#[test]
fn test_period_parse_garbage() {
    assert_eq!(PeriodKey::parse(""), None);
    assert_eq!(PeriodKey::parse("march"), None);
    assert_eq!(PeriodKey::parse("2024-01-15"), None);
}

#[test]
fn test_period_display() {
    assert_eq!(PeriodKey::new(2024, 3).to_string(), "2024-03");
}

#[test]
fn test_period_month_label() {
    assert_eq!(PeriodKey::new(2024, 1).month_label(), "Jan");
    assert_eq!(PeriodKey::new(2024, 12).month_label(), "Dec");
    assert_eq!(PeriodKey::new(2024, 0).month_label(), "0");
}

// ── BudgetTable ───────────────────────────────────────────────

#[test]
fn test_default_budget_total() {
    let budget = BudgetTable::default();
    assert_eq!(budget.lines().len(), 2);
    assert_eq!(budget.total(), dec!(4900));
}

#[test]
fn test_empty_budget_total_is_zero() {
    assert_eq!(BudgetTable::new(Vec::new()).total(), Decimal::ZERO);
}

#[test]
fn test_budget_line_fields() {
    let budget = BudgetTable::new(vec![BudgetLine {
        category: "rent".into(),
        amount: dec!(8000.50),
    }]);
    assert_eq!(budget.total(), dec!(8000.50));
}
