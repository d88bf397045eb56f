#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use super::*;

fn rec(y: i32, m: u32, d: u32) -> ExpenseRecord {
    ExpenseRecord::new(NaiveDate::from_ymd_opt(y, m, d).unwrap(), "food", Some(dec!(1)))
}

fn sample() -> Ledger {
    Ledger::new(vec![
        rec(2024, 3, 2),
        rec(2023, 11, 5),
        rec(2024, 1, 9),
        rec(2024, 3, 20),
        rec(2023, 12, 1),
    ])
}

#[test]
fn test_periods_are_distinct_and_sorted() {
    assert_eq!(
        sample().periods(),
        vec![
            PeriodKey::new(2023, 11),
            PeriodKey::new(2023, 12),
            PeriodKey::new(2024, 1),
            PeriodKey::new(2024, 3),
        ]
    );
}

#[test]
fn test_years() {
    assert_eq!(sample().years(), vec![2023, 2024]);
}

#[test]
fn test_months_in_year() {
    let ledger = sample();
    assert_eq!(ledger.months_in(2024), vec![1, 3]);
    assert_eq!(ledger.months_in(2023), vec![11, 12]);
    assert!(ledger.months_in(2022).is_empty());
}

#[test]
fn test_latest_period() {
    assert_eq!(sample().latest_period(), Some(PeriodKey::new(2024, 3)));
    assert_eq!(Ledger::default().latest_period(), None);
}

#[test]
fn test_contains_period() {
    let ledger = sample();
    assert!(ledger.contains_period(PeriodKey::new(2024, 1)));
    assert!(!ledger.contains_period(PeriodKey::new(2024, 2)));
}

#[test]
fn test_empty_ledger() {
    let ledger = Ledger::default();
    assert!(ledger.is_empty());
    assert_eq!(ledger.len(), 0);
    assert!(ledger.years().is_empty());
}
