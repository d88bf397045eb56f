#![allow(clippy::unwrap_used)]

use super::*;
use crate::ledger::{read_ledger, Ledger, LoadError};
use crate::models::BudgetTable;

struct SheetSource;

impl LedgerSource for SheetSource {
    fn describe(&self) -> String {
        "sheet".into()
    }

    fn fetch(&self) -> Result<Ledger, LoadError> {
        read_ledger(
            "date,type,cost\n2023-11-02,food,10\n2024-01-05,food,100\n2024-02-10,food,50\n".as_bytes(),
        )
    }
}

fn app() -> App {
    let mut app = App::new(BudgetTable::default(), "THB".into());
    app.reload(&SheetSource);
    app
}

#[test]
fn test_levenshtein() {
    assert_eq!(levenshtein("report", "report"), 0);
    assert_eq!(levenshtein("reprot", "report"), 2);
    assert_eq!(levenshtein("", "year"), 4);
}

#[test]
fn test_unknown_command_suggests() {
    let mut app = app();
    handle_command("reprt", &mut app, &SheetSource).unwrap();
    assert_eq!(app.status_message, "Unknown command: :reprt. Did you mean :report?");
}

#[test]
fn test_quit() {
    let mut app = app();
    handle_command("q", &mut app, &SheetSource).unwrap();
    assert!(!app.running);
}

#[test]
fn test_month_number_within_selected_year() {
    let mut app = app();
    handle_command("month 1", &mut app, &SheetSource).unwrap();
    assert_eq!(app.selected_period(), Some(PeriodKey::new(2024, 1)));
    assert_eq!(app.status_message, "Switched to 2024-01");
}

#[test]
fn test_month_full_period() {
    let mut app = app();
    handle_command("m 2023-11", &mut app, &SheetSource).unwrap();
    assert_eq!(app.selected_period(), Some(PeriodKey::new(2023, 11)));
}

#[test]
fn test_month_absent_keeps_selection() {
    let mut app = app();
    handle_command("month 2024-06", &mut app, &SheetSource).unwrap();
    assert_eq!(app.selected_period(), Some(PeriodKey::new(2024, 2)));
    assert_eq!(app.status_message, "No records for 2024-06");
}

#[test]
fn test_month_invalid() {
    let mut app = app();
    handle_command("month march", &mut app, &SheetSource).unwrap();
    assert!(app.status_message.starts_with("Invalid month"));
}

#[test]
fn test_month_usage_lists_offered_months() {
    let mut app = app();
    handle_command("month", &mut app, &SheetSource).unwrap();
    assert!(app.status_message.ends_with("Months: 1, 2"));
}

#[test]
fn test_year() {
    let mut app = app();
    handle_command("year 2023", &mut app, &SheetSource).unwrap();
    assert_eq!(app.selected_period(), Some(PeriodKey::new(2023, 11)));
    handle_command("year 2030", &mut app, &SheetSource).unwrap();
    assert_eq!(app.status_message, "No records for 2030");
}

#[test]
fn test_report_and_records() {
    let mut app = app();
    handle_command("report", &mut app, &SheetSource).unwrap();
    assert_eq!(app.screen, Screen::Report);
    handle_command("records", &mut app, &SheetSource).unwrap();
    assert_eq!(app.screen, Screen::Records);
    assert!(app.report_requested);
}

#[test]
fn test_report_without_selection() {
    let mut app = App::new(BudgetTable::default(), "THB".into());
    handle_command("g", &mut app, &SheetSource).unwrap();
    assert_eq!(app.screen, Screen::Records);
    assert!(!app.report_requested);
}

#[test]
fn test_reload() {
    let mut app = App::new(BudgetTable::default(), "THB".into());
    handle_command("reload", &mut app, &SheetSource).unwrap();
    assert_eq!(app.ledger.len(), 3);
}

#[test]
fn test_every_command_has_description() {
    for (name, cmd) in COMMANDS.iter() {
        assert!(!cmd.description.is_empty(), ":{name} has no description");
    }
}
