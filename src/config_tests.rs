#![allow(clippy::unwrap_used)]

use super::*;
use rust_decimal_macros::dec;
use std::collections::HashMap;
use std::io::Write;

fn dirs(root: &Path) -> Dirs {
    Dirs {
        data_dir: root.join("data"),
        config_dir: root.join("config"),
    }
}

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn no_env(_: &str) -> Option<String> {
    None
}

// ── resolve ───────────────────────────────────────────────────

#[test]
fn test_resolve_defaults() {
    let tmp = tempfile::tempdir().unwrap();
    let (cfg, rest) = Config::resolve_with(&args(&["expense-log"]), no_env, &dirs(tmp.path())).unwrap();
    assert_eq!(cfg.ledger_path, tmp.path().join("data").join("expense_log.csv"));
    assert!(cfg.budget_path.is_none());
    assert_eq!(cfg.currency, "THB");
    assert_eq!(rest, args(&["expense-log"]));
}

#[test]
fn test_resolve_flags_are_removed_from_args() {
    let tmp = tempfile::tempdir().unwrap();
    let input = args(&[
        "expense-log",
        "--ledger",
        "/tmp/sheet.csv",
        "report",
        "--currency",
        "USD",
        "2024-03",
    ]);
    let (cfg, rest) = Config::resolve_with(&input, no_env, &dirs(tmp.path())).unwrap();
    assert_eq!(cfg.ledger_path, PathBuf::from("/tmp/sheet.csv"));
    assert_eq!(cfg.currency, "USD");
    assert_eq!(rest, args(&["expense-log", "report", "2024-03"]));
}

#[test]
fn test_resolve_flag_beats_env() {
    let tmp = tempfile::tempdir().unwrap();
    let env: HashMap<&str, &str> = [(LEDGER_ENV, "/env/ledger.csv"), (CURRENCY_ENV, "EUR")].into();
    let lookup = |k: &str| env.get(k).map(|v| v.to_string());

    let (cfg, _) = Config::resolve_with(
        &args(&["expense-log", "--ledger", "/flag/ledger.csv"]),
        lookup,
        &dirs(tmp.path()),
    )
    .unwrap();
    assert_eq!(cfg.ledger_path, PathBuf::from("/flag/ledger.csv"));
    assert_eq!(cfg.currency, "EUR");
}

#[test]
fn test_resolve_blank_currency_falls_back() {
    let tmp = tempfile::tempdir().unwrap();
    let (cfg, _) = Config::resolve_with(
        &args(&["expense-log"]),
        |k| (k == CURRENCY_ENV).then(|| "  ".to_string()),
        &dirs(tmp.path()),
    )
    .unwrap();
    assert_eq!(cfg.currency, "THB");
}

#[test]
fn test_resolve_flag_without_value() {
    let tmp = tempfile::tempdir().unwrap();
    let err = Config::resolve_with(&args(&["expense-log", "--ledger"]), no_env, &dirs(tmp.path()))
        .unwrap_err();
    assert!(err.to_string().contains("--ledger"));
}

#[test]
fn test_resolve_picks_up_budget_file_in_config_dir() {
    let tmp = tempfile::tempdir().unwrap();
    let d = dirs(tmp.path());
    std::fs::create_dir_all(&d.config_dir).unwrap();
    std::fs::write(d.config_dir.join("budget.csv"), "category,amount\nfood,100\n").unwrap();

    let (cfg, _) = Config::resolve_with(&args(&["expense-log"]), no_env, &d).unwrap();
    assert_eq!(cfg.budget_path, Some(d.config_dir.join("budget.csv")));
    assert_eq!(cfg.load_budget().unwrap().total(), dec!(100));
}

#[test]
fn test_default_budget_when_no_file() {
    let tmp = tempfile::tempdir().unwrap();
    let (cfg, _) = Config::resolve_with(&args(&["expense-log"]), no_env, &dirs(tmp.path())).unwrap();
    assert_eq!(cfg.load_budget().unwrap(), BudgetTable::default());
}

#[test]
fn test_log_path_in_data_dir() {
    let tmp = tempfile::tempdir().unwrap();
    let (cfg, _) = Config::resolve_with(&args(&["expense-log"]), no_env, &dirs(tmp.path())).unwrap();
    assert!(cfg.log_path().starts_with(tmp.path().join("data")));
}

// ── read_budget ───────────────────────────────────────────────

#[test]
fn test_read_budget() {
    let csv = "type,amount\ntransportation_budget,2400\nfood_budget,\"2,500\"\n";
    let budget = read_budget(csv.as_bytes()).unwrap();
    assert_eq!(budget.lines().len(), 2);
    assert_eq!(budget.total(), dec!(4900));
    assert_eq!(budget.lines()[1].category, "food_budget");
    assert_eq!(budget.lines()[1].amount, dec!(2500));
}

#[test]
fn test_read_budget_skips_blank_category() {
    let csv = "category,amount\n,50\nrent,8000\n";
    let budget = read_budget(csv.as_bytes()).unwrap();
    assert_eq!(budget.lines().len(), 1);
}

#[test]
fn test_read_budget_bad_amount() {
    let csv = "category,amount\nrent,lots\n";
    let err = read_budget(csv.as_bytes()).unwrap_err();
    assert!(format!("{err:#}").contains("Row 2"));
}

#[test]
fn test_read_budget_empty() {
    assert!(read_budget("category,amount\n".as_bytes()).is_err());
}

#[test]
fn test_read_budget_file_missing() {
    let tmp = tempfile::tempdir().unwrap();
    assert!(read_budget_file(&tmp.path().join("missing.csv")).is_err());
}

#[test]
fn test_read_budget_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"category,amount\nfood,1200.50\n").unwrap();
    let budget = read_budget_file(file.path()).unwrap();
    assert_eq!(budget.total(), dec!(1200.50));
}

// ── shellexpand ───────────────────────────────────────────────

#[test]
fn test_shellexpand_passthrough() {
    assert_eq!(shellexpand("/abs/path.csv"), "/abs/path.csv");
    assert_eq!(shellexpand("rel.csv"), "rel.csv");
}
