use anyhow::{Context, Result};
use rust_decimal::Decimal;

use crate::compare::{build_report, partition, BudgetStatus, MonthReport, Trend};
use crate::ledger::{Ledger, LedgerSource};
use crate::models::{BudgetTable, PeriodKey};
use crate::ui::util::{format_amount, format_delta, format_money};

pub(crate) fn as_cli(
    args: &[String],
    source: &dyn LedgerSource,
    budget: &BudgetTable,
    currency: &str,
) -> Result<()> {
    match args[1].as_str() {
        "report" | "r" => cli_report(&args[2..], source, budget, currency),
        "list" | "ls" => cli_list(&args[2..], source, currency),
        "periods" => cli_periods(source),
        "budget" => {
            cli_budget(budget, currency);
            Ok(())
        }
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("expense-log {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("Expense Log: monthly expense dashboard over a spreadsheet export");
    println!();
    println!("Usage: expense-log [options] [command]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch interactive dashboard");
    println!("  report [PERIOD]               Print the month report (default: latest month)");
    println!("  list [PERIOD]                 List the month's records");
    println!("  periods                       List the months present in the ledger");
    println!("  budget                        Show the budget table");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
    println!();
    println!("Options:");
    println!("  --ledger <file.csv>           Ledger export (env EXPENSE_LOG_LEDGER)");
    println!("  --budget <file.csv>           Budget table, category,amount (env EXPENSE_LOG_BUDGET)");
    println!("  --currency <label>            Currency label, default THB (env EXPENSE_LOG_CURRENCY)");
    println!();
    println!("PERIOD is YYYY-MM, YYYY/M or MM/YYYY.");
}

fn load(source: &dyn LedgerSource) -> Result<Ledger> {
    source
        .fetch()
        .with_context(|| format!("Failed to load data from {}", source.describe()))
}

/// The requested period, or the latest one in the ledger.
fn resolve_period(args: &[String], ledger: &Ledger) -> Result<Option<PeriodKey>> {
    let Some(arg) = args.first().filter(|a| !a.starts_with('-')) else {
        return Ok(ledger.latest_period());
    };
    let period = PeriodKey::parse(arg)
        .ok_or_else(|| anyhow::anyhow!("Invalid period '{arg}'. Use YYYY-MM (e.g. 2024-01)"))?;
    if !ledger.contains_period(period) {
        tracing::warn!(%period, "selected period has no records");
    }
    Ok(Some(period))
}

fn cli_report(
    args: &[String],
    source: &dyn LedgerSource,
    budget: &BudgetTable,
    currency: &str,
) -> Result<()> {
    let ledger = load(source)?;
    let Some(period) = resolve_period(args, &ledger)? else {
        println!("No records in {}", source.describe());
        return Ok(());
    };
    let report = build_report(&ledger, period, budget);
    print_report(&report, currency);
    Ok(())
}

fn print_report(report: &MonthReport, currency: &str) {
    println!("Expense Log — {}", report.period);
    println!("{}", "─".repeat(48));

    let comparison = report.outcome.comparison();
    println!(
        "  Total Expense:          {}",
        format_money(report.current.total_cost, currency)
    );
    println!(
        "  Number of Transactions: {}",
        report.current.transaction_count
    );
    println!(
        "  Budget:                 {}",
        format_money(report.budget_total, currency)
    );

    println!();
    match comparison {
        None => println!("  No data available for comparison."),
        Some(cmp) => {
            println!(
                "  vs {} ({}, {} transactions): {} / {}",
                report.previous_period,
                format_money(cmp.previous_total, currency),
                cmp.previous_count,
                format_delta(cmp.delta_cost),
                format_delta(Decimal::from(cmp.delta_count)),
            );
            match cmp.cost_trend() {
                Trend::Decreased(n) => {
                    println!("  Total Expense Decreased by {}", format_money(n, currency))
                }
                Trend::Increased(n) => {
                    println!("  Total Expense Increased by {}", format_money(n, currency))
                }
                Trend::Unchanged => println!("  Total Expense Remained the Same"),
            }
            match cmp.count_trend() {
                Trend::Decreased(n) => println!("  Number of Transactions Decreased by {n}"),
                Trend::Increased(n) => println!("  Number of Transactions Increased by {n}"),
                Trend::Unchanged => println!("  Number of Transactions Remained the Same"),
            }
        }
    }
    match report.budget_status {
        BudgetStatus::Exceeded(n) => {
            println!("  Budget Exceeded by {}", format_money(n, currency))
        }
        BudgetStatus::Saved(n) => println!("  You saved {}", format_money(n, currency)),
        BudgetStatus::Exact => println!("  Budget Spent as Planned"),
    }

    if report.is_empty_selection() {
        println!();
        println!("No records for {}", report.period);
        return;
    }

    let categories = report.categories_by_cost();
    if !categories.is_empty() {
        println!();
        println!("Expense Distribution by Type:");
        let total = report.current.total_cost;
        for (name, cost) in &categories {
            let share = if total.is_zero() {
                Decimal::ZERO
            } else {
                (*cost * Decimal::from(100) / total).round()
            };
            println!("  {name:<24} {:>12} {share:>4}%", format_amount(*cost));
        }
    }

    println!();
    println!("Expense Distribution by Month:");
    let previous: Decimal = report.previous.cost_by_month.values().sum();
    let current: Decimal = report.current.cost_by_month.values().sum();
    if report.outcome.comparison().is_some() {
        println!(
            "  Previous ({:<3})  {:>12}",
            report.previous_period.month_label(),
            format_amount(previous)
        );
    }
    println!(
        "  Current  ({:<3})  {:>12}",
        report.period.month_label(),
        format_amount(current)
    );
    if let Some(gap) = report.month_gap() {
        println!("  Difference       {:>12}", format_amount(gap));
    }

    println!();
    println!("Expense Frequency by Date:");
    for (date, count) in &report.daily_frequency {
        println!("  {}  {:>3} {}", date.format("%Y-%m-%d"), count, "▇".repeat(*count));
    }
}

fn cli_list(args: &[String], source: &dyn LedgerSource, currency: &str) -> Result<()> {
    let ledger = load(source)?;
    let Some(period) = resolve_period(args, &ledger)? else {
        println!("No records in {}", source.describe());
        return Ok(());
    };

    let mut records = partition(ledger.records(), period);
    if records.is_empty() {
        println!("No records for {period}");
        return Ok(());
    }
    records.sort_by_key(|r| r.date);

    println!("{:<12} {:<24} {:>12}", "Date", "Category", format!("Cost ({currency})"));
    println!("{}", "─".repeat(50));
    for rec in &records {
        let cost = rec.cost.map(format_amount).unwrap_or_else(|| "—".into());
        println!(
            "{:<12} {:<24} {:>12}",
            rec.date.format("%Y-%m-%d"),
            rec.category,
            cost
        );
    }
    let missing = records.iter().filter(|r| !r.has_cost()).count();
    println!("{}", "─".repeat(50));
    println!("{} records ({missing} without cost)", records.len());
    Ok(())
}

fn cli_periods(source: &dyn LedgerSource) -> Result<()> {
    let ledger = load(source)?;
    if ledger.is_empty() {
        println!("No records in {}", source.describe());
        return Ok(());
    }

    println!("{:<10} Records", "Period");
    println!("{}", "─".repeat(20));
    for period in ledger.periods() {
        let count = partition(ledger.records(), period).len();
        println!("{:<10} {count}", period.to_string());
    }
    Ok(())
}

fn cli_budget(budget: &BudgetTable, currency: &str) {
    println!("{:<24} {:>12}", "Category", format!("Amount ({currency})"));
    println!("{}", "─".repeat(37));
    for line in budget.lines() {
        println!("{:<24} {:>12}", line.category, format_amount(line.amount));
    }
    println!("{}", "─".repeat(37));
    println!("{:<24} {:>12}", "Total", format_amount(budget.total()));
}
