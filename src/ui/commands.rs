use std::collections::HashMap;
use std::sync::LazyLock;

use super::app::{App, Screen};
use crate::ledger::LedgerSource;
use crate::models::PeriodKey;

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App, &dyn LedgerSource) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit Expense Log", cmd_quit, r);
    register_command!("quit", "Quit Expense Log", cmd_quit, r);
    register_command!("l", "Show the month's records", cmd_records, r);
    register_command!("records", "Show the month's records", cmd_records, r);
    register_command!("g", "Generate the month report", cmd_report, r);
    register_command!("report", "Generate the month report", cmd_report, r);
    register_command!(
        "month",
        "Select month (e.g. :month 3 or :month 2024-03)",
        cmd_month,
        r
    );
    register_command!("m", "Select month (e.g. :m 3)", cmd_month, r);
    register_command!("year", "Select year (e.g. :year 2024)", cmd_year, r);
    register_command!("y", "Select year (e.g. :y 2024)", cmd_year, r);
    register_command!("reload", "Fetch the ledger again", cmd_reload, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);

    r
});

pub(crate) fn handle_command(
    input: &str,
    app: &mut App,
    source: &dyn LedgerSource,
) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app, source)?;
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| (levenshtein(input, k), **k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App, _source: &dyn LedgerSource) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_records(_args: &str, app: &mut App, _source: &dyn LedgerSource) -> anyhow::Result<()> {
    app.screen = Screen::Records;
    Ok(())
}

fn cmd_report(_args: &str, app: &mut App, _source: &dyn LedgerSource) -> anyhow::Result<()> {
    if app.selected_period().is_none() {
        app.set_status("Please select month and year first");
        return Ok(());
    }
    app.generate_report();
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App, _source: &dyn LedgerSource) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

fn cmd_reload(_args: &str, app: &mut App, source: &dyn LedgerSource) -> anyhow::Result<()> {
    app.reload(source);
    Ok(())
}

fn cmd_month(args: &str, app: &mut App, _source: &dyn LedgerSource) -> anyhow::Result<()> {
    if args.is_empty() {
        let offered: Vec<String> = app.months.iter().map(|m| m.to_string()).collect();
        app.set_status(format!("Usage: :month <1-12|YYYY-MM>. Months: {}", offered.join(", ")));
        return Ok(());
    }

    // A bare number is a month within the selected year
    let period = match (args.parse::<u32>(), app.selected_year()) {
        (Ok(month), Some(year)) => Some(PeriodKey::new(year, month)),
        (Ok(_), None) => None,
        (Err(_), _) => PeriodKey::parse(args),
    };

    match period {
        Some(p) if app.select_period(p) => app.set_status(format!("Switched to {p}")),
        Some(p) => app.set_status(format!("No records for {p}")),
        None => app.set_status("Invalid month. Use 1-12 or YYYY-MM (e.g. 2024-01)"),
    }
    Ok(())
}

fn cmd_year(args: &str, app: &mut App, _source: &dyn LedgerSource) -> anyhow::Result<()> {
    let Ok(year) = args.parse::<i32>() else {
        let offered: Vec<String> = app.years.iter().map(|y| y.to_string()).collect();
        app.set_status(format!("Usage: :year <YYYY>. Years: {}", offered.join(", ")));
        return Ok(());
    };

    let Some(year_index) = app.years.iter().position(|y| *y == year) else {
        app.set_status(format!("No records for {year}"));
        return Ok(());
    };
    let delta = year_index as isize - app.year_index as isize;
    app.shift_year(delta);
    if let Some(p) = app.selected_period() {
        app.set_status(format!("Switched to {p}"));
    }
    Ok(())
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
