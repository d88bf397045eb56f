use anyhow::{Context, Result};
use rust_decimal::Decimal;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::models::{BudgetLine, BudgetTable};

pub(crate) const LEDGER_ENV: &str = "EXPENSE_LOG_LEDGER";
pub(crate) const BUDGET_ENV: &str = "EXPENSE_LOG_BUDGET";
pub(crate) const CURRENCY_ENV: &str = "EXPENSE_LOG_CURRENCY";

const DEFAULT_CURRENCY: &str = "THB";
const LEDGER_FILE: &str = "expense_log.csv";
const BUDGET_FILE: &str = "budget.csv";

/// Per-user directories the defaults are resolved against.
#[derive(Debug, Clone)]
pub(crate) struct Dirs {
    pub(crate) data_dir: PathBuf,
    pub(crate) config_dir: PathBuf,
}

impl Dirs {
    pub(crate) fn from_system() -> Result<Self> {
        let proj_dirs = directories::ProjectDirs::from("com", "expense-log", "ExpenseLog")
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
        Ok(Self {
            data_dir: proj_dirs.data_dir().to_path_buf(),
            config_dir: proj_dirs.config_dir().to_path_buf(),
        })
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Config {
    pub(crate) ledger_path: PathBuf,
    /// `None` means the built-in budget table.
    pub(crate) budget_path: Option<PathBuf>,
    pub(crate) currency: String,
    pub(crate) data_dir: PathBuf,
}

impl Config {
    /// Resolve settings from flags, then the environment, then defaults.
    /// Returns the config and the arguments left once global flags are removed.
    pub(crate) fn resolve(args: &[String]) -> Result<(Self, Vec<String>)> {
        let dirs = Dirs::from_system()?;
        Self::resolve_with(args, |key| std::env::var(key).ok(), &dirs)
    }

    pub(crate) fn resolve_with(
        args: &[String],
        env: impl Fn(&str) -> Option<String>,
        dirs: &Dirs,
    ) -> Result<(Self, Vec<String>)> {
        let mut rest = args.to_vec();
        let ledger_flag = take_flag(&mut rest, "--ledger")?;
        let budget_flag = take_flag(&mut rest, "--budget")?;
        let currency_flag = take_flag(&mut rest, "--currency")?;

        let ledger_path = ledger_flag
            .or_else(|| env(LEDGER_ENV))
            .map(|p| PathBuf::from(shellexpand(&p)))
            .unwrap_or_else(|| dirs.data_dir.join(LEDGER_FILE));

        let budget_path = match budget_flag.or_else(|| env(BUDGET_ENV)) {
            Some(p) => Some(PathBuf::from(shellexpand(&p))),
            None => {
                let default = dirs.config_dir.join(BUDGET_FILE);
                default.exists().then_some(default)
            }
        };

        let currency = currency_flag
            .or_else(|| env(CURRENCY_ENV))
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());

        Ok((
            Self {
                ledger_path,
                budget_path,
                currency,
                data_dir: dirs.data_dir.clone(),
            },
            rest,
        ))
    }

    pub(crate) fn load_budget(&self) -> Result<BudgetTable> {
        match &self.budget_path {
            Some(path) => read_budget_file(path),
            None => Ok(BudgetTable::default()),
        }
    }

    pub(crate) fn log_path(&self) -> PathBuf {
        self.data_dir.join("expense-log.log")
    }
}

/// Remove `--flag <value>` from `args`, returning the value.
fn take_flag(args: &mut Vec<String>, flag: &str) -> Result<Option<String>> {
    let Some(pos) = args.iter().position(|a| a == flag) else {
        return Ok(None);
    };
    if pos + 1 >= args.len() {
        anyhow::bail!("{flag} requires a value");
    }
    let value = args.remove(pos + 1);
    args.remove(pos);
    Ok(Some(value))
}

pub(crate) fn read_budget_file(path: &Path) -> Result<BudgetTable> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open budget file: {}", path.display()))?;
    read_budget(file).with_context(|| format!("Invalid budget file: {}", path.display()))
}

/// Parse a `category,amount` CSV (with header row) into a budget table.
pub(crate) fn read_budget<R: Read>(reader: R) -> Result<BudgetTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut lines = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let record = result.context("Failed to read budget record")?;
        let category = record.get(0).unwrap_or("");
        if category.is_empty() {
            continue;
        }
        let raw = record.get(1).unwrap_or("");
        let amount = Decimal::from_str(&raw.replace(',', ""))
            .with_context(|| format!("Row {}: failed to parse amount '{raw}'", i + 2))?;
        lines.push(BudgetLine {
            category: category.to_string(),
            amount,
        });
    }

    if lines.is_empty() {
        anyhow::bail!("Budget file has no entries");
    }
    Ok(BudgetTable::new(lines))
}

pub(crate) fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        format!("{home}/{rest}")
    } else {
        path.to_string()
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
