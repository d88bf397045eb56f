mod compare;
mod config;
mod ledger;
mod logging;
mod models;
mod run;
mod ui;

use anyhow::Result;

use crate::config::Config;
use crate::ledger::CsvLedgerSource;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let (config, args) = Config::resolve(&args)?;

    match args.len() {
        0 | 1 => logging::init_file(&config.log_path())?,
        _ => logging::init_stderr(),
    }

    let budget = config.load_budget()?;
    let source = CsvLedgerSource::new(&config.ledger_path);
    tracing::debug!(
        ledger = %source.path().display(),
        budget_total = %budget.total(),
        currency = %config.currency,
        "configuration resolved"
    );

    match args.len() {
        0 | 1 => run::as_tui(&source, budget, config.currency),
        _ => run::as_cli(&args, &source, &budget, &config.currency),
    }
}
