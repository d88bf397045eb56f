use crate::compare::{build_report, partition, MonthReport};
use crate::ledger::{Ledger, LedgerSource};
use crate::models::{BudgetTable, ExpenseRecord, PeriodKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Records,
    Report,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[Self::Records, Self::Report]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Records => write!(f, "Records"),
            Self::Report => write!(f, "Report"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
        }
    }
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,

    // Session inputs
    pub(crate) currency: String,
    pub(crate) budget: BudgetTable,
    pub(crate) source_label: String,
    pub(crate) ledger: Ledger,
    pub(crate) load_error: Option<String>,

    // Selector
    pub(crate) years: Vec<i32>,
    pub(crate) year_index: usize,
    pub(crate) months: Vec<u32>,
    pub(crate) month_index: usize,

    // Records for the selected month
    pub(crate) records: Vec<ExpenseRecord>,
    pub(crate) record_index: usize,
    pub(crate) record_scroll: usize,

    // Report
    pub(crate) report: Option<MonthReport>,
    pub(crate) report_requested: bool,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new(budget: BudgetTable, currency: String) -> Self {
        Self {
            running: true,
            screen: Screen::Records,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            status_message: String::new(),
            show_help: false,

            currency,
            budget,
            source_label: String::new(),
            ledger: Ledger::default(),
            load_error: None,

            years: Vec::new(),
            year_index: 0,
            months: Vec::new(),
            month_index: 0,

            records: Vec::new(),
            record_index: 0,
            record_scroll: 0,

            report: None,
            report_requested: false,

            visible_rows: 20,
        }
    }

    /// Fetch the ledger again. A load failure is shown, not propagated:
    /// the dashboard stays up with nothing selected so the user can retry.
    pub(crate) fn reload(&mut self, source: &dyn LedgerSource) {
        self.source_label = source.describe();
        match source.fetch() {
            Ok(ledger) => {
                tracing::info!(source = %self.source_label, records = ledger.len(), "ledger loaded");
                let keep = self.selected_period();
                self.ledger = ledger;
                self.load_error = None;
                self.years = self.ledger.years();

                let target = keep
                    .filter(|p| self.ledger.contains_period(*p))
                    .or_else(|| self.ledger.latest_period());
                match target {
                    Some(period) => {
                        self.select_period(period);
                    }
                    None => {
                        self.months.clear();
                        self.refresh();
                    }
                }
                self.set_status(format!(
                    "Loaded {} records from {}",
                    self.ledger.len(),
                    self.source_label
                ));
            }
            Err(e) => {
                tracing::error!(source = %self.source_label, error = %e, "failed to load ledger");
                self.ledger = Ledger::default();
                self.years.clear();
                self.months.clear();
                self.load_error = Some(e.to_string());
                self.refresh();
                self.set_status(format!("Failed to load data: {e}"));
            }
        }
    }

    pub(crate) fn selected_year(&self) -> Option<i32> {
        self.years.get(self.year_index).copied()
    }

    pub(crate) fn selected_period(&self) -> Option<PeriodKey> {
        let year = self.selected_year()?;
        let month = self.months.get(self.month_index).copied()?;
        Some(PeriodKey::new(year, month))
    }

    /// Jump straight to a period. Only periods present in the ledger can be
    /// selected; returns false otherwise.
    pub(crate) fn select_period(&mut self, period: PeriodKey) -> bool {
        let Some(year_index) = self.years.iter().position(|y| *y == period.year) else {
            return false;
        };
        let months = self.ledger.months_in(period.year);
        let Some(month_index) = months.iter().position(|m| *m == period.month) else {
            return false;
        };
        self.year_index = year_index;
        self.months = months;
        self.month_index = month_index;
        self.refresh();
        true
    }

    /// Step through years, keeping the month when the new year has it.
    pub(crate) fn shift_year(&mut self, delta: isize) {
        if self.years.is_empty() {
            return;
        }
        let Some(year_index) = self.year_index.checked_add_signed(delta) else {
            return;
        };
        let Some(&year) = self.years.get(year_index) else {
            return;
        };
        let current_month = self.months.get(self.month_index).copied();
        self.year_index = year_index;
        self.months = self.ledger.months_in(year);
        self.month_index = current_month
            .and_then(|m| self.months.iter().position(|x| *x == m))
            .unwrap_or(self.months.len().saturating_sub(1));
        self.refresh();
    }

    /// Step through the months offered for the selected year.
    pub(crate) fn shift_month(&mut self, delta: isize) {
        let Some(month_index) = self.month_index.checked_add_signed(delta) else {
            return;
        };
        if month_index < self.months.len() {
            self.month_index = month_index;
            self.refresh();
        }
    }

    /// Recompute the selection's records and report. Cheap enough to run on
    /// every key press.
    pub(crate) fn refresh(&mut self) {
        let Some(period) = self.selected_period() else {
            self.records.clear();
            self.report = None;
            self.record_index = 0;
            self.record_scroll = 0;
            return;
        };
        tracing::debug!(%period, "selection changed");

        self.records = partition(self.ledger.records(), period)
            .into_iter()
            .cloned()
            .collect();
        self.records.sort_by_key(|r| r.date);
        self.report = Some(build_report(&self.ledger, period, &self.budget));

        if self.record_index >= self.records.len() {
            self.record_index = self.records.len().saturating_sub(1);
        }
        if self.record_scroll > self.record_index {
            self.record_scroll = self.record_index;
        }
    }

    /// The "Generate Report" action: switch to the report and keep it shown
    /// for later selections.
    pub(crate) fn generate_report(&mut self) {
        self.report_requested = true;
        self.screen = Screen::Report;
        if let Some(period) = self.selected_period() {
            self.set_status(format!("Report for {period}"));
        }
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
