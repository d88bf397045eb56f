use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

// `YYYY-MM` or `MM/YYYY`, with `-`, `/` or `.` between the parts.
static PERIOD_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^(?:([0-9]{4})[-/.]([0-9]{1,2})|([0-9]{1,2})[-/.]([0-9]{4}))$").ok()
});

/// A calendar month bucket. Ordered by year, then month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct PeriodKey {
    pub(crate) year: i32,
    pub(crate) month: u32,
}

impl PeriodKey {
    pub(crate) fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// The month before this one in the same year.
    ///
    /// There is no rollover: January yields month 0, which no record can
    /// carry, so the previous-month subset for January is always empty.
    pub(crate) fn preceding(&self) -> Self {
        Self {
            year: self.year,
            month: self.month.saturating_sub(1),
        }
    }

    pub(crate) fn is_valid(&self) -> bool {
        (1..=12).contains(&self.month)
    }

    /// Parse `YYYY-MM`, `YYYY/M` or `MM/YYYY`.
    pub(crate) fn parse(s: &str) -> Option<Self> {
        let caps = PERIOD_PATTERN.as_ref()?.captures(s.trim())?;
        let (year, month) = match (caps.get(1), caps.get(2)) {
            (Some(y), Some(m)) => (y.as_str(), m.as_str()),
            _ => (caps.get(4)?.as_str(), caps.get(3)?.as_str()),
        };
        let (year, month) = (year.parse().ok()?, month.parse().ok()?);
        let key = Self::new(year, month);
        key.is_valid().then_some(key)
    }

    /// Three-letter month name, or the bare number for month 0.
    pub(crate) fn month_label(&self) -> String {
        NaiveDate::from_ymd_opt(2000, self.month, 1)
            .map(|d| d.format("%b").to_string())
            .unwrap_or_else(|| self.month.to_string())
    }
}

impl std::fmt::Display for PeriodKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
