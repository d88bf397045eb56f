use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use super::{detect_columns, Ledger, LedgerSource, LoadError};
use crate::models::ExpenseRecord;

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d", "%m-%d-%Y", "%m/%d/%y", "%d/%m/%Y",
];

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%m/%d/%Y %H:%M:%S"];

/// A ledger exported from the expense sheet as CSV.
#[derive(Debug, Clone)]
pub(crate) struct CsvLedgerSource {
    path: PathBuf,
}

impl CsvLedgerSource {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }
}

impl LedgerSource for CsvLedgerSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> Result<Ledger, LoadError> {
        let rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .has_headers(false)
            .from_path(&self.path)
            .map_err(|source| LoadError::Open {
                path: self.path.clone(),
                source,
            })?;
        read_records(rdr)
    }
}

/// Parse a ledger from any CSV reader. The first row must be the header.
pub(crate) fn read_ledger<R: Read>(reader: R) -> Result<Ledger, LoadError> {
    let rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(false)
        .from_reader(reader);
    read_records(rdr)
}

fn read_records<R: Read>(mut rdr: csv::Reader<R>) -> Result<Ledger, LoadError> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    for result in rdr.records() {
        let record = result?;
        rows.push(record.iter().map(|s| s.to_string()).collect());
    }

    if rows.is_empty() {
        return Err(LoadError::Empty);
    }

    let headers = rows.remove(0);
    let columns = detect_columns(&headers)?;

    let mut records = Vec::with_capacity(rows.len());
    for (i, row) in rows.iter().enumerate() {
        // Sheets pad exports with blank rows below the data
        if row.iter().all(|f| f.trim().is_empty()) {
            continue;
        }
        // Row numbers are 1-based and count the header, matching the sheet
        let row_no = i + 2;
        let field = |col: usize| row.get(col).map(|s| s.trim()).unwrap_or("");

        let date_str = field(columns.date);
        let date = parse_date(date_str).ok_or_else(|| LoadError::InvalidDate {
            row: row_no,
            value: date_str.to_string(),
        })?;

        let cost_str = field(columns.cost);
        let cost = parse_cost(cost_str).map_err(|_| LoadError::InvalidCost {
            row: row_no,
            value: cost_str.to_string(),
        })?;

        records.push(ExpenseRecord::new(date, field(columns.category), cost));
    }

    Ok(Ledger::new(records))
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    if s.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
                .map(|dt| dt.date())
        })
}

/// Empty cells and `nan` are a missing cost, not zero.
fn parse_cost(s: &str) -> Result<Option<Decimal>, rust_decimal::Error> {
    let cleaned = s
        .trim_start_matches(['$', '฿'])
        .replace(',', "")
        .trim()
        .to_string();
    if cleaned.is_empty() || cleaned.eq_ignore_ascii_case("nan") {
        return Ok(None);
    }
    Decimal::from_str(&cleaned)
        .or_else(|_| Decimal::from_scientific(&cleaned))
        .map(Some)
}

#[cfg(test)]
#[path = "csv_source_tests.rs"]
mod tests;
