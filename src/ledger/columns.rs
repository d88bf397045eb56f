use super::LoadError;

const DATE_HEADERS: &[&str] = &["date", "transaction date", "day"];
const CATEGORY_HEADERS: &[&str] = &["type", "category"];
const COST_HEADERS: &[&str] = &["cost", "amount", "price"];

/// Where the three ledger fields live in a sheet export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ColumnMap {
    pub(crate) date: usize,
    pub(crate) category: usize,
    pub(crate) cost: usize,
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            date: 0,
            category: 1,
            cost: 2,
        }
    }
}

/// Locate the date, category and cost columns by header name.
/// Matching is case-insensitive and ignores surrounding whitespace.
pub(crate) fn detect_columns(headers: &[String]) -> Result<ColumnMap, LoadError> {
    let h: Vec<String> = headers
        .iter()
        .map(|s| s.to_lowercase().trim().to_string())
        .collect();

    Ok(ColumnMap {
        date: col_index(&h, DATE_HEADERS).ok_or(LoadError::MissingColumn("date"))?,
        category: col_index(&h, CATEGORY_HEADERS).ok_or(LoadError::MissingColumn("category"))?,
        cost: col_index(&h, COST_HEADERS).ok_or(LoadError::MissingColumn("cost"))?,
    })
}

// First header matching any candidate, in candidate order.
fn col_index(headers: &[String], candidates: &[&str]) -> Option<usize> {
    candidates
        .iter()
        .find_map(|name| headers.iter().position(|h| h == name))
}

#[cfg(test)]
#[path = "columns_tests.rs"]
mod tests;
