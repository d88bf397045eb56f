#![allow(clippy::unwrap_used)]

use super::*;

fn headers(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_detect_sheet_export_headers() {
    let map = detect_columns(&headers(&["date", "type", "cost"])).unwrap();
    assert_eq!(map, ColumnMap::default());
}

#[test]
fn test_detect_is_case_insensitive_and_trims() {
    let map = detect_columns(&headers(&[" Cost ", "DATE", "Type"])).unwrap();
    assert_eq!(map.date, 1);
    assert_eq!(map.category, 2);
    assert_eq!(map.cost, 0);
}

#[test]
fn test_detect_alternate_names() {
    let map = detect_columns(&headers(&["Transaction Date", "Note", "Category", "Amount"])).unwrap();
    assert_eq!(map.date, 0);
    assert_eq!(map.category, 2);
    assert_eq!(map.cost, 3);
}

#[test]
fn test_detect_prefers_first_candidate() {
    // Both "type" and "category" present: "type" is the sheet's own name
    let map = detect_columns(&headers(&["date", "category", "type", "cost"])).unwrap();
    assert_eq!(map.category, 2);
}

#[test]
fn test_detect_ignores_extra_columns() {
    let map = detect_columns(&headers(&["id", "date", "type", "cost", "note"])).unwrap();
    assert_eq!(map.date, 1);
    assert_eq!(map.cost, 3);
}

#[test]
fn test_detect_missing_date() {
    let err = detect_columns(&headers(&["when", "type", "cost"])).unwrap_err();
    assert!(matches!(err, LoadError::MissingColumn("date")));
}

#[test]
fn test_detect_missing_cost() {
    let err = detect_columns(&headers(&["date", "type"])).unwrap_err();
    assert!(matches!(err, LoadError::MissingColumn("cost")));
}

#[test]
fn test_detect_empty_headers() {
    assert!(detect_columns(&[]).is_err());
}
