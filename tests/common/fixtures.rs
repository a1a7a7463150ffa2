//! Canned PLFS record sets for tests.
//!
//! Raw JSON rows in the remote wire shape, with the dataset's actual
//! field spellings (`AgeGroup`, `socialGroup`). Values are chosen so the
//! assembled aggregates are easy to assert against.

use super::mock_mospi::MockMospi;
use serde_json::{json, Value};

pub const YEAR: &str = "2023-24";

/// Minimal row with the value being the only interesting field. Pagination
/// tests use these to check page boundaries and ordering.
pub fn plain_record(value: &str) -> Value {
    raw_record("All India", "person", "rural + urban", "15 years and above", value)
}

pub fn raw_record(state: &str, gender: &str, sector: &str, age_group: &str, value: &str) -> Value {
    json!({
        "year": YEAR,
        "frequency": "annual",
        "state": state,
        "gender": gender,
        "sector": sector,
        "AgeGroup": age_group,
        "socialGroup": "all",
        "General_Education": "all",
        "quarter": "all",
        "value": value,
        "unit": "percent",
    })
}

fn year_record(year: &str, quarter: &str, value: &str) -> Value {
    let mut record = raw_record("All India", "person", "rural + urban", "15 years and above", value);
    record["year"] = json!(year);
    record["quarter"] = json!(quarter);
    record
}

fn nic_record(nic_group: &str, gender: &str, sector: &str, value: &str) -> Value {
    let mut record = raw_record("All India", gender, sector, "15 years and above", value);
    record["nic_group"] = json!(nic_group);
    record
}

/// Unemployment rate rows (indicator 3). All India rows first so the
/// national extraction's first-match lookups land on the person rows.
pub fn ur_records() -> Vec<Value> {
    vec![
        raw_record("All India", "person", "rural + urban", "15 years and above", "4.2"),
        raw_record("All India", "person", "urban", "15 years and above", "6.1"),
        raw_record("All India", "person", "rural", "15 years and above", "3.0"),
        raw_record("All India", "person", "rural + urban", "15-29 years", "9.5"),
        raw_record("All India", "male", "rural + urban", "15-29 years", "8.8"),
        raw_record("All India", "female", "rural + urban", "15-29 years", "11.2"),
        // State rows
        raw_record("Kerala", "person", "rural + urban", "15 years and above", "7.0"),
        raw_record("Kerala", "person", "urban", "15 years and above", "8.0"),
        raw_record("Kerala", "person", "rural", "15 years and above", "6.5"),
        raw_record("Maharashtra", "person", "rural + urban", "15 years and above", "3.9"),
        // Name the state mapping does not know; must be excluded
        raw_record("Bombay Presidency", "person", "rural + urban", "15 years and above", "5.0"),
        // Historical rows; the quarterly row must not shadow the whole-year one
        year_record("2022-23", "Q1", "9.9"),
        year_record("2022-23", "all", "5.1"),
    ]
}

/// Labour force participation rate rows (indicator 1).
pub fn lfpr_records() -> Vec<Value> {
    vec![
        raw_record("All India", "person", "rural + urban", "15 years and above", "59.8"),
        raw_record("All India", "male", "rural + urban", "15 years and above", "78.0"),
        raw_record("All India", "female", "rural + urban", "15 years and above", "40.0"),
        raw_record("All India", "person", "rural + urban", "15-29 years", "44.0"),
        raw_record("Kerala", "person", "rural + urban", "15 years and above", "57.0"),
        raw_record("Kerala", "male", "rural + urban", "15 years and above", "70.0"),
        raw_record("Kerala", "female", "rural + urban", "15 years and above", "45.0"),
        raw_record("Maharashtra", "person", "rural + urban", "15 years and above", "60.0"),
        {
            let mut r = raw_record("All India", "person", "rural + urban", "15 years and above", "58.5");
            r["year"] = json!("2022-23");
            r
        },
    ]
}

/// Worker population ratio rows (indicator 2).
pub fn wpr_records() -> Vec<Value> {
    vec![
        raw_record("All India", "person", "rural + urban", "15 years and above", "55.0"),
        raw_record("Kerala", "person", "rural + urban", "15 years and above", "52.0"),
        raw_record("Maharashtra", "person", "rural + urban", "15 years and above", "56.0"),
        {
            let mut r = raw_record("All India", "person", "rural + urban", "15 years and above", "54.0");
            r["year"] = json!("2022-23");
            r
        },
    ]
}

/// Worker distribution rows (indicator 4), per NIC industry grouping.
pub fn worker_distribution_records() -> Vec<Value> {
    vec![
        nic_record("01-03 (agriculture)", "person", "rural + urban", "45.8"),
        nic_record("01-03 (agriculture)", "male", "rural + urban", "42.0"),
        nic_record("01-03 (agriculture)", "female", "rural + urban", "60.0"),
        nic_record("01-03 (agriculture)", "person", "urban", "6.0"),
        nic_record("01-03 (agriculture)", "person", "rural", "58.0"),
        nic_record("10-33 (manufacturing)", "person", "rural + urban", "11.4"),
        nic_record("41-43 (construction)", "person", "rural + urban", "13.0"),
        // Zero share groups are dropped from the output
        nic_record("05-09 (mining & quarrying)", "person", "rural + urban", "0"),
    ]
}

/// Load the full canned dataset into a mock, one record set per indicator.
pub fn configure_dashboard_records(mock: &MockMospi) {
    mock.set_records("1", lfpr_records());
    mock.set_records("2", wpr_records());
    mock.set_records("3", ur_records());
    mock.set_records("4", worker_distribution_records());
}
