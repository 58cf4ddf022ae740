//! Polars AnyValue conversion.
//!
//! Frame cells are turned into the typed [`CellValue`] the spreadsheet writer
//! consumes.

use chrono::NaiveDate;
use polars::prelude::AnyValue;

/// Days between 0001-01-01 (CE day 1) and the Unix epoch.
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// A single spreadsheet cell, decoupled from Polars types.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Missing value; the cell is left empty.
    Blank,
    Number(f64),
    Text(String),
    Date(NaiveDate),
    Bool(bool),
}

/// Converts a Polars `AnyValue` to a [`CellValue`].
///
/// Integer and float types become numbers, `Date` becomes a calendar date and
/// anything else falls back to its string representation.
pub fn any_to_cell(value: AnyValue<'_>) -> CellValue {
    match value {
        AnyValue::Null => CellValue::Blank,
        AnyValue::Boolean(b) => CellValue::Bool(b),
        AnyValue::String(s) => CellValue::Text(s.to_string()),
        AnyValue::StringOwned(s) => CellValue::Text(s.to_string()),
        AnyValue::Date(days) => epoch_days_to_date(days).map_or(CellValue::Blank, CellValue::Date),
        other => match any_to_f64(&other) {
            Some(number) => CellValue::Number(number),
            None => CellValue::Text(other.to_string()),
        },
    }
}

fn epoch_days_to_date(days: i32) -> Option<NaiveDate> {
    NaiveDate::from_num_days_from_ce_opt(days.checked_add(UNIX_EPOCH_DAYS_FROM_CE)?)
}

fn any_to_f64(value: &AnyValue<'_>) -> Option<f64> {
    match *value {
        AnyValue::Int8(v) => Some(f64::from(v)),
        AnyValue::Int16(v) => Some(f64::from(v)),
        AnyValue::Int32(v) => Some(f64::from(v)),
        AnyValue::Int64(v) => Some(v as f64),
        AnyValue::UInt8(v) => Some(f64::from(v)),
        AnyValue::UInt16(v) => Some(f64::from(v)),
        AnyValue::UInt32(v) => Some(f64::from(v)),
        AnyValue::UInt64(v) => Some(v as f64),
        AnyValue::Float32(v) => Some(f64::from(v)),
        AnyValue::Float64(v) => Some(v),
        _ => None,
    }
}
