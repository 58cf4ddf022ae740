//! Shared utilities for the market sampling crates.
//!
//! This crate converts Polars `AnyValue` cells for the spreadsheet export.

pub mod values;

pub use values::{CellValue, any_to_cell};
