//! Export of generated tables.
//!
//! Writes every [`TableFrame`](sampling_generate::TableFrame) as a named sheet
//! of a single `.xlsx` workbook.

mod xlsx;

pub use xlsx::{DEFAULT_OUTPUT_PATH, ExportSummary, SheetSummary, write_workbook};
