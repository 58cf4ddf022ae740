use std::path::PathBuf;

use chrono::NaiveDate;
use sampling_generate::SheetKind;
use sampling_output::SheetSummary;

#[derive(Debug)]
pub struct RunResult {
    pub seed: u64,
    pub reference_date: NaiveDate,
    /// Workbook path; `None` for dry runs.
    pub output: Option<PathBuf>,
    /// Rows per sheet, as written; counted from the dataset on dry runs.
    pub sheets: Vec<SheetSummary>,
    pub batches: Vec<BatchSummary>,
}

impl RunResult {
    pub fn rows(&self, sheet: SheetKind) -> usize {
        self.sheets
            .iter()
            .find(|summary| summary.sheet == sheet)
            .map_or(0, |summary| summary.rows)
    }
}

/// Respondents generated for one sampling event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub sampling_id: String,
    pub sampling_type: String,
    pub target: u32,
    pub respondents: usize,
}
