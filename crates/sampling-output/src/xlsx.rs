//! XLSX workbook output.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use polars::prelude::{AnyValue, Column};
use rust_xlsxwriter::{
    ColNum, DocProperties, ExcelDateTime, Format, RowNum, Workbook, Worksheet,
};
use tracing::{debug, info};

use sampling_common::{CellValue, any_to_cell};
use sampling_generate::{SheetKind, TableFrame};

/// Output location used when none is configured.
pub const DEFAULT_OUTPUT_PATH: &str = "data/market_sampling_dummy_data.xlsx";

const DATE_FORMAT: &str = "yyyy-mm-dd";

/// Rows written to one sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetSummary {
    pub sheet: SheetKind,
    pub rows: usize,
}

/// Result of a workbook export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub sheets: Vec<SheetSummary>,
}

impl ExportSummary {
    pub fn total_rows(&self) -> usize {
        self.sheets.iter().map(|summary| summary.rows).sum()
    }
}

/// Write all frames to one workbook, one sheet per frame, in the given order.
///
/// Frames with an index column get that column first under a blank header.
/// The workbook is built in memory and written to `path` in one step; parent
/// directories are created as needed. `created_on` is stored as the document
/// creation date, so identical frames produce identical files.
pub fn write_workbook(
    path: &Path,
    frames: &[TableFrame],
    created_on: NaiveDate,
) -> Result<ExportSummary> {
    let mut workbook = Workbook::new();
    let properties = DocProperties::new().set_creation_datetime(&excel_date(created_on)?);
    workbook.set_properties(&properties);
    let header_format = Format::new().set_bold();
    let date_format = Format::new().set_num_format(DATE_FORMAT);

    let mut sheets = Vec::with_capacity(frames.len());
    for frame in frames {
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(frame.sheet.sheet_name())
            .with_context(|| format!("name sheet {}", frame.sheet))?;
        write_frame(worksheet, frame, &header_format, &date_format)
            .with_context(|| format!("write sheet {}", frame.sheet))?;
        debug!(sheet = %frame.sheet, rows = frame.record_count(), "sheet written");
        sheets.push(SheetSummary {
            sheet: frame.sheet,
            rows: frame.record_count(),
        });
    }

    let buffer = workbook
        .save_to_buffer()
        .context("serialize workbook")?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create {}", parent.display()))?;
    }
    std::fs::write(path, buffer).with_context(|| format!("write {}", path.display()))?;
    let summary = ExportSummary {
        path: path.to_path_buf(),
        sheets,
    };
    info!(
        path = %path.display(),
        sheets = summary.sheets.len(),
        rows = summary.total_rows(),
        "workbook saved"
    );
    Ok(summary)
}

/// Columns in export order; the index column (if any) leads with no header.
fn ordered_columns(frame: &TableFrame) -> Result<Vec<(&Column, bool)>> {
    let mut columns = Vec::with_capacity(frame.data.width());
    if let Some(index) = frame.index_column.as_deref() {
        let column = frame
            .data
            .column(index)
            .with_context(|| format!("missing index column {index}"))?;
        columns.push((column, true));
    }
    for column in frame.data.get_columns() {
        if frame.index_column.as_deref() == Some(column.name().as_str()) {
            continue;
        }
        columns.push((column, false));
    }
    Ok(columns)
}

fn write_frame(
    worksheet: &mut Worksheet,
    frame: &TableFrame,
    header_format: &Format,
    date_format: &Format,
) -> Result<()> {
    let columns = ordered_columns(frame)?;
    for (col_idx, (column, is_index)) in columns.iter().enumerate() {
        let col = ColNum::try_from(col_idx).context("too many columns")?;
        let header = if *is_index { "" } else { column.name().as_str() };
        worksheet.write_string_with_format(0, col, header, header_format)?;

        for row_idx in 0..frame.data.height() {
            let row = RowNum::try_from(row_idx + 1).context("too many rows")?;
            let value = column.get(row_idx).unwrap_or(AnyValue::Null);
            write_cell(worksheet, row, col, any_to_cell(value), date_format)?;
        }
    }
    worksheet.autofit();
    Ok(())
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: RowNum,
    col: ColNum,
    value: CellValue,
    date_format: &Format,
) -> Result<()> {
    match value {
        CellValue::Blank => {}
        CellValue::Number(number) => {
            worksheet.write_number(row, col, number)?;
        }
        CellValue::Text(text) => {
            worksheet.write_string(row, col, text)?;
        }
        CellValue::Bool(flag) => {
            worksheet.write_boolean(row, col, flag)?;
        }
        CellValue::Date(date) => {
            worksheet.write_datetime_with_format(row, col, &excel_date(date)?, date_format)?;
        }
    }
    Ok(())
}

fn excel_date(date: NaiveDate) -> Result<ExcelDateTime> {
    let year = u16::try_from(date.year()).context("year out of range")?;
    let month = u8::try_from(date.month()).context("month out of range")?;
    let day = u8::try_from(date.day()).context("day out of range")?;
    Ok(ExcelDateTime::from_ymd(year, month, day)?)
}
