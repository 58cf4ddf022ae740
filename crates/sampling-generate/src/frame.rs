//! Table frames for export.
//!
//! A [`TableFrame`] wraps a Polars DataFrame with the sheet it belongs to and,
//! for the sampling type table, the column that serves as its row index.
//! Column names match the exported spreadsheet headers.

use std::fmt;

use chrono::NaiveDate;
use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, PolarsResult, Series};

use sampling_model::{Area, Promoter, Respondent, SamplingEvent, SamplingType};

/// Sheets of the exported workbook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SheetKind {
    Area,
    Promoter,
    SamplingFact,
    Respondents,
    SamplingType,
}

impl SheetKind {
    /// All sheets in export order.
    pub const ALL: [SheetKind; 5] = [
        SheetKind::Area,
        SheetKind::Promoter,
        SheetKind::SamplingFact,
        SheetKind::Respondents,
        SheetKind::SamplingType,
    ];

    pub fn sheet_name(self) -> &'static str {
        match self {
            SheetKind::Area => "Area",
            SheetKind::Promoter => "Promoter",
            SheetKind::SamplingFact => "SamplingFact",
            SheetKind::Respondents => "Respondents",
            SheetKind::SamplingType => "SamplingType",
        }
    }
}

impl fmt::Display for SheetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sheet_name())
    }
}

/// A generated table ready for export.
#[derive(Debug, Clone)]
pub struct TableFrame {
    pub sheet: SheetKind,
    pub data: DataFrame,
    /// Column exported as the unnamed leading index, if any.
    pub index_column: Option<String>,
}

impl TableFrame {
    pub fn new(sheet: SheetKind, data: DataFrame) -> Self {
        Self {
            sheet,
            data,
            index_column: None,
        }
    }

    pub fn with_index_column(mut self, name: impl Into<String>) -> Self {
        self.index_column = Some(name.into());
        self
    }

    /// Returns the number of records in the frame.
    pub fn record_count(&self) -> usize {
        self.data.height()
    }
}

/// Column holding the sampling type codes; exported as the row index.
pub const SAMPLING_TYPE_INDEX: &str = "code";

pub fn area_frame(areas: &[Area]) -> PolarsResult<TableFrame> {
    let data = DataFrame::new(vec![
        text_column("areaID", areas.iter().map(|a| a.area_id.as_str())),
        text_column("AreaName", areas.iter().map(|a| a.name.as_str())),
        text_column("region", areas.iter().map(|a| a.region.as_str())),
        text_column("district", areas.iter().map(|a| a.district.as_str())),
    ])?;
    Ok(TableFrame::new(SheetKind::Area, data))
}

pub fn promoter_frame(promoters: &[Promoter]) -> PolarsResult<TableFrame> {
    let data = DataFrame::new(vec![
        text_column("promoterID", promoters.iter().map(|p| p.promoter_id.as_str())),
        text_column("name", promoters.iter().map(|p| p.name.as_str())),
        text_column("contact", promoters.iter().map(|p| p.contact.as_str())),
    ])?;
    Ok(TableFrame::new(SheetKind::Promoter, data))
}

pub fn sampling_type_frame(types: &[SamplingType]) -> PolarsResult<TableFrame> {
    let data = DataFrame::new(vec![
        text_column(SAMPLING_TYPE_INDEX, types.iter().map(|t| t.code.as_str())),
        text_column("SamplingType", types.iter().map(SamplingType::label)),
    ])?;
    Ok(TableFrame::new(SheetKind::SamplingType, data).with_index_column(SAMPLING_TYPE_INDEX))
}

pub fn sampling_fact_frame(events: &[SamplingEvent]) -> PolarsResult<TableFrame> {
    let institution: Vec<Option<&str>> = events.iter().map(|e| e.kind.institution_type()).collect();
    let passengers: Vec<Option<i64>> = events
        .iter()
        .map(|e| e.kind.passengers().map(i64::from))
        .collect();
    let targets: Vec<i64> = events.iter().map(|e| i64::from(e.target)).collect();

    let data = DataFrame::new(vec![
        text_column("samplingID", events.iter().map(|e| e.sampling_id.as_str())),
        text_column("areaID", events.iter().map(|e| e.area_id.as_str())),
        text_column("promoterID", events.iter().map(|e| e.promoter_id.as_str())),
        text_column("samplingType", events.iter().map(|e| e.sampling_type.as_str())),
        Column::new("institutionType".into(), institution),
        Column::new("target".into(), targets),
        Column::new("passengers".into(), passengers),
        text_column("toothpasteBrand", events.iter().map(|e| e.brand.as_str())),
        date_column("startDate", events.iter().map(|e| e.start_date)),
        date_column("endDate", events.iter().map(|e| e.end_date)),
    ])?;
    Ok(TableFrame::new(SheetKind::SamplingFact, data))
}

pub fn respondent_frame(respondents: &[Respondent]) -> PolarsResult<TableFrame> {
    let data = DataFrame::new(vec![
        text_column("respondentID", respondents.iter().map(|r| r.respondent_id.as_str())),
        text_column("samplingID", respondents.iter().map(|r| r.sampling_id.as_str())),
        text_column("fullName", respondents.iter().map(|r| r.full_name.as_str())),
        text_column("ageRange", respondents.iter().map(|r| r.age_range.as_str())),
        text_column("contact", respondents.iter().map(|r| r.contact.as_str())),
        text_column("toothpasteBrand", respondents.iter().map(|r| r.current_brand.as_str())),
        text_column("preferredBrand", respondents.iter().map(|r| r.preferred_brand.as_str())),
        text_column("areaID", respondents.iter().map(|r| r.area_id.as_str())),
        text_column("residenceArea", respondents.iter().map(|r| r.residence_area.as_str())),
        text_column("reason", respondents.iter().map(|r| r.reason.as_str())),
        text_column("optInOtherProducts", respondents.iter().map(|r| r.opt_in.label())),
        date_column("dateOfSubmission", respondents.iter().map(|r| r.submitted_on)),
    ])?;
    Ok(TableFrame::new(SheetKind::Respondents, data))
}

fn text_column<'a>(name: &str, values: impl Iterator<Item = &'a str>) -> Column {
    let values: Vec<&str> = values.collect();
    Column::new(name.into(), values)
}

fn date_column(name: &str, values: impl Iterator<Item = NaiveDate>) -> Column {
    let values: Vec<NaiveDate> = values.collect();
    Series::new(name.into(), values).into_column()
}
