//! Tests for the export frames.

use chrono::NaiveDate;
use polars::prelude::DataFrame;
use sampling_common::{CellValue, any_to_cell};
use sampling_generate::frame::SAMPLING_TYPE_INDEX;
use sampling_generate::{SheetKind, TableFrame, generate_dataset};
use sampling_model::{GenerationOptions, LookupRegistry};

fn frames() -> Vec<TableFrame> {
    let options = GenerationOptions::default()
        .with_reference_date(NaiveDate::from_ymd_opt(2026, 10, 18).unwrap());
    generate_dataset(&LookupRegistry::standard(), &options)
        .expect("generate")
        .frames()
        .expect("frames")
}

fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect()
}

fn cell_value(df: &DataFrame, column: &str, row: usize) -> CellValue {
    any_to_cell(df.column(column).expect("column").get(row).expect("row"))
}

fn cell(df: &DataFrame, column: &str, row: usize) -> String {
    match cell_value(df, column, row) {
        CellValue::Blank => String::new(),
        CellValue::Text(text) => text,
        other => panic!("{column}[{row}] is not text: {other:?}"),
    }
}

fn date_cell(df: &DataFrame, column: &str, row: usize) -> NaiveDate {
    match cell_value(df, column, row) {
        CellValue::Date(date) => date,
        other => panic!("{column}[{row}] is not a date: {other:?}"),
    }
}

#[test]
fn frames_are_in_sheet_order() {
    let sheets: Vec<SheetKind> = frames().iter().map(|f| f.sheet).collect();
    assert_eq!(sheets, SheetKind::ALL);
}

#[test]
fn only_sampling_type_has_index_column() {
    for frame in frames() {
        if frame.sheet == SheetKind::SamplingType {
            assert_eq!(frame.index_column.as_deref(), Some(SAMPLING_TYPE_INDEX));
        } else {
            assert!(frame.index_column.is_none(), "{} has an index", frame.sheet);
        }
    }
}

#[test]
fn area_frame_columns_and_values() {
    let frames = frames();
    let area = &frames[0].data;
    assert_eq!(column_names(area), ["areaID", "AreaName", "region", "district"]);
    assert_eq!(area.height(), 18);
    assert_eq!(cell(area, "areaID", 0), "A 1001");
    assert_eq!(cell(area, "AreaName", 2), "Ablekuma Area 1");
}

#[test]
fn sampling_fact_optional_columns_are_null_outside_their_category() {
    let frames = frames();
    let facts = &frames[2].data;
    assert_eq!(
        column_names(facts),
        [
            "samplingID",
            "areaID",
            "promoterID",
            "samplingType",
            "institutionType",
            "target",
            "passengers",
            "toothpasteBrand",
            "startDate",
            "endDate"
        ]
    );
    for row in 0..facts.height() {
        let code = cell(facts, "samplingType", row);
        let institution = cell(facts, "institutionType", row);
        let passengers = cell_value(facts, "passengers", row);
        assert_eq!(!institution.is_empty(), code == "ST5");
        assert_eq!(passengers != CellValue::Blank, code == "ST2");

        match cell_value(facts, "target", row) {
            CellValue::Number(target) => assert!((100.0..200.0).contains(&target)),
            other => panic!("target[{row}] is not a number: {other:?}"),
        }

        let start = date_cell(facts, "startDate", row);
        let end = date_cell(facts, "endDate", row);
        assert_eq!((end - start).num_days(), 30);
    }
}

#[test]
fn respondent_frame_columns() {
    let frames = frames();
    let respondents = &frames[3].data;
    assert_eq!(
        column_names(respondents),
        [
            "respondentID",
            "samplingID",
            "fullName",
            "ageRange",
            "contact",
            "toothpasteBrand",
            "preferredBrand",
            "areaID",
            "residenceArea",
            "reason",
            "optInOtherProducts",
            "dateOfSubmission"
        ]
    );
    assert_eq!(cell(respondents, "respondentID", 0), "R1000");
    let opt_in = cell(respondents, "optInOtherProducts", 0);
    assert!(opt_in == "Yes" || opt_in == "No");
    let submitted = date_cell(respondents, "dateOfSubmission", 0);
    assert!(submitted <= NaiveDate::from_ymd_opt(2026, 11, 17).unwrap());
}

#[test]
fn sampling_type_frame_values() {
    let frames = frames();
    let types = &frames[4].data;
    assert_eq!(column_names(types), [SAMPLING_TYPE_INDEX, "SamplingType"]);
    assert_eq!(cell(types, SAMPLING_TYPE_INDEX, 1), "ST2");
    assert_eq!(cell(types, "SamplingType", 1), "Traffic");
    assert_eq!(cell(types, "SamplingType", 3), "Third Space");
}
