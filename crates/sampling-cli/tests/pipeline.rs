//! Integration tests for the run pipeline.

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use sampling_cli::logging::{LogConfig, LogFormat, build_env_filter};
use sampling_cli::pipeline::{RunRequest, load_options, run_generation};
use sampling_generate::SheetKind;
use sampling_model::{GenerationOptions, LookupRegistry};
use tempfile::tempdir;
use tracing::level_filters::LevelFilter;

fn options() -> GenerationOptions {
    GenerationOptions::default().with_reference_date(NaiveDate::from_ymd_opt(2026, 10, 18).unwrap())
}

#[test]
fn dry_run_writes_nothing() {
    let dir = tempdir().expect("tempdir");
    let output = dir.path().join("out.xlsx");
    let request = RunRequest {
        options: options(),
        output: output.clone(),
        dry_run: true,
    };

    let result = run_generation(&LookupRegistry::standard(), &request).expect("run");

    assert!(result.output.is_none());
    assert!(!output.exists());
    assert_eq!(result.rows(SheetKind::Area), 18);
    assert_eq!(result.rows(SheetKind::Promoter), 5);
    assert_eq!(result.rows(SheetKind::SamplingFact), 6);
    assert_eq!(result.rows(SheetKind::SamplingType), 5);
    assert_eq!(result.batches.len(), 6);
    let total: usize = result.batches.iter().map(|b| b.respondents).sum();
    assert_eq!(result.rows(SheetKind::Respondents), total);
    for batch in &result.batches {
        assert!(batch.respondents >= 100);
        assert!(batch.respondents <= batch.target as usize);
    }
}

#[test]
fn run_writes_workbook() {
    let dir = tempdir().expect("tempdir");
    let output = dir.path().join("data").join("market_sampling_dummy_data.xlsx");
    let request = RunRequest {
        options: options(),
        output: output.clone(),
        dry_run: false,
    };

    let result = run_generation(&LookupRegistry::standard(), &request).expect("run");

    assert_eq!(result.output, Some(output.clone()));
    assert!(fs::metadata(&output).expect("workbook exists").len() > 0);
    assert_eq!(result.seed, 42);
    assert_eq!(result.reference_date, NaiveDate::from_ymd_opt(2026, 10, 18).unwrap());

    let sheets: Vec<SheetKind> = result.sheets.iter().map(|s| s.sheet).collect();
    assert_eq!(sheets, SheetKind::ALL);
    let dry_run = run_generation(
        &LookupRegistry::standard(),
        &RunRequest {
            dry_run: true,
            ..request
        },
    )
    .expect("dry run");
    assert_eq!(result.sheets, dry_run.sheets);
}

#[test]
fn same_request_same_result() {
    let request = RunRequest {
        options: options().with_seed(7),
        output: PathBuf::from("unused.xlsx"),
        dry_run: true,
    };
    let lookups = LookupRegistry::standard();
    let a = run_generation(&lookups, &request).expect("first");
    let b = run_generation(&lookups, &request).expect("second");
    assert_eq!(a.sheets, b.sheets);
    assert_eq!(a.batches, b.batches);
}

#[test]
fn invalid_lookups_fail_the_run() {
    let mut lookups = LookupRegistry::standard();
    lookups.reasons.clear();
    let request = RunRequest {
        options: options(),
        output: PathBuf::from("unused.xlsx"),
        dry_run: true,
    };
    let err = run_generation(&lookups, &request).unwrap_err();
    assert!(format!("{err:#}").contains("reasons"));
}

#[test]
fn load_options_without_file_is_default() {
    assert_eq!(load_options(None).expect("options"), GenerationOptions::default());
}

#[test]
fn load_options_from_json_file() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("options.json");
    fs::write(&path, r#"{ "seed": 99, "num_promoters": 3 }"#).expect("write options");

    let options = load_options(Some(&path)).expect("options");

    assert_eq!(options.seed, 99);
    assert_eq!(options.num_promoters, 3);
    assert_eq!(options.num_samples, 6);
}

#[test]
fn load_options_reports_bad_json() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("options.json");
    fs::write(&path, "{ seed: ").expect("write options");

    let err = load_options(Some(&path)).unwrap_err();
    assert!(err.to_string().starts_with("parse "));
}

#[test]
fn overflowing_start_id_in_config_fails_the_run() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("options.json");
    fs::write(
        &path,
        r#"{ "respondent_start_id": 4294967295, "reference_date": "2026-10-18" }"#,
    )
    .expect("write options");
    let request = RunRequest {
        options: load_options(Some(&path)).expect("options"),
        output: dir.path().join("out.xlsx"),
        dry_run: false,
    };

    let err = run_generation(&LookupRegistry::standard(), &request).unwrap_err();

    assert!(format!("{err:#}").contains("respondent identifiers starting at 4294967295"));
    assert!(!request.output.exists());
}

#[test]
fn log_config_builders() {
    let config = LogConfig::default()
        .with_level_filter(LevelFilter::DEBUG)
        .with_format(LogFormat::Json)
        .with_log_file(Some(PathBuf::from("run.log")))
        .with_log_data(true);
    assert_eq!(config.level_filter, LevelFilter::DEBUG);
    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.log_file, Some(PathBuf::from("run.log")));
    assert!(config.log_data);
}

#[test]
fn explicit_filter_ignores_environment() {
    let filter = build_env_filter(LevelFilter::WARN, false).to_string();
    assert!(filter.contains("sampling_generate=warn"));
    assert!(filter.contains("sampling_output=warn"));
}

#[test]
fn sheet_names_in_export_order() {
    let names: Vec<&str> = SheetKind::ALL.iter().map(|sheet| sheet.sheet_name()).collect();
    insta::assert_snapshot!(names.join(","), @"Area,Promoter,SamplingFact,Respondents,SamplingType");
}
