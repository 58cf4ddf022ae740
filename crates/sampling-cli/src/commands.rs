use std::path::PathBuf;

use anyhow::Result;
use comfy_table::Table;

use sampling_cli::pipeline::{RunRequest, load_options, run_generation};
use sampling_cli::types::RunResult;
use sampling_model::{GenerationOptions, LookupRegistry};
use sampling_output::DEFAULT_OUTPUT_PATH;

use crate::cli::GenerateArgs;
use crate::summary::apply_table_style;

pub fn run_lookups() -> Result<()> {
    let lookups = LookupRegistry::standard();
    let mut table = Table::new();
    table.set_header(vec!["Lookup", "Values"]);
    apply_table_style(&mut table);

    let sampling_types: Vec<String> = lookups
        .sampling_types
        .iter()
        .enumerate()
        .map(|(position, category)| format!("ST{}: {category}", position + 1))
        .collect();
    table.add_row(vec!["Sampling types".to_string(), sampling_types.join("\n")]);
    table.add_row(vec![
        "Institution types".to_string(),
        lookups.institution_types.join(", "),
    ]);
    let regions: Vec<String> = lookups
        .regions
        .iter()
        .map(|region| format!("{}: {}", region.name, region.districts.join(", ")))
        .collect();
    table.add_row(vec!["Regions".to_string(), regions.join("\n")]);
    table.add_row(vec!["Age ranges".to_string(), lookups.age_ranges.join(", ")]);
    table.add_row(vec!["Brands".to_string(), lookups.brands.join(", ")]);
    table.add_row(vec!["Reasons".to_string(), lookups.reasons.join("\n")]);
    println!("{table}");
    Ok(())
}

pub fn run_generate(args: &GenerateArgs) -> Result<RunResult> {
    let options = options_from_args(args)?;
    let request = RunRequest {
        options,
        output: args
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH)),
        dry_run: args.dry_run,
    };
    run_generation(&LookupRegistry::standard(), &request)
}

/// Config file values first, then explicit flags on top.
fn options_from_args(args: &GenerateArgs) -> Result<GenerationOptions> {
    let mut options = load_options(args.config.as_deref())?;
    if let Some(seed) = args.seed {
        options.seed = seed;
    }
    if let Some(count) = args.promoters {
        options.num_promoters = count;
    }
    if let Some(count) = args.samples {
        options.num_samples = count;
    }
    if let Some(date) = args.reference_date {
        options.reference_date = Some(date);
    }
    Ok(options)
}
