//! Generation run orchestration shared by the CLI commands.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use sampling_generate::{SamplingDataset, generate_dataset};
use sampling_model::{GenerationOptions, LookupRegistry};
use sampling_output::{SheetSummary, write_workbook};

use crate::logging::redact_value;
use crate::types::{BatchSummary, RunResult};

/// Everything needed for one generation run.
#[derive(Debug, Clone)]
pub struct RunRequest {
    pub options: GenerationOptions,
    pub output: PathBuf,
    /// Skip writing the workbook.
    pub dry_run: bool,
}

/// Load generation options from a JSON file, or defaults when no file is given.
pub fn load_options(path: Option<&Path>) -> Result<GenerationOptions> {
    let Some(path) = path else {
        return Ok(GenerationOptions::default());
    };
    let text =
        std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let options: GenerationOptions =
        serde_json::from_str(&text).with_context(|| format!("parse {}", path.display()))?;
    debug!(path = %path.display(), "loaded generation options");
    Ok(options)
}

/// Generate, check and export the dataset.
pub fn run_generation(lookups: &LookupRegistry, request: &RunRequest) -> Result<RunResult> {
    let span = info_span!("run", seed = request.options.seed);
    let _guard = span.enter();
    let start = Instant::now();

    let dataset = generate_dataset(lookups, &request.options).context("generate dataset")?;
    log_promoters(&dataset);
    dataset
        .check_integrity(&request.options)
        .context("check generated data")?;

    let (output, sheets) = if request.dry_run {
        info!("dry run, skipping workbook export");
        let sheets: Vec<SheetSummary> = dataset
            .row_counts()
            .into_iter()
            .map(|(sheet, rows)| SheetSummary { sheet, rows })
            .collect();
        (None, sheets)
    } else {
        info!("exporting data to Excel");
        let frames = dataset.frames().context("build export frames")?;
        let export = write_workbook(&request.output, &frames, dataset.reference_date)?;
        (Some(export.path), export.sheets)
    };

    info!(
        areas = dataset.areas.len(),
        promoters = dataset.promoters.len(),
        sampling_events = dataset.events.len(),
        respondents = dataset.respondents.len(),
        elapsed = ?start.elapsed(),
        "data generation complete"
    );

    Ok(RunResult {
        seed: request.options.seed,
        reference_date: dataset.reference_date,
        output,
        sheets,
        batches: batch_summaries(&dataset),
    })
}

fn batch_summaries(dataset: &SamplingDataset) -> Vec<BatchSummary> {
    let sizes = dataset.batch_sizes();
    dataset
        .events
        .iter()
        .map(|event| BatchSummary {
            sampling_id: event.sampling_id.clone(),
            sampling_type: event.kind.category().label().to_string(),
            target: event.target,
            respondents: sizes
                .get(event.sampling_id.as_str())
                .copied()
                .unwrap_or(0),
        })
        .collect()
}

fn log_promoters(dataset: &SamplingDataset) {
    for promoter in &dataset.promoters {
        debug!(
            promoter_id = %promoter.promoter_id,
            name = redact_value(&promoter.name),
            contact = redact_value(&promoter.contact),
            "promoter"
        );
    }
}
