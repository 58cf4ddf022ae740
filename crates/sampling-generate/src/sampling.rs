//! Sampling event (fact table) generation.

use chrono::{Days, NaiveDate};
use tracing::debug;

use sampling_model::ids::{IdSequence, sampling_id};
use sampling_model::{
    Area, GenerateError, GenerationOptions, LookupRegistry, Promoter, Result, SamplingCategory,
    SamplingEvent, SamplingKind, SamplingType,
};

use crate::source::SampleSource;

/// Generates `options.num_samples` sampling events.
///
/// Areas, promoters and sampling types are drawn uniformly with replacement.
/// Start dates fall in `[reference_date - lookback_days, reference_date]` and
/// every campaign lasts `campaign_days`.
pub fn generate_sampling_events(
    source: &mut SampleSource,
    areas: &[Area],
    promoters: &[Promoter],
    types: &[SamplingType],
    lookups: &LookupRegistry,
    options: &GenerationOptions,
    reference_date: NaiveDate,
) -> Result<Vec<SamplingEvent>> {
    let earliest = reference_date
        .checked_sub_days(Days::new(u64::from(options.lookback_days)))
        .ok_or_else(|| {
            GenerateError::DateOutOfRange(format!(
                "{reference_date} - {} days",
                options.lookback_days
            ))
        })?;

    let mut ids = IdSequence::new("sampling", options.sampling_start_id);
    let mut events = Vec::with_capacity(options.num_samples as usize);
    for _ in 0..options.num_samples {
        let area = source.choose("areas", areas)?;
        let promoter = source.choose("promoters", promoters)?;
        let sampling_type = source.choose("sampling_types", types)?;
        let kind = draw_kind(source, sampling_type.category, lookups, options)?;
        let target = source.range("target", options.target_min, options.target_max)?;
        let start_date = source.date_between(earliest, reference_date)?;
        let end_date = start_date
            .checked_add_days(Days::new(u64::from(options.campaign_days)))
            .ok_or_else(|| {
                GenerateError::DateOutOfRange(format!(
                    "{start_date} + {} days",
                    options.campaign_days
                ))
            })?;
        let brand = source.choose("brands", &lookups.brands)?;

        let event = SamplingEvent {
            sampling_id: sampling_id(ids.next_id()?),
            area_id: area.area_id.clone(),
            promoter_id: promoter.promoter_id.clone(),
            sampling_type: sampling_type.code.clone(),
            kind,
            target,
            brand: brand.clone(),
            start_date,
            end_date,
        };
        debug!(
            sampling_id = %event.sampling_id,
            sampling_type = %event.sampling_type,
            target = event.target,
            "generated sampling event"
        );
        events.push(event);
    }
    Ok(events)
}

/// Draws the category payload: an institution type for institutional
/// sampling, a passenger count for traffic sampling, nothing otherwise.
fn draw_kind(
    source: &mut SampleSource,
    category: SamplingCategory,
    lookups: &LookupRegistry,
    options: &GenerationOptions,
) -> Result<SamplingKind> {
    let kind = match category {
        SamplingCategory::Institutional => SamplingKind::Institutional {
            institution_type: source
                .choose("institution_types", &lookups.institution_types)?
                .clone(),
        },
        SamplingCategory::Traffic => SamplingKind::Traffic {
            passengers: source.range("passengers", options.passengers_min, options.passengers_max)?,
        },
        other => SamplingKind::Standard(other),
    };
    Ok(kind)
}
