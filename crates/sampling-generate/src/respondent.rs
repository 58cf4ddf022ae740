//! Respondent generation.

use tracing::{debug, trace};

use sampling_model::ids::{IdSequence, respondent_id};
use sampling_model::{
    Area, GenerateError, GenerationOptions, LookupRegistry, OptIn, Respondent, Result,
    SamplingEvent,
};

use crate::source::SampleSource;

/// Generates a batch of respondents for every sampling event.
///
/// Each event gets between `options.min_respondents` and its target
/// respondents, inclusive. Respondent ids run on across events starting at
/// `options.respondent_start_id`.
///
/// # Errors
///
/// Returns [`GenerateError::InvalidBatchRange`] when an event's target is
/// below `options.min_respondents`; the batch size is never clamped.
/// Returns [`GenerateError::IdOverflow`] when respondent ids would pass
/// `u32::MAX`.
pub fn generate_respondents(
    source: &mut SampleSource,
    events: &[SamplingEvent],
    areas: &[Area],
    lookups: &LookupRegistry,
    options: &GenerationOptions,
) -> Result<Vec<Respondent>> {
    let mut respondents = Vec::new();
    let mut ids = IdSequence::new("respondent", options.respondent_start_id);

    for event in events {
        if event.target < options.min_respondents {
            return Err(GenerateError::InvalidBatchRange {
                sampling_id: event.sampling_id.clone(),
                min: options.min_respondents,
                target: event.target,
            });
        }
        let batch = source.range_inclusive("respondents", options.min_respondents, event.target)?;
        debug!(sampling_id = %event.sampling_id, batch, "generating respondents");

        respondents.reserve(batch as usize);
        for _ in 0..batch {
            let respondent = Respondent {
                respondent_id: respondent_id(ids.next_id()?),
                sampling_id: event.sampling_id.clone(),
                full_name: source.full_name(),
                age_range: source.choose("age_ranges", &lookups.age_ranges)?.clone(),
                contact: source.phone_number(),
                current_brand: event.brand.clone(),
                preferred_brand: source.choose("brands", &lookups.brands)?.clone(),
                area_id: event.area_id.clone(),
                residence_area: source.choose("areas", areas)?.name.clone(),
                reason: source.choose("reasons", &lookups.reasons)?.clone(),
                opt_in: if source.coin() { OptIn::Yes } else { OptIn::No },
                submitted_on: source.date_between(event.start_date, event.end_date)?,
            };
            trace!(respondent_id = %respondent.respondent_id, "generated respondent");
            respondents.push(respondent);
        }
    }
    Ok(respondents)
}
