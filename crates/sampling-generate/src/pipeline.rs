//! End-to-end dataset generation.
//!
//! [`generate_dataset`] seeds one [`SampleSource`] and runs the generators in
//! a fixed order:
//!
//! 1. areas (no randomness)
//! 2. promoters
//! 3. sampling type table (no randomness)
//! 4. sampling events
//! 5. respondents
//!
//! Keeping this order is what makes a seed reproduce the same tables.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Local, NaiveDate};
use polars::prelude::PolarsResult;
use tracing::{debug, info, info_span};

use sampling_model::{
    Area, GenerateError, GenerationOptions, LookupRegistry, Promoter, Respondent, Result,
    SamplingEvent, SamplingType,
};

use crate::area::generate_areas;
use crate::frame::{
    SheetKind, TableFrame, area_frame, promoter_frame, respondent_frame, sampling_fact_frame,
    sampling_type_frame,
};
use crate::promoter::generate_promoters;
use crate::respondent::generate_respondents;
use crate::sampling::generate_sampling_events;
use crate::sampling_type::sampling_type_table;
use crate::source::SampleSource;

/// All generated tables of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SamplingDataset {
    pub areas: Vec<Area>,
    pub promoters: Vec<Promoter>,
    pub sampling_types: Vec<SamplingType>,
    pub events: Vec<SamplingEvent>,
    pub respondents: Vec<Respondent>,
    /// Latest possible event start date used for this run.
    pub reference_date: NaiveDate,
}

/// Generates every table from the lookup registry and options.
///
/// # Errors
///
/// Fails on invalid options, empty lookups that must be sampled from, or an
/// event whose respondent batch range is empty.
pub fn generate_dataset(
    lookups: &LookupRegistry,
    options: &GenerationOptions,
) -> Result<SamplingDataset> {
    let span = info_span!("generate", seed = options.seed);
    let _guard = span.enter();

    options.validate()?;
    let reference_date = options
        .reference_date
        .unwrap_or_else(|| Local::now().date_naive());
    let mut source = SampleSource::seeded(options.seed);

    info!("generating area data");
    let areas = generate_areas(&lookups.regions, options.area_start_id)?;
    debug!(count = areas.len(), "areas generated");

    info!("generating promoter data");
    let promoters = generate_promoters(
        &mut source,
        options.num_promoters,
        options.promoter_start_id,
    )?;
    debug!(count = promoters.len(), "promoters generated");

    info!("generating sampling type data");
    let sampling_types = sampling_type_table(&lookups.sampling_types);
    debug!(count = sampling_types.len(), "sampling types generated");

    info!("generating sampling fact data");
    let events = generate_sampling_events(
        &mut source,
        &areas,
        &promoters,
        &sampling_types,
        lookups,
        options,
        reference_date,
    )?;
    debug!(count = events.len(), %reference_date, "sampling events generated");

    info!("generating respondent data");
    let respondents = generate_respondents(&mut source, &events, &areas, lookups, options)?;
    debug!(count = respondents.len(), "respondents generated");

    Ok(SamplingDataset {
        areas,
        promoters,
        sampling_types,
        events,
        respondents,
        reference_date,
    })
}

impl SamplingDataset {
    /// Builds the export frames in sheet order.
    pub fn frames(&self) -> PolarsResult<Vec<TableFrame>> {
        Ok(vec![
            area_frame(&self.areas)?,
            promoter_frame(&self.promoters)?,
            sampling_fact_frame(&self.events)?,
            respondent_frame(&self.respondents)?,
            sampling_type_frame(&self.sampling_types)?,
        ])
    }

    /// Row counts per sheet, in sheet order.
    pub fn row_counts(&self) -> Vec<(SheetKind, usize)> {
        SheetKind::ALL
            .iter()
            .map(|sheet| {
                let count = match sheet {
                    SheetKind::Area => self.areas.len(),
                    SheetKind::Promoter => self.promoters.len(),
                    SheetKind::SamplingFact => self.events.len(),
                    SheetKind::Respondents => self.respondents.len(),
                    SheetKind::SamplingType => self.sampling_types.len(),
                };
                (*sheet, count)
            })
            .collect()
    }

    /// Respondent count per sampling id.
    pub fn batch_sizes(&self) -> BTreeMap<&str, usize> {
        let mut sizes = BTreeMap::new();
        for respondent in &self.respondents {
            *sizes.entry(respondent.sampling_id.as_str()).or_insert(0) += 1;
        }
        sizes
    }

    /// Verifies identifiers, foreign keys and value ranges across all tables.
    ///
    /// Returns the first violation found.
    pub fn check_integrity(&self, options: &GenerationOptions) -> Result<()> {
        let area_ids = unique_ids("areaID", self.areas.iter().map(|a| a.area_id.as_str()))?;
        let promoter_ids = unique_ids(
            "promoterID",
            self.promoters.iter().map(|p| p.promoter_id.as_str()),
        )?;
        let type_categories: BTreeMap<&str, _> = self
            .sampling_types
            .iter()
            .map(|t| (t.code.as_str(), t.category))
            .collect();
        let area_names: BTreeSet<&str> = self.areas.iter().map(|a| a.name.as_str()).collect();
        let sampling_ids = unique_ids(
            "samplingID",
            self.events.iter().map(|e| e.sampling_id.as_str()),
        )?;
        unique_ids(
            "respondentID",
            self.respondents.iter().map(|r| r.respondent_id.as_str()),
        )?;

        for event in &self.events {
            let id = &event.sampling_id;
            if !area_ids.contains(event.area_id.as_str()) {
                return Err(violation(format!("{id}: unknown area {}", event.area_id)));
            }
            if !promoter_ids.contains(event.promoter_id.as_str()) {
                return Err(violation(format!(
                    "{id}: unknown promoter {}",
                    event.promoter_id
                )));
            }
            match type_categories.get(event.sampling_type.as_str()) {
                None => {
                    return Err(violation(format!(
                        "{id}: unknown sampling type {}",
                        event.sampling_type
                    )));
                }
                Some(category) if *category != event.kind.category() => {
                    return Err(violation(format!(
                        "{id}: sampling type {} does not match {:?}",
                        event.sampling_type, event.kind
                    )));
                }
                Some(_) => {}
            }
            if !(options.target_min..options.target_max).contains(&event.target) {
                return Err(violation(format!("{id}: target {} out of range", event.target)));
            }
            let days = (event.end_date - event.start_date).num_days();
            if days != i64::from(options.campaign_days) {
                return Err(violation(format!("{id}: campaign lasts {days} days")));
            }
        }

        let events_by_id: BTreeMap<&str, &SamplingEvent> = self
            .events
            .iter()
            .map(|e| (e.sampling_id.as_str(), e))
            .collect();
        for respondent in &self.respondents {
            let id = &respondent.respondent_id;
            let Some(event) = events_by_id.get(respondent.sampling_id.as_str()) else {
                return Err(violation(format!(
                    "{id}: unknown sampling {}",
                    respondent.sampling_id
                )));
            };
            if respondent.area_id != event.area_id {
                return Err(violation(format!(
                    "{id}: area {} differs from event area {}",
                    respondent.area_id, event.area_id
                )));
            }
            if !area_names.contains(respondent.residence_area.as_str()) {
                return Err(violation(format!(
                    "{id}: unknown residence area {}",
                    respondent.residence_area
                )));
            }
            if !event.covers(respondent.submitted_on) {
                return Err(violation(format!(
                    "{id}: submitted {} outside {}..={}",
                    respondent.submitted_on, event.start_date, event.end_date
                )));
            }
        }

        let sizes = self.batch_sizes();
        for event in &self.events {
            let size = sizes.get(event.sampling_id.as_str()).copied().unwrap_or(0);
            let min = options.min_respondents as usize;
            if size < min || size > event.target as usize {
                return Err(violation(format!(
                    "{}: {size} respondents outside {min}..={}",
                    event.sampling_id, event.target
                )));
            }
        }
        debug!(sampling_ids = sampling_ids.len(), "integrity check passed");
        Ok(())
    }
}

fn unique_ids<'a>(
    name: &str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<BTreeSet<&'a str>> {
    let mut seen = BTreeSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(violation(format!("duplicate {name} {id}")));
        }
    }
    Ok(seen)
}

fn violation(message: String) -> GenerateError {
    GenerateError::Integrity(message)
}
