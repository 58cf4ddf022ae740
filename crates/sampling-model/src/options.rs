//! Configuration options for dummy data generation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{GenerateError, Result};

/// Options controlling the size, identifiers and value ranges of the
/// generated tables.
///
/// Deserializes from partial documents; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationOptions {
    /// Seed for the shared random source.
    pub seed: u64,
    pub num_promoters: u32,
    pub num_samples: u32,
    pub area_start_id: u32,
    pub promoter_start_id: u32,
    pub sampling_start_id: u32,
    pub respondent_start_id: u32,
    /// Lower bound of the event target, inclusive.
    pub target_min: u32,
    /// Upper bound of the event target, exclusive.
    pub target_max: u32,
    /// Lower bound of the traffic passenger count, inclusive.
    pub passengers_min: u32,
    /// Upper bound of the traffic passenger count, exclusive.
    pub passengers_max: u32,
    /// Smallest respondent batch per event. Batches range up to the event target.
    pub min_respondents: u32,
    /// Days between an event's start and end date.
    pub campaign_days: u32,
    /// How far before the reference date a campaign may start.
    pub lookback_days: u32,
    /// Latest possible start date. `None` means today.
    pub reference_date: Option<NaiveDate>,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            seed: 42,
            num_promoters: 5,
            num_samples: 6,
            area_start_id: 1001,
            promoter_start_id: 1000,
            sampling_start_id: 1000,
            respondent_start_id: 1000,
            target_min: 100,
            target_max: 200,
            passengers_min: 5,
            passengers_max: 10,
            min_respondents: 100,
            campaign_days: 30,
            lookback_days: 365,
            reference_date: None,
        }
    }
}

impl GenerationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_promoters(mut self, count: u32) -> Self {
        self.num_promoters = count;
        self
    }

    pub fn with_samples(mut self, count: u32) -> Self {
        self.num_samples = count;
        self
    }

    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self
    }

    pub fn with_target_range(mut self, min: u32, max: u32) -> Self {
        self.target_min = min;
        self.target_max = max;
        self
    }

    pub fn with_min_respondents(mut self, min: u32) -> Self {
        self.min_respondents = min;
        self
    }

    /// Checks that every configured range can be sampled from.
    ///
    /// A target range whose lower bound sits below `min_respondents` is
    /// rejected, because events drawn from it could have no valid batch size.
    pub fn validate(&self) -> Result<()> {
        if self.target_min >= self.target_max {
            return Err(GenerateError::InvalidRange {
                name: "target",
                min: i64::from(self.target_min),
                max: i64::from(self.target_max),
            });
        }
        if self.passengers_min >= self.passengers_max {
            return Err(GenerateError::InvalidRange {
                name: "passengers",
                min: i64::from(self.passengers_min),
                max: i64::from(self.passengers_max),
            });
        }
        if self.min_respondents > self.target_min {
            return Err(GenerateError::InvalidRange {
                name: "respondents",
                min: i64::from(self.min_respondents),
                max: i64::from(self.target_min),
            });
        }
        Ok(())
    }
}
