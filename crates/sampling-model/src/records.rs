//! Generated record types.
//!
//! Records are plain immutable values. Foreign keys are stored as the
//! referenced record's identifier string, matching the exported sheets.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::lookup::SamplingCategory;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Area {
    pub area_id: String,
    pub name: String,
    pub region: String,
    pub district: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Promoter {
    pub promoter_id: String,
    pub name: String,
    pub contact: String,
}

/// One row of the sampling type table (`ST1`..`STk`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamplingType {
    pub code: String,
    pub category: SamplingCategory,
}

impl SamplingType {
    pub fn label(&self) -> &'static str {
        self.category.label()
    }
}

/// Category-specific payload of a sampling event.
///
/// Only institutional events name an institution type and only traffic
/// events count passengers; every other category carries no extra data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SamplingKind {
    /// Open market, trade or third space sampling.
    Standard(SamplingCategory),
    Traffic { passengers: u32 },
    Institutional { institution_type: String },
}

impl SamplingKind {
    pub fn category(&self) -> SamplingCategory {
        match self {
            SamplingKind::Standard(category) => *category,
            SamplingKind::Traffic { .. } => SamplingCategory::Traffic,
            SamplingKind::Institutional { .. } => SamplingCategory::Institutional,
        }
    }

    pub fn institution_type(&self) -> Option<&str> {
        match self {
            SamplingKind::Institutional { institution_type } => Some(institution_type.as_str()),
            _ => None,
        }
    }

    pub fn passengers(&self) -> Option<u32> {
        match self {
            SamplingKind::Traffic { passengers } => Some(*passengers),
            _ => None,
        }
    }
}

/// A sampling campaign run by one promoter in one area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamplingEvent {
    pub sampling_id: String,
    pub area_id: String,
    pub promoter_id: String,
    /// Code of the sampling type row (`ST{n}`).
    pub sampling_type: String,
    pub kind: SamplingKind,
    pub target: u32,
    pub brand: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl SamplingEvent {
    /// Returns true if `date` falls inside the campaign window, inclusive.
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OptIn {
    Yes,
    No,
}

impl OptIn {
    pub fn label(self) -> &'static str {
        match self {
            OptIn::Yes => "Yes",
            OptIn::No => "No",
        }
    }
}

/// A participant in a sampling event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Respondent {
    pub respondent_id: String,
    pub sampling_id: String,
    pub full_name: String,
    pub age_range: String,
    pub contact: String,
    /// Brand distributed at the event.
    pub current_brand: String,
    pub preferred_brand: String,
    /// Area of the event, not of the respondent.
    pub area_id: String,
    /// Name of the area the respondent lives in.
    pub residence_area: String,
    pub reason: String,
    pub opt_in: OptIn,
    pub submitted_on: NaiveDate,
}
