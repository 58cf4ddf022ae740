//! Static lookup data for sampling campaigns.
//!
//! The [`LookupRegistry`] bundles every enumerated option set the generators
//! draw from. [`LookupRegistry::standard`] returns the built-in Ghana market
//! configuration; callers may also build a registry by hand.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of sampling campaign.
///
/// The position of a category in [`LookupRegistry::sampling_types`] decides
/// its `ST{n}` code in the sampling type table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SamplingCategory {
    OpenMarket,
    /// Sampling on public transport; events carry a passenger count.
    Traffic,
    Trade,
    ThirdSpace,
    /// Sampling at churches, mosques and similar; events carry an institution type.
    Institutional,
}

impl SamplingCategory {
    pub const ALL: [SamplingCategory; 5] = [
        SamplingCategory::OpenMarket,
        SamplingCategory::Traffic,
        SamplingCategory::Trade,
        SamplingCategory::ThirdSpace,
        SamplingCategory::Institutional,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SamplingCategory::OpenMarket => "Open Market",
            SamplingCategory::Traffic => "Traffic",
            SamplingCategory::Trade => "Trade",
            SamplingCategory::ThirdSpace => "Third Space",
            SamplingCategory::Institutional => "Institutional",
        }
    }
}

impl fmt::Display for SamplingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A region and its districts, in presentation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub name: String,
    pub districts: Vec<String>,
}

impl Region {
    pub fn new<I, S>(name: impl Into<String>, districts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            districts: districts.into_iter().map(Into::into).collect(),
        }
    }
}

/// Enumerated option sets used by the generators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupRegistry {
    pub sampling_types: Vec<SamplingCategory>,
    pub institution_types: Vec<String>,
    /// Regions in iteration order; area ids follow this order.
    pub regions: Vec<Region>,
    pub age_ranges: Vec<String>,
    pub brands: Vec<String>,
    pub reasons: Vec<String>,
}

impl LookupRegistry {
    /// The built-in lookup configuration.
    pub fn standard() -> Self {
        Self {
            sampling_types: SamplingCategory::ALL.to_vec(),
            institution_types: strings(["Church", "Mosque"]),
            regions: vec![
                Region::new(
                    "Greater Accra",
                    ["La Nkwantanang", "Ablekuma", "Madina", "Adenta"],
                ),
                Region::new("Ashanti", ["Kumasi Metro", "Ejisu", "Obuasi"]),
                Region::new("Central", ["Cape Coast", "Kasoa", "Mankessim"]),
            ],
            age_ranges: strings(["18–24", "25–34", "35–44", "45–54", "55+"]),
            brands: strings([
                "Pepsodent",
                "Kel",
                "Colgate",
                "Close-Up",
                "Oral-B",
                "Sensodyne",
            ]),
            reasons: strings([
                "Curious about the brand",
                "Referred by friend",
                "Free product sample",
                "Interested in survey",
                "Enjoy trying new products",
                "Promoter was convincing",
                "Happened to be available",
            ]),
        }
    }

    /// Total number of districts across all regions.
    pub fn district_count(&self) -> usize {
        self.regions.iter().map(|region| region.districts.len()).sum()
    }
}

impl Default for LookupRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

fn strings<const N: usize>(values: [&str; N]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}
