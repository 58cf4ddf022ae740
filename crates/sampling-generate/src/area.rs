//! Area table generation.

use sampling_model::ids::{IdSequence, area_id};
use sampling_model::{Area, Region, Result};

/// Areas created for every district.
pub const AREAS_PER_DISTRICT: u32 = 2;

/// Expands the region/district mapping into area records.
///
/// Each district yields [`AREAS_PER_DISTRICT`] areas named
/// `"{district} Area {n}"`. Identifiers count up from `start_id` in mapping
/// order, so they are unique for any input.
pub fn generate_areas(regions: &[Region], start_id: u32) -> Result<Vec<Area>> {
    let mut areas = Vec::new();
    let mut ids = IdSequence::new("area", start_id);
    for region in regions {
        for district in &region.districts {
            for n in 1..=AREAS_PER_DISTRICT {
                areas.push(Area {
                    area_id: area_id(ids.next_id()?),
                    name: format!("{district} Area {n}"),
                    region: region.name.clone(),
                    district: district.clone(),
                });
            }
        }
    }
    Ok(areas)
}
