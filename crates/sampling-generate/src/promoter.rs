//! Promoter table generation.

use sampling_model::ids::{IdSequence, promoter_id};
use sampling_model::{Promoter, Result};

use crate::source::SampleSource;

/// Generates `count` promoters with ids `P{start_id}` onward.
pub fn generate_promoters(
    source: &mut SampleSource,
    count: u32,
    start_id: u32,
) -> Result<Vec<Promoter>> {
    let mut ids = IdSequence::new("promoter", start_id);
    let mut promoters = Vec::with_capacity(count as usize);
    for _ in 0..count {
        promoters.push(Promoter {
            promoter_id: promoter_id(ids.next_id()?),
            name: source.full_name(),
            contact: source.phone_number(),
        });
    }
    Ok(promoters)
}
