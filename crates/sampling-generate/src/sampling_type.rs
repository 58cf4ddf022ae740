use sampling_model::ids::sampling_type_code;
use sampling_model::{SamplingCategory, SamplingType};

/// Indexes the sampling categories as `ST1`..`STk` in list order.
pub fn sampling_type_table(categories: &[SamplingCategory]) -> Vec<SamplingType> {
    categories
        .iter()
        .enumerate()
        .map(|(position, category)| SamplingType {
            code: sampling_type_code(position),
            category: *category,
        })
        .collect()
}
