//! Dummy data generation for market sampling campaigns.
//!
//! Every generator is a pure function of its inputs and an explicit
//! [`SampleSource`]. Running [`generate_dataset`] twice with the same options
//! yields identical tables.

pub mod area;
pub mod frame;
pub mod pipeline;
pub mod promoter;
pub mod respondent;
pub mod sampling;
pub mod sampling_type;
pub mod source;

pub use area::generate_areas;
pub use frame::{SheetKind, TableFrame};
pub use pipeline::{SamplingDataset, generate_dataset};
pub use promoter::generate_promoters;
pub use respondent::generate_respondents;
pub use sampling::generate_sampling_events;
pub use sampling_type::sampling_type_table;
pub use source::SampleSource;
