//! Data model for the market sampling dummy data generator.
//!
//! Holds the static lookup registry, the generated record types, the
//! generation options and the shared error type.

pub mod error;
pub mod ids;
pub mod lookup;
pub mod options;
pub mod records;

pub use error::{GenerateError, Result};
pub use lookup::{LookupRegistry, Region, SamplingCategory};
pub use options::GenerationOptions;
pub use records::{
    Area, OptIn, Promoter, Respondent, SamplingEvent, SamplingKind, SamplingType,
};
