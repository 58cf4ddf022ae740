use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    /// A lookup list that must be sampled from has no entries.
    #[error("cannot sample from empty lookup `{name}`")]
    EmptyLookup { name: &'static str },

    /// A configured half-open or inclusive range contains no values.
    #[error("invalid range for {name}: {min}..{max}")]
    InvalidRange {
        name: &'static str,
        min: i64,
        max: i64,
    },

    /// The respondent batch range `[min, target]` of an event is empty.
    #[error("sampling {sampling_id}: respondent batch range {min}..={target} is empty")]
    InvalidBatchRange {
        sampling_id: String,
        min: u32,
        target: u32,
    },

    /// Sequential identifiers ran past `u32::MAX`.
    #[error("{name} identifiers starting at {start} overflow")]
    IdOverflow { name: &'static str, start: u32 },

    #[error("date out of range: {0}")]
    DateOutOfRange(String),

    #[error("integrity violation: {0}")]
    Integrity(String),
}

pub type Result<T> = std::result::Result<T, GenerateError>;
