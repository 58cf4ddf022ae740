//! CLI library components for the market sampling data generator.

pub mod logging;
pub mod pipeline;
pub mod types;
