//! Identifier formats for generated records.

use crate::error::{GenerateError, Result};

/// Counts identifier numbers up from a start value.
///
/// Running past `u32::MAX` is reported as [`GenerateError::IdOverflow`]
/// rather than wrapping.
#[derive(Debug, Clone)]
pub struct IdSequence {
    name: &'static str,
    start: u32,
    next: Option<u32>,
}

impl IdSequence {
    pub fn new(name: &'static str, start: u32) -> Self {
        Self {
            name,
            start,
            next: Some(start),
        }
    }

    pub fn next_id(&mut self) -> Result<u32> {
        let id = self.next.ok_or(GenerateError::IdOverflow {
            name: self.name,
            start: self.start,
        })?;
        self.next = id.checked_add(1);
        Ok(id)
    }
}

/// Area identifiers carry a space between prefix and number (`"A 1001"`).
pub fn area_id(n: u32) -> String {
    format!("A {n}")
}

pub fn promoter_id(n: u32) -> String {
    format!("P{n}")
}

pub fn sampling_id(n: u32) -> String {
    format!("S{n}")
}

pub fn respondent_id(n: u32) -> String {
    format!("R{n}")
}

/// Sampling type codes are 1-based (`"ST1"` for the first type).
pub fn sampling_type_code(position: usize) -> String {
    format!("ST{}", position + 1)
}
