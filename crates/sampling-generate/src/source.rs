//! Seeded source of random draws and fake identities.

use chrono::{Days, NaiveDate};
use fake::Fake;
use fake::faker::name::en::Name;
use fake::faker::phone_number::en::PhoneNumber;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use sampling_model::{GenerateError, Result};

/// The single random stream shared by all generators.
///
/// Draw order is part of the output: the same seed and the same sequence of
/// calls always produce the same values.
#[derive(Debug, Clone)]
pub struct SampleSource {
    rng: StdRng,
}

impl SampleSource {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Picks one item uniformly. `name` identifies the lookup in errors.
    pub fn choose<'a, T>(&mut self, name: &'static str, items: &'a [T]) -> Result<&'a T> {
        items
            .choose(&mut self.rng)
            .ok_or(GenerateError::EmptyLookup { name })
    }

    /// Draws from the half-open range `[min, max)`.
    pub fn range(&mut self, name: &'static str, min: u32, max: u32) -> Result<u32> {
        if min >= max {
            return Err(GenerateError::InvalidRange {
                name,
                min: i64::from(min),
                max: i64::from(max),
            });
        }
        Ok(self.rng.gen_range(min..max))
    }

    /// Draws from the inclusive range `[min, max]`.
    pub fn range_inclusive(&mut self, name: &'static str, min: u32, max: u32) -> Result<u32> {
        if min > max {
            return Err(GenerateError::InvalidRange {
                name,
                min: i64::from(min),
                max: i64::from(max),
            });
        }
        Ok(self.rng.gen_range(min..=max))
    }

    /// Draws a day uniformly from `[start, end]`.
    pub fn date_between(&mut self, start: NaiveDate, end: NaiveDate) -> Result<NaiveDate> {
        let span = (end - start).num_days();
        if span < 0 {
            return Err(GenerateError::DateOutOfRange(format!(
                "{start} is after {end}"
            )));
        }
        let offset = self.rng.gen_range(0..=span.unsigned_abs());
        start
            .checked_add_days(Days::new(offset))
            .ok_or_else(|| GenerateError::DateOutOfRange(format!("{start} + {offset} days")))
    }

    pub fn coin(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }

    pub fn full_name(&mut self) -> String {
        Name().fake_with_rng(&mut self.rng)
    }

    pub fn phone_number(&mut self) -> String {
        PhoneNumber().fake_with_rng(&mut self.rng)
    }
}
