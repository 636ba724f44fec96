//! Random Factor Generator
//!
//! Thread-local RNG implementation of [`RandomGeneratorService`].

use crate::domain::services::RandomGeneratorService;
use crate::domain::value_objects::FactorRange;
use rand::Rng;

/// Draws factors uniformly from an inclusive [`FactorRange`]
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomFactorGenerator {
    range: FactorRange,
}

impl RandomFactorGenerator {
    pub fn new(range: FactorRange) -> Self {
        Self { range }
    }
}

impl RandomGeneratorService for RandomFactorGenerator {
    fn generate_random_factor(&self) -> i32 {
        rand::rng().random_range(self.range.as_range())
    }
}
