//! Application Configuration
//!
//! Configuration for the multiplication application layer.

use crate::domain::value_objects::FactorRange;

/// Multiplication application configuration
#[derive(Debug, Clone)]
pub struct MultiplicationConfig {
    /// Range random challenge factors are drawn from
    pub factor_range: FactorRange,
    /// How many attempts the history query returns
    pub recent_attempts_limit: u32,
}

impl Default for MultiplicationConfig {
    fn default() -> Self {
        Self {
            factor_range: FactorRange::DEFAULT,
            recent_attempts_limit: 5,
        }
    }
}

impl MultiplicationConfig {
    pub fn with_factor_range(self, factor_range: FactorRange) -> Self {
        Self {
            factor_range,
            ..self
        }
    }
}
