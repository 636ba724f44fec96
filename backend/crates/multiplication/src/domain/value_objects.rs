//! Domain Value Objects
//!
//! Immutable value types for the multiplication domain.

use std::fmt;
use std::ops::RangeInclusive;

/// Player alias - the unique display name identifying a user
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Alias(String);

impl Alias {
    pub fn new(alias: impl Into<String>) -> Self {
        Self(alias.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Alias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Alias {
    fn from(alias: &str) -> Self {
        Self::new(alias)
    }
}

impl From<String> for Alias {
    fn from(alias: String) -> Self {
        Self(alias)
    }
}

/// Inclusive range random factors are drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactorRange {
    min: i32,
    max: i32,
}

impl FactorRange {
    /// Two-digit factors
    pub const DEFAULT: FactorRange = FactorRange { min: 11, max: 99 };

    /// Factors must be positive and the range non-empty
    pub fn new(min: i32, max: i32) -> Option<Self> {
        if min >= 1 && min <= max {
            Some(Self { min, max })
        } else {
            None
        }
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn as_range(&self) -> RangeInclusive<i32> {
        self.min..=self.max
    }
}

impl Default for FactorRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}
