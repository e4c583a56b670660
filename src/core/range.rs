use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed interval `[min, max]` used for every bound a validator enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeRule {
    pub min: u64,
    pub max: u64,
}

impl RangeRule {
    pub const fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: u64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Checks the character count of `s`, not its value.
    pub fn contains_len(&self, s: &str) -> bool {
        self.contains(s.chars().count() as u64)
    }

    /// Checks the numeric value of a digit-valid string. A value too large for
    /// `u64` lies outside every range.
    pub fn contains_digits(&self, digits: &str) -> bool {
        digits
            .parse::<u64>()
            .map(|value| self.contains(value))
            .unwrap_or(false)
    }
}

impl fmt::Display for RangeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}
