//! Price arithmetic primitives.
//!
//! Prices are whole currency units (`u64`). Multipliers are non-negative,
//! finite scalars where exactly `1.0` means "no adjustment".

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_object::ValueObject;

/// A validated price multiplier.
///
/// Construction through [`TryFrom<f64>`] (and therefore deserialization)
/// rejects negative and non-finite values.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Multiplier(f64);

impl Multiplier {
    /// The neutral multiplier.
    pub const NEUTRAL: Multiplier = Multiplier(1.0);

    /// Build a multiplier from a literal known at compile time.
    ///
    /// The value must be finite and non-negative; use [`TryFrom`] for
    /// anything coming from outside the program.
    pub const fn constant(value: f64) -> Self {
        Self(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_neutral(self) -> bool {
        self.0 == 1.0
    }
}

impl Default for Multiplier {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl TryFrom<f64> for Multiplier {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(DomainError::validation(format!(
                "multiplier must be finite, got {value}"
            )));
        }
        if value < 0.0 {
            return Err(DomainError::validation(format!(
                "multiplier must be non-negative, got {value}"
            )));
        }
        Ok(Self(value))
    }
}

impl From<Multiplier> for f64 {
    fn from(value: Multiplier) -> Self {
        value.0
    }
}

impl core::fmt::Display for Multiplier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl ValueObject for Multiplier {}

/// Round a computed amount to whole currency units.
///
/// Rounding is half away from zero (`f64::round`), which for the
/// non-negative amounts produced by pricing is plain half-up:
/// `12.5 -> 13`, `12.49 -> 12`. Out-of-range results saturate at the `u64`
/// bounds and NaN maps to zero.
pub fn round_units(amount: f64) -> u64 {
    amount.round() as u64
}
