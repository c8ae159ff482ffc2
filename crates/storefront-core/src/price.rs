//! Price type
//!
//! Amounts are held in minor units (cents) so formatting never goes through
//! floating point. Catalog files carry decimal dollars (`28`, `28.5`) and are
//! converted once at load time.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Currency symbol prefixed to every displayed price
pub const CURRENCY_SYMBOL: &str = "$";

const MINOR_PER_MAJOR: u64 = 100;

/// A non-negative price in minor currency units
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(u64);

impl Price {
    /// Create from whole currency units (`28` -> `$28`)
    pub fn from_major(major: u64) -> Self {
        Price(major.saturating_mul(MINOR_PER_MAJOR))
    }

    /// Create from minor units (`2850` -> `$28.50`)
    pub fn from_minor(minor: u64) -> Self {
        Price(minor)
    }

    /// Amount in minor units
    pub fn minor(&self) -> u64 {
        self.0
    }

    /// Whole currency units, truncated
    pub fn major(&self) -> u64 {
        self.0 / MINOR_PER_MAJOR
    }

    fn cents(&self) -> u64 {
        self.0 % MINOR_PER_MAJOR
    }
}

impl TryFrom<f64> for Price {
    type Error = StoreError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() || value < 0.0 {
            return Err(StoreError::InvalidPrice(value.to_string()));
        }
        let minor = (value * MINOR_PER_MAJOR as f64).round();
        if minor > u64::MAX as f64 {
            return Err(StoreError::InvalidPrice(value.to_string()));
        }
        Ok(Price(minor as u64))
    }
}

impl From<Price> for f64 {
    fn from(price: Price) -> Self {
        price.0 as f64 / MINOR_PER_MAJOR as f64
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cents() == 0 {
            write!(f, "{}{}", CURRENCY_SYMBOL, self.major())
        } else {
            write!(f, "{}{}.{:02}", CURRENCY_SYMBOL, self.major(), self.cents())
        }
    }
}
