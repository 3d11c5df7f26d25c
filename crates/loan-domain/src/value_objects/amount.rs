//! Non-negative amount value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{DomainError, DomainResult};

/// Amount guaranteed to be zero or greater.
///
/// Construction through [`PositiveAmount::of`] is the only place the
/// invariant is checked; every instance in circulation is valid. No upper
/// bound is enforced here, limits come from the range policy.
///
/// # Examples
///
/// ```
/// # use loan_origination_domain::PositiveAmount;
/// let amount = PositiveAmount::of(40_000).unwrap();
/// assert_eq!(amount.value(), 40_000);
///
/// assert!(PositiveAmount::of(-1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u64")]
pub struct PositiveAmount(u64);

impl PositiveAmount {
    /// Zero amount
    pub const ZERO: Self = Self(0);

    /// Validate a raw integer amount
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidAmount`] if `raw` is negative.
    pub fn of(raw: i64) -> DomainResult<Self> {
        u64::try_from(raw)
            .map(Self)
            .map_err(|_| DomainError::InvalidAmount(raw))
    }

    /// Get the wrapped value
    #[inline]
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl TryFrom<i64> for PositiveAmount {
    type Error = DomainError;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        Self::of(raw)
    }
}

impl From<PositiveAmount> for u64 {
    fn from(amount: PositiveAmount) -> Self {
        amount.0
    }
}

impl fmt::Display for PositiveAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
