//! Purchase amount range policy
//!
//! A merchant and each of its products declare their own accepted purchase
//! range. An amount is financeable only when both accept it, so the policy
//! checks membership in the intersection of the two ranges.

use crate::{
    DomainError, DomainResult,
    entities::{Merchant, Product},
    value_objects::PositiveAmount,
};

/// Inclusive amount range
///
/// May be empty (`min > max`) when built from inconsistent bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmountRange {
    min: PositiveAmount,
    max: PositiveAmount,
}

impl AmountRange {
    /// Create a range from its inclusive bounds
    pub fn new(min: PositiveAmount, max: PositiveAmount) -> Self {
        Self { min, max }
    }

    /// Inclusive lower bound
    pub fn min(&self) -> PositiveAmount {
        self.min
    }

    /// Inclusive upper bound
    pub fn max(&self) -> PositiveAmount {
        self.max
    }

    /// Whether `amount` lies within both bounds
    pub fn contains(&self, amount: PositiveAmount) -> bool {
        self.min <= amount && amount <= self.max
    }

    /// Whether no amount can satisfy the range
    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }
}

/// Checks a purchase amount against the tightest of merchant and product bounds.
///
/// # Examples
///
/// ```
/// # use loan_origination_domain::{Merchant, Product, PositiveAmount, PurchaseAmountInRangePolicy};
/// let amount = |v| PositiveAmount::of(v).unwrap();
/// let merchant = Merchant::new("m", amount(100), amount(200));
/// let product = Product::new("p", amount(125), amount(225));
/// let policy = PurchaseAmountInRangePolicy::new();
///
/// assert!(policy.validate(amount(150), &merchant, &product).is_ok());
/// assert!(policy.validate(amount(210), &merchant, &product).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PurchaseAmountInRangePolicy;

impl PurchaseAmountInRangePolicy {
    /// Create the policy
    pub fn new() -> Self {
        Self
    }

    /// Intersection of the merchant and product ranges
    pub fn effective_range(&self, merchant: &Merchant, product: &Product) -> AmountRange {
        AmountRange::new(
            merchant.min_loan_amount().max(product.min_amount()),
            merchant.max_loan_amount().min(product.max_amount()),
        )
    }

    /// Accept `amount` if it falls within the effective range, bounds included
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::OutOfRange`] otherwise, which is every amount
    /// when the effective range is empty.
    pub fn validate(
        &self,
        amount: PositiveAmount,
        merchant: &Merchant,
        product: &Product,
    ) -> DomainResult<PositiveAmount> {
        let range = self.effective_range(merchant, product);
        if !range.contains(amount) {
            return Err(DomainError::OutOfRange {
                amount: amount.value(),
                min: range.min().value(),
                max: range.max().value(),
            });
        }
        Ok(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amount(value: i64) -> PositiveAmount {
        PositiveAmount::of(value).unwrap()
    }

    fn fixture() -> (Merchant, Product) {
        (
            Merchant::new("m", amount(100), amount(200)),
            Product::new("p", amount(125), amount(225)),
        )
    }

    #[test]
    fn test_effective_range_is_intersection() {
        let (merchant, product) = fixture();
        let range = PurchaseAmountInRangePolicy::new().effective_range(&merchant, &product);
        assert_eq!(range.min().value(), 125);
        assert_eq!(range.max().value(), 200);
        assert!(!range.is_empty());
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let (merchant, product) = fixture();
        let policy = PurchaseAmountInRangePolicy::new();
        assert_eq!(
            policy.validate(amount(125), &merchant, &product),
            Ok(amount(125))
        );
        assert_eq!(
            policy.validate(amount(200), &merchant, &product),
            Ok(amount(200))
        );
        assert!(policy.validate(amount(124), &merchant, &product).is_err());
        assert!(policy.validate(amount(201), &merchant, &product).is_err());
    }

    #[test]
    fn test_out_of_range_reports_effective_bounds() {
        let (merchant, product) = fixture();
        let err = PurchaseAmountInRangePolicy::new()
            .validate(amount(90), &merchant, &product)
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::OutOfRange {
                amount: 90,
                min: 125,
                max: 200
            }
        );
    }

    #[test]
    fn test_disjoint_bounds_reject_everything() {
        let merchant = Merchant::new("m", amount(100), amount(200));
        let product = Product::new("p", amount(300), amount(400));
        let policy = PurchaseAmountInRangePolicy::new();

        assert!(policy.effective_range(&merchant, &product).is_empty());
        for value in [0, 100, 150, 200, 250, 300, 400] {
            assert!(policy.validate(amount(value), &merchant, &product).is_err());
        }
    }

    #[test]
    fn test_single_point_range() {
        let merchant = Merchant::new("m", amount(50), amount(50));
        let product = Product::new("p", amount(0), amount(100));
        let policy = PurchaseAmountInRangePolicy::new();

        assert!(policy.validate(amount(50), &merchant, &product).is_ok());
        assert!(policy.validate(amount(49), &merchant, &product).is_err());
        assert!(policy.validate(amount(51), &merchant, &product).is_err());
    }
}
