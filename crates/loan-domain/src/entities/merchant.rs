//! Merchant entity

use serde::{Deserialize, Serialize};

use crate::value_objects::{MerchantId, PositiveAmount};

/// Business issuing loans, with its own accepted purchase range.
///
/// Bounds are taken as configured; a merchant whose minimum exceeds its
/// maximum is representable and simply accepts no amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Merchant {
    merchant_id: MerchantId,
    min_loan_amount: PositiveAmount,
    max_loan_amount: PositiveAmount,
}

impl Merchant {
    /// Create a merchant with its loan amount bounds
    pub fn new(
        merchant_id: impl Into<MerchantId>,
        min_loan_amount: PositiveAmount,
        max_loan_amount: PositiveAmount,
    ) -> Self {
        Self {
            merchant_id: merchant_id.into(),
            min_loan_amount,
            max_loan_amount,
        }
    }

    /// Merchant identifier
    pub fn merchant_id(&self) -> &MerchantId {
        &self.merchant_id
    }

    /// Smallest purchase amount the merchant finances
    pub fn min_loan_amount(&self) -> PositiveAmount {
        self.min_loan_amount
    }

    /// Largest purchase amount the merchant finances
    pub fn max_loan_amount(&self) -> PositiveAmount {
        self.max_loan_amount
    }

    /// Copy with another identifier
    #[must_use]
    pub fn with_merchant_id(mut self, merchant_id: impl Into<MerchantId>) -> Self {
        self.merchant_id = merchant_id.into();
        self
    }

    /// Copy with another lower bound
    #[must_use]
    pub fn with_min_loan_amount(mut self, amount: PositiveAmount) -> Self {
        self.min_loan_amount = amount;
        self
    }

    /// Copy with another upper bound
    #[must_use]
    pub fn with_max_loan_amount(mut self, amount: PositiveAmount) -> Self {
        self.max_loan_amount = amount;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amount(value: i64) -> PositiveAmount {
        PositiveAmount::of(value).unwrap()
    }

    #[test]
    fn test_merchant_accessors() {
        let merchant = Merchant::new("123", amount(1), amount(50_000));
        assert_eq!(merchant.merchant_id().as_str(), "123");
        assert_eq!(merchant.min_loan_amount().value(), 1);
        assert_eq!(merchant.max_loan_amount().value(), 50_000);
    }

    #[test]
    fn test_merchant_withers() {
        let merchant = Merchant::new("123", amount(1), amount(2))
            .with_merchant_id("456")
            .with_min_loan_amount(amount(100))
            .with_max_loan_amount(amount(200));
        assert_eq!(merchant.merchant_id().as_str(), "456");
        assert_eq!(merchant.min_loan_amount().value(), 100);
        assert_eq!(merchant.max_loan_amount().value(), 200);
    }

    #[test]
    fn test_merchant_json_shape() {
        let merchant: Merchant = serde_json::from_str(
            r#"{"merchantId":"m","minLoanAmount":10,"maxLoanAmount":20}"#,
        )
        .unwrap();
        assert_eq!(merchant, Merchant::new("m", amount(10), amount(20)));

        let negative = r#"{"merchantId":"m","minLoanAmount":-10,"maxLoanAmount":20}"#;
        assert!(serde_json::from_str::<Merchant>(negative).is_err());
    }
}
