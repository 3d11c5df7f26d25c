//! Product entity

use serde::{Deserialize, Serialize};

use crate::value_objects::{PositiveAmount, ProductId};

/// Loan offering in a merchant's catalog, with its own accepted range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    product_id: ProductId,
    min_amount: PositiveAmount,
    max_amount: PositiveAmount,
}

impl Product {
    /// Create a product with its amount bounds
    pub fn new(
        product_id: impl Into<ProductId>,
        min_amount: PositiveAmount,
        max_amount: PositiveAmount,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            min_amount,
            max_amount,
        }
    }

    /// Product identifier
    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    /// Smallest purchase amount for this product
    pub fn min_amount(&self) -> PositiveAmount {
        self.min_amount
    }

    /// Largest purchase amount for this product
    pub fn max_amount(&self) -> PositiveAmount {
        self.max_amount
    }

    /// Copy with another identifier
    #[must_use]
    pub fn with_product_id(mut self, product_id: impl Into<ProductId>) -> Self {
        self.product_id = product_id.into();
        self
    }

    /// Copy with another lower bound
    #[must_use]
    pub fn with_min_amount(mut self, amount: PositiveAmount) -> Self {
        self.min_amount = amount;
        self
    }

    /// Copy with another upper bound
    #[must_use]
    pub fn with_max_amount(mut self, amount: PositiveAmount) -> Self {
        self.max_amount = amount;
        self
    }
}
