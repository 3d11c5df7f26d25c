//! Catalog seeding from a JSON document
//!
//! ```json
//! {
//!   "merchants": [
//!     {
//!       "merchantId": "123",
//!       "minLoanAmount": 1,
//!       "maxLoanAmount": 50000,
//!       "products": [{ "productId": "123", "minAmount": 1, "maxAmount": 50000 }]
//!     }
//!   ]
//! }
//! ```
//!
//! Amounts go through [`PositiveAmount`] deserialization, so a negative
//! bound fails the whole document.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::{
    domain::{Merchant, MerchantId, PositiveAmount, Product},
    infrastructure::adapters::{InMemoryMerchantCatalog, InMemoryProductCatalog},
};

/// Catalog seeding errors
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Failed to read catalog {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Root of a catalog seed document
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSeed {
    #[serde(default)]
    pub merchants: Vec<MerchantSeed>,
}

/// Merchant entry with its products
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchantSeed {
    pub merchant_id: MerchantId,
    pub min_loan_amount: PositiveAmount,
    pub max_loan_amount: PositiveAmount,
    #[serde(default)]
    pub products: Vec<Product>,
}

impl CatalogSeed {
    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SeedError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Register every merchant and product; returns how many products were loaded
    pub fn apply(
        self,
        merchants: &InMemoryMerchantCatalog,
        products: &InMemoryProductCatalog,
    ) -> usize {
        let mut product_count = 0;
        for seed in self.merchants {
            tracing::debug!(
                merchant_id = %seed.merchant_id,
                products = seed.products.len(),
                "seeding merchant"
            );
            for product in seed.products {
                products.register(seed.merchant_id.clone(), product);
                product_count += 1;
            }
            merchants.register(Merchant::new(
                seed.merchant_id,
                seed.min_loan_amount,
                seed.max_loan_amount,
            ));
        }
        product_count
    }
}
