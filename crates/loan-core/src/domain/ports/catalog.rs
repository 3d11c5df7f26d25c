//! Catalog ports for merchant and product resolution
//!
//! Lookups distinguish absence from failure: `Ok(None)` means the id does not
//! resolve, `Err(_)` means the collaborator itself failed.

use crate::domain::{DomainResult, Merchant, MerchantId, Product, ProductId};

/// Resolves merchants and their loan amount bounds
pub trait MerchantLookup: Send + Sync {
    /// Find merchant by ID
    fn find_merchant(&self, merchant_id: &MerchantId) -> DomainResult<Option<Merchant>>;
}

/// Resolves products within a merchant's catalog
pub trait ProductLookup: Send + Sync {
    /// Find product by ID, scoped to the owning merchant
    fn find_product(
        &self,
        merchant_id: &MerchantId,
        product_id: &ProductId,
    ) -> DomainResult<Option<Product>>;
}
