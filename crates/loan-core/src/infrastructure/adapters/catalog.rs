//! In-memory merchant and product catalogs

use crate::{
    domain::{
        DomainResult, Merchant, MerchantId, Product, ProductId,
        ports::{MerchantLookup, ProductLookup},
    },
    infrastructure::adapters::InMemoryStore,
};

/// Merchant catalog held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryMerchantCatalog {
    merchants: InMemoryStore<MerchantId, Merchant>,
}

impl InMemoryMerchantCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or replace a merchant
    pub fn register(&self, merchant: Merchant) {
        self.merchants.insert(merchant.merchant_id().clone(), merchant);
    }

    pub fn merchant_count(&self) -> usize {
        self.merchants.count()
    }
}

impl MerchantLookup for InMemoryMerchantCatalog {
    fn find_merchant(&self, merchant_id: &MerchantId) -> DomainResult<Option<Merchant>> {
        Ok(self.merchants.get(merchant_id))
    }
}

/// Product catalog held in memory, keyed by owning merchant
///
/// The same product id may appear under several merchants with different
/// bounds.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProductCatalog {
    products: InMemoryStore<(MerchantId, ProductId), Product>,
}

impl InMemoryProductCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or replace a product under `merchant_id`
    pub fn register(&self, merchant_id: MerchantId, product: Product) {
        self.products
            .insert((merchant_id, product.product_id().clone()), product);
    }

    pub fn product_count(&self) -> usize {
        self.products.count()
    }
}

impl ProductLookup for InMemoryProductCatalog {
    fn find_product(
        &self,
        merchant_id: &MerchantId,
        product_id: &ProductId,
    ) -> DomainResult<Option<Product>> {
        Ok(self
            .products
            .get(&(merchant_id.clone(), product_id.clone())))
    }
}
