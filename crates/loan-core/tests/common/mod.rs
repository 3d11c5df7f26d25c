//! Common test utilities and mock implementations
//!
//! Catalog builders and recording collaborators shared by the integration
//! test files.

#![allow(dead_code)]

use loan_origination::{
    CreateLoanApplication, DomainError, DomainResult, LoanApplication, LoanApplicationId,
    LoanApplicationRepository, Merchant, MerchantId, MerchantLookup, PositiveAmount, Product,
    ProductId, ProductLookup,
    infrastructure::adapters::{InMemoryMerchantCatalog, InMemoryProductCatalog},
};
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

pub const MERCHANT_ID: &str = "123";
pub const PRODUCT_ID: &str = "123";
pub const GENERATED_ID: &str = "0f5b0a4e-6c1d-4d5e-9d7e-2b1f8c3a9e10";

pub fn amount(value: i64) -> PositiveAmount {
    PositiveAmount::of(value).unwrap()
}

/// Merchant "123" accepting [1, 50000]
pub fn a_merchant() -> Merchant {
    Merchant::new(MERCHANT_ID, amount(1), amount(50_000))
}

/// Product "123" accepting [1, 50000]
pub fn a_product() -> Product {
    Product::new(PRODUCT_ID, amount(1), amount(50_000))
}

/// Catalogs holding one merchant and one product under it
pub fn catalogs_with(
    merchant: Merchant,
    product: Product,
) -> (Arc<InMemoryMerchantCatalog>, Arc<InMemoryProductCatalog>) {
    let merchants = InMemoryMerchantCatalog::new();
    let products = InMemoryProductCatalog::new();
    products.register(merchant.merchant_id().clone(), product);
    merchants.register(merchant);
    (Arc::new(merchants), Arc::new(products))
}

/// Use case over the default merchant/product with a fixed id generator
pub fn build_use_case() -> CreateLoanApplication {
    build_use_case_with(a_merchant(), a_product())
}

pub fn build_use_case_with(merchant: Merchant, product: Product) -> CreateLoanApplication {
    let (merchants, products) = catalogs_with(merchant, product);
    CreateLoanApplication::new(
        Arc::new(|| LoanApplicationId::new(GENERATED_ID)),
        merchants,
        products,
    )
}

/// Merchant lookup that counts calls and always fails
#[derive(Default)]
pub struct FailingMerchantLookup {
    pub calls: AtomicUsize,
}

impl MerchantLookup for FailingMerchantLookup {
    fn find_merchant(&self, _merchant_id: &MerchantId) -> DomainResult<Option<Merchant>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(DomainError::unavailable("merchant store offline"))
    }
}

/// Product lookup that counts calls and returns nothing
#[derive(Default)]
pub struct CountingProductLookup {
    pub calls: AtomicUsize,
}

impl ProductLookup for CountingProductLookup {
    fn find_product(
        &self,
        _merchant_id: &MerchantId,
        _product_id: &ProductId,
    ) -> DomainResult<Option<Product>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(None)
    }
}

/// Product lookup remembering the merchant it was scoped to
#[derive(Default)]
pub struct ScopeRecordingProductLookup {
    pub scoped_to: parking_lot::Mutex<Vec<MerchantId>>,
}

impl ProductLookup for ScopeRecordingProductLookup {
    fn find_product(
        &self,
        merchant_id: &MerchantId,
        _product_id: &ProductId,
    ) -> DomainResult<Option<Product>> {
        self.scoped_to.lock().push(merchant_id.clone());
        Ok(Some(a_product()))
    }
}

/// Repository keeping every persisted application in call order
#[derive(Default)]
pub struct RecordingRepository {
    applications: parking_lot::Mutex<Vec<LoanApplication>>,
}

impl RecordingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn persisted(&self) -> Vec<LoanApplication> {
        self.applications.lock().clone()
    }
}

impl LoanApplicationRepository for RecordingRepository {
    fn persist(&self, application: LoanApplication) -> DomainResult<LoanApplication> {
        self.applications.lock().push(application.clone());
        Ok(application)
    }
}

/// Repository that refuses every write
pub struct FailingRepository;

impl LoanApplicationRepository for FailingRepository {
    fn persist(&self, _application: LoanApplication) -> DomainResult<LoanApplication> {
        Err(DomainError::conflict("loan application already stored"))
    }
}
