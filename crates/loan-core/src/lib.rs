//! # Loan Origination
//!
//! Admits loan applications submitted by merchants. A request names a
//! merchant, one of its products, a language and a purchase amount; it is
//! accepted only if the merchant and product exist, the amount is
//! non-negative and within both their bounds, and the language is supported.
//! Accepted applications receive a generated identifier.
//!
//! Layers:
//! - [`domain`]: value objects, entities and the range policy (from
//!   `loan-origination-domain`) plus the collaborator ports
//! - [`application`]: the [`CreateLoanApplication`] use case and its errors
//! - [`infrastructure`]: in-memory adapters, catalog seeding, HTTP and
//!   message-channel bindings
//! - [`config`]: service settings

#![warn(rust_2018_idioms)]

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

// Domain layer exports
pub use domain::{
    AmountRange, DomainError, DomainResult, Language, LoanApplication, LoanApplicationId,
    Merchant, MerchantId, PositiveAmount, Product, ProductId, PurchaseAmountInRangePolicy,
    ports::{LoanApplicationIdGenerator, LoanApplicationRepository, MerchantLookup, ProductLookup},
};

// Application layer exports
pub use application::{
    ApplicationError, ApplicationResult, CreateLoanApplication, CreateLoanApplicationCommand,
    CreateLoanApplicationError, CreateLoanApplicationResponse,
};

// Configuration exports
pub use config::{ConfigError, ServiceConfig};

// Infrastructure exports
pub use infrastructure::adapters::{
    CatalogSeed, InMemoryLoanApplicationRepository, InMemoryMerchantCatalog,
    InMemoryProductCatalog, SeedError, UuidLoanApplicationIdGenerator,
};

/// Re-export commonly used types
pub mod prelude {
    pub use super::{
        ApplicationError, ApplicationResult, CreateLoanApplication, CreateLoanApplicationCommand,
        CreateLoanApplicationError, CreateLoanApplicationResponse, DomainError, DomainResult,
        Language, LoanApplication, LoanApplicationId, LoanApplicationIdGenerator,
        LoanApplicationRepository, Merchant, MerchantId, MerchantLookup, PositiveAmount, Product,
        ProductId, ProductLookup,
    };
}
