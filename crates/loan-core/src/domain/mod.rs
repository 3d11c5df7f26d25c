//! Domain layer - Pure business logic
//!
//! Re-exports the value objects, entities and policy of the domain crate and
//! adds the ports through which the application reaches its collaborators.

pub mod ports;

pub use loan_origination_domain::{
    AmountRange, DomainError, DomainResult, Language, LoanApplication, LoanApplicationId,
    Merchant, MerchantId, PositiveAmount, Product, ProductId, PurchaseAmountInRangePolicy,
    entities, services, value_objects,
};
