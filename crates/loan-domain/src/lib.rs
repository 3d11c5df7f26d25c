//! Loan Origination Domain Layer - Pure Business Logic
//!
//! This crate contains the pure domain logic for admitting loan applications:
//! validated value objects, the merchant/product/application entities and the
//! purchase amount range policy. It has no infrastructure dependencies and
//! performs no I/O.
//!
//! ## Architecture
//!
//! Following Clean Architecture principles:
//! - **Value Objects**: Immutable, validated domain concepts (PositiveAmount, Language, ids)
//! - **Entities**: Domain objects with identity (Merchant, Product, LoanApplication)
//! - **Services**: Stateless domain rules (PurchaseAmountInRangePolicy)

#![warn(missing_docs)]

pub mod entities;
pub mod services;
pub mod value_objects;

// Re-export core types
pub use entities::{LoanApplication, Merchant, Product};
pub use services::{AmountRange, PurchaseAmountInRangePolicy};
pub use value_objects::{Language, LoanApplicationId, MerchantId, PositiveAmount, ProductId};

/// Domain Result type
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-specific errors
///
/// Validation failures of value objects and policies, plus the fault kinds
/// collaborators report through domain ports.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum DomainError {
    /// Amount is negative
    #[error("Invalid amount: {0} is negative")]
    InvalidAmount(i64),

    /// Language code is not in the supported set
    #[error("Invalid language: {0:?} is not supported")]
    InvalidLanguage(String),

    /// Amount falls outside the effective merchant/product range
    #[error("Amount {amount} is outside the accepted range [{min}, {max}]")]
    OutOfRange {
        /// Rejected amount
        amount: u64,
        /// Effective lower bound (inclusive)
        min: u64,
        /// Effective upper bound (inclusive)
        max: u64,
    },

    /// A collaborator could not be reached or answered with a failure
    #[error("Collaborator unavailable: {0}")]
    Unavailable(String),

    /// A write collided with existing state
    #[error("Conflict: {0}")]
    Conflict(String),
}

impl DomainError {
    /// Create an unavailable collaborator error
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }

    /// Create a conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }
}
