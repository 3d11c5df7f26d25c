//! Application layer - Use cases and orchestration
//!
//! Turns transport-neutral commands into domain operations and reports the
//! outcome as either a response or an [`ApplicationError`].

pub mod commands;
pub mod dto;
pub mod handlers;

pub use commands::{CreateLoanApplicationCommand, CreateLoanApplicationResponse};
pub use handlers::CreateLoanApplication;

use crate::domain::{DomainError, MerchantId, ProductId};

/// Application Result type
pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Why a loan application was refused.
///
/// Closed set, one variant per validation step, listed in the order the
/// steps run. Every variant is caused by caller input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateLoanApplicationError {
    #[error("Merchant {merchant_id} not found")]
    MerchantNotFound { merchant_id: MerchantId },

    #[error("Product {product_id} not found for merchant {merchant_id}")]
    ProductNotFound {
        merchant_id: MerchantId,
        product_id: ProductId,
    },

    #[error("Invalid purchase amount: {amount} is negative")]
    InvalidPurchaseAmount { amount: i64 },

    #[error("Purchase amount {amount} is outside the accepted range [{min}, {max}]")]
    PurchaseAmountOutOfRange { amount: u64, min: u64, max: u64 },

    #[error("Invalid language: {language:?} is not supported")]
    InvalidLanguage { language: String },
}

impl CreateLoanApplicationError {
    /// Stable name used on the wire
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::MerchantNotFound { .. } => "MerchantNotFound",
            Self::ProductNotFound { .. } => "ProductNotFound",
            Self::InvalidPurchaseAmount { .. } => "InvalidPurchaseAmount",
            Self::PurchaseAmountOutOfRange { .. } => "PurchaseAmountOutOfRange",
            Self::InvalidLanguage { .. } => "InvalidLanguage",
        }
    }
}

/// Application-specific errors
#[derive(Debug, thiserror::Error)]
pub enum ApplicationError {
    /// The request was refused by a validation step
    #[error(transparent)]
    Rejected(#[from] CreateLoanApplicationError),

    /// A collaborator failed; not recoverable by the caller
    #[error("Collaborator failure: {0}")]
    Collaborator(#[from] DomainError),
}

impl ApplicationError {
    /// The refusal reason, if this is a validation failure
    pub fn as_rejection(&self) -> Option<&CreateLoanApplicationError> {
        match self {
            Self::Rejected(rejection) => Some(rejection),
            Self::Collaborator(_) => None,
        }
    }
}
