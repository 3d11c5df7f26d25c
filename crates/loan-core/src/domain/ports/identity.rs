//! Identifier generation port

use crate::domain::LoanApplicationId;

/// Issues loan application identifiers.
///
/// Implementations guarantee global uniqueness; callers never check.
pub trait LoanApplicationIdGenerator: Send + Sync {
    /// Produce a fresh identifier
    fn generate_id(&self) -> LoanApplicationId;
}

impl<F> LoanApplicationIdGenerator for F
where
    F: Fn() -> LoanApplicationId + Send + Sync,
{
    fn generate_id(&self) -> LoanApplicationId {
        self()
    }
}
