//! Repository port for admitted loan applications

use crate::domain::{DomainResult, LoanApplication};

/// Durable storage of admitted applications.
///
/// A failed write is an unrecoverable fault for the request; the use case
/// does not retry.
pub trait LoanApplicationRepository: Send + Sync {
    /// Store the application, returning the stored record
    fn persist(&self, application: LoanApplication) -> DomainResult<LoanApplication>;
}
