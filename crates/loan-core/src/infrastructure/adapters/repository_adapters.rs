//! In-memory loan application repository

use crate::{
    domain::{
        DomainError, DomainResult, LoanApplication, LoanApplicationId,
        ports::LoanApplicationRepository,
    },
    infrastructure::adapters::InMemoryStore,
};

/// Loan application repository held in memory
///
/// Identifiers are expected to be unique; storing a second application under
/// an existing id fails with [`DomainError::Conflict`] and keeps the first.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLoanApplicationRepository {
    applications: InMemoryStore<LoanApplicationId, LoanApplication>,
}

impl InMemoryLoanApplicationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Find application by ID
    pub fn find(&self, loan_application_id: &LoanApplicationId) -> Option<LoanApplication> {
        self.applications.get(loan_application_id)
    }

    pub fn application_count(&self) -> usize {
        self.applications.count()
    }
}

impl LoanApplicationRepository for InMemoryLoanApplicationRepository {
    fn persist(&self, application: LoanApplication) -> DomainResult<LoanApplication> {
        self.applications
            .insert_if_absent(application.loan_application_id().clone(), application.clone())
            .map_err(|existing| {
                DomainError::conflict(format!(
                    "loan application {} already exists",
                    existing.loan_application_id()
                ))
            })?;
        Ok(application)
    }
}
