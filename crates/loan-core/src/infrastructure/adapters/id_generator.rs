//! UUID-backed loan application identifier generator

use uuid::Uuid;

use crate::domain::{LoanApplicationId, ports::LoanApplicationIdGenerator};

/// Issues random (v4) UUIDs in hyphenated form
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidLoanApplicationIdGenerator;

impl UuidLoanApplicationIdGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl LoanApplicationIdGenerator for UuidLoanApplicationIdGenerator {
    fn generate_id(&self) -> LoanApplicationId {
        LoanApplicationId::new(Uuid::new_v4().to_string())
    }
}
