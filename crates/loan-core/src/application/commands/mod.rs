//! Commands - Write operations that change system state

use serde::{Deserialize, Serialize};

use crate::domain::{LoanApplicationId, MerchantId, ProductId};

/// Submit a purchase for loan admission.
///
/// Language and amount are carried raw; the use case validates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateLoanApplicationCommand {
    pub merchant_id: MerchantId,
    pub product_id: ProductId,
    pub language: String,
    pub purchase_amount: i64,
}

impl CreateLoanApplicationCommand {
    pub fn new(
        merchant_id: impl Into<MerchantId>,
        product_id: impl Into<ProductId>,
        language: impl Into<String>,
        purchase_amount: i64,
    ) -> Self {
        Self {
            merchant_id: merchant_id.into(),
            product_id: product_id.into(),
            language: language.into(),
            purchase_amount,
        }
    }
}

/// Outcome of a successful admission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateLoanApplicationResponse {
    pub loan_application_id: LoanApplicationId,
}
