//! Loan application entity

use serde::{Deserialize, Serialize};

use crate::value_objects::{Language, LoanApplicationId, MerchantId, PositiveAmount, ProductId};

/// Admitted loan application.
///
/// Holds only validated values: the language and purchase amount types can
/// not be built from invalid input. Merchant and product are referenced by
/// id; their bounds are not stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanApplication {
    loan_application_id: LoanApplicationId,
    merchant_id: MerchantId,
    product_id: ProductId,
    language: Language,
    purchase_amount: PositiveAmount,
}

impl LoanApplication {
    /// Assemble an application from validated parts
    pub fn new(
        loan_application_id: LoanApplicationId,
        merchant_id: MerchantId,
        product_id: ProductId,
        language: Language,
        purchase_amount: PositiveAmount,
    ) -> Self {
        Self {
            loan_application_id,
            merchant_id,
            product_id,
            language,
            purchase_amount,
        }
    }

    /// Generator-assigned identifier
    pub fn loan_application_id(&self) -> &LoanApplicationId {
        &self.loan_application_id
    }

    /// Issuing merchant
    pub fn merchant_id(&self) -> &MerchantId {
        &self.merchant_id
    }

    /// Financed product
    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    /// Validated language
    pub fn language(&self) -> Language {
        self.language
    }

    /// Validated, in-range purchase amount
    pub fn purchase_amount(&self) -> PositiveAmount {
        self.purchase_amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loan_application_serializes_camel_case() {
        let application = LoanApplication::new(
            LoanApplicationId::new("la-1"),
            MerchantId::new("123"),
            ProductId::new("456"),
            Language::Nl,
            PositiveAmount::of(4000).unwrap(),
        );

        let json = serde_json::to_value(&application).unwrap();
        assert_eq!(json["loanApplicationId"], "la-1");
        assert_eq!(json["merchantId"], "123");
        assert_eq!(json["productId"], "456");
        assert_eq!(json["language"], "nl");
        assert_eq!(json["purchaseAmount"], 4000);
    }
}
