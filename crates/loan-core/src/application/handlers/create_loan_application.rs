//! Loan application admission use case

use std::{fmt, sync::Arc};

use crate::{
    application::{
        ApplicationResult, CreateLoanApplicationError,
        commands::{CreateLoanApplicationCommand, CreateLoanApplicationResponse},
    },
    domain::{
        DomainError, Language, LoanApplication, Merchant, PositiveAmount, Product,
        PurchaseAmountInRangePolicy,
        ports::{LoanApplicationIdGenerator, LoanApplicationRepository, MerchantLookup, ProductLookup},
    },
};

/// Validates a purchase against merchant and product rules and admits it.
///
/// Steps run in a fixed order and stop at the first failure:
///
/// 1. resolve the merchant
/// 2. resolve the product under that merchant
/// 3. check the amount is non-negative
/// 4. check the amount lies in the effective merchant/product range
/// 5. check the language is supported
///
/// Only then is an identifier generated and the application persisted (when
/// a repository is configured). Holds no mutable state; one instance serves
/// any number of concurrent callers.
pub struct CreateLoanApplication {
    id_generator: Arc<dyn LoanApplicationIdGenerator>,
    merchants: Arc<dyn MerchantLookup>,
    products: Arc<dyn ProductLookup>,
    repository: Option<Arc<dyn LoanApplicationRepository>>,
    policy: PurchaseAmountInRangePolicy,
}

impl CreateLoanApplication {
    pub fn new(
        id_generator: Arc<dyn LoanApplicationIdGenerator>,
        merchants: Arc<dyn MerchantLookup>,
        products: Arc<dyn ProductLookup>,
    ) -> Self {
        Self {
            id_generator,
            merchants,
            products,
            repository: None,
            policy: PurchaseAmountInRangePolicy::new(),
        }
    }

    /// Persist admitted applications through `repository`
    pub fn with_repository(mut self, repository: Arc<dyn LoanApplicationRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    pub fn execute(
        &self,
        command: CreateLoanApplicationCommand,
    ) -> ApplicationResult<CreateLoanApplicationResponse> {
        let merchant = self.resolve_merchant(&command)?;
        let product = self.resolve_product(&merchant, &command)?;
        let purchase_amount = Self::validate_purchase_amount(command.purchase_amount)?;
        let purchase_amount =
            self.validate_purchase_amount_in_range(purchase_amount, &merchant, &product)?;
        let language = Self::validate_language(command.language)?;

        let loan_application_id = self.id_generator.generate_id();
        let application = LoanApplication::new(
            loan_application_id.clone(),
            merchant.merchant_id().clone(),
            product.product_id().clone(),
            language,
            purchase_amount,
        );

        if let Some(repository) = &self.repository {
            repository.persist(application)?;
        }

        Ok(CreateLoanApplicationResponse {
            loan_application_id,
        })
    }

    fn resolve_merchant(&self, command: &CreateLoanApplicationCommand) -> ApplicationResult<Merchant> {
        self.merchants
            .find_merchant(&command.merchant_id)?
            .ok_or_else(|| {
                CreateLoanApplicationError::MerchantNotFound {
                    merchant_id: command.merchant_id.clone(),
                }
                .into()
            })
    }

    fn resolve_product(
        &self,
        merchant: &Merchant,
        command: &CreateLoanApplicationCommand,
    ) -> ApplicationResult<Product> {
        self.products
            .find_product(merchant.merchant_id(), &command.product_id)?
            .ok_or_else(|| {
                CreateLoanApplicationError::ProductNotFound {
                    merchant_id: merchant.merchant_id().clone(),
                    product_id: command.product_id.clone(),
                }
                .into()
            })
    }

    fn validate_purchase_amount(amount: i64) -> Result<PositiveAmount, CreateLoanApplicationError> {
        PositiveAmount::of(amount)
            .map_err(|_| CreateLoanApplicationError::InvalidPurchaseAmount { amount })
    }

    fn validate_purchase_amount_in_range(
        &self,
        amount: PositiveAmount,
        merchant: &Merchant,
        product: &Product,
    ) -> ApplicationResult<PositiveAmount> {
        match self.policy.validate(amount, merchant, product) {
            Ok(amount) => Ok(amount),
            Err(DomainError::OutOfRange { amount, min, max }) => {
                Err(CreateLoanApplicationError::PurchaseAmountOutOfRange { amount, min, max }.into())
            }
            Err(other) => Err(other.into()),
        }
    }

    fn validate_language(language: String) -> Result<Language, CreateLoanApplicationError> {
        Language::of(&language).map_err(|_| CreateLoanApplicationError::InvalidLanguage { language })
    }
}

impl fmt::Debug for CreateLoanApplication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateLoanApplication")
            .field("persisting", &self.repository.is_some())
            .finish_non_exhaustive()
    }
}
