//! Domain Value Objects
//!
//! Immutable objects that represent concepts in the domain
//! with no conceptual identity, only defined by their attributes.

mod amount;
mod id;
mod language;

pub use amount::PositiveAmount;
pub use id::{
    Id, IdMarker, LoanApplicationId, LoanApplicationMarker, MerchantId, MerchantMarker,
    ProductId, ProductMarker,
};
pub use language::Language;
