//! Domain services
//!
//! Stateless business rules operating on several domain objects at once.

mod purchase_amount_policy;

pub use purchase_amount_policy::{AmountRange, PurchaseAmountInRangePolicy};
