//! Domain entities
//!
//! Objects with identity. Merchants and products are owned by their catalogs
//! and read-only here; a loan application only exists once admitted.

mod loan_application;
mod merchant;
mod product;

pub use loan_application::LoanApplication;
pub use merchant::Merchant;
pub use product::Product;
