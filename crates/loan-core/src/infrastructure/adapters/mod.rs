//! Infrastructure adapters implementing domain ports
//!
//! These adapters bridge the gap between domain abstractions and
//! concrete infrastructure implementations, following the Ports & Adapters pattern.

pub mod catalog;
pub mod generic_store;
pub mod id_generator;
pub mod repository_adapters;
pub mod seed;

// Re-export commonly used adapters
pub use catalog::{InMemoryMerchantCatalog, InMemoryProductCatalog};
pub use generic_store::InMemoryStore;
pub use id_generator::UuidLoanApplicationIdGenerator;
pub use repository_adapters::InMemoryLoanApplicationRepository;
pub use seed::{CatalogSeed, MerchantSeed, SeedError};
