//! Ports - Domain interfaces for external dependencies
//!
//! Defines contracts that infrastructure adapters must implement.
//! These are the domain's view of what it needs from the outside world.
//!
//! Every port is synchronous and `Send + Sync`: the admission pipeline runs
//! to completion without suspension, and one set of collaborators is shared
//! by all concurrent requests.

pub mod catalog;
pub mod identity;
pub mod repositories;

pub use catalog::{MerchantLookup, ProductLookup};
pub use identity::LoanApplicationIdGenerator;
pub use repositories::LoanApplicationRepository;
