//! Infrastructure layer - External concerns and adapters
//!
//! In-memory implementations of the domain ports, catalog seeding, and the
//! HTTP and message-channel bindings of the use case.

pub mod adapters;
#[cfg(feature = "http-server")]
pub mod http;
#[cfg(feature = "messaging")]
pub mod messaging;
pub mod telemetry;

pub use adapters::*;
