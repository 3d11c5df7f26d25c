//! Loan origination server
//!
//! Wires [`loan_origination`] into a runnable process: command-line and
//! environment configuration, catalog seeding, the HTTP router and an
//! optional stdin/stdout bridge for the request/reply worker.

pub mod app;
pub mod cli;

pub use app::{bridge_lines, build_use_case};
pub use cli::Args;
