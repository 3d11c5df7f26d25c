//! Asynchronous request/reply transport
//!
//! Raw JSON payloads arrive on an inbound channel and replies leave on an
//! outbound channel, correlated by a caller-supplied token. The broker that
//! fills and drains those channels is outside this crate.

pub mod request_reply;

pub use request_reply::{LoanApplicationMessageHandler, MessageChannels};
