//! Outcome counters for the transport bindings
//!
//! Emits `loan_applications_total{transport, outcome}` through the `metrics`
//! facade when the `metrics` feature is enabled; otherwise a no-op.

use crate::application::ApplicationError;

/// Counter name
pub const LOAN_APPLICATIONS_TOTAL: &str = "loan_applications_total";

/// Outcome label for an admitted application
pub const OUTCOME_CREATED: &str = "created";

/// Outcome label for a collaborator fault
pub const OUTCOME_FAULT: &str = "fault";

/// Outcome label for a failed request: the rejection name, or `fault`
pub fn failure_outcome(error: &ApplicationError) -> &'static str {
    match error {
        ApplicationError::Rejected(rejection) => rejection.error_type(),
        ApplicationError::Collaborator(_) => OUTCOME_FAULT,
    }
}

pub fn record_created(transport: &'static str) {
    record(transport, OUTCOME_CREATED);
}

pub fn record_failure(transport: &'static str, error: &ApplicationError) {
    record(transport, failure_outcome(error));
}

#[cfg(feature = "metrics")]
fn record(transport: &'static str, outcome: &'static str) {
    metrics::counter!(LOAN_APPLICATIONS_TOTAL, "transport" => transport, "outcome" => outcome)
        .increment(1);
}

#[cfg(not(feature = "metrics"))]
fn record(_transport: &'static str, _outcome: &'static str) {}
