//! HTTP transport implementations

pub mod axum_adapter;

pub use axum_adapter::{HttpError, LOAN_APPLICATIONS_PATH, LoanAppState, create_loan_router};
