//! Use case handlers

pub mod create_loan_application;

pub use create_loan_application::CreateLoanApplication;
