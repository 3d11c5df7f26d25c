//! Data Transfer Objects (DTOs) for serialization
//!
//! Wire shapes of the transport bindings. DTOs keep serialization concerns
//! out of the domain layer and convert into application commands.

pub mod loan_application_dto;

pub use loan_application_dto::{
    CreateLoanApplicationMessage, CreateLoanApplicationReply, CreateLoanApplicationRestRequest,
    CreateLoanApplicationRestResponse, ErrorDto,
};
