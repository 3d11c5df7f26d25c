//! Loan application request and response payloads

use serde::{Deserialize, Serialize};

use crate::{
    application::{ApplicationError, CreateLoanApplicationCommand, CreateLoanApplicationResponse},
    domain::MerchantId,
};

/// `type` of a reply to a successful admission
pub const SUCCESS_TYPE: &str = "success";

/// `type` of a reply to an undecodable message
pub const DECODING_ERROR_TYPE: &str = "error";

/// `message` of a reply to an undecodable message
pub const DECODING_ERROR_MESSAGE: &str = "DecodingError";

/// `type` reported for collaborator faults
pub const INTERNAL_ERROR_TYPE: &str = "InternalError";

/// HTTP request body; the merchant comes from a header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLoanApplicationRestRequest {
    pub product_id: String,
    pub language: String,
    pub purchase_amount: i64,
}

impl CreateLoanApplicationRestRequest {
    pub fn into_command(self, merchant_id: impl Into<MerchantId>) -> CreateLoanApplicationCommand {
        CreateLoanApplicationCommand::new(
            merchant_id,
            self.product_id,
            self.language,
            self.purchase_amount,
        )
    }
}

/// HTTP response body for a created application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLoanApplicationRestResponse {
    pub loan_application_id: String,
    pub authentication_url: String,
}

/// Error body shared by the transport bindings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDto {
    #[serde(rename = "type")]
    pub error_type: String,
    pub message: String,
}

impl ErrorDto {
    pub fn new(error_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_type: error_type.into(),
            message: message.into(),
        }
    }
}

impl From<&ApplicationError> for ErrorDto {
    fn from(error: &ApplicationError) -> Self {
        match error {
            ApplicationError::Rejected(rejection) => {
                Self::new(rejection.error_type(), rejection.to_string())
            }
            ApplicationError::Collaborator(fault) => Self::new(INTERNAL_ERROR_TYPE, fault.to_string()),
        }
    }
}

/// Inbound message on the request channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLoanApplicationMessage {
    pub correlation_id: String,
    pub merchant_id: String,
    pub product_id: String,
    pub language: String,
    pub purchase_amount: i64,
}

impl CreateLoanApplicationMessage {
    /// Split into the correlation token and the command
    pub fn into_parts(self) -> (String, CreateLoanApplicationCommand) {
        let command = CreateLoanApplicationCommand::new(
            self.merchant_id,
            self.product_id,
            self.language,
            self.purchase_amount,
        );
        (self.correlation_id, command)
    }
}

/// Outbound message on the reply channel
///
/// `message` holds the generated id on success and the error description
/// otherwise. Replies to undecodable payloads carry no correlation id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLoanApplicationReply {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,
    #[serde(rename = "type")]
    pub reply_type: String,
    pub message: String,
}

impl CreateLoanApplicationReply {
    pub fn success(correlation_id: String, response: CreateLoanApplicationResponse) -> Self {
        Self {
            correlation_id: Some(correlation_id),
            reply_type: SUCCESS_TYPE.to_string(),
            message: response.loan_application_id.into_inner(),
        }
    }

    pub fn failure(correlation_id: String, error: &ApplicationError) -> Self {
        let ErrorDto {
            error_type,
            message,
        } = ErrorDto::from(error);
        Self {
            correlation_id: Some(correlation_id),
            reply_type: error_type,
            message,
        }
    }

    pub fn decoding_error() -> Self {
        Self {
            correlation_id: None,
            reply_type: DECODING_ERROR_TYPE.to_string(),
            message: DECODING_ERROR_MESSAGE.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.reply_type == SUCCESS_TYPE
    }
}
