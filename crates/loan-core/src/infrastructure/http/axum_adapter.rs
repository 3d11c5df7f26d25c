//! Axum HTTP adapter for loan application admission

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, State, rejection::JsonRejection},
    http::{HeaderMap, HeaderName, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::{
    application::{
        ApplicationError, CreateLoanApplication,
        dto::{CreateLoanApplicationRestRequest, CreateLoanApplicationRestResponse, ErrorDto},
    },
    config::{ConfigError, ServiceConfig},
    domain::MerchantId,
    infrastructure::telemetry,
};

/// Collection path of the loan application resource
pub const LOAN_APPLICATIONS_PATH: &str = "/api/v1/loan-applications";

/// Axum application state
#[derive(Clone)]
pub struct LoanAppState {
    use_case: Arc<CreateLoanApplication>,
    merchant_header: HeaderName,
    authentication_url: Arc<str>,
    max_body_bytes: usize,
}

impl LoanAppState {
    /// Build state from the use case and service configuration
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configured merchant header is not a
    /// valid header name.
    pub fn new(
        use_case: Arc<CreateLoanApplication>,
        config: &ServiceConfig,
    ) -> Result<Self, ConfigError> {
        let merchant_header = HeaderName::try_from(config.merchant_header.as_str()).map_err(
            |e| ConfigError::InvalidValue {
                field: "merchant_header",
                reason: e.to_string(),
            },
        )?;

        Ok(Self {
            use_case,
            merchant_header,
            authentication_url: Arc::from(config.authentication_url.as_str()),
            max_body_bytes: config.max_body_bytes,
        })
    }
}

/// Create the loan origination router
pub fn create_loan_router(state: LoanAppState) -> Router {
    let max_body_bytes = state.max_body_bytes;
    Router::new()
        .route(LOAN_APPLICATIONS_PATH, post(create_loan_application))
        .route("/health", get(health))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Submit a loan application
async fn create_loan_application(
    State(state): State<LoanAppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateLoanApplicationRestRequest>, JsonRejection>,
) -> Result<Response, HttpError> {
    let merchant_id = headers
        .get(&state.merchant_header)
        .and_then(|value| value.to_str().ok())
        .map(MerchantId::new)
        .ok_or_else(|| HttpError::MissingMerchantId(state.merchant_header.as_str().to_string()))?;

    let Json(request) = payload.map_err(|rejection| HttpError::InvalidRequestBody(rejection.body_text()))?;

    let command = request.into_command(merchant_id.clone());
    let response = match state.use_case.execute(command) {
        Ok(response) => response,
        Err(error) => {
            telemetry::record_failure("http", &error);
            return Err(HttpError::Application(error));
        }
    };
    telemetry::record_created("http");

    let loan_application_id = response.loan_application_id.into_inner();
    tracing::info!(
        %merchant_id,
        loan_application_id = %loan_application_id,
        "loan application created"
    );

    let location = format!("{LOAN_APPLICATIONS_PATH}/{loan_application_id}");
    let body = CreateLoanApplicationRestResponse {
        loan_application_id,
        authentication_url: state.authentication_url.to_string(),
    };

    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(body)).into_response())
}

/// Liveness probe
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// HTTP adapter errors
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    #[error("Missing or unreadable {0} header")]
    MissingMerchantId(String),

    #[error("Invalid request body: {0}")]
    InvalidRequestBody(String),

    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl HttpError {
    /// Status code and wire body for this error
    fn status_and_body(&self) -> (StatusCode, ErrorDto) {
        match self {
            Self::MissingMerchantId(_) => (
                StatusCode::BAD_REQUEST,
                ErrorDto::new("MissingMerchantId", self.to_string()),
            ),
            Self::InvalidRequestBody(_) => (
                StatusCode::BAD_REQUEST,
                ErrorDto::new("InvalidRequestBody", self.to_string()),
            ),
            Self::Application(error @ ApplicationError::Rejected(_)) => {
                (StatusCode::BAD_REQUEST, ErrorDto::from(error))
            }
            Self::Application(error @ ApplicationError::Collaborator(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorDto::from(error))
            }
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();

        if status.is_server_error() {
            tracing::error!(error = %self, "loan application failed");
        } else {
            tracing::warn!(error_type = %body.error_type, error = %self, "loan application rejected");
        }

        (status, Json(body)).into_response()
    }
}
