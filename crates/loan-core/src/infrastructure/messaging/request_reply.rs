//! Loan application request/reply handler

use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::{
    application::{
        ApplicationError, CreateLoanApplication,
        dto::{CreateLoanApplicationMessage, CreateLoanApplicationReply},
    },
    infrastructure::telemetry,
};

/// Both ends a caller keeps when running the handler as a worker
#[derive(Debug)]
pub struct MessageChannels {
    /// Send request payloads here
    pub requests: mpsc::Sender<String>,
    /// Receive reply payloads here
    pub replies: mpsc::Receiver<String>,
}

/// Decodes request messages, runs the use case and encodes replies
#[derive(Debug, Clone)]
pub struct LoanApplicationMessageHandler {
    use_case: Arc<CreateLoanApplication>,
}

impl LoanApplicationMessageHandler {
    pub fn new(use_case: Arc<CreateLoanApplication>) -> Self {
        Self { use_case }
    }

    /// Produce the reply payload for one request payload.
    ///
    /// Undecodable input yields the generic decoding-error reply and never
    /// reaches the use case.
    pub fn handle(&self, payload: &str) -> String {
        let reply = self.reply_to(payload);
        serde_json::to_string(&reply).unwrap_or_else(|e| {
            error!("Failed to serialize reply: {}", e);
            String::from(r#"{"type":"error","message":"InternalError"}"#)
        })
    }

    fn reply_to(&self, payload: &str) -> CreateLoanApplicationReply {
        let message: CreateLoanApplicationMessage = match serde_json::from_str(payload) {
            Ok(message) => message,
            Err(e) => {
                warn!("Failed to decode loan application message: {}", e);
                return CreateLoanApplicationReply::decoding_error();
            }
        };

        let (correlation_id, command) = message.into_parts();
        match self.use_case.execute(command) {
            Ok(response) => {
                telemetry::record_created("messaging");
                info!(
                    correlation_id = %correlation_id,
                    loan_application_id = %response.loan_application_id,
                    "loan application created"
                );
                CreateLoanApplicationReply::success(correlation_id, response)
            }
            Err(error) => {
                telemetry::record_failure("messaging", &error);
                match &error {
                    ApplicationError::Rejected(rejection) => warn!(
                        correlation_id = %correlation_id,
                        error_type = rejection.error_type(),
                        "loan application rejected"
                    ),
                    ApplicationError::Collaborator(fault) => error!(
                        correlation_id = %correlation_id,
                        error = %fault,
                        "loan application failed"
                    ),
                }
                CreateLoanApplicationReply::failure(correlation_id, &error)
            }
        }
    }

    /// Answer every request until the inbound channel closes or the reply
    /// receiver is dropped.
    pub async fn run(self, mut requests: mpsc::Receiver<String>, replies: mpsc::Sender<String>) {
        info!("Loan application message worker started");
        while let Some(payload) = requests.recv().await {
            let reply = self.handle(&payload);
            if replies.send(reply).await.is_err() {
                warn!("Reply channel closed, stopping message worker");
                return;
            }
            debug!("Reply queued");
        }
        info!("Request channel closed, message worker stopped");
    }

    /// Spawn the worker on the current runtime and hand back the caller's ends
    pub fn spawn(self, capacity: usize) -> (MessageChannels, tokio::task::JoinHandle<()>) {
        let (request_tx, request_rx) = mpsc::channel(capacity);
        let (reply_tx, reply_rx) = mpsc::channel(capacity);
        let worker = tokio::spawn(self.run(request_rx, reply_tx));
        (
            MessageChannels {
                requests: request_tx,
                replies: reply_rx,
            },
            worker,
        )
    }
}
