//! Loan origination server binary

use clap::Parser;
use loan_origination::infrastructure::{
    http::{LoanAppState, create_loan_router},
    messaging::LoanApplicationMessageHandler,
};
use loan_origination_server::{Args, bridge_lines, build_use_case};
use std::sync::Arc;
use tokio::{io::BufReader, net::TcpListener};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let args = Args::parse();
    let config = args.to_config()?;
    init_logging(&config.log_level);

    let use_case = Arc::new(build_use_case(&config)?);

    if args.stdin_messages {
        let handler = LoanApplicationMessageHandler::new(Arc::clone(&use_case));
        let (channels, _worker) = handler.spawn(config.message_channel_capacity);
        tokio::spawn(async move {
            let stdin = BufReader::new(tokio::io::stdin());
            if let Err(e) = bridge_lines(stdin, tokio::io::stdout(), channels).await {
                error!("Message bridge failed: {}", e);
            }
        });
        info!("Answering loan application messages on stdin");
    }

    let state = LoanAppState::new(use_case, &config)?;
    let app = create_loan_router(state);

    let listener = TcpListener::bind(config.bind_address).await?;
    info!(
        "Loan origination server running on http://{}",
        listener.local_addr()?
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Logs go to stderr so stdout stays free for message replies
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            error!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
