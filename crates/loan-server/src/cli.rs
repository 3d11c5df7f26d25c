//! Command-line arguments

use clap::Parser;
use loan_origination::{
    ConfigError, ServiceConfig,
    config::{
        DEFAULT_AUTHENTICATION_URL, DEFAULT_BIND_ADDRESS, DEFAULT_LOG_LEVEL,
        DEFAULT_MAX_BODY_BYTES, DEFAULT_MERCHANT_HEADER, DEFAULT_MESSAGE_CHANNEL_CAPACITY,
    },
};
use std::{net::SocketAddr, path::PathBuf};

/// Every flag falls back to a `LOAN_*` environment variable
#[derive(Debug, Clone, Parser)]
#[command(
    name = "loan-origination-server",
    about = "Admit loan applications over HTTP and line-delimited messages",
    version
)]
pub struct Args {
    /// Address the HTTP server listens on
    #[arg(long, env = "LOAN_BIND_ADDRESS", default_value = DEFAULT_BIND_ADDRESS)]
    pub bind_address: SocketAddr,

    /// Authentication URL returned with every created application
    #[arg(long, env = "LOAN_AUTHENTICATION_URL", default_value = DEFAULT_AUTHENTICATION_URL)]
    pub authentication_url: String,

    /// Header carrying the caller's merchant id
    #[arg(long, env = "LOAN_MERCHANT_HEADER", default_value = DEFAULT_MERCHANT_HEADER)]
    pub merchant_header: String,

    /// Largest accepted HTTP request body, in bytes
    #[arg(long, env = "LOAN_MAX_BODY_BYTES", default_value_t = DEFAULT_MAX_BODY_BYTES)]
    pub max_body_bytes: usize,

    /// Capacity of the request and reply channels
    #[arg(
        long,
        env = "LOAN_MESSAGE_CHANNEL_CAPACITY",
        default_value_t = DEFAULT_MESSAGE_CHANNEL_CAPACITY
    )]
    pub message_channel_capacity: usize,

    /// JSON catalog of merchants and their products
    #[arg(long, env = "LOAN_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Log filter, overridden by RUST_LOG
    #[arg(long, env = "LOAN_LOG_LEVEL", default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,

    /// Answer request messages read line by line from stdin
    #[arg(long, env = "LOAN_STDIN_MESSAGES")]
    pub stdin_messages: bool,
}

impl Args {
    /// Build and validate the service configuration
    pub fn to_config(&self) -> Result<ServiceConfig, ConfigError> {
        let mut config = ServiceConfig::new()
            .with_bind_address(self.bind_address)
            .with_authentication_url(self.authentication_url.clone())
            .with_merchant_header(self.merchant_header.clone())
            .with_max_body_bytes(self.max_body_bytes)
            .with_message_channel_capacity(self.message_channel_capacity)
            .with_log_level(self.log_level.clone());
        if let Some(path) = &self.catalog {
            config = config.with_catalog_path(path.clone());
        }
        config.validate()?;
        Ok(config)
    }
}
