//! Service configuration
//!
//! Builder-style settings shared by the transport bindings and the server
//! binary. Every field has a working default.

use std::{net::SocketAddr, path::PathBuf};

/// Default listen address
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";

/// Default authentication URL echoed in HTTP success responses
pub const DEFAULT_AUTHENTICATION_URL: &str = "www.djf.com";

/// Default header carrying the caller's merchant id
pub const DEFAULT_MERCHANT_HEADER: &str = "X-Custom-MerchantId";

/// Default request body limit (64 KiB)
pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

/// Default capacity of the request and reply channels
pub const DEFAULT_MESSAGE_CHANNEL_CAPACITY: usize = 1024;

/// Default log filter
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl ConfigError {
    fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            reason: reason.into(),
        }
    }
}

/// Loan origination service configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub bind_address: SocketAddr,
    pub authentication_url: String,
    pub merchant_header: String,
    pub max_body_bytes: usize,
    pub message_channel_capacity: usize,
    pub catalog_path: Option<PathBuf>,
    pub log_level: String,
}

impl ServiceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bind_address(mut self, address: SocketAddr) -> Self {
        self.bind_address = address;
        self
    }

    pub fn with_authentication_url(mut self, url: impl Into<String>) -> Self {
        self.authentication_url = url.into();
        self
    }

    pub fn with_merchant_header(mut self, header: impl Into<String>) -> Self {
        self.merchant_header = header.into();
        self
    }

    pub fn with_max_body_bytes(mut self, bytes: usize) -> Self {
        self.max_body_bytes = bytes;
        self
    }

    pub fn with_message_channel_capacity(mut self, capacity: usize) -> Self {
        self.message_channel_capacity = capacity;
        self
    }

    pub fn with_catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_path = Some(path.into());
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Check cross-field constraints
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.merchant_header.is_empty()
            || !self
                .merchant_header
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
        {
            return Err(ConfigError::invalid(
                "merchant_header",
                format!("{:?} is not a valid header name", self.merchant_header),
            ));
        }
        if self.max_body_bytes == 0 {
            return Err(ConfigError::invalid("max_body_bytes", "must be positive"));
        }
        if self.message_channel_capacity == 0 {
            return Err(ConfigError::invalid(
                "message_channel_capacity",
                "must be positive",
            ));
        }
        Ok(())
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from(([127, 0, 0, 1], 8080)),
            authentication_url: DEFAULT_AUTHENTICATION_URL.to_string(),
            merchant_header: DEFAULT_MERCHANT_HEADER.to_string(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            message_channel_capacity: DEFAULT_MESSAGE_CHANNEL_CAPACITY,
            catalog_path: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}
