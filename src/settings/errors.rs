// 3rd party crates
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid log level: {0}. Must be one of: error, warn, info, debug, trace")]
    InvalidLogLevel(String),
    #[error("Invalid listen address '{0}'")]
    InvalidListenAddress(String),
    #[error("TLS needs both tls_cert_path and tls_key_path")]
    IncompleteTls,
    #[error("Webhook group name must not be empty")]
    MissingGroupName,
    #[error("Invalid DNSPod endpoint '{0}'")]
    InvalidEndpoint(String),
    #[error("DNSPod max_retries must be at most {max}, got {got}")]
    TooManyRetries { max: u32, got: u32 },
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Configuration validation failed: {0}")]
    Validation(#[from] ValidationError),
}
