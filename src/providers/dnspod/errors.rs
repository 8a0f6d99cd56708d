// 3rd party crates
use thiserror::Error;

// Current module imports
use super::constants::ERROR_CODE_RATE_LIMITED;

/// Custom error type for DNSPod operations.
#[derive(Debug, Error)]
pub enum DnsPodError {
    #[error("DNSPod credentials are incomplete: {0} is empty")]
    InvalidCredentials(&'static str),

    #[error("Invalid DNSPod endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("HTTP client error: {0}")]
    HttpClientBuild(#[source] reqwest::Error),

    #[error("Failed to sign {action} request: {message}")]
    Signing { action: String, message: String },

    #[error("Failed to encode {action} request: {source}")]
    Encode {
        action: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to send {action} request: {source}")]
    Transport {
        action: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{action} failed with HTTP {status}: {body}")]
    Http {
        action: String,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Failed to parse {action} response: {message}")]
    Decode { action: String, message: String },

    #[error("{action} rejected by DNSPod [{code}]: {message} (request id: {request_id})")]
    Api {
        action: String,
        code: String,
        message: String,
        request_id: String,
    },

    #[error("{action} still rate limited after {attempts} attempts")]
    RateLimited { action: String, attempts: u32 },
}

impl DnsPodError {
    /// Whether the transport retry loop should try the call again.
    pub fn is_retryable(&self) -> bool {
        match self {
            DnsPodError::Api { code, .. } => code.starts_with(ERROR_CODE_RATE_LIMITED),
            DnsPodError::Transport { source, .. } => source.is_connect() || source.is_timeout(),
            _ => false,
        }
    }

    /// The API error code, if DNSPod answered with one.
    pub fn api_code(&self) -> Option<&str> {
        match self {
            DnsPodError::Api { code, .. } => Some(code),
            _ => None,
        }
    }
}
