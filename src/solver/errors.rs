// 3rd party crates
use thiserror::Error;

// Project imports
use crate::providers::dnspod::DnsPodError;
use crate::secrets::SecretError;

/// Problems with the per-issuer solver configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("solver config is missing")]
    MissingConfig,

    #[error("error decoding solver config: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("{0} must name a secret and a key")]
    MissingSecretRef(&'static str),
}

#[derive(Debug, Error)]
pub enum SolverError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Secret(#[from] SecretError),

    #[error("DNSPod request failed: {0}")]
    Provider(#[from] DnsPodError),

    #[error("solver has not been initialized")]
    NotInitialized,
}
