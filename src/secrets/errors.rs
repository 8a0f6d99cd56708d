// 3rd party crates
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SecretError {
    #[error("failed to load secret \"{namespace}/{name}\": {reason}")]
    LoadFailed {
        namespace: String,
        name: String,
        reason: String,
    },

    #[error("no key \"{key}\" in secret \"{namespace}/{name}\"")]
    MissingKey {
        namespace: String,
        name: String,
        key: String,
    },

    #[error("key \"{key}\" in secret \"{namespace}/{name}\" is not valid UTF-8")]
    NotUtf8 {
        namespace: String,
        name: String,
        key: String,
    },

    #[error("Kubernetes cluster configuration error: {0}")]
    ClusterConfig(String),

    #[error("Kubernetes client error: {0}")]
    Client(#[source] kube::Error),
}
