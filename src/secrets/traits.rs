// 3rd party crates
use async_trait::async_trait;

// Current module imports
use super::errors::SecretError;

/// Read access to a single key of a namespaced secret.
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// Returns the raw bytes stored under `key` in secret `namespace/name`.
    async fn get_secret(
        &self,
        namespace: &str,
        name: &str,
        key: &str,
    ) -> Result<Vec<u8>, SecretError>;
}
