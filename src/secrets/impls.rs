// 3rd party crates
use async_trait::async_trait;
use k8s_openapi::api::core::v1::Secret;
use kube::{Api, Client, Config};
use tracing::{debug, info};

// Current module imports
use super::errors::SecretError;
use super::traits::SecretStore;
use super::types::KubeSecretStore;

impl KubeSecretStore {
    /// Must be called inside a tokio runtime; building a client is checked
    /// once here so a bad TLS or auth setup fails at startup.
    pub fn new(config: Config) -> Result<Self, SecretError> {
        Client::try_from(config.clone()).map_err(SecretError::Client)?;

        info!(cluster_url = %config.cluster_url, "Kubernetes secret store ready");
        Ok(Self { config })
    }

    fn client(&self) -> Result<Client, SecretError> {
        Client::try_from(self.config.clone()).map_err(SecretError::Client)
    }
}

#[async_trait]
impl SecretStore for KubeSecretStore {
    async fn get_secret(
        &self,
        namespace: &str,
        name: &str,
        key: &str,
    ) -> Result<Vec<u8>, SecretError> {
        debug!(namespace = %namespace, name = %name, "Fetching secret");

        let secrets: Api<Secret> = Api::namespaced(self.client()?, namespace);
        let secret = secrets
            .get(name)
            .await
            .map_err(|e| SecretError::LoadFailed {
                namespace: namespace.to_string(),
                name: name.to_string(),
                reason: e.to_string(),
            })?;

        secret
            .data
            .and_then(|mut data| data.remove(key))
            .map(|value| value.0)
            .ok_or_else(|| SecretError::MissingKey {
                namespace: namespace.to_string(),
                name: name.to_string(),
                key: key.to_string(),
            })
    }
}
