// 3rd party crates
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::Config;
use tracing::{debug, info};

// Project imports
use crate::settings::types::KubernetesSettings;

// Current module imports
use super::errors::SecretError;

/// Resolves how to reach the Kubernetes API server.
///
/// An explicit kubeconfig wins. A context alone selects from `KUBECONFIG`
/// or `~/.kube/config`. With neither, the config is inferred from the
/// in-cluster service account first.
pub async fn cluster_config(settings: &KubernetesSettings) -> Result<Config, SecretError> {
    let kubeconfig_path = settings
        .kubeconfig
        .as_deref()
        .map(str::trim)
        .filter(|path| !path.is_empty());

    let options = KubeConfigOptions {
        context: settings.context.clone(),
        ..KubeConfigOptions::default()
    };

    let config = match (kubeconfig_path, &options.context) {
        (Some(path), _) => {
            debug!(path = %path, "Loading kubeconfig");
            let kubeconfig = Kubeconfig::read_from(path)
                .map_err(|e| SecretError::ClusterConfig(format!("{}: {}", path, e)))?;
            Config::from_custom_kubeconfig(kubeconfig, &options)
                .await
                .map_err(|e| SecretError::ClusterConfig(e.to_string()))?
        }
        (None, Some(context)) => {
            debug!(context = %context, "Loading kubeconfig context");
            Config::from_kubeconfig(&options)
                .await
                .map_err(|e| SecretError::ClusterConfig(e.to_string()))?
        }
        (None, None) => Config::infer()
            .await
            .map_err(|e| SecretError::ClusterConfig(e.to_string()))?,
    };

    info!(cluster_url = %config.cluster_url, "Kubernetes API resolved");
    Ok(config)
}
