// Standard library
use std::path::PathBuf;

// 3rd party crates
use serde::Deserialize;

// Project imports
use crate::providers::dnspod::constants::{
    default_endpoint, default_max_retries, default_region, default_retry_base_delay_ms,
};

#[derive(Debug, Deserialize, Clone)]
pub struct Log {
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Server {
    #[serde(default = "default_listen_address")]
    pub listen_address: String,
    /// PEM certificate chain; serving is plain HTTP unless both TLS paths are set.
    #[serde(default)]
    pub tls_cert_path: Option<String>,
    #[serde(default)]
    pub tls_key_path: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Webhook {
    #[serde(default)]
    pub group_name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DnsPodSettings {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_region")]
    pub region: String,
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    #[serde(default = "default_retry_base_delay_ms")]
    pub retry_base_delay_ms: u64,
}

/// Where to find the Kubernetes API. Both unset means in-cluster
/// service account config, falling back to `KUBECONFIG`.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct KubernetesSettings {
    /// Path to a kubeconfig file used instead of inferring the config.
    #[serde(default)]
    pub kubeconfig: Option<String>,
    /// Kubeconfig context; the current context when unset.
    #[serde(default)]
    pub context: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    #[serde(default)]
    pub log: Log,
    #[serde(default)]
    pub server: Server,
    #[serde(default)]
    pub webhook: Webhook,
    #[serde(default)]
    pub dnspod: DnsPodSettings,
    #[serde(default)]
    pub kubernetes: KubernetesSettings,
}

pub(super) fn default_log_level() -> String {
    "info".to_string()
}

pub(super) fn default_listen_address() -> String {
    "0.0.0.0:8443".to_string()
}

/// Loads the application settings once at startup.
#[derive(Debug)]
pub struct ConfigManager {
    pub settings: Settings,
    pub config_path: PathBuf,
}

/// Settings that passed [`Settings::validate`].
#[derive(Debug, Clone)]
pub struct ValidatedSettings(pub(super) Settings);
