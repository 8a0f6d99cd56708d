// Standard library
use std::sync::Arc;

// 3rd party crates
use serde::{Deserialize, Serialize};

// Project imports
use crate::secrets::SecretStore;
use crate::utility::cache::ClientCache;
use crate::utility::domain::ZoneLookup;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChallengeAction {
    Present,
    CleanUp,
}

/// A challenge as delivered by cert-manager.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChallengeRequest {
    pub uid: String,
    pub action: String,
    #[serde(rename = "type")]
    pub challenge_type: String,
    pub dns_name: String,
    pub key: String,
    pub resource_namespace: String,
    #[serde(rename = "resolvedFQDN")]
    pub resolved_fqdn: String,
    pub resolved_zone: String,
    pub allow_ambient_credentials: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<serde_json::Value>,
}

/// Reference to one key of a secret in the challenge's namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretKeySelector {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub key: String,
}

/// Per-issuer solver configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuerConfig {
    #[serde(default)]
    pub secret_id_ref: SecretKeySelector,
    #[serde(default)]
    pub secret_key_ref: SecretKeySelector,
    /// Record TTL in seconds; DNSPod's default when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u64>,
}

pub struct DnsPodSolver {
    pub(super) secrets: Option<Arc<dyn SecretStore>>,
    pub(super) zones: Arc<dyn ZoneLookup>,
    pub(super) clients: Arc<ClientCache>,
}
