// 3rd party crates
use kube::Config;

/// Reads secrets through the Kubernetes core/v1 API.
///
/// Keeps the resolved [`Config`] rather than a client: each lookup builds
/// its client, so a rotated service account token file is read again.
#[derive(Debug, Clone)]
pub struct KubeSecretStore {
    pub(super) config: Config,
}
