//! Credential lookup from Kubernetes secrets.

pub mod errors;
pub mod functions;
pub mod impls;
pub mod traits;
pub mod types;

pub use errors::SecretError;
pub use functions::cluster_config;
pub use traits::SecretStore;
pub use types::KubeSecretStore;
