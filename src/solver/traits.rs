// 3rd party crates
use async_trait::async_trait;
use kube::Config;
use tokio::sync::broadcast;

// Current module imports
use super::errors::SolverError;
use super::types::ChallengeRequest;

/// Host contract of a cert-manager DNS-01 webhook solver.
#[async_trait]
pub trait Solver: Send + Sync {
    /// Name issuers use to select this solver.
    fn name(&self) -> &str;

    /// Called once before the webhook starts serving.
    ///
    /// `cluster` says how to reach the Kubernetes API; `shutdown` fires
    /// when the process is stopping.
    async fn initialize(
        &mut self,
        cluster: &Config,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), SolverError>;

    /// Publishes the challenge TXT record.
    ///
    /// May be called more than once for the same challenge.
    async fn present(&self, request: &ChallengeRequest) -> Result<(), SolverError>;

    /// Removes the challenge TXT record carrying `request.key`, leaving
    /// other values at the same name alone.
    async fn cleanup(&self, request: &ChallengeRequest) -> Result<(), SolverError>;
}
