// Standard library
use std::sync::Arc;

// 3rd party crates
use async_trait::async_trait;
use kube::Config;
use tokio::sync::broadcast;
use tracing::{debug, error, info};

// Project imports
use crate::providers::dnspod::{Credentials, DnsPodClient, DnsPodOptions};
use crate::providers::{DnsProvider, TxtRecord};
use crate::secrets::{KubeSecretStore, SecretError, SecretStore};
use crate::utility::cache::ClientCache;
use crate::utility::domain::{extract_domain_name, extract_record_name, ZoneLookup};

// Current module imports
use super::constants::{ACTION_CLEANUP, ACTION_PRESENT, SOLVER_NAME};
use super::errors::{ConfigError, SolverError};
use super::traits::Solver;
use super::types::{
    ChallengeAction, ChallengeRequest, DnsPodSolver, IssuerConfig, SecretKeySelector,
};

impl ChallengeAction {
    pub fn parse(action: &str) -> Option<Self> {
        match action {
            ACTION_PRESENT => Some(Self::Present),
            ACTION_CLEANUP => Some(Self::CleanUp),
            _ => None,
        }
    }
}

impl ChallengeRequest {
    pub fn challenge_action(&self) -> Option<ChallengeAction> {
        ChallengeAction::parse(&self.action)
    }
}

impl SecretKeySelector {
    fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.key.trim().is_empty()
    }
}

impl IssuerConfig {
    /// Decodes and checks the raw `config` of a challenge.
    pub fn from_json(config: Option<&serde_json::Value>) -> Result<Self, ConfigError> {
        let raw = match config {
            Some(value) if !value.is_null() => value,
            _ => return Err(ConfigError::MissingConfig),
        };

        let config: IssuerConfig = serde_json::from_value(raw.clone())?;
        if !config.secret_id_ref.is_complete() {
            return Err(ConfigError::MissingSecretRef("secretIdRef"));
        }
        if !config.secret_key_ref.is_complete() {
            return Err(ConfigError::MissingSecretRef("secretKeyRef"));
        }
        Ok(config)
    }
}

impl DnsPodSolver {
    /// Builds an uninitialized solver. Requests fail until
    /// [`Solver::initialize`] or [`DnsPodSolver::with_secret_store`]
    /// supplies a secret store.
    pub fn new(options: DnsPodOptions, zones: Arc<dyn ZoneLookup>) -> Self {
        Self {
            secrets: None,
            zones,
            clients: Arc::new(ClientCache::new(options)),
        }
    }

    pub fn with_secret_store(mut self, secrets: Arc<dyn SecretStore>) -> Self {
        self.secrets = Some(secrets);
        self
    }

    async fn read_secret(
        secrets: &dyn SecretStore,
        namespace: &str,
        selector: &SecretKeySelector,
    ) -> Result<String, SecretError> {
        let bytes = secrets
            .get_secret(namespace, &selector.name, &selector.key)
            .await?;
        let value = String::from_utf8(bytes).map_err(|_| SecretError::NotUtf8 {
            namespace: namespace.to_string(),
            name: selector.name.clone(),
            key: selector.key.clone(),
        })?;
        Ok(value.trim().to_string())
    }

    /// Resolves everything a record operation needs for `request`.
    async fn prepare(
        &self,
        request: &ChallengeRequest,
    ) -> Result<(Arc<DnsPodClient>, TxtRecord, Option<u64>), SolverError> {
        let secrets = self.secrets.as_deref().ok_or(SolverError::NotInitialized)?;
        let config = IssuerConfig::from_json(request.config.as_ref())?;

        let namespace = request.resource_namespace.as_str();
        let credentials = Credentials {
            secret_id: Self::read_secret(secrets, namespace, &config.secret_id_ref).await?,
            secret_key: Self::read_secret(secrets, namespace, &config.secret_key_ref).await?,
        };

        let domain = extract_domain_name(self.zones.as_ref(), &request.resolved_zone).await;
        let sub_domain = extract_record_name(&request.resolved_fqdn, &domain);
        debug!(
            fqdn = %request.resolved_fqdn,
            domain = %domain,
            sub_domain = %sub_domain,
            "Resolved record name"
        );

        let client = self.clients.get_or_create(&credentials).await?;
        let record = TxtRecord::new(domain, sub_domain, request.key.as_str());
        Ok((client, record, config.ttl))
    }
}

#[async_trait]
impl Solver for DnsPodSolver {
    fn name(&self) -> &str {
        SOLVER_NAME
    }

    async fn initialize(
        &mut self,
        cluster: &Config,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), SolverError> {
        self.secrets = Some(Arc::new(KubeSecretStore::new(cluster.clone())?));

        let clients = Arc::clone(&self.clients);
        tokio::spawn(async move {
            // Closed senders count as shutdown too.
            let _ = shutdown.recv().await;
            clients.clear().await;
        });

        info!("DNSPod solver initialized");
        Ok(())
    }

    async fn present(&self, request: &ChallengeRequest) -> Result<(), SolverError> {
        info!(
            fqdn = %request.resolved_fqdn,
            zone = %request.resolved_zone,
            "Presenting challenge record"
        );

        let result: Result<(), SolverError> = async {
            let (client, record, ttl) = self.prepare(request).await?;
            client.create_txt_record(&record, ttl).await?;
            Ok(())
        }
        .await;

        match &result {
            Ok(()) => info!(
                fqdn = %request.resolved_fqdn,
                zone = %request.resolved_zone,
                "Presented challenge record"
            ),
            Err(e) => error!(
                fqdn = %request.resolved_fqdn,
                zone = %request.resolved_zone,
                error = %e,
                "Failed to present challenge record"
            ),
        }
        result
    }

    async fn cleanup(&self, request: &ChallengeRequest) -> Result<(), SolverError> {
        info!(
            fqdn = %request.resolved_fqdn,
            zone = %request.resolved_zone,
            "Cleaning up challenge record"
        );

        let result: Result<usize, SolverError> = async {
            let (client, record, _) = self.prepare(request).await?;
            Ok(client.delete_txt_record(&record).await?)
        }
        .await;

        match &result {
            Ok(deleted) => info!(
                fqdn = %request.resolved_fqdn,
                zone = %request.resolved_zone,
                deleted = deleted,
                "Cleaned up challenge record"
            ),
            Err(e) => error!(
                fqdn = %request.resolved_fqdn,
                zone = %request.resolved_zone,
                error = %e,
                "Failed to clean up challenge record"
            ),
        }
        result.map(|_| ())
    }
}
