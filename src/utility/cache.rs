// Standard library
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

// 3rd party crates
use tokio::sync::Mutex;
use tracing::debug;

// Project imports
use crate::providers::dnspod::{Credentials, DnsPodClient, DnsPodError, DnsPodOptions};

/// One DNSPod client per secret id, built on first use and kept for the
/// lifetime of the process.
pub struct ClientCache {
    clients: Mutex<HashMap<String, Arc<DnsPodClient>>>,
    options: DnsPodOptions,
}

impl fmt::Debug for ClientCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientCache")
            .field("clients", &"<DnsPodClient map>")
            .field("options", &self.options)
            .finish()
    }
}

impl ClientCache {
    pub fn new(options: DnsPodOptions) -> Self {
        Self {
            clients: Mutex::new(HashMap::new()),
            options,
        }
    }

    /// Returns the client cached for `credentials.secret_id`, building and
    /// caching one on a miss.
    ///
    /// The lock is held across construction, so concurrent first use of one
    /// identity builds a single client.
    pub async fn get_or_create(
        &self,
        credentials: &Credentials,
    ) -> Result<Arc<DnsPodClient>, DnsPodError> {
        let mut clients = self.clients.lock().await;

        if let Some(client) = clients.get(&credentials.secret_id) {
            return Ok(Arc::clone(client));
        }

        let client = Arc::new(DnsPodClient::new(
            credentials.clone(),
            self.options.clone(),
        )?);
        clients.insert(credentials.secret_id.clone(), Arc::clone(&client));
        debug!(
            secret_id = %credentials.secret_id,
            cached = clients.len(),
            "Created DNSPod client"
        );

        Ok(client)
    }

    pub async fn len(&self) -> usize {
        self.clients.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.clients.lock().await.is_empty()
    }

    /// Drops every cached client.
    pub async fn clear(&self) {
        let mut clients = self.clients.lock().await;
        let dropped = clients.len();
        clients.clear();
        debug!("Dropped {} cached DNSPod clients", dropped);
    }
}
