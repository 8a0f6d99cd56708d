// Standard library
use std::error::Error;
use std::sync::Arc;

// 3rd party crates
use axum_server::tls_rustls::RustlsConfig;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tracing::{debug, info};

// Project imports
use crate::secrets::cluster_config;
use crate::server::{serve, serve_tls, WebhookState};
use crate::settings::types::ConfigManager;
use crate::solver::{DnsPodSolver, Solver};
use crate::utility::domain::HickoryZoneLookup;

/// Installs ring as the process-wide rustls provider.
///
/// reqwest, kube and the TLS listener all share it. Later calls are no-ops.
pub fn install_crypto_provider() {
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        debug!("rustls crypto provider already installed");
    }
}

/// Builds the solver from settings and serves it until shutdown.
pub async fn run(
    config: Arc<ConfigManager>,
    shutdown_rx: broadcast::Receiver<()>,
) -> Result<(), Box<dyn Error>> {
    let settings = config.get_settings();
    install_crypto_provider();

    let zones = HickoryZoneLookup::from_system_conf()?;
    let mut solver = DnsPodSolver::new(settings.dnspod.to_options(), Arc::new(zones));

    let cluster = cluster_config(&settings.kubernetes).await?;
    solver.initialize(&cluster, shutdown_rx.resubscribe()).await?;
    info!(
        "🔑 Solver {:?} ready for group {}",
        solver.name(),
        settings.webhook.group_name
    );

    let listener = TcpListener::bind(&settings.server.listen_address).await?;
    let state = WebhookState {
        group_name: settings.webhook.group_name.clone(),
        solver: Arc::new(solver),
    };

    match (&settings.server.tls_cert_path, &settings.server.tls_key_path) {
        (Some(cert_path), Some(key_path)) => {
            let tls = RustlsConfig::from_pem_file(cert_path, key_path).await?;
            serve_tls(listener, tls, state, shutdown_rx).await?;
        }
        _ => serve(listener, state, shutdown_rx).await?,
    }
    Ok(())
}
