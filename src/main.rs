// Standard library
use std::process::ExitCode;
use std::sync::Arc;

// 3rd party crates
use tokio::signal::ctrl_c;
use tokio::sync::broadcast;
use tracing::{error, info};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

// Project imports
use dnspod_webhook::functions::run;
use dnspod_webhook::settings::types::ConfigManager;

/// Noisy dependencies only report errors.
const QUIET_TARGETS: [&str; 7] = [
    "hyper=error",
    "hyper_util=error",
    "reqwest=error",
    "hickory_proto=error",
    "hickory_resolver=error",
    "kube_client=error",
    "rustls=error",
];

/// Entry point of the DNSPod webhook.
///
/// Loads settings, starts the cert-manager webhook server and keeps serving
/// challenge requests until Ctrl+C.
#[tokio::main]
async fn main() -> ExitCode {
    // loads the .env file from the current directory or parents.
    dotenvy::dotenv_override().ok();

    let config: Arc<ConfigManager> = match ConfigManager::new() {
        Ok(config) => Arc::new(config),
        Err(e) => {
            eprintln!("Failed to initialize configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // setup logging.
    let log_level: String = config.get_log_level();

    let mut filter: EnvFilter = EnvFilter::builder()
        .with_default_directive(LevelFilter::ERROR.into())
        .parse_lossy(log_level);
    for target in QUIET_TARGETS {
        if let Ok(directive) = target.parse() {
            filter = filter.add_directive(directive);
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_level(true)
        .init();

    info!("⚙️ Settings have been loaded from {:?}", config.config_path);

    // Create a broadcast channel for shutdown signal
    let (shutdown_tx, _) = broadcast::channel(1);
    let shutdown_tx_clone = shutdown_tx.clone();

    // Handle Ctrl+C
    tokio::spawn(async move {
        if let Err(e) = ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            return;
        }
        info!("Received shutdown signal, initiating graceful shutdown...");
        let _ = shutdown_tx_clone.send(());
    });

    let code = match run(config, shutdown_tx.subscribe()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Application error: {}", e);
            ExitCode::FAILURE
        }
    };

    info!("Shutdown complete.");
    code
}
