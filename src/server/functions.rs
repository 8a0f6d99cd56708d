// Standard library
use std::io;

// 3rd party crates
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use axum::Router;
use axum_server::tls_rustls::RustlsConfig;
use axum_server::Handle;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

// Project imports
use crate::solver::ChallengeAction;

// Current module imports
use super::constants::{PAYLOAD_API_VERSION, PAYLOAD_KIND, TLS_SHUTDOWN_GRACE};
use super::types::{ApiResourceList, ChallengePayload, ChallengeResponse, WebhookState};

pub fn router(state: WebhookState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/apis/:group/v1alpha1", get(resources))
        .route("/apis/:group/v1alpha1/:solver", post(solve))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serves the webhook on `listener` until `shutdown` fires.
pub async fn serve(
    listener: TcpListener,
    state: WebhookState,
    mut shutdown: broadcast::Receiver<()>,
) -> io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!("🌐 Webhook listening on {}", addr);
    }

    axum::serve(listener, router(state))
        .with_graceful_shutdown(async move {
            let _ = shutdown.recv().await;
            info!("Webhook server shutting down");
        })
        .await
}

/// Serves the webhook over TLS on `listener` until `shutdown` fires.
///
/// In-flight requests get [`TLS_SHUTDOWN_GRACE`] to finish.
pub async fn serve_tls(
    listener: TcpListener,
    tls: RustlsConfig,
    state: WebhookState,
    mut shutdown: broadcast::Receiver<()>,
) -> io::Result<()> {
    let listener = listener.into_std()?;
    if let Ok(addr) = listener.local_addr() {
        info!("🔒 Webhook listening with TLS on {}", addr);
    }

    let handle = Handle::new();
    let shutdown_handle = handle.clone();
    tokio::spawn(async move {
        let _ = shutdown.recv().await;
        info!("Webhook server shutting down");
        shutdown_handle.graceful_shutdown(Some(TLS_SHUTDOWN_GRACE));
    });

    axum_server::from_tcp_rustls(listener, tls)
        .handle(handle)
        .serve(router(state).into_make_service())
        .await
}

async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

async fn resources(
    State(state): State<WebhookState>,
    Path(group): Path<String>,
) -> Result<Json<ApiResourceList>, StatusCode> {
    if group != state.group_name {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(ApiResourceList::for_solver(
        &state.group_name,
        state.solver.name(),
    )))
}

async fn solve(
    State(state): State<WebhookState>,
    Path((group, solver)): Path<(String, String)>,
    Json(payload): Json<ChallengePayload>,
) -> Response {
    if group != state.group_name || solver != state.solver.name() {
        warn!(group = %group, solver = %solver, "Request for unknown solver");
        return StatusCode::NOT_FOUND.into_response();
    }

    let Some(request) = payload.request else {
        return (StatusCode::BAD_REQUEST, "payload carries no request").into_response();
    };
    let Some(action) = request.challenge_action() else {
        return (
            StatusCode::BAD_REQUEST,
            format!("unknown action {:?}", request.action),
        )
            .into_response();
    };

    debug!(uid = %request.uid, action = ?action, "Handling challenge");
    let outcome = match action {
        ChallengeAction::Present => state.solver.present(&request).await,
        ChallengeAction::CleanUp => state.solver.cleanup(&request).await,
    };

    let response = match outcome {
        Ok(()) => ChallengeResponse::succeeded(request.uid),
        Err(e) => ChallengeResponse::failed(request.uid, e.to_string()),
    };

    Json(ChallengePayload {
        api_version: if payload.api_version.is_empty() {
            PAYLOAD_API_VERSION.to_string()
        } else {
            payload.api_version
        },
        kind: PAYLOAD_KIND.to_string(),
        request: None,
        response: Some(response),
    })
    .into_response()
}

#[cfg(test)]
mod tests {
    use std::net::SocketAddr;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use serde_json::json;

    use super::*;
    use crate::solver::{ChallengeRequest, ConfigError, Solver, SolverError};

    /// Succeeds unless the challenge key is `"fail"`.
    #[derive(Default)]
    struct RecordingSolver {
        calls: Mutex<Vec<(ChallengeAction, String)>>,
    }

    #[async_trait]
    impl Solver for RecordingSolver {
        fn name(&self) -> &str {
            "dnspod"
        }

        async fn initialize(
            &mut self,
            _cluster: &kube::Config,
            _shutdown: broadcast::Receiver<()>,
        ) -> Result<(), SolverError> {
            Ok(())
        }

        async fn present(&self, request: &ChallengeRequest) -> Result<(), SolverError> {
            self.record(ChallengeAction::Present, request)
        }

        async fn cleanup(&self, request: &ChallengeRequest) -> Result<(), SolverError> {
            self.record(ChallengeAction::CleanUp, request)
        }
    }

    impl RecordingSolver {
        fn record(
            &self,
            action: ChallengeAction,
            request: &ChallengeRequest,
        ) -> Result<(), SolverError> {
            self.calls
                .lock()
                .unwrap()
                .push((action, request.resolved_fqdn.clone()));
            if request.key == "fail" {
                return Err(ConfigError::MissingConfig.into());
            }
            Ok(())
        }
    }

    async fn spawn_server(
        solver: Arc<RecordingSolver>,
    ) -> (SocketAddr, broadcast::Sender<()>, tokio::task::JoinHandle<io::Result<()>>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = broadcast::channel(1);
        let state = WebhookState {
            group_name: "acme.example.com".to_string(),
            solver,
        };
        let handle = tokio::spawn(serve(listener, state, rx));
        (addr, tx, handle)
    }

    fn payload(action: &str, key: &str) -> serde_json::Value {
        json!({
            "apiVersion": "webhook.acme.cert-manager.io/v1alpha1",
            "kind": "ChallengePayload",
            "request": {
                "uid": "uid-7",
                "action": action,
                "type": "dns-01",
                "dnsName": "example.com",
                "key": key,
                "resourceNamespace": "cert-manager",
                "resolvedFQDN": "_acme-challenge.example.com.",
                "resolvedZone": "example.com.",
                "allowAmbientCredentials": false
            }
        })
    }

    #[tokio::test]
    async fn present_success_is_reported() {
        let solver = Arc::new(RecordingSolver::default());
        let (addr, _tx, _handle) = spawn_server(Arc::clone(&solver)).await;

        let reply: ChallengePayload = reqwest::Client::new()
            .post(format!("http://{}/apis/acme.example.com/v1alpha1/dnspod", addr))
            .json(&payload("Present", "abc123"))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        let response = reply.response.unwrap();
        assert!(response.success);
        assert_eq!(response.uid, "uid-7");
        assert!(response.status.is_none());
        assert_eq!(
            *solver.calls.lock().unwrap(),
            vec![(
                ChallengeAction::Present,
                "_acme-challenge.example.com.".to_string()
            )]
        );
    }

    #[tokio::test]
    async fn cleanup_failure_becomes_status() {
        let solver = Arc::new(RecordingSolver::default());
        let (addr, _tx, _handle) = spawn_server(Arc::clone(&solver)).await;

        let reply: ChallengePayload = reqwest::Client::new()
            .post(format!("http://{}/apis/acme.example.com/v1alpha1/dnspod", addr))
            .json(&payload("CleanUp", "fail"))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        let response = reply.response.unwrap();
        assert!(!response.success);
        let status = response.status.unwrap();
        assert_eq!(status.status, "Failure");
        assert_eq!(status.reason, "InternalError");
        assert_eq!(status.code, 500);
        assert_eq!(status.message, "solver config is missing");
    }

    #[tokio::test]
    async fn unknown_solver_is_not_found() {
        let (addr, _tx, _handle) = spawn_server(Arc::new(RecordingSolver::default())).await;

        let status = reqwest::Client::new()
            .post(format!("http://{}/apis/acme.example.com/v1alpha1/route53", addr))
            .json(&payload("Present", "abc123"))
            .send()
            .await
            .unwrap()
            .status();

        assert_eq!(status, reqwest::StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn unknown_action_is_rejected() {
        let solver = Arc::new(RecordingSolver::default());
        let (addr, _tx, _handle) = spawn_server(Arc::clone(&solver)).await;

        let status = reqwest::Client::new()
            .post(format!("http://{}/apis/acme.example.com/v1alpha1/dnspod", addr))
            .json(&payload("Renew", "abc123"))
            .send()
            .await
            .unwrap()
            .status();

        assert_eq!(status, reqwest::StatusCode::BAD_REQUEST);
        assert!(solver.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn payload_without_request_is_rejected() {
        let (addr, _tx, _handle) = spawn_server(Arc::new(RecordingSolver::default())).await;

        let status = reqwest::Client::new()
            .post(format!("http://{}/apis/acme.example.com/v1alpha1/dnspod", addr))
            .json(&json!({ "apiVersion": "webhook.acme.cert-manager.io/v1alpha1" }))
            .send()
            .await
            .unwrap()
            .status();

        assert_eq!(status, reqwest::StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn discovery_advertises_solver() {
        let (addr, _tx, _handle) = spawn_server(Arc::new(RecordingSolver::default())).await;

        let list: serde_json::Value = reqwest::get(format!(
            "http://{}/apis/acme.example.com/v1alpha1",
            addr
        ))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

        assert_eq!(list["groupVersion"], "acme.example.com/v1alpha1");
        assert_eq!(list["resources"][0]["name"], "dnspod");
        assert_eq!(list["resources"][0]["kind"], "ChallengePayload");
        assert_eq!(list["resources"][0]["verbs"], json!(["create"]));
    }

    #[tokio::test]
    async fn discovery_for_other_group_is_not_found() {
        let (addr, _tx, _handle) = spawn_server(Arc::new(RecordingSolver::default())).await;

        let status = reqwest::get(format!("http://{}/apis/other.example.com/v1alpha1", addr))
            .await
            .unwrap()
            .status();

        assert_eq!(status, reqwest::StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn healthz_answers_and_shutdown_stops_server() {
        let (addr, tx, handle) = spawn_server(Arc::new(RecordingSolver::default())).await;

        let body = reqwest::get(format!("http://{}/healthz", addr))
            .await
            .unwrap()
            .text()
            .await
            .unwrap();
        assert_eq!(body, "ok");

        tx.send(()).unwrap();
        handle.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn tls_listener_serves_healthz() {
        crate::functions::install_crypto_provider();

        let dir = tempfile::tempdir().unwrap();
        let certified = rcgen::generate_simple_self_signed(vec!["localhost".to_string()]).unwrap();
        let cert_path = dir.path().join("tls.crt");
        let key_path = dir.path().join("tls.key");
        std::fs::write(&cert_path, certified.cert.pem()).unwrap();
        std::fs::write(&key_path, certified.key_pair.serialize_pem()).unwrap();
        let tls = RustlsConfig::from_pem_file(&cert_path, &key_path).await.unwrap();

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = broadcast::channel(1);
        let state = WebhookState {
            group_name: "acme.example.com".to_string(),
            solver: Arc::new(RecordingSolver::default()),
        };
        let handle = tokio::spawn(serve_tls(listener, tls, state, rx));

        let body = reqwest::Client::builder()
            .danger_accept_invalid_certs(true)
            .build()
            .unwrap()
            .get(format!("https://{}/healthz", addr))
            .send()
            .await
            .unwrap()
            .text()
            .await
            .unwrap();
        assert_eq!(body, "ok");

        tx.send(()).unwrap();
        handle.await.unwrap().unwrap();
    }
}
