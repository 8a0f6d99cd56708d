use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use wiremock::matchers::{body_partial_json, header, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

use dnspod_webhook::providers::dnspod::DnsPodOptions;
use dnspod_webhook::secrets::{SecretError, SecretStore};
use dnspod_webhook::server::{serve, ChallengePayload, WebhookState};
use dnspod_webhook::solver::{ChallengeRequest, DnsPodSolver, Solver};
use dnspod_webhook::utility::domain::{DomainError, ZoneLookup};

/// Serves the same two credentials for any secret reference.
struct StaticSecrets;

#[async_trait]
impl SecretStore for StaticSecrets {
    async fn get_secret(
        &self,
        namespace: &str,
        name: &str,
        key: &str,
    ) -> Result<Vec<u8>, SecretError> {
        match (namespace, name, key) {
            ("cert-manager", "dnspod", "secret-id") => Ok(b"AKIDexample".to_vec()),
            ("cert-manager", "dnspod", "secret-key") => Ok(b"secretkeyexample\n".to_vec()),
            _ => Err(SecretError::MissingKey {
                namespace: namespace.to_string(),
                name: name.to_string(),
                key: key.to_string(),
            }),
        }
    }
}

struct Zones(HashSet<&'static str>);

#[async_trait]
impl ZoneLookup for Zones {
    async fn is_zone_apex(&self, name: &str) -> Result<bool, DomainError> {
        Ok(self.0.contains(name))
    }
}

fn solver(server: &MockServer, apexes: &[&'static str]) -> DnsPodSolver {
    let options = DnsPodOptions {
        endpoint: server.uri(),
        max_retries: 1,
        retry_base_delay: Duration::from_millis(1),
        ..DnsPodOptions::default()
    };
    DnsPodSolver::new(options, Arc::new(Zones(apexes.iter().copied().collect())))
        .with_secret_store(Arc::new(StaticSecrets))
}

fn challenge(fqdn: &str, zone: &str, key: &str) -> ChallengeRequest {
    ChallengeRequest {
        uid: "9f1c".to_string(),
        action: "Present".to_string(),
        challenge_type: "dns-01".to_string(),
        key: key.to_string(),
        resource_namespace: "cert-manager".to_string(),
        resolved_fqdn: fqdn.to_string(),
        resolved_zone: zone.to_string(),
        config: Some(json!({
            "secretIdRef": { "name": "dnspod", "key": "secret-id" },
            "secretKeyRef": { "name": "dnspod", "key": "secret-key" }
        })),
        ..ChallengeRequest::default()
    }
}

fn ok(body: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "Response": body }))
}

#[tokio::test]
async fn present_creates_txt_record_under_apex() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(header("X-TC-Action", "CreateRecord"))
        .and(body_partial_json(json!({
            "Domain": "example.com",
            "SubDomain": "_acme-challenge",
            "RecordType": "TXT",
            "Value": "abc123"
        })))
        .respond_with(ok(json!({ "RequestId": "r1", "RecordId": 100 })))
        .expect(1)
        .mount(&server)
        .await;

    solver(&server, &["example.com."])
        .present(&challenge(
            "_acme-challenge.example.com.",
            "example.com.",
            "abc123",
        ))
        .await
        .unwrap();
}

#[tokio::test]
async fn present_twice_does_not_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(header("X-TC-Action", "CreateRecord"))
        .respond_with(ok(json!({ "RequestId": "r1", "RecordId": 100 })))
        .expect(2)
        .mount(&server)
        .await;

    let solver = solver(&server, &["example.com."]);
    let request = challenge("_acme-challenge.example.com.", "example.com.", "abc123");

    solver.present(&request).await.unwrap();
    solver.present(&request).await.unwrap();
}

#[tokio::test]
async fn present_in_delegated_subzone_uses_subzone_as_domain() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "Domain": "sub.example.com",
            "SubDomain": "_acme-challenge"
        })))
        .respond_with(ok(json!({ "RequestId": "r1", "RecordId": 5 })))
        .expect(1)
        .mount(&server)
        .await;

    solver(&server, &["sub.example.com.", "example.com."])
        .present(&challenge(
            "_acme-challenge.sub.example.com.",
            "sub.example.com.",
            "abc123",
        ))
        .await
        .unwrap();
}

#[tokio::test]
async fn cleanup_without_records_succeeds() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(header("X-TC-Action", "DescribeRecordList"))
        .and(body_partial_json(json!({
            "Domain": "example.com",
            "Subdomain": "_acme-challenge"
        })))
        .respond_with(ok(json!({
            "RequestId": "r2",
            "Error": {
                "Code": "ResourceNotFound.NoDataOfRecord",
                "Message": "record list is empty"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(header("X-TC-Action", "DeleteRecord"))
        .respond_with(ok(json!({ "RequestId": "r3" })))
        .expect(0)
        .mount(&server)
        .await;

    solver(&server, &["example.com."])
        .cleanup(&challenge(
            "_acme-challenge.example.com.",
            "example.com.",
            "abc123",
        ))
        .await
        .unwrap();
}

#[tokio::test]
async fn cleanup_leaves_other_challenges_alone() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(header("X-TC-Action", "DescribeRecordList"))
        .respond_with(ok(json!({
            "RequestId": "r2",
            "RecordList": [
                { "RecordId": 1, "Value": "abc123", "Name": "_acme-challenge", "Type": "TXT" },
                { "RecordId": 2, "Value": "def456", "Name": "_acme-challenge", "Type": "TXT" }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(header("X-TC-Action", "DeleteRecord"))
        .and(body_partial_json(json!({ "Domain": "example.com", "RecordId": 1 })))
        .respond_with(ok(json!({ "RequestId": "r3" })))
        .expect(1)
        .mount(&server)
        .await;

    solver(&server, &["example.com."])
        .cleanup(&challenge(
            "_acme-challenge.example.com.",
            "example.com.",
            "abc123",
        ))
        .await
        .unwrap();
}

#[tokio::test]
async fn webhook_round_trip_presents_record() {
    let dnspod = MockServer::start().await;
    Mock::given(method("POST"))
        .and(header("X-TC-Action", "CreateRecord"))
        .and(body_partial_json(json!({
            "Domain": "example.com",
            "SubDomain": "_acme-challenge",
            "Value": "abc123"
        })))
        .respond_with(ok(json!({ "RequestId": "r1", "RecordId": 100 })))
        .expect(1)
        .mount(&dnspod)
        .await;

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
    let state = WebhookState {
        group_name: "acme.example.com".to_string(),
        solver: Arc::new(solver(&dnspod, &["example.com."])),
    };
    let handle = tokio::spawn(serve(listener, state, shutdown_rx));

    let request = challenge("_acme-challenge.example.com.", "example.com.", "abc123");
    let reply: ChallengePayload = reqwest::Client::new()
        .post(format!(
            "http://{}/apis/acme.example.com/v1alpha1/dnspod",
            addr
        ))
        .json(&ChallengePayload {
            api_version: "webhook.acme.cert-manager.io/v1alpha1".to_string(),
            kind: "ChallengePayload".to_string(),
            request: Some(request),
            response: None,
        })
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let response = reply.response.unwrap();
    assert!(response.success, "{:?}", response.status);
    assert_eq!(response.uid, "9f1c");

    shutdown_tx.send(()).unwrap();
    handle.await.unwrap().unwrap();
}
