//! HTTP surface cert-manager talks to.
//!
//! cert-manager reaches webhook solvers through the Kubernetes API
//! aggregation layer, which forwards `ChallengePayload` objects to
//! `POST /apis/<group>/v1alpha1/<solver>`.

pub mod constants;
pub mod functions;
pub mod impls;
pub mod types;

pub use functions::{router, serve, serve_tls};
pub use types::{ChallengePayload, ChallengeResponse, ChallengeStatus, WebhookState};
