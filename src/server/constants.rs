// Standard library
use std::time::Duration;

pub const API_VERSION: &str = "v1alpha1";

/// `apiVersion` of the payloads cert-manager exchanges with solvers.
pub const PAYLOAD_API_VERSION: &str = "webhook.acme.cert-manager.io/v1alpha1";
pub const PAYLOAD_KIND: &str = "ChallengePayload";

pub const STATUS_FAILURE: &str = "Failure";
pub const REASON_INTERNAL_ERROR: &str = "InternalError";

/// Time in-flight TLS connections get to finish once shutdown fires.
pub const TLS_SHUTDOWN_GRACE: Duration = Duration::from_secs(10);
