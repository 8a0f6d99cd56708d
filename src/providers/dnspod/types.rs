// Standard library
use std::fmt;
use std::time::Duration;

// 3rd party crates
use reqwest::{Client, Url};

/// Identity/secret pair for the Tencent Cloud API.
///
/// `secret_id` doubles as the client cache key.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub secret_id: String,
    pub secret_key: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("secret_id", &self.secret_id)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

/// Connection and retry settings shared by every client the process builds.
#[derive(Debug, Clone)]
pub struct DnsPodOptions {
    pub endpoint: String,
    pub region: String,
    /// Retries after the first attempt for throttled or unreachable calls.
    pub max_retries: u32,
    /// Delay before the first retry, doubled on every further retry.
    pub retry_base_delay: Duration,
}

/// Client for the DNSPod record API.
///
/// Holds configuration only; the first network round trip happens on the
/// first record call.
#[derive(Debug, Clone)]
pub struct DnsPodClient {
    pub(super) credentials: Credentials,
    pub(super) options: DnsPodOptions,
    pub(super) endpoint: Url,
    /// Value of the `host` header as covered by the signature.
    pub(super) host: String,
    pub(super) client: Client,
}
