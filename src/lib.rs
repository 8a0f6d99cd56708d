//! cert-manager ACME DNS-01 webhook solver for DNSPod.
//!
//! Publishes and withdraws challenge TXT records through the Tencent Cloud
//! DNSPod API on behalf of cert-manager.

pub mod functions;
pub mod providers;
pub mod secrets;
pub mod server;
pub mod settings;
pub mod solver;
pub mod utility;
