//! DNSPod provider backed by the Tencent Cloud API v3.

pub mod constants;
pub mod errors;
pub mod impls;
pub mod models;
pub mod signing;
pub mod types;

pub use errors::DnsPodError;
pub use types::{Credentials, DnsPodClient, DnsPodOptions};
