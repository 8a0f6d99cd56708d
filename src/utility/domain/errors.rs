// 3rd party crates
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Failed to create DNS resolver: {0}")]
    ResolverInit(String),

    #[error("Invalid domain name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("SOA lookup for '{name}' failed: {reason}")]
    LookupFailed { name: String, reason: String },

    #[error("Could not find the zone apex for '{0}'")]
    NoZoneFound(String),
}
