// 3rd party crates
use async_trait::async_trait;

// Current module imports
use super::errors::DomainError;

/// Answers whether a name is the apex of a DNS zone.
#[async_trait]
pub trait ZoneLookup: Send + Sync {
    /// `name` is in FQDN trailing-dot form.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - An SOA record owned by exactly `name` exists
    /// * `Ok(false)` - The name exists only inside a parent zone, or not at all
    /// * `Err(DomainError)` - The resolver could not answer
    async fn is_zone_apex(&self, name: &str) -> Result<bool, DomainError>;
}
