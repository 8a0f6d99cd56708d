// 3rd party crates
use async_trait::async_trait;
use hickory_resolver::error::ResolveErrorKind;
use hickory_resolver::proto::rr::{Name, RecordType};
use hickory_resolver::TokioAsyncResolver;
use tracing::trace;

// Current module imports
use super::errors::DomainError;
use super::traits::ZoneLookup;

/// [`ZoneLookup`] over the host's recursive nameservers.
pub struct HickoryZoneLookup {
    resolver: TokioAsyncResolver,
}

impl HickoryZoneLookup {
    /// Uses the system resolver configuration (`/etc/resolv.conf` on unix).
    pub fn from_system_conf() -> Result<Self, DomainError> {
        let resolver = TokioAsyncResolver::tokio_from_system_conf()
            .map_err(|e| DomainError::ResolverInit(e.to_string()))?;
        Ok(Self { resolver })
    }
}

#[async_trait]
impl ZoneLookup for HickoryZoneLookup {
    async fn is_zone_apex(&self, name: &str) -> Result<bool, DomainError> {
        let zone = Name::from_ascii(name).map_err(|e| DomainError::InvalidName {
            name: name.to_string(),
            reason: e.to_string(),
        })?;

        match self.resolver.soa_lookup(zone.clone()).await {
            Ok(lookup) => {
                let found = lookup.as_lookup().record_iter().any(|record| {
                    record.record_type() == RecordType::SOA && *record.name() == zone
                });
                trace!(name = %name, found = found, "SOA lookup answered");
                Ok(found)
            }
            Err(e) => match e.kind() {
                ResolveErrorKind::NoRecordsFound { .. } => Ok(false),
                _ => Err(DomainError::LookupFailed {
                    name: name.to_string(),
                    reason: e.to_string(),
                }),
            },
        }
    }
}
