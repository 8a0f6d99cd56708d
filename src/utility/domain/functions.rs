// 3rd party crates
use tracing::{debug, warn};

// Current module imports
use super::errors::DomainError;
use super::traits::ZoneLookup;

/// Strips the trailing root dot of an FQDN, if any.
pub fn un_fqdn(name: &str) -> &str {
    name.strip_suffix('.').unwrap_or(name)
}

/// Every ancestor of `name` starting with `name` itself, in FQDN form.
fn zone_candidates(name: &str) -> Vec<String> {
    let labels: Vec<&str> = un_fqdn(name)
        .split('.')
        .filter(|label| !label.is_empty())
        .collect();

    (0..labels.len())
        .map(|start| format!("{}.", labels[start..].join(".")))
        .collect()
}

/// Walks up from `fqdn` and returns the first name that is a zone apex,
/// in FQDN form.
pub async fn find_zone_apex(lookup: &dyn ZoneLookup, fqdn: &str) -> Result<String, DomainError> {
    for candidate in zone_candidates(fqdn) {
        if lookup.is_zone_apex(&candidate).await? {
            debug!(fqdn = %fqdn, zone = %candidate, "Found zone apex");
            return Ok(candidate);
        }
    }
    Err(DomainError::NoZoneFound(fqdn.to_string()))
}

/// Resolves the registrable domain owning `zone`, without a trailing dot.
///
/// Falls back to `zone` itself when the apex cannot be determined.
pub async fn extract_domain_name(lookup: &dyn ZoneLookup, zone: &str) -> String {
    match find_zone_apex(lookup, zone).await {
        Ok(apex) => un_fqdn(&apex).to_string(),
        Err(e) => {
            warn!(zone = %zone, error = %e, "Zone apex lookup failed, using zone as domain");
            un_fqdn(zone).to_string()
        }
    }
}

/// Returns the labels of `fqdn` in front of `domain`.
///
/// When `domain` is not a dot-separated suffix of `fqdn`, the whole name is
/// used as the record name.
pub fn extract_record_name(fqdn: &str, domain: &str) -> String {
    let name = un_fqdn(fqdn);
    let suffix = format!(".{}", un_fqdn(domain));
    match name.strip_suffix(suffix.as_str()) {
        Some(prefix) if !prefix.is_empty() => prefix.to_string(),
        _ => name.to_string(),
    }
}
