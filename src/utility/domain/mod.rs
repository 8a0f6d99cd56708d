//! Challenge name resolution.
//!
//! Maps the challenge FQDN and the zone cert-manager resolved for it onto
//! the (domain, subdomain) pair DNSPod addresses records by. The domain is
//! the apex of the authoritative zone, found by walking up the name with SOA
//! queries; the subdomain is whatever precedes it in the FQDN.

pub mod errors;
pub mod functions;
pub mod impls;
pub mod traits;

pub use errors::DomainError;
pub use functions::{extract_domain_name, extract_record_name, find_zone_apex, un_fqdn};
pub use impls::HickoryZoneLookup;
pub use traits::ZoneLookup;
