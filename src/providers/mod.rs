pub mod dnspod;
pub mod traits;
pub mod types;

pub use traits::DnsProvider;
pub use types::{RecordEntry, TxtRecord};
