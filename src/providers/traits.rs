// 3rd party crates
use async_trait::async_trait;
use tracing::{debug, info};

// Current module imports
use super::types::{RecordEntry, TxtRecord};

/// Core trait for a DNS provider that can publish and withdraw ACME
/// challenge TXT records.
///
/// # Implementation Requirements
///
/// Implementors must provide:
/// - Creation of a single TXT record
/// - Listing of TXT records at a name
/// - Deletion of a record by its provider-assigned identifier
///
/// Value-based cleanup is provided on top of those three calls by
/// [`DnsProvider::delete_txt_record`].
///
/// # Example Implementation
///
/// ```rust
/// # use async_trait::async_trait;
/// # use dnspod_webhook::providers::{DnsProvider, RecordEntry, TxtRecord};
/// struct MyProvider;
///
/// #[async_trait]
/// impl DnsProvider for MyProvider {
///     type Error = std::io::Error;
///
///     async fn create_txt_record(
///         &self,
///         _record: &TxtRecord,
///         _ttl: Option<u64>,
///     ) -> Result<u64, Self::Error> {
///         Ok(1)
///     }
///
///     async fn list_txt_records(
///         &self,
///         _domain: &str,
///         _sub_domain: &str,
///     ) -> Result<Vec<RecordEntry>, Self::Error> {
///         Ok(Vec::new())
///     }
///
///     async fn delete_record(&self, _domain: &str, _record_id: u64) -> Result<(), Self::Error> {
///         Ok(())
///     }
///
///     fn get_name(&self) -> &str {
///         "my_provider"
///     }
/// }
/// ```
#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// The error type for this provider.
    ///
    /// This type should encompass transport, authentication, rate limit and
    /// request validation failures.
    type Error: std::error::Error + Send + Sync;

    /// Creates a TXT record.
    ///
    /// No deduplication happens here: calling this twice with the same
    /// record creates two records unless the provider refuses duplicates.
    ///
    /// # Arguments
    ///
    /// * `record` - Domain, subdomain and value of the record
    /// * `ttl` - Record TTL in seconds, `None` for the provider default
    ///
    /// # Returns
    ///
    /// * `Ok(u64)` - The provider-assigned record identifier
    /// * `Err(Self::Error)` - The provider rejected or never saw the request
    async fn create_txt_record(
        &self,
        record: &TxtRecord,
        ttl: Option<u64>,
    ) -> Result<u64, Self::Error>;

    /// Lists TXT records published at `sub_domain` under `domain`.
    ///
    /// An empty name at the provider is an empty list, not an error.
    async fn list_txt_records(
        &self,
        domain: &str,
        sub_domain: &str,
    ) -> Result<Vec<RecordEntry>, Self::Error>;

    /// Deletes one record under `domain` by its identifier.
    async fn delete_record(&self, domain: &str, record_id: u64) -> Result<(), Self::Error>;

    /// Deletes every TXT record at the record's name whose content equals
    /// `record.value`, leaving records with other values untouched.
    ///
    /// A failed list aborts before anything is deleted. A failed delete
    /// aborts the loop, so later matches stay in place.
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - Number of records deleted, zero when nothing matched
    /// * `Err(Self::Error)` - The first error encountered
    async fn delete_txt_record(&self, record: &TxtRecord) -> Result<usize, Self::Error> {
        let entries = self
            .list_txt_records(&record.domain, &record.sub_domain)
            .await?;

        let mut deleted = 0;
        for entry in entries.iter().filter(|entry| entry.value == record.value) {
            self.delete_record(&record.domain, entry.record_id).await?;
            debug!(
                provider = %self.get_name(),
                domain = %record.domain,
                sub_domain = %record.sub_domain,
                record_id = entry.record_id,
                "Deleted TXT record"
            );
            deleted += 1;
        }

        if deleted == 0 {
            info!(
                provider = %self.get_name(),
                domain = %record.domain,
                sub_domain = %record.sub_domain,
                "No TXT record with a matching value, nothing to delete"
            );
        }

        Ok(deleted)
    }

    /// Gets the provider's name, lowercase without spaces.
    fn get_name(&self) -> &str;
}
