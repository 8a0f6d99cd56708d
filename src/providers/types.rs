/// A TXT record as the challenge handler wants it to exist (or not exist)
/// at the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxtRecord {
    /// Registrable domain the record lives under, without a trailing dot.
    pub domain: String,
    /// Record name relative to `domain`.
    pub sub_domain: String,
    /// Challenge token published as the TXT content.
    pub value: String,
}

/// A TXT record as reported back by the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordEntry {
    pub record_id: u64,
    pub value: String,
}

impl TxtRecord {
    pub fn new(
        domain: impl Into<String>,
        sub_domain: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            domain: domain.into(),
            sub_domain: sub_domain.into(),
            value: value.into(),
        }
    }
}
