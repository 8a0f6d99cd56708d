// 3rd party crates
use serde::{Deserialize, Serialize};

/// Outer envelope of every Tencent Cloud API v3 response.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(rename = "Response")]
    pub response: ApiResponse<T>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub request_id: String,
    pub error: Option<ApiErrorBody>,
    #[serde(flatten)]
    pub data: T,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct CreateRecordRequest<'a> {
    #[serde(rename = "Domain")]
    pub domain: &'a str,
    #[serde(rename = "SubDomain")]
    pub sub_domain: &'a str,
    #[serde(rename = "RecordType")]
    pub record_type: &'a str,
    #[serde(rename = "RecordLine")]
    pub record_line: &'a str,
    #[serde(rename = "Value")]
    pub value: &'a str,
    #[serde(rename = "TTL", skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateRecordResponse {
    #[serde(default)]
    pub record_id: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct DescribeRecordListRequest<'a> {
    #[serde(rename = "Domain")]
    pub domain: &'a str,
    // Lowercase "d" is what this action expects.
    #[serde(rename = "Subdomain")]
    pub sub_domain: &'a str,
    #[serde(rename = "RecordType")]
    pub record_type: &'a str,
    #[serde(rename = "RecordLine")]
    pub record_line: &'a str,
    #[serde(rename = "Offset")]
    pub offset: u64,
    #[serde(rename = "Limit")]
    pub limit: u64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeRecordListResponse {
    #[serde(default)]
    pub record_count_info: RecordCountInfo,
    #[serde(default)]
    pub record_list: Vec<RecordListItem>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RecordCountInfo {
    /// Records matching the filter across all pages.
    #[serde(default)]
    pub total_count: u64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RecordListItem {
    pub record_id: u64,
    #[serde(default)]
    pub value: String,
    #[serde(default, rename = "Type")]
    pub record_type: String,
}

#[derive(Debug, Serialize)]
pub struct DeleteRecordRequest<'a> {
    #[serde(rename = "Domain")]
    pub domain: &'a str,
    #[serde(rename = "RecordId")]
    pub record_id: u64,
}

#[derive(Debug, Default, Deserialize)]
pub struct DeleteRecordResponse {}
