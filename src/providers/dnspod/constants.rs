/// Tencent Cloud API v3 endpoint serving DNSPod.
pub const DNSPOD_API_ENDPOINT: &str = "https://dnspod.tencentcloudapi.com";

/// Service name used in the request signature scope.
pub const DNSPOD_SERVICE: &str = "dnspod";

/// API version every action is pinned to.
pub const DNSPOD_API_VERSION: &str = "2021-03-23";

pub const DEFAULT_REGION: &str = "ap-guangzhou";

pub const RECORD_TYPE_TXT: &str = "TXT";

/// The provider's default routing line, required on every record call.
pub const DEFAULT_RECORD_LINE: &str = "默认";

/// Signature algorithm name.
pub const SIGNING_ALGORITHM: &str = "TC3-HMAC-SHA256";

pub const CONTENT_TYPE_JSON: &str = "application/json; charset=utf-8";

/// Headers covered by the signature, sorted and lowercase.
pub const SIGNED_HEADERS: &str = "content-type;host";

/// Actions
pub const ACTION_CREATE_RECORD: &str = "CreateRecord";
pub const ACTION_DESCRIBE_RECORD_LIST: &str = "DescribeRecordList";
pub const ACTION_DELETE_RECORD: &str = "DeleteRecord";

/// Error code prefix the API uses when throttling a caller.
pub const ERROR_CODE_RATE_LIMITED: &str = "RequestLimitExceeded";

/// Error code returned by `DescribeRecordList` when no record matches.
pub const ERROR_CODE_NO_RECORDS: &str = "ResourceNotFound.NoDataOfRecord";

/// Returned by `CreateRecord` when an identical record is already present.
pub const ERROR_CODE_RECORD_EXISTS: &str = "InvalidParameter.DomainRecordExist";

/// Records requested per `DescribeRecordList` page.
pub const RECORD_LIST_PAGE_SIZE: u64 = 100;

/// Retry defaults
pub const DEFAULT_MAX_RETRIES: u32 = 3;
pub const DEFAULT_RETRY_BASE_DELAY_MS: u64 = 1000;

pub fn default_endpoint() -> String {
    DNSPOD_API_ENDPOINT.to_string()
}

pub fn default_region() -> String {
    DEFAULT_REGION.to_string()
}

pub fn default_max_retries() -> u32 {
    DEFAULT_MAX_RETRIES
}

pub fn default_retry_base_delay_ms() -> u64 {
    DEFAULT_RETRY_BASE_DELAY_MS
}
