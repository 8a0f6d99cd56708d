// Standard library
use std::time::Duration;

// 3rd party crates
use async_trait::async_trait;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error, info, warn};

// Project imports
use crate::providers::traits::DnsProvider;
use crate::providers::types::{RecordEntry, TxtRecord};

// Current module imports
use super::constants::{
    default_endpoint, default_region, ACTION_CREATE_RECORD, ACTION_DELETE_RECORD,
    ACTION_DESCRIBE_RECORD_LIST, CONTENT_TYPE_JSON, DEFAULT_MAX_RETRIES, DEFAULT_RECORD_LINE,
    DEFAULT_RETRY_BASE_DELAY_MS, DNSPOD_API_VERSION, DNSPOD_SERVICE, ERROR_CODE_NO_RECORDS,
    ERROR_CODE_RECORD_EXISTS, RECORD_LIST_PAGE_SIZE, RECORD_TYPE_TXT,
};
use super::errors::DnsPodError;
use super::models::{
    ApiEnvelope, CreateRecordRequest, CreateRecordResponse, DeleteRecordRequest,
    DeleteRecordResponse, DescribeRecordListRequest, DescribeRecordListResponse,
};
use super::signing::authorization;
use super::types::{Credentials, DnsPodClient, DnsPodOptions};

impl Default for DnsPodOptions {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            region: default_region(),
            max_retries: DEFAULT_MAX_RETRIES,
            retry_base_delay: Duration::from_millis(DEFAULT_RETRY_BASE_DELAY_MS),
        }
    }
}

impl DnsPodOptions {
    /// Delay before retry number `attempt` (zero based).
    pub fn backoff(&self, attempt: u32) -> Duration {
        self.retry_base_delay.saturating_mul(2u32.saturating_pow(attempt))
    }
}

impl DnsPodClient {
    /// Builds a client. No request is sent until the first record call.
    pub fn new(credentials: Credentials, options: DnsPodOptions) -> Result<Self, DnsPodError> {
        if credentials.secret_id.trim().is_empty() {
            return Err(DnsPodError::InvalidCredentials("secret id"));
        }
        if credentials.secret_key.trim().is_empty() {
            return Err(DnsPodError::InvalidCredentials("secret key"));
        }

        let endpoint = Url::parse(&options.endpoint).map_err(|e| DnsPodError::InvalidEndpoint {
            endpoint: options.endpoint.clone(),
            reason: e.to_string(),
        })?;
        let host = match (endpoint.host_str(), endpoint.port()) {
            (Some(host), Some(port)) => format!("{}:{}", host, port),
            (Some(host), None) => host.to_string(),
            (None, _) => {
                return Err(DnsPodError::InvalidEndpoint {
                    endpoint: options.endpoint.clone(),
                    reason: "missing host".to_string(),
                })
            }
        };

        let mut headers: HeaderMap = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_JSON));
        headers.insert("x-tc-version", HeaderValue::from_static(DNSPOD_API_VERSION));

        let client: Client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| {
                error!("Failed to build HTTP client: {}", e);
                DnsPodError::HttpClientBuild(e)
            })?;

        Ok(Self {
            credentials,
            options,
            endpoint,
            host,
            client,
        })
    }

    pub fn secret_id(&self) -> &str {
        &self.credentials.secret_id
    }

    /// Runs one API action, retrying throttled and unreachable attempts with
    /// exponential backoff.
    async fn call<P, R>(&self, action: &str, params: &P) -> Result<R, DnsPodError>
    where
        P: Serialize + Sync,
        R: DeserializeOwned + Send,
    {
        let payload = serde_json::to_string(params).map_err(|e| DnsPodError::Encode {
            action: action.to_string(),
            source: e,
        })?;

        let mut attempt: u32 = 0;
        loop {
            match self.send_once(action, &payload).await {
                Err(e) if e.is_retryable() => {
                    if attempt >= self.options.max_retries {
                        error!(
                            action = %action,
                            error = %e,
                            "Giving up after {} retries",
                            attempt
                        );
                        if e.api_code().is_some() {
                            return Err(DnsPodError::RateLimited {
                                action: action.to_string(),
                                attempts: attempt + 1,
                            });
                        }
                        return Err(e);
                    }

                    let delay = self.options.backoff(attempt);
                    attempt += 1;
                    warn!(
                        action = %action,
                        error = %e,
                        retry = attempt,
                        "Retrying in {:?}",
                        delay
                    );
                    tokio::time::sleep(delay).await;
                }
                result => return result,
            }
        }
    }

    async fn send_once<R>(&self, action: &str, payload: &str) -> Result<R, DnsPodError>
    where
        R: DeserializeOwned + Send,
    {
        let timestamp = chrono::Utc::now().timestamp();
        let auth = authorization(
            &self.credentials,
            DNSPOD_SERVICE,
            &self.host,
            payload,
            timestamp,
        )
        .map_err(|message| DnsPodError::Signing {
            action: action.to_string(),
            message,
        })?;

        debug!(action = %action, endpoint = %self.endpoint, "Sending DNSPod request");

        let mut auth_value = HeaderValue::from_str(&auth).map_err(|e| DnsPodError::Signing {
            action: action.to_string(),
            message: e.to_string(),
        })?;
        auth_value.set_sensitive(true);

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(header::AUTHORIZATION, auth_value)
            .header("X-TC-Action", action)
            .header("X-TC-Timestamp", timestamp.to_string())
            .header("X-TC-Region", self.options.region.as_str())
            .body(payload.to_string())
            .send()
            .await
            .map_err(|e| DnsPodError::Transport {
                action: action.to_string(),
                source: e,
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| DnsPodError::Transport {
            action: action.to_string(),
            source: e,
        })?;

        if status != StatusCode::OK {
            return Err(DnsPodError::Http {
                action: action.to_string(),
                status,
                body,
            });
        }

        let envelope: ApiEnvelope<R> =
            serde_json::from_str(&body).map_err(|e| DnsPodError::Decode {
                action: action.to_string(),
                message: format!("{} - Raw: {}", e, body),
            })?;

        let response = envelope.response;
        if let Some(api_error) = response.error {
            return Err(DnsPodError::Api {
                action: action.to_string(),
                code: api_error.code,
                message: api_error.message,
                request_id: response.request_id,
            });
        }

        Ok(response.data)
    }
}

#[async_trait]
impl DnsProvider for DnsPodClient {
    type Error = DnsPodError;

    async fn create_txt_record(
        &self,
        record: &TxtRecord,
        ttl: Option<u64>,
    ) -> Result<u64, Self::Error> {
        info!(
            domain = %record.domain,
            sub_domain = %record.sub_domain,
            "Creating TXT record"
        );

        let request = CreateRecordRequest {
            domain: &record.domain,
            sub_domain: &record.sub_domain,
            record_type: RECORD_TYPE_TXT,
            record_line: DEFAULT_RECORD_LINE,
            value: &record.value,
            ttl,
        };

        let created: Result<CreateRecordResponse, DnsPodError> =
            self.call(ACTION_CREATE_RECORD, &request).await;
        let response = match created {
            Ok(response) => response,
            Err(e) if e.api_code() == Some(ERROR_CODE_RECORD_EXISTS) => {
                let existing = self
                    .list_txt_records(&record.domain, &record.sub_domain)
                    .await?
                    .into_iter()
                    .find(|entry| entry.value == record.value);
                match existing {
                    Some(entry) => {
                        info!(
                            domain = %record.domain,
                            sub_domain = %record.sub_domain,
                            record_id = entry.record_id,
                            "TXT record already present"
                        );
                        return Ok(entry.record_id);
                    }
                    None => return Err(e),
                }
            }
            Err(e) => return Err(e),
        };
        let record_id = response.record_id.unwrap_or_default();

        info!(
            domain = %record.domain,
            sub_domain = %record.sub_domain,
            record_id = record_id,
            "Successfully created TXT record"
        );
        Ok(record_id)
    }

    async fn list_txt_records(
        &self,
        domain: &str,
        sub_domain: &str,
    ) -> Result<Vec<RecordEntry>, Self::Error> {
        let mut records = Vec::new();
        let mut offset = 0;

        loop {
            let request = DescribeRecordListRequest {
                domain,
                sub_domain,
                record_type: RECORD_TYPE_TXT,
                record_line: DEFAULT_RECORD_LINE,
                offset,
                limit: RECORD_LIST_PAGE_SIZE,
            };

            let response: DescribeRecordListResponse =
                match self.call(ACTION_DESCRIBE_RECORD_LIST, &request).await {
                    Ok(response) => response,
                    Err(e) if e.api_code() == Some(ERROR_CODE_NO_RECORDS) => {
                        debug!(
                            domain = %domain,
                            sub_domain = %sub_domain,
                            offset = offset,
                            "No more TXT records at this name"
                        );
                        break;
                    }
                    Err(e) => return Err(e),
                };

            let page_len = response.record_list.len() as u64;
            records.extend(
                response
                    .record_list
                    .into_iter()
                    // Skip anything that is not TXT.
                    .filter(|item| item.record_type.eq_ignore_ascii_case(RECORD_TYPE_TXT))
                    .map(|item| RecordEntry {
                        record_id: item.record_id,
                        value: item.value,
                    }),
            );

            offset += page_len;
            let total = response.record_count_info.total_count;
            if page_len < RECORD_LIST_PAGE_SIZE || (total > 0 && offset >= total) {
                break;
            }
        }

        Ok(records)
    }

    async fn delete_record(&self, domain: &str, record_id: u64) -> Result<(), Self::Error> {
        let request = DeleteRecordRequest { domain, record_id };
        let _: DeleteRecordResponse = self.call(ACTION_DELETE_RECORD, &request).await?;
        Ok(())
    }

    fn get_name(&self) -> &str {
        DNSPOD_SERVICE
    }
}
