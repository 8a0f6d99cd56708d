//! TC3-HMAC-SHA256 request signing for the Tencent Cloud API v3.
//!
//! Every request is a `POST /` with an empty query string, signed over the
//! `content-type` and `host` headers and the SHA-256 of the JSON body.

// 3rd party crates
use chrono::DateTime;
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

// Current module imports
use super::constants::{CONTENT_TYPE_JSON, SIGNED_HEADERS, SIGNING_ALGORITHM};
use super::types::Credentials;

type HmacSha256 = Hmac<Sha256>;

fn hmac_sha256(key: &[u8], message: &[u8]) -> Result<Vec<u8>, String> {
    let mut mac = HmacSha256::new_from_slice(key).map_err(|e| format!("HMAC error: {}", e))?;
    mac.update(message);
    Ok(mac.finalize().into_bytes().to_vec())
}

fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

/// Builds the `Authorization` header value for one request.
///
/// `timestamp` is the unix time sent in `X-TC-Timestamp`; its UTC date
/// scopes the derived signing key.
pub fn authorization(
    credentials: &Credentials,
    service: &str,
    host: &str,
    payload: &str,
    timestamp: i64,
) -> Result<String, String> {
    let date = DateTime::from_timestamp(timestamp, 0)
        .ok_or_else(|| format!("timestamp {} is out of range", timestamp))?
        .format("%Y-%m-%d")
        .to_string();

    let canonical_headers = format!("content-type:{}\nhost:{}\n", CONTENT_TYPE_JSON, host);
    let canonical_request = format!(
        "POST\n/\n\n{}\n{}\n{}",
        canonical_headers,
        SIGNED_HEADERS,
        sha256_hex(payload.as_bytes())
    );

    let credential_scope = format!("{}/{}/tc3_request", date, service);
    let string_to_sign = format!(
        "{}\n{}\n{}\n{}",
        SIGNING_ALGORITHM,
        timestamp,
        credential_scope,
        sha256_hex(canonical_request.as_bytes())
    );

    let secret_date = hmac_sha256(
        format!("TC3{}", credentials.secret_key).as_bytes(),
        date.as_bytes(),
    )?;
    let secret_service = hmac_sha256(&secret_date, service.as_bytes())?;
    let secret_signing = hmac_sha256(&secret_service, b"tc3_request")?;
    let signature = hex::encode(hmac_sha256(&secret_signing, string_to_sign.as_bytes())?);

    Ok(format!(
        "{} Credential={}/{}, SignedHeaders={}, Signature={}",
        SIGNING_ALGORITHM, credentials.secret_id, credential_scope, SIGNED_HEADERS, signature
    ))
}
