// Test Assertion Helpers
//
// Common assertions for HTTP responses in contract tests.

use actix_web::http::StatusCode;
use serde_json::Value;

/// Assert HTTP status is successful (2xx)
pub fn assert_success(status: StatusCode) {
    assert!(
        status.is_success(),
        "Expected successful response (2xx), got {} {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown")
    );
}

/// Assert the standard error body: `{"error": {"message", "code"}}`
pub fn assert_error_body(body: &Value, status: StatusCode) {
    assert_eq!(
        body["error"]["code"].as_u64(),
        Some(u64::from(status.as_u16())),
        "Unexpected error code in {}",
        body
    );
    assert!(
        body["error"]["message"].is_string(),
        "Error message missing in {}",
        body
    );
}

/// Assert the 32-character lowercase hex shape of an MD5 signature
pub fn assert_md5_hex(signature: &str) {
    assert_eq!(signature.len(), 32, "signature length: {}", signature);
    assert!(
        signature
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)),
        "signature not lowercase hex: {}",
        signature
    );
}
