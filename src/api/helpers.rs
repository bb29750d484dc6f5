//! Response builders for the Lambda HTTP integration.

use serde::Serialize;
use serde_json::{Value, json};

/// Returns an HTML page response.
#[must_use]
pub fn html_response(status_code: u16, html: String) -> Value {
    json!({
        "statusCode": status_code,
        "headers": { "Content-Type": "text/html; charset=utf-8" },
        "body": html
    })
}

/// Returns a JSON response with the serialized body.
#[must_use]
pub fn json_response<T: Serialize>(status_code: u16, body: &T) -> Value {
    let body = serde_json::to_string(body).unwrap_or_else(|_| "{}".to_string());
    json!({
        "statusCode": status_code,
        "headers": { "Content-Type": "application/json" },
        "body": body
    })
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    json_response(status_code, &json!({ "error": message }))
}

#[must_use]
pub fn method_not_allowed(allowed: &str) -> Value {
    json!({
        "statusCode": 405,
        "headers": { "Allow": allowed, "Content-Type": "application/json" },
        "body": json!({ "error": "Method not allowed" }).to_string()
    })
}
