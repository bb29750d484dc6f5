use std::collections::HashMap;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use percent_encoding::percent_decode_str;
use serde::Deserialize;
use serde_json::Value;

use crate::core::models::{LengthBounds, MAX_LENGTH_RANGE, MIN_LENGTH_RANGE, SummaryRequest};
use crate::errors::RequestError;

/// Decodes a URL-encoded form component, treating `+` as a space.
///
/// # Examples
///
/// ```
/// use study_buddy::api::parsing::decode_url_component;
///
/// assert_eq!(decode_url_component("hello%20world").unwrap(), "hello world");
/// assert_eq!(decode_url_component("hello+world").unwrap(), "hello world");
/// ```
pub fn decode_url_component(input: &str) -> Result<String, RequestError> {
    let spaced = input.replace('+', " ");
    percent_decode_str(&spaced)
        .decode_utf8()
        .map(|s| s.into_owned())
        .map_err(|e| RequestError::ParseError(format!("Failed to decode URL component: {e}")))
}

/// Parses a URL-encoded form body into key/value pairs. Later keys win.
pub fn parse_form_data(form_data: &str) -> Result<HashMap<String, String>, RequestError> {
    let mut map = HashMap::new();

    for pair in form_data.split('&').filter(|p| !p.is_empty()) {
        let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
        let key = decode_url_component(raw_key)?;
        let value = decode_url_component(raw_value)?;
        map.insert(key, value);
    }

    Ok(map)
}

fn parse_bound(
    field: &'static str,
    raw: Option<&str>,
    default: u32,
) -> Result<u32, RequestError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(default),
        Some(value) => value.parse::<u32>().map_err(|_| RequestError::InvalidField {
            field,
            value: value.to_string(),
        }),
    }
}

/// Builds a summarize request from a submitted form.
///
/// Missing bounds take their defaults; out-of-range bounds are clamped.
pub fn parse_summary_form(form_data: &str) -> Result<SummaryRequest, RequestError> {
    let form = parse_form_data(form_data)?;

    let max_length = parse_bound(
        "max_length",
        form.get("max_length").map(String::as_str),
        MAX_LENGTH_RANGE.default,
    )?;
    let min_length = parse_bound(
        "min_length",
        form.get("min_length").map(String::as_str),
        MIN_LENGTH_RANGE.default,
    )?;

    Ok(SummaryRequest {
        text: form.get("text").cloned().unwrap_or_default(),
        bounds: LengthBounds::new(max_length, min_length),
    })
}

#[derive(Debug, Deserialize)]
struct JsonSummaryRequest {
    #[serde(default)]
    text: String,
    max_length: Option<u32>,
    min_length: Option<u32>,
}

/// Builds a summarize request from a JSON body.
pub fn parse_summary_json(body: &str) -> Result<SummaryRequest, RequestError> {
    let req: JsonSummaryRequest = serde_json::from_str(body)?;

    Ok(SummaryRequest {
        text: req.text,
        bounds: LengthBounds::new(
            req.max_length.unwrap_or(MAX_LENGTH_RANGE.default),
            req.min_length.unwrap_or(MIN_LENGTH_RANGE.default),
        ),
    })
}

/// Returns the request body as text, decoding base64 when the event says so.
pub fn extract_body(payload: &Value) -> Result<String, RequestError> {
    let Some(body) = payload.get("body").and_then(Value::as_str) else {
        return Ok(String::new());
    };

    let is_base64 = payload
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if !is_base64 {
        return Ok(body.to_string());
    }

    let bytes = STANDARD
        .decode(body)
        .map_err(|e| RequestError::ParseError(format!("Invalid base64 body: {e}")))?;
    String::from_utf8(bytes)
        .map_err(|e| RequestError::ParseError(format!("Body is not valid UTF-8: {e}")))
}

/// HTTP method from either the v2 (`requestContext.http.method`) or v1
/// (`httpMethod`) event shape. Defaults to GET.
#[must_use]
pub fn request_method(payload: &Value) -> String {
    payload
        .pointer("/requestContext/http/method")
        .and_then(Value::as_str)
        .or_else(|| payload.get("httpMethod").and_then(Value::as_str))
        .unwrap_or("GET")
        .to_ascii_uppercase()
}

#[must_use]
pub fn request_path(payload: &Value) -> &str {
    payload
        .get("rawPath")
        .and_then(Value::as_str)
        .or_else(|| payload.get("path").and_then(Value::as_str))
        .unwrap_or("/")
}

pub fn get_header_value<'a>(headers: &'a Value, name: &str) -> Option<&'a str> {
    if let Some(v) = headers.get(name).and_then(|s| s.as_str()) {
        return Some(v);
    }
    headers.as_object().and_then(|map| {
        map.iter().find_map(|(k, v)| {
            if k.eq_ignore_ascii_case(name) {
                v.as_str()
            } else {
                None
            }
        })
    })
}
