//! Lambda handler for the summarizer page and its JSON twin.
//!
//! Each request is one action: acquire the cached model, run the summarize
//! pipeline, render the outcome. Routes:
//! - `GET /` renders the empty form
//! - `POST /` handles a form submission and renders the page with the result
//! - `POST /api/summarize` handles a JSON (or form) body and answers in JSON

use lambda_runtime::{Error, LambdaEvent};
use serde_json::{Value, json};
use tracing::{error, info, warn};
use uuid::Uuid;

use super::{helpers, parsing};
use crate::ai::{Acquired, EngineLoader, ModelProvider};
use crate::core::models::{StatusMessage, SummaryRequest};
use crate::errors::{RequestError, SummarizeError};
use crate::summarize::{generate_summary, load_failure_status, loading_status, status_for};
use crate::views::{PageState, render_page};

pub use self::function_handler as handler;

const PAGE_PATH: &str = "/";
const API_PATH: &str = "/api/summarize";

/// Lambda entrypoint. Never fails the invocation; every outcome is an HTTP
/// response.
///
/// # Errors
///
/// Always returns `Ok`; the `Result` matches the `lambda_runtime` service
/// signature.
pub async fn function_handler<L: EngineLoader>(
    provider: &ModelProvider<L>,
    event: LambdaEvent<Value>,
) -> Result<Value, Error> {
    Ok(handle_request(provider, &event.payload).await)
}

/// Routes one HTTP event and returns the response payload.
#[tracing::instrument(level = "info", skip_all, fields(request_id = %Uuid::new_v4()))]
pub async fn handle_request<L: EngineLoader>(
    provider: &ModelProvider<L>,
    payload: &Value,
) -> Value {
    let method = parsing::request_method(payload);
    let path = parsing::request_path(payload).trim_end_matches('/');
    let path = if path.is_empty() { PAGE_PATH } else { path };
    info!(%method, %path, "Request received");

    match (path, method.as_str()) {
        (PAGE_PATH, "GET" | "HEAD") => render_empty_page(provider).await,
        (PAGE_PATH, "POST") => handle_form_submission(provider, payload).await,
        (PAGE_PATH, _) => helpers::method_not_allowed("GET, POST"),
        (API_PATH, "POST") => handle_api_request(provider, payload).await,
        (API_PATH, _) => helpers::method_not_allowed("POST"),
        _ => helpers::err_response(404, "Not found"),
    }
}

fn load_notices<E>(model_id: &str, acquired: &Acquired<E>) -> Vec<StatusMessage> {
    let mut notices = Vec::new();
    if acquired.constructed {
        notices.push(loading_status(model_id));
    }
    if let Some(cause) = acquired.load_failure.as_deref() {
        notices.push(load_failure_status(cause));
    }
    notices
}

async fn render_empty_page<L: EngineLoader>(provider: &ModelProvider<L>) -> Value {
    let acquired = provider.acquire().await;
    let state = PageState {
        notices: load_notices(provider.model_id(), &acquired),
        ..PageState::default()
    };
    helpers::html_response(200, render_page(&state))
}

async fn handle_form_submission<L: EngineLoader>(
    provider: &ModelProvider<L>,
    payload: &Value,
) -> Value {
    let request = match parsing::extract_body(payload).and_then(|b| parsing::parse_summary_form(&b))
    {
        Ok(r) => r,
        Err(e) => {
            warn!(error = %e, "Rejecting malformed form submission");
            return helpers::err_response(400, &e.to_string());
        }
    };

    let acquired = provider.acquire().await;
    let mut state = PageState {
        text: request.text.clone(),
        bounds: request.bounds,
        notices: load_notices(provider.model_id(), &acquired),
        ..PageState::default()
    };

    match generate_summary(acquired.handle.as_deref(), &request).await {
        Ok(report) => state.report = Some(report),
        Err(e) => state.status = Some(status_for(&e)),
    }

    helpers::html_response(200, render_page(&state))
}

fn parse_api_body(payload: &Value) -> Result<SummaryRequest, RequestError> {
    let body = parsing::extract_body(payload)?;
    let is_form = payload
        .get("headers")
        .and_then(|h| parsing::get_header_value(h, "Content-Type"))
        .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"));

    if is_form {
        parsing::parse_summary_form(&body)
    } else {
        parsing::parse_summary_json(&body)
    }
}

async fn handle_api_request<L: EngineLoader>(
    provider: &ModelProvider<L>,
    payload: &Value,
) -> Value {
    let request = match parse_api_body(payload) {
        Ok(r) => r,
        Err(e) => {
            warn!(error = %e, "Rejecting malformed API request");
            return helpers::err_response(400, &e.to_string());
        }
    };

    let acquired = provider.acquire().await;
    if let Some(cause) = &acquired.load_failure {
        error!(error = %cause, "Model load failed during API request");
    }

    match generate_summary(acquired.handle.as_deref(), &request).await {
        Ok(report) => helpers::json_response(200, &report),
        Err(e) => {
            let status_code = match &e {
                SummarizeError::Unavailable => 503,
                SummarizeError::ValidationRejected { .. } => 422,
                SummarizeError::InferenceFailed { .. } => 502,
            };
            let mut body = json!({ "error": e.to_string(), "level": status_for(&e).level });
            if let Some(cause) = acquired.load_failure {
                body["load_error"] = Value::String(cause);
            }
            helpers::json_response(status_code, &body)
        }
    }
}
