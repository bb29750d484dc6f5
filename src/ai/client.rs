//! Hugging Face inference client
//!
//! Talks to the hosted inference API for a fixed summarization model. The
//! model hub is consulted once, at load time, to confirm the model exists and
//! is a summarization model.

use anyhow::{Context, bail};
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{debug, info};
use url::Url;

use super::engine::{EngineLoader, SummarizationEngine};
use crate::core::config::AppConfig;
use crate::core::models::LengthBounds;
use crate::errors::InferenceError;

const SUMMARIZATION_PIPELINE_TAG: &str = "summarization";

#[derive(Debug, Deserialize)]
struct SummaryItem {
    summary_text: String,
}

#[derive(Debug, Deserialize)]
struct ModelInfo {
    #[serde(default)]
    pipeline_tag: Option<String>,
}

/// Appends a (possibly slash-separated) model id to a base URL.
///
/// # Errors
///
/// Returns an error if the base URL cannot carry a path.
pub fn model_url(base: &Url, model_id: &str) -> anyhow::Result<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| anyhow::anyhow!("{base} cannot be used as a base URL"))?
        .pop_if_empty()
        .extend(model_id.split('/').filter(|s| !s.is_empty()));
    Ok(url)
}

#[must_use]
pub fn build_request_body(text: &str, bounds: LengthBounds, deterministic: bool) -> Value {
    json!({
        "inputs": text,
        "parameters": {
            "max_length": bounds.max_length,
            "min_length": bounds.min_length,
            "do_sample": !deterministic
        },
        "options": {
            "wait_for_model": true
        }
    })
}

/// Extracts the single summary string from an inference response body.
///
/// # Errors
///
/// Returns an error if the body is not a list of `summary_text` objects or
/// the list is empty.
pub fn parse_summary_response(body: &str) -> Result<String, InferenceError> {
    let items: Vec<SummaryItem> =
        serde_json::from_str(body).map_err(|e| InferenceError::ParseError(e.to_string()))?;

    items
        .into_iter()
        .next()
        .map(|item| item.summary_text)
        .ok_or(InferenceError::EmptyResponse)
}

/// Pulls the `error` field out of a failed response, falling back to the raw body.
#[must_use]
pub fn api_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}

/// Inference engine backed by the hosted inference API.
#[derive(Debug, Clone)]
pub struct InferenceClient {
    http: Client,
    model_id: String,
    endpoint: Url,
}

impl InferenceClient {
    /// Builds a client for `config.model_id` and checks the model on the hub.
    ///
    /// # Errors
    ///
    /// Returns an error if no API token is configured, the HTTP client cannot
    /// be built, the hub cannot be reached, or the model is not a
    /// summarization model.
    pub async fn connect(config: &AppConfig) -> anyhow::Result<Self> {
        let Some(token) = config.hf_api_token.as_deref() else {
            bail!("HF_API_TOKEN is not set");
        };

        let mut headers = HeaderMap::new();
        let mut auth_value = HeaderValue::from_str(&format!("Bearer {token}"))
            .context("Invalid Authorization header")?;
        auth_value.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth_value);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to build inference HTTP client")?;

        let info_url = model_url(&config.model_hub_url, &config.model_id)?;
        debug!(url = %info_url, "Fetching model metadata");
        let response = http
            .get(info_url)
            .send()
            .await
            .context("Model hub request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!(
                "Model hub returned status {status} for {}: {}",
                config.model_id,
                api_error_message(&body)
            );
        }

        let info: ModelInfo = response
            .json()
            .await
            .context("Failed to parse model metadata")?;

        match info.pipeline_tag.as_deref() {
            Some(SUMMARIZATION_PIPELINE_TAG) => {}
            other => bail!(
                "{} is not a summarization model (pipeline tag: {})",
                config.model_id,
                other.unwrap_or("none")
            ),
        }

        let endpoint = model_url(&config.inference_base_url, &config.model_id)?;
        info!(model = %config.model_id, endpoint = %endpoint, "Inference client ready");

        Ok(Self {
            http,
            model_id: config.model_id.clone(),
            endpoint,
        })
    }
}

#[async_trait]
impl SummarizationEngine for InferenceClient {
    fn model_id(&self) -> &str {
        &self.model_id
    }

    async fn summarize(
        &self,
        text: &str,
        bounds: LengthBounds,
        deterministic: bool,
    ) -> Result<String, InferenceError> {
        let body = build_request_body(text, bounds, deterministic);

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&body)
            .send()
            .await
            .map_err(|e| InferenceError::HttpError(format!("Inference request failed: {e}")))?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(InferenceError::ApiError {
                status: status.as_u16(),
                message: api_error_message(&text),
            });
        }

        parse_summary_response(&text)
    }
}

/// Loads an [`InferenceClient`] from application config.
#[derive(Debug, Clone)]
pub struct HubModelLoader {
    config: AppConfig,
}

impl HubModelLoader {
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl EngineLoader for HubModelLoader {
    type Engine = InferenceClient;

    fn model_id(&self) -> &str {
        &self.config.model_id
    }

    async fn load(&self) -> anyhow::Result<InferenceClient> {
        InferenceClient::connect(&self.config).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::DEFAULT_MODEL;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    struct Canned {
        status: u16,
        body: &'static str,
    }

    const SUMMARIZATION_HUB: Canned = Canned {
        status: 200,
        body: r#"{"id":"facebook/bart-large-cnn","pipeline_tag":"summarization"}"#,
    };

    fn request_complete(raw: &[u8]) -> bool {
        let text = String::from_utf8_lossy(raw);
        let Some(header_end) = text.find("\r\n\r\n") else {
            return false;
        };
        let content_length = text[..header_end]
            .lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.trim().parse::<usize>().ok())
            .unwrap_or(0);
        raw.len() >= header_end + 4 + content_length
    }

    /// Local HTTP server answering GETs with `hub` and POSTs with `inference`.
    async fn stub_server(hub: Canned, inference: Canned) -> Url {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let mut raw = Vec::new();
                let mut buf = [0u8; 4096];
                while !request_complete(&raw) {
                    match socket.read(&mut buf).await {
                        Ok(0) | Err(_) => break,
                        Ok(n) => raw.extend_from_slice(&buf[..n]),
                    }
                }

                let canned = if raw.starts_with(b"POST") { &inference } else { &hub };
                let response = format!(
                    "HTTP/1.1 {} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    canned.status,
                    canned.body.len(),
                    canned.body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });

        Url::parse(&format!("http://{addr}/")).unwrap()
    }

    fn stub_config(base: Url) -> AppConfig {
        AppConfig {
            hf_api_token: Some("hf_test".into()),
            model_id: DEFAULT_MODEL.to_string(),
            inference_base_url: base.clone(),
            model_hub_url: base,
        }
    }

    async fn connected_client(inference: Canned) -> InferenceClient {
        let base = stub_server(SUMMARIZATION_HUB, inference).await;
        InferenceClient::connect(&stub_config(base))
            .await
            .expect("hub reports a summarization model")
    }

    #[test]
    fn model_url_keeps_org_and_name_segments() {
        let base = Url::parse("https://router.huggingface.co/hf-inference/models").unwrap();
        let url = model_url(&base, "facebook/bart-large-cnn").unwrap();
        assert_eq!(
            url.as_str(),
            "https://router.huggingface.co/hf-inference/models/facebook/bart-large-cnn"
        );

        let trailing = Url::parse("https://huggingface.co/api/models/").unwrap();
        let url = model_url(&trailing, "facebook/bart-large-cnn").unwrap();
        assert_eq!(
            url.as_str(),
            "https://huggingface.co/api/models/facebook/bart-large-cnn"
        );
    }

    #[test]
    fn request_body_disables_sampling() {
        let body = build_request_body("some text", LengthBounds::new(100, 30), true);
        assert_eq!(body["inputs"], "some text");
        assert_eq!(body["parameters"]["max_length"], 100);
        assert_eq!(body["parameters"]["min_length"], 30);
        assert_eq!(body["parameters"]["do_sample"], false);
        assert_eq!(body["options"]["wait_for_model"], true);
    }

    #[test]
    fn parse_summary_takes_first_item() {
        let body = r#"[{"summary_text":"A short summary."},{"summary_text":"ignored"}]"#;
        assert_eq!(parse_summary_response(body).unwrap(), "A short summary.");
    }

    #[test]
    fn parse_summary_rejects_empty_and_malformed() {
        assert!(matches!(
            parse_summary_response("[]"),
            Err(InferenceError::EmptyResponse)
        ));
        assert!(matches!(
            parse_summary_response(r#"{"error":"boom"}"#),
            Err(InferenceError::ParseError(_))
        ));
    }

    #[test]
    fn api_error_message_prefers_error_field() {
        assert_eq!(
            api_error_message(r#"{"error":"Model is overloaded"}"#),
            "Model is overloaded"
        );
        assert_eq!(api_error_message(" Bad Gateway \n"), "Bad Gateway");
    }

    #[tokio::test]
    async fn connect_without_token_fails_before_any_request() {
        let config = AppConfig::with_token(None);
        let err = InferenceClient::connect(&config).await.unwrap_err();
        assert!(err.to_string().contains("HF_API_TOKEN"));
    }

    #[tokio::test]
    async fn connect_rejects_model_with_other_pipeline() {
        let hub = Canned {
            status: 200,
            body: r#"{"pipeline_tag":"text-generation"}"#,
        };
        let base = stub_server(hub, Canned { status: 500, body: "" }).await;

        let err = InferenceClient::connect(&stub_config(base)).await.unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("not a summarization model"), "{msg}");
        assert!(msg.contains("text-generation"), "{msg}");
    }

    #[tokio::test]
    async fn connect_fails_when_hub_returns_error_status() {
        let hub = Canned {
            status: 404,
            body: r#"{"error":"Repository Not Found"}"#,
        };
        let base = stub_server(hub, Canned { status: 500, body: "" }).await;

        let err = InferenceClient::connect(&stub_config(base)).await.unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("404"), "{msg}");
        assert!(msg.contains("Repository Not Found"), "{msg}");
    }

    #[tokio::test]
    async fn summarize_returns_summary_text() {
        let client = connected_client(Canned {
            status: 200,
            body: r#"[{"summary_text":"A short summary."}]"#,
        })
        .await;

        assert_eq!(client.model_id(), DEFAULT_MODEL);
        let summary = client
            .summarize("some text", LengthBounds::new(100, 30), true)
            .await
            .unwrap();
        assert_eq!(summary, "A short summary.");
    }

    #[tokio::test]
    async fn summarize_maps_error_status_to_api_error() {
        let client = connected_client(Canned {
            status: 503,
            body: r#"{"error":"Model is loading"}"#,
        })
        .await;

        let err = client
            .summarize("some text", LengthBounds::new(100, 30), true)
            .await
            .unwrap_err();
        match err {
            InferenceError::ApiError { status, message } => {
                assert_eq!(status, 503);
                assert_eq!(message, "Model is loading");
            }
            other => panic!("Unexpected error: {other:?}"),
        }
    }
}
