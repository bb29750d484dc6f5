use std::env;

use url::Url;

pub const DEFAULT_MODEL: &str = "facebook/bart-large-cnn";
pub const DEFAULT_INFERENCE_BASE_URL: &str = "https://router.huggingface.co/hf-inference/models";
pub const DEFAULT_MODEL_HUB_URL: &str = "https://huggingface.co/api/models";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub hf_api_token: Option<String>,
    pub model_id: String,
    pub inference_base_url: Url,
    pub model_hub_url: Url,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            hf_api_token: env::var("HF_API_TOKEN")
                .ok()
                .filter(|t| !t.trim().is_empty()),
            model_id: env::var("SUMMARIZER_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            inference_base_url: parse_url_var("INFERENCE_BASE_URL", DEFAULT_INFERENCE_BASE_URL)?,
            model_hub_url: parse_url_var("MODEL_HUB_URL", DEFAULT_MODEL_HUB_URL)?,
        })
    }

    /// Configuration pointing at the public endpoints with the given token.
    #[cfg(test)]
    pub(crate) fn with_token(token: Option<String>) -> Self {
        Self {
            hf_api_token: token,
            model_id: DEFAULT_MODEL.to_string(),
            inference_base_url: Url::parse(DEFAULT_INFERENCE_BASE_URL).expect("static inference URL"),
            model_hub_url: Url::parse(DEFAULT_MODEL_HUB_URL).expect("static hub URL"),
        }
    }
}

fn parse_url_var(name: &str, default: &str) -> Result<Url, String> {
    let raw = env::var(name).unwrap_or_else(|_| default.to_string());
    Url::parse(&raw).map_err(|e| format!("{name}: {e}"))
}
