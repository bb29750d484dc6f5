use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use study_buddy::ai::SummarizationEngine;
use study_buddy::core::models::LengthBounds;
use study_buddy::errors::InferenceError;

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub text: String,
    pub bounds: LengthBounds,
    pub deterministic: bool,
}

/// Engine that returns a canned summary and records every call.
#[derive(Debug, Clone)]
pub struct MockEngine {
    pub summary: String,
    pub calls: Arc<Mutex<Vec<RecordedCall>>>,
    pub fail_with: Option<String>,
}

impl MockEngine {
    pub fn new(summary: &str) -> Self {
        Self {
            summary: summary.to_string(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            summary: String::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(msg.to_string()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl SummarizationEngine for MockEngine {
    fn model_id(&self) -> &str {
        "mock/bart"
    }

    async fn summarize(
        &self,
        text: &str,
        bounds: LengthBounds,
        deterministic: bool,
    ) -> Result<String, InferenceError> {
        self.calls.lock().unwrap().push(RecordedCall {
            text: text.to_string(),
            bounds,
            deterministic,
        });
        if let Some(ref msg) = self.fail_with {
            return Err(InferenceError::RuntimeError(msg.clone()));
        }
        Ok(self.summary.clone())
    }
}
