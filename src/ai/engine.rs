use async_trait::async_trait;

use crate::core::models::LengthBounds;
use crate::errors::InferenceError;

/// The one capability the pipeline needs from a model runtime.
#[async_trait]
pub trait SummarizationEngine: Send + Sync {
    /// Model identifier this engine is bound to.
    fn model_id(&self) -> &str;

    /// Runs one inference call. With `deterministic` set, decoding must not
    /// sample.
    async fn summarize(
        &self,
        text: &str,
        bounds: LengthBounds,
        deterministic: bool,
    ) -> Result<String, InferenceError>;
}

/// Builds an engine on first use.
#[async_trait]
pub trait EngineLoader: Send + Sync {
    type Engine: SummarizationEngine;

    /// Model identifier the engine will be bound to, for logging.
    fn model_id(&self) -> &str;

    async fn load(&self) -> anyhow::Result<Self::Engine>;
}
