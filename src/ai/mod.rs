//! Model runtime: engine trait, hosted inference client and the cached provider

pub mod client;
pub mod engine;
pub mod provider;

// Re-export main types for convenience
pub use client::{HubModelLoader, InferenceClient};
pub use engine::{EngineLoader, SummarizationEngine};
pub use provider::{Acquired, ModelProvider, ModelState};
