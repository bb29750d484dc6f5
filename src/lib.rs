//! Study Buddy - an abstractive summarizer page backed by a pretrained model.
//!
//! Pasted English text is validated, sent once to a hosted
//! `facebook/bart-large-cnn` summarization model, and shown back with word
//! count metrics.
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda (function URL) for serving the page and the JSON endpoint
//! - A lazily constructed, cached model handle ([`ai::ModelProvider`])
//! - The Hugging Face inference API as the model runtime, via reqwest
//! - Tokio for async runtime
//!
//! # Example
//!
//! ```no_run
//! use study_buddy::ai::{HubModelLoader, ModelProvider};
//! use study_buddy::core::config::AppConfig;
//! use study_buddy::core::models::{LengthBounds, SummaryRequest};
//! use study_buddy::summarize::generate_summary;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     study_buddy::setup_logging();
//!
//!     let config = AppConfig::from_env()?;
//!     let provider = ModelProvider::new(HubModelLoader::new(config));
//!     let acquired = provider.acquire().await;
//!
//!     let request = SummaryRequest {
//!         text: "The process of photosynthesis is vital for life on Earth. ...".into(),
//!         bounds: LengthBounds::new(100, 30),
//!     };
//!
//!     match generate_summary(acquired.handle.as_deref(), &request).await {
//!         Ok(report) => println!("{}\n{}", report.summary, report.metrics_line()),
//!         Err(e) => println!("{e}"),
//!     }
//!
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod ai;
pub mod api;
pub mod core;
pub mod errors;
pub mod summarize;
pub mod views;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called once at process start;
/// later calls are ignored.
///
/// # Example
///
/// ```
/// study_buddy::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}
