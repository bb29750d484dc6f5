//! Input validation and the summarize action

pub mod render;
pub mod validate;

pub use render::generate_summary;
pub use validate::validate_input;

use crate::core::models::StatusMessage;
use crate::errors::SummarizeError;

/// Number of whitespace-delimited words. This is the unit of the displayed
/// metrics; the model's length bounds count subword tokens instead.
#[must_use]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Message shown on the page for an action that produced no summary.
#[must_use]
pub fn status_for(error: &SummarizeError) -> StatusMessage {
    match error {
        SummarizeError::ValidationRejected { .. } => StatusMessage::warning(error.to_string()),
        SummarizeError::Unavailable | SummarizeError::InferenceFailed { .. } => {
            StatusMessage::error(error.to_string())
        }
    }
}

/// Notice for the action that loaded the model.
#[must_use]
pub fn loading_status(model_id: &str) -> StatusMessage {
    StatusMessage::info(format!("Loading {model_id} summarization model (high quality)..."))
}

/// Fatal message for the action that attempted and failed model construction.
#[must_use]
pub fn load_failure_status(cause: &str) -> StatusMessage {
    StatusMessage::error(format!(
        "FATAL ERROR: Could not load the model. Check your network and inference configuration. Error: {cause}"
    ))
}
