use tracing::{error, info, warn};

use super::validate::validate_input;
use super::word_count;
use crate::ai::SummarizationEngine;
use crate::core::models::{SummaryReport, SummaryRequest};
use crate::errors::SummarizeError;

/// Runs one summarize action: validate, invoke the engine once, count words.
///
/// `engine` is `None` when the model could not be constructed.
///
/// # Errors
///
/// Returns [`SummarizeError::Unavailable`] or
/// [`SummarizeError::ValidationRejected`] without touching the engine, and
/// [`SummarizeError::InferenceFailed`] when the engine call fails.
pub async fn generate_summary<E>(
    engine: Option<&E>,
    request: &SummaryRequest,
) -> Result<SummaryReport, SummarizeError>
where
    E: SummarizationEngine + ?Sized,
{
    validate_input(&request.text, engine.is_some())?;
    let Some(engine) = engine else {
        return Err(SummarizeError::Unavailable);
    };

    let bounds = request.bounds;
    if bounds.is_inverted() {
        warn!(
            max_length = bounds.max_length,
            min_length = bounds.min_length,
            "Maximum length is below minimum length; passing bounds through unchanged"
        );
    }

    let original_words = word_count(&request.text);

    #[cfg(feature = "debug-logs")]
    info!("Summarizing input:\n{}", request.text);

    #[cfg(not(feature = "debug-logs"))]
    info!(
        model = %engine.model_id(),
        original_words,
        max_length = bounds.max_length,
        min_length = bounds.min_length,
        "Generating summary"
    );

    let summary = engine
        .summarize(&request.text, bounds, true)
        .await
        .inspect_err(|e| error!(error = %e, "Model inference failed"))?;

    let summary_words = word_count(&summary);
    info!(summary_words, "Summary generated");

    Ok(SummaryReport {
        summary,
        original_words,
        summary_words,
    })
}
