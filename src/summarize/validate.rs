use crate::errors::{MIN_INPUT_WORDS, Rejection, SummarizeError};

use super::word_count;

/// Decides whether `text` may be sent to the model.
///
/// Checks run in a fixed order: model availability, then empty input, then
/// the minimum word count. An unavailable model masks every other problem.
///
/// # Errors
///
/// Returns [`SummarizeError::Unavailable`] or
/// [`SummarizeError::ValidationRejected`].
pub fn validate_input(text: &str, model_available: bool) -> Result<(), SummarizeError> {
    if !model_available {
        return Err(SummarizeError::Unavailable);
    }

    if text.trim().is_empty() {
        return Err(Rejection::EmptyInput.into());
    }

    let words = word_count(text);
    if words < MIN_INPUT_WORDS {
        return Err(Rejection::TooShort { words }.into());
    }

    Ok(())
}
