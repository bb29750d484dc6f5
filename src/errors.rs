use thiserror::Error;

/// Minimum number of whitespace-delimited words the model is given.
pub const MIN_INPUT_WORDS: usize = 20;

/// Failure reported by the model runtime for a single inference call.
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Inference API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to parse inference response: {0}")]
    ParseError(String),

    #[error("Inference response contained no summary")]
    EmptyResponse,

    #[error("Model runtime fault: {0}")]
    RuntimeError(String),
}

impl From<reqwest::Error> for InferenceError {
    fn from(error: reqwest::Error) -> Self {
        InferenceError::HttpError(error.to_string())
    }
}

impl From<anyhow::Error> for InferenceError {
    fn from(error: anyhow::Error) -> Self {
        InferenceError::RuntimeError(format!("{error:#}"))
    }
}

/// Why input was turned away before reaching the model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("Please paste some text.")]
    EmptyInput,

    #[error("Input text is too short for abstractive AI (min {} words).", MIN_INPUT_WORDS)]
    TooShort { words: usize },
}

/// Outcome of a summarize action that did not produce a summary.
#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("Model not loaded.")]
    Unavailable,

    #[error("{reason}")]
    ValidationRejected { reason: Rejection },

    #[error("An error occurred during model inference: {cause}")]
    InferenceFailed { cause: String },
}

impl From<Rejection> for SummarizeError {
    fn from(reason: Rejection) -> Self {
        SummarizeError::ValidationRejected { reason }
    }
}

impl From<InferenceError> for SummarizeError {
    fn from(error: InferenceError) -> Self {
        SummarizeError::InferenceFailed {
            cause: error.to_string(),
        }
    }
}

/// Malformed HTTP request.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Failed to parse request: {0}")]
    ParseError(String),

    #[error("Invalid value for {field}: {value}")]
    InvalidField { field: &'static str, value: String },
}

impl From<serde_json::Error> for RequestError {
    fn from(error: serde_json::Error) -> Self {
        RequestError::ParseError(format!("Invalid JSON body: {error}"))
    }
}
