use serde::Serialize;

/// Fixed range of one length control on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderRange {
    pub min: u32,
    pub max: u32,
    pub step: u32,
    pub default: u32,
}

impl SliderRange {
    #[must_use]
    pub const fn clamp(&self, value: u32) -> u32 {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }
}

/// Maximum summary length control, in model tokens.
pub const MAX_LENGTH_RANGE: SliderRange = SliderRange {
    min: 30,
    max: 200,
    step: 10,
    default: 100,
};

/// Minimum summary length control, in model tokens.
pub const MIN_LENGTH_RANGE: SliderRange = SliderRange {
    min: 10,
    max: 150,
    step: 10,
    default: 30,
};

/// Output length bounds handed to the model. Both values count the model's
/// subword tokens, not words. `max_length >= min_length` is not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthBounds {
    pub max_length: u32,
    pub min_length: u32,
}

impl LengthBounds {
    /// Clamps each bound into its control's range.
    #[must_use]
    pub const fn new(max_length: u32, min_length: u32) -> Self {
        Self {
            max_length: MAX_LENGTH_RANGE.clamp(max_length),
            min_length: MIN_LENGTH_RANGE.clamp(min_length),
        }
    }

    #[must_use]
    pub const fn is_inverted(&self) -> bool {
        self.max_length < self.min_length
    }
}

impl Default for LengthBounds {
    fn default() -> Self {
        Self {
            max_length: MAX_LENGTH_RANGE.default,
            min_length: MIN_LENGTH_RANGE.default,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryRequest {
    pub text: String,
    pub bounds: LengthBounds,
}

/// Result of one successful summarization action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryReport {
    pub summary: String,
    pub original_words: usize,
    pub summary_words: usize,
}

impl SummaryReport {
    #[must_use]
    pub fn metrics_line(&self) -> String {
        format!(
            "Original: {} words | Summary Output: {} words",
            self.original_words, self.summary_words
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

impl StatusLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            StatusLevel::Info => "info",
            StatusLevel::Warning => "warning",
            StatusLevel::Error => "error",
        }
    }
}

/// Single-line message shown instead of (or above) a summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusMessage {
    pub level: StatusLevel,
    pub text: String,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Info,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Warning,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Error,
            text: text.into(),
        }
    }
}
