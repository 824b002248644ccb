//! Typed error enum for the completion client, plus best-effort categorisation.

use std::fmt;
use thiserror::Error;

use crate::client::truncate;

/// Errors from a single completion attempt.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("network error talking to completion API: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("HTTP status {code}: {body}")]
    HttpStatus { code: u16, body: String },
    #[error("JSON parse error in {context}: {source}")]
    JsonParse {
        context: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("empty response: no completion content returned")]
    EmptyResponse,
    #[error("client initialization failed: {0}")]
    ClientInit(String),
}

impl LlmError {
    /// Diagnostic category derived from the error text. Never used to decide
    /// whether to retry.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::classify(&self.to_string())
    }

    /// Operator-facing message for this error's category.
    #[must_use]
    pub fn user_message(&self) -> String {
        self.category().message(&self.to_string())
    }
}

/// Coarse failure kinds used for logs and operator messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Authentication,
    RateLimit,
    Connectivity,
    InvalidRequest,
    Unknown,
}

// Checked in order; the first category with a matching needle wins.
const AUTH_NEEDLES: &[&str] =
    &["authentication", "unauthorized", "incorrect api key", "status 401"];
const RATE_LIMIT_NEEDLES: &[&str] = &["rate_limit", "rate limit", "quota", "status 429"];
const CONNECTIVITY_NEEDLES: &[&str] = &["connection", "network", "timed out", "timeout"];
const INVALID_NEEDLES: &[&str] = &["invalid"];

impl ErrorCategory {
    /// Substring match on the lower-cased failure text.
    ///
    /// Provider wording changes silently break this; treat the result as a hint.
    #[must_use]
    pub fn classify(text: &str) -> Self {
        let lower = text.to_lowercase();
        let hit = |needles: &[&str]| needles.iter().any(|n| lower.contains(n));
        if hit(AUTH_NEEDLES) {
            Self::Authentication
        } else if hit(RATE_LIMIT_NEEDLES) {
            Self::RateLimit
        } else if hit(CONNECTIVITY_NEEDLES) {
            Self::Connectivity
        } else if hit(INVALID_NEEDLES) {
            Self::InvalidRequest
        } else {
            Self::Unknown
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::Authentication => "authentication",
            Self::RateLimit => "rate_limit",
            Self::Connectivity => "connectivity",
            Self::InvalidRequest => "invalid_request",
            Self::Unknown => "unknown",
        }
    }

    /// Fixed message template for the category. `detail` is only included
    /// for the invalid-request and unknown templates.
    #[must_use]
    pub fn message(&self, detail: &str) -> String {
        match *self {
            Self::Authentication => {
                "API authentication failed. Please check your API key.".to_owned()
            },
            Self::RateLimit => "API rate limit exceeded. Please try again later.".to_owned(),
            Self::Connectivity => {
                "Failed to connect to the completion API. Please check your internet connection."
                    .to_owned()
            },
            Self::InvalidRequest => format!("Invalid API request: {}", truncate(detail, 300)),
            Self::Unknown => format!(
                "An error occurred while processing your request: {}",
                truncate(detail, 300)
            ),
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
