use std::time::Duration;

use travel_qa_core::{env_parse_optional, env_parse_with_default};

use crate::ai_types::{ChatRequest, ChatResponse};
use crate::error::LlmError;
use crate::retry::{DEFAULT_BASE_DELAY, DEFAULT_MAX_ATTEMPTS, RetryPolicy};

/// Default model to use.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
/// Default cap on generated tokens.
pub const DEFAULT_MAX_TOKENS: u32 = 1000;
/// Default sampling temperature.
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Generation and retry settings for [`CompletionClient`].
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionConfig {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
    pub retry: RetryPolicy,
    /// Per-request timeout. `None` leaves the transport default in place.
    pub timeout: Option<Duration>,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_owned(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            retry: RetryPolicy::default(),
            timeout: None,
        }
    }
}

impl CompletionConfig {
    /// Reads `TRAVEL_QA_MODEL`, `TRAVEL_QA_MAX_TOKENS`, `TRAVEL_QA_TEMPERATURE`,
    /// `TRAVEL_QA_MAX_ATTEMPTS`, `TRAVEL_QA_RETRY_BASE_DELAY_MS` and
    /// `TRAVEL_QA_HTTP_TIMEOUT_SECS`, falling back to defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let default_delay_ms = u64::try_from(DEFAULT_BASE_DELAY.as_millis()).unwrap_or(1000);
        Self {
            model: env_parse_with_default("TRAVEL_QA_MODEL", DEFAULT_MODEL.to_owned()),
            max_tokens: env_parse_with_default("TRAVEL_QA_MAX_TOKENS", DEFAULT_MAX_TOKENS),
            temperature: env_parse_with_default("TRAVEL_QA_TEMPERATURE", DEFAULT_TEMPERATURE),
            retry: RetryPolicy::new(
                env_parse_with_default("TRAVEL_QA_MAX_ATTEMPTS", DEFAULT_MAX_ATTEMPTS),
                Duration::from_millis(env_parse_with_default(
                    "TRAVEL_QA_RETRY_BASE_DELAY_MS",
                    default_delay_ms,
                )),
            ),
            timeout: env_parse_optional::<u64>("TRAVEL_QA_HTTP_TIMEOUT_SECS")
                .map(Duration::from_secs),
        }
    }
}

/// Client for an OpenAI-compatible chat completion endpoint.
///
/// Holds one pooled `reqwest::Client`; safe to share behind an `Arc`.
pub struct CompletionClient {
    pub(crate) client: reqwest::Client,
    pub(crate) api_key: String,
    pub(crate) base_url: String,
    pub(crate) config: CompletionConfig,
}

impl std::fmt::Debug for CompletionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionClient")
            .field("client", &self.client)
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .field("config", &self.config)
            .finish()
    }
}

impl CompletionClient {
    /// Creates a new client with the given API key, base URL and settings.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(
        api_key: String,
        base_url: String,
        config: CompletionConfig,
    ) -> Result<Self, LlmError> {
        let base_url = base_url.trim_end_matches('/').to_owned();
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| LlmError::ClientInit(e.to_string()))?;
        Ok(Self { client, api_key, base_url, config })
    }

    /// Returns the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends one chat completion request. No retries.
    ///
    /// # Errors
    /// Returns an error if the HTTP request fails, the API returns a
    /// non-success status, or the response body cannot be parsed.
    pub(crate) async fn send_chat(&self, request: &ChatRequest) -> Result<ChatResponse, LlmError> {
        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body =
                response.text().await.unwrap_or_else(|_| "Could not read error body".to_owned());
            return Err(LlmError::HttpStatus {
                code: status.as_u16(),
                body: truncate(&body, 500).to_owned(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| LlmError::JsonParse {
            context: format!("chat completion response (body: {})", truncate(&body, 200)),
            source: e,
        })
    }
}

/// Truncates a string to the given maximum length at a char boundary.
#[must_use]
pub fn truncate(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        s
    } else {
        let mut end = max_len;
        while end > 0 && !s.is_char_boundary(end) {
            end = end.saturating_sub(1);
        }
        s.get(..end).unwrap_or("")
    }
}
