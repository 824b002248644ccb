//! Travel-assistant prompt, `generate`, and credential validation.

use serde::Serialize;
use std::time::Instant;

use crate::ai_types::{ChatRequest, ChatResponse, Message};
use crate::client::CompletionClient;
use crate::error::LlmError;
use crate::retry::retry_with_backoff;

/// Persona sent as the first system message of every query.
pub const SYSTEM_PROMPT: &str = "You are an expert travel documentation assistant. When users ask about \
travel requirements, provide comprehensive, accurate, and well-formatted information including:

1. Required visa documentation
2. Passport requirements
3. Additional necessary documents
4. Relevant travel advisories
5. Processing times where applicable
6. Important notes or tips

Format your responses clearly with proper sections and bullet points.
Always provide current and accurate information based on official sources.
Be helpful, informative, and professional in your responses.";

const TOP_P: f64 = 1.0;
const FREQUENCY_PENALTY: f64 = 0.2;
const PRESENCE_PENALTY: f64 = 0.1;
const VALIDATION_PROMPT: &str = "Hello";
const VALIDATION_MAX_TOKENS: u32 = 5;

/// Result of a successful `generate` call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Completion {
    /// Generated text with surrounding whitespace removed.
    pub response: String,
    pub success: bool,
    /// Seconds spent in the attempt that succeeded; earlier failed attempts
    /// and backoff waits are not included.
    pub response_time: f64,
    pub tokens_used: Option<u32>,
    pub model: String,
    pub metadata: Option<CompletionMetadata>,
}

/// Provider-reported details of a completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionMetadata {
    pub prompt_tokens: Option<u32>,
    pub completion_tokens: Option<u32>,
    pub finish_reason: Option<String>,
}

/// Static description of the configured model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelInfo {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
    pub provider: &'static str,
}

fn build_messages(user_query: &str, context: Option<&serde_json::Value>) -> Vec<Message> {
    let mut messages = vec![Message::system(SYSTEM_PROMPT)];
    if let Some(ctx) = context {
        messages.push(Message::system(format!("Additional context: {ctx}")));
    }
    messages.push(Message::user(user_query));
    messages
}

impl CompletionClient {
    /// Asks the completion endpoint to answer `user_query` as the travel
    /// documentation assistant.
    ///
    /// `context`, when given, is sent as an extra system message directly
    /// before the user message. Failed attempts are retried per the client's
    /// [`RetryPolicy`](crate::RetryPolicy).
    ///
    /// # Errors
    /// Returns the error of the last attempt once all attempts have failed.
    pub async fn generate(
        &self,
        user_query: &str,
        context: Option<&serde_json::Value>,
    ) -> Result<Completion, LlmError> {
        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: build_messages(user_query, context),
            max_tokens: self.config.max_tokens,
            temperature: Some(self.config.temperature),
            top_p: Some(TOP_P),
            frequency_penalty: Some(FREQUENCY_PENALTY),
            presence_penalty: Some(PRESENCE_PENALTY),
        };
        let request = &request;

        let result = retry_with_backoff(&self.config.retry, "chat completion", move |_| {
            self.attempt_completion(request)
        })
        .await;

        if let Err(ref e) = result {
            let category = e.category();
            tracing::error!(
                category = %category,
                model = %self.config.model,
                "Completion failed: {}",
                category.message(&e.to_string())
            );
        }
        result
    }

    async fn attempt_completion(&self, request: &ChatRequest) -> Result<Completion, LlmError> {
        let start = Instant::now();
        let response = self.send_chat(request).await?;
        let response_time = start.elapsed().as_secs_f64();
        self.completion_from_response(response, response_time)
    }

    fn completion_from_response(
        &self,
        response: ChatResponse,
        response_time: f64,
    ) -> Result<Completion, LlmError> {
        let ChatResponse { choices, usage } = response;
        let first_choice = choices.into_iter().next().ok_or(LlmError::EmptyResponse)?;
        let text = first_choice.message.content.as_deref().map(str::trim).unwrap_or_default();
        if text.is_empty() {
            return Err(LlmError::EmptyResponse);
        }

        let metadata = CompletionMetadata {
            prompt_tokens: usage.and_then(|u| u.prompt_tokens),
            completion_tokens: usage.and_then(|u| u.completion_tokens),
            finish_reason: first_choice.finish_reason,
        };

        tracing::debug!(
            response_time,
            tokens = ?usage.and_then(|u| u.total_tokens),
            "Completion received"
        );

        Ok(Completion {
            response: text.to_owned(),
            success: true,
            response_time,
            tokens_used: usage.and_then(|u| u.total_tokens),
            model: self.config.model.clone(),
            metadata: Some(metadata),
        })
    }

    /// Checks the credential with a minimal single-attempt request.
    ///
    /// Never returns the underlying failure; it is logged instead.
    pub async fn validate_api_key(&self) -> bool {
        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![Message::user(VALIDATION_PROMPT)],
            max_tokens: VALIDATION_MAX_TOKENS,
            temperature: None,
            top_p: None,
            frequency_penalty: None,
            presence_penalty: None,
        };
        match self.send_chat(&request).await {
            Ok(_) => true,
            Err(e) => {
                tracing::error!(category = %e.category(), "API key validation failed: {e}");
                false
            },
        }
    }

    #[must_use]
    pub fn model_info(&self) -> ModelInfo {
        ModelInfo {
            model: self.config.model.clone(),
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
            provider: "OpenAI",
        }
    }
}
