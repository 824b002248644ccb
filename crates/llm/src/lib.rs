//! Chat completion client for the travel documentation assistant.
//!
//! One [`CompletionClient`] is built at startup and shared by every request.
//! Each `generate` call retries failed attempts with exponential backoff and
//! reports the duration of the attempt that succeeded.

mod ai_types;
mod client;
mod completion;
mod error;
mod retry;

#[cfg(test)]
mod tests;

pub use client::{CompletionClient, CompletionConfig, DEFAULT_MODEL, truncate};
pub use completion::{Completion, CompletionMetadata, ModelInfo, SYSTEM_PROMPT};
pub use error::{ErrorCategory, LlmError};
pub use retry::{RetryPolicy, retry_with_backoff};
