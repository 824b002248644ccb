//! Typed error enum for the service layer.
//!
//! Unifies validation, storage and completion failures so callers can match
//! on the failure mode instead of downcasting.

use thiserror::Error;
use travel_qa_core::ValidationError;
use travel_qa_llm::LlmError;
use travel_qa_storage::StorageError;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Caller input rejected before any side effect.
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// Completion call failed on every attempt.
    #[error("completion: {0}")]
    Completion(#[from] LlmError),

    /// Storage operation failed.
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// A freshly inserted record could not be read back.
    #[error("record {0} missing right after insert")]
    MissingAfterInsert(i64),

    /// Blocking storage task panicked or was cancelled.
    #[error("background task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl ServiceError {
    /// Whether the caller, not the system, is at fault.
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
