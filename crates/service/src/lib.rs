//! Service layer for travel-qa
//!
//! Centralizes the submit/history/stats flows between the HTTP handlers or
//! CLI and the storage/completion crates.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]

mod chat_service;
mod error;

#[cfg(test)]
mod chat_service_tests;

pub use chat_service::{ChatService, HistoryPage};
pub use error::ServiceError;
