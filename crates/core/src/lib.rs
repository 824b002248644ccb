//! Core types for travel-qa
//!
//! Domain types, input limits and environment helpers shared by the storage,
//! completion, service and HTTP crates.

mod constants;
mod env_config;
mod error;
mod query;
mod record;

pub use constants::*;
pub use env_config::{env_non_empty, env_parse_optional, env_parse_with_default};
pub use error::ValidationError;
pub use query::{PageRequest, QueryText};
pub use record::{NewQuery, Page, QueryRecord};
