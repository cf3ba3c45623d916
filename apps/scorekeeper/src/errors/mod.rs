//! Error handling for the scorekeeper.

pub mod domain;
pub mod error_code;

pub use domain::{ConfigError, DomainError};
pub use error_code::ErrorCode;
