//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `NavError` as one variant
//! where configuration flows through them.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NavError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `nav-core`.
pub type NavResult<T> = Result<T, NavError>;
