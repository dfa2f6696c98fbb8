//! Spatial-subsystem error type.
//!
//! Graph and search operations never fail; only loading map data and
//! validating construction parameters do.

use thiserror::Error;

use nav_core::NavError;

/// Errors produced by `nav-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("map JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Config(#[from] NavError),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
