// crates/geopack-core/src/error.rs
use thiserror::Error;

/// Errors that abort a build.
///
/// Row-level problems in the gazetteer are not represented here: a malformed
/// or ineligible row is dropped by the loader and only shows up in
/// [`IngestStats`](crate::loader::IngestStats).
#[derive(Debug, Error)]
pub enum GeoPackError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, GeoPackError>;
