//! Error types for folio.

use thiserror::Error;

/// Errors surfaced by the fallible parts of the core (config loading and
/// category lookup by user-supplied label).
///
/// Filtering, stepping and rendering never fail. A missing drawing surface is
/// handled by the animation lifecycle as a silent no-op, not as an error.
#[derive(Debug, Error)]
pub enum FolioError {
    #[error("unknown category: {0:?}")]
    UnknownCategory(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("config parse failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FolioError>;
