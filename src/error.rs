//! Error types for kindred.

use thiserror::Error;

/// Errors that can occur when configuring a recommender.
///
/// All error conditions are construction-time: once a recommender has been
/// built, ingestion and queries are infallible. Degenerate inputs (empty
/// preference sets, `max_items == 0`) are defined behaviors, not errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KindredError {
    /// Invalid construction parameter.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, KindredError>;
