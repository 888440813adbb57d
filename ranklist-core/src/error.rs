//! Error types for RankList

use thiserror::Error;

/// Result type alias for RankList operations
pub type Result<T> = std::result::Result<T, RankListError>;

/// RankList error types
///
/// Lookups that find nothing are not errors; they return `None` or a zero
/// count. These variants only cover rejected setup and failed self-checks.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RankListError {
    /// Configuration rejected at construction time
    #[error("Configuration error: {0}")]
    InvalidConfig(String),

    /// Structural invariant violated, reported by `SkipList::verify`
    #[error("Skip list corruption: {0}")]
    Corruption(String),
}

impl RankListError {
    /// Check if error indicates corruption
    pub fn is_corruption(&self) -> bool {
        matches!(self, RankListError::Corruption(_))
    }
}
