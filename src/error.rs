//! Error types for board generation

use thiserror::Error;

/// Errors that can occur while configuring or querying a board
///
/// Rejected growth candidates are not errors: the generator retries or
/// restarts internally and always returns some mesh for well-formed input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// Configuration validation failed
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// The seed triangle cannot be grown from
    #[error("degenerate seed triangle: {0}")]
    DegenerateSeed(String),
    /// Requested area index does not exist
    #[error("area not found: {0}")]
    AreaNotFound(usize),
}

/// Result type alias for board operations
pub type Result<T> = std::result::Result<T, MeshError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            MeshError::InvalidConfig("width must be positive".into()).to_string(),
            "invalid configuration: width must be positive"
        );
        assert_eq!(MeshError::AreaNotFound(7).to_string(), "area not found: 7");
    }
}
