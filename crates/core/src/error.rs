//! Error types for coverage planning.

use thiserror::Error;

/// Errors raised while building a coverage planner.
///
/// Every variant is a construction-time failure. Once a planner exists,
/// planning itself cannot fail; degenerate partitions are reported as
/// empty results instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A scalar parameter is out of range (cell size, speed, partition count, start).
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The scan boundary is empty, degenerate or self-intersecting.
    #[error("invalid boundary: {0}")]
    InvalidBoundary(String),

    /// An exclusion polygon cannot be interpreted as an area.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),
}

/// Result alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidConfig("cell_size must be positive".into());
        assert_eq!(
            err.to_string(),
            "invalid configuration: cell_size must be positive"
        );

        let err = Error::InvalidBoundary("self-intersecting".into());
        assert_eq!(err.to_string(), "invalid boundary: self-intersecting");
    }
}
