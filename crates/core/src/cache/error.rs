use thiserror::Error;

/// Errors that can occur during cache operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CacheError {
    #[error("Cache operation failed: {0}")]
    OperationFailed(String),
}

/// Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_failed_display() {
        let error = CacheError::OperationFailed("store unavailable".to_string());
        assert_eq!(error.to_string(), "Cache operation failed: store unavailable");
    }
}
