use thiserror::Error;

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} with id {id} not found")]
    NotFound { entity_type: &'static str, id: i64 },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl RepositoryError {
    /// Builds a `NotFound` error for the given entity and id.
    pub fn not_found(entity_type: &'static str, id: i64) -> Self {
        Self::NotFound { entity_type, id }
    }

    /// HTTP status code that best describes this error.
    ///
    /// ```
    /// use daylight_core::storage::RepositoryError;
    ///
    /// assert_eq!(RepositoryError::not_found("SunriseSunset", 9).status_code(), 404);
    /// assert_eq!(RepositoryError::ConnectionFailed("down".into()).status_code(), 503);
    /// ```
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::ConnectionFailed(_) => 503,
            Self::QueryFailed(_) | Self::Serialization(_) => 500,
            Self::InvalidData(_) => 400,
        }
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let error = RepositoryError::not_found("SunriseSunset", 12);
        assert_eq!(error.to_string(), "SunriseSunset with id 12 not found");
        assert!(matches!(
            error,
            RepositoryError::NotFound {
                entity_type: "SunriseSunset",
                id: 12
            }
        ));
    }

    #[test]
    fn test_store_failures_display() {
        assert_eq!(
            RepositoryError::ConnectionFailed("timeout after 30s".to_string()).to_string(),
            "Connection failed: timeout after 30s"
        );
        assert_eq!(
            RepositoryError::QueryFailed("no such table".to_string()).to_string(),
            "Query failed: no such table"
        );
        assert_eq!(
            RepositoryError::InvalidData("foreign key".to_string()).to_string(),
            "Invalid data: foreign key"
        );
    }

    #[test]
    fn test_status_codes() {
        let cases = [
            (RepositoryError::not_found("Location", 1), 404),
            (RepositoryError::ConnectionFailed(String::new()), 503),
            (RepositoryError::QueryFailed(String::new()), 500),
            (RepositoryError::Serialization(String::new()), 500),
            (RepositoryError::InvalidData(String::new()), 400),
        ];

        for (error, expected) in cases {
            assert_eq!(error.status_code(), expected, "{error}");
        }
    }
}
