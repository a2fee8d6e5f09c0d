use thiserror::Error;

/// Errors that can occur when validating locations and sunrise/sunset records.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LocationError {
    #[error("Location name cannot be empty")]
    EmptyName,
    #[error("Location country cannot be empty")]
    EmptyCountry,
    #[error("Sunrise/sunset date cannot be empty")]
    EmptyDate,
}
