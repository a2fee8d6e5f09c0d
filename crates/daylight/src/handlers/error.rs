use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use daylight_core::location::LocationError;
use daylight_core::storage::RepositoryError;

/// A malformed or missing query parameter.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct BadRequest(pub String);

/// Application error type that wraps `anyhow::Error`.
///
/// The status code comes from the wrapped error. `RepositoryError` and JSON
/// body rejections carry their own, validation errors are 400 and anything
/// else is 500.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl AppError {
    fn status_code(&self) -> StatusCode {
        if let Some(repo_error) = self.0.downcast_ref::<RepositoryError>() {
            StatusCode::from_u16(repo_error.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        } else if let Some(rejection) = self.0.downcast_ref::<JsonRejection>() {
            rejection.status()
        } else if self.0.is::<LocationError>() || self.0.is::<BadRequest>() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        if status_code.is_server_error() {
            tracing::error!(status = %status_code, error = %self.0, "Application error");
        } else {
            tracing::warn!(status = %status_code, error = %self.0, "API error");
        }

        (status_code, self.0.to_string()).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_errors_keep_their_status() {
        let not_found = AppError::from(RepositoryError::not_found("SunriseSunset", 4));
        let down = AppError::from(RepositoryError::ConnectionFailed("closed".to_string()));

        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(down.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_validation_errors_are_bad_request() {
        assert_eq!(
            AppError::from(LocationError::EmptyName).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(BadRequest("bad ids".to_string())).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_other_errors_are_internal() {
        let error = AppError::from(anyhow::anyhow!("boom"));

        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_response_body_is_error_message() {
        let response = AppError::from(RepositoryError::not_found("SunriseSunset", 4)).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
