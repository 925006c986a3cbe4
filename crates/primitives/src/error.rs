use axum::response::{IntoResponse, Response};
use diesel::r2d2;
use http::StatusCode;
use std::fmt;

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    AlreadyRefunded(String),
    Configuration(String),
    Gateway(String),
    PersistenceUnavailable(String),
    Database(diesel::result::Error),
    Validation(validator::ValidationErrors),
    Internal(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound(e) => write!(f, "Not found: {}", e),
            ApiError::AlreadyRefunded(e) => write!(f, "Already refunded: {}", e),
            ApiError::Configuration(e) => write!(f, "Configuration error: {}", e),
            ApiError::Gateway(e) => write!(f, "Payment gateway error: {}", e),
            ApiError::PersistenceUnavailable(e) => write!(f, "Persistence unavailable: {}", e),
            ApiError::Database(e) => write!(f, "Database error: {}", e),
            ApiError::Validation(e) => write!(f, "Validation error: {}", e),
            ApiError::Internal(e) => write!(f, "Internal error: {}", e),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Database(e) => Some(e),
            ApiError::Validation(e) => Some(e),
            _ => None,
        }
    }
}

impl ApiError {
    /// Status code paired with the message that is safe to show a caller.
    /// Gateway and database details stay in the logs.
    pub fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            ApiError::AlreadyRefunded(msg) => (StatusCode::CONFLICT, msg.clone()),
            ApiError::Configuration(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Payment provider is not configured".to_string(),
            ),
            ApiError::Gateway(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Payment provider rejected the request".to_string(),
            ),
            ApiError::PersistenceUnavailable(_) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Order storage is not available".to_string(),
            ),
            ApiError::Database(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Database error".to_string(),
            ),
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                format!("Validation error: {}", errors),
            ),
            ApiError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal error".to_string(),
            ),
        }
    }
}

impl From<r2d2::Error> for ApiError {
    fn from(err: r2d2::Error) -> Self {
        ApiError::PersistenceUnavailable(err.to_string())
    }
}

impl From<r2d2::PoolError> for ApiError {
    fn from(err: r2d2::PoolError) -> Self {
        ApiError::PersistenceUnavailable(err.to_string())
    }
}

impl From<diesel::result::Error> for ApiError {
    fn from(err: diesel::result::Error) -> Self {
        ApiError::Database(err)
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        ApiError::Validation(err)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Gateway(err.to_string())
    }
}

impl From<ApiError> for (StatusCode, String) {
    fn from(err: ApiError) -> Self {
        err.status_and_message()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body): (StatusCode, String) = self.into();
        (status, body).into_response()
    }
}
