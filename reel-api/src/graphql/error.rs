use async_graphql::ErrorExtensions;
use reel_auth::utils::service::AuthError;
use thiserror::Error;
use tracing::error;

use crate::services::{DirectorError, MovieError};

/// Errors surfaced to GraphQL clients. Each carries a stable `extensions.code`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("You do not have permission to perform this action")]
    PermissionDenied,
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    InvalidInput(String),
    #[error("{0}")]
    Authentication(String),
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::PermissionDenied => "PERMISSION_DENIED",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::InvalidInput(_) => "BAD_USER_INPUT",
            ApiError::Authentication(_) => "AUTHENTICATION_FAILED",
            ApiError::Internal(_) => "INTERNAL_SERVER_ERROR",
        }
    }
}

impl ErrorExtensions for ApiError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", self.code()))
    }
}

impl From<DirectorError> for ApiError {
    fn from(e: DirectorError) -> Self {
        let message = e.to_string();
        match e {
            DirectorError::NotFound => ApiError::NotFound(message),
            DirectorError::Validation(_) => ApiError::InvalidInput(message),
            DirectorError::Db(_) => {
                error!("Director store failure: {}", message);
                ApiError::Internal(message)
            }
        }
    }
}

impl From<MovieError> for ApiError {
    fn from(e: MovieError) -> Self {
        let message = e.to_string();
        match e {
            MovieError::NotFound => ApiError::NotFound(message),
            MovieError::Db(_) => {
                error!("Movie store failure: {}", message);
                ApiError::Internal(message)
            }
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(e: AuthError) -> Self {
        let message = e.to_string();
        match e {
            AuthError::Database(_) | AuthError::PasswordHash(_) | AuthError::TokenEncoding(_) => {
                error!("Auth provider failure: {}", message);
                ApiError::Internal(message)
            }
            _ => ApiError::Authentication(message),
        }
    }
}

/// Converts any service error into a GraphQL error carrying its code.
pub fn gql_error(e: impl Into<ApiError>) -> async_graphql::Error {
    e.into().extend()
}
