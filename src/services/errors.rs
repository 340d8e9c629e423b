use thiserror::Error;

use crate::repository::errors::RepositoryError;
use crate::shopify::ShopifyError;

/// Result alias returned by the service layer.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Error taxonomy exposed to the HTTP layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Missing or malformed input supplied by the caller.
    #[error("{0}")]
    Validation(String),
    /// A unique key is already taken.
    #[error("{0}")]
    Conflict(String),
    #[error("not found")]
    NotFound,
    /// The Shopify Admin API call failed.
    #[error("{0}")]
    Upstream(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<RepositoryError> for ServiceError {
    fn from(value: RepositoryError) -> Self {
        match value {
            RepositoryError::NotFound => ServiceError::NotFound,
            RepositoryError::Conflict(message) => ServiceError::Conflict(message),
            other => ServiceError::Internal(other.to_string()),
        }
    }
}

impl From<ShopifyError> for ServiceError {
    fn from(value: ShopifyError) -> Self {
        ServiceError::Upstream(value.to_string())
    }
}
