use crate::actor_framework::FrameworkError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(String),
    #[error("Product validation error: {0}")]
    ValidationError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for ProductError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => ProductError::NotFound(id),
            FrameworkError::Rejected(msg) => ProductError::ValidationError(msg),
            other => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}
