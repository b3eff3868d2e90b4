use crate::actor_framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during order persistence.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Order validation error: {0}")]
    ValidationError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for OrderError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::Rejected(msg) => OrderError::ValidationError(msg),
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
