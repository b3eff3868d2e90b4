use crate::actor_framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during customer operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CustomerError {
    #[error("Customer validation error: {0}")]
    ValidationError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for CustomerError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::Rejected(msg) => CustomerError::ValidationError(msg),
            other => CustomerError::ActorCommunicationError(other.to_string()),
        }
    }
}
