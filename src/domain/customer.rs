use serde::{Deserialize, Serialize};

/// Represents a registered customer.
///
/// Order creation only cares that a customer exists; the profile fields are
/// carried along onto the created order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Payload for creating a new customer.
#[derive(Debug, Clone)]
pub struct CustomerCreate {
    pub name: String,
    pub email: String,
}

/// Payload for updating an existing customer.
#[derive(Debug, Clone, Default)]
pub struct CustomerUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl Customer {
    /// Creates a new Customer instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (typically set by the actor system)
    /// * `name` - Customer's display name
    /// * `email` - Customer's email address
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
        }
    }
}
