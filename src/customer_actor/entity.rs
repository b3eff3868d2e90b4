use crate::actor_framework::Entity;
use crate::domain::{Customer, CustomerCreate, CustomerUpdate};

impl Entity for Customer {
    type Id = String;
    type CreateParams = CustomerCreate;
    type UpdateParams = CustomerUpdate;

    fn id(&self) -> &String { &self.id }

    /// Creates a new Customer from creation parameters.
    fn from_create_params(id: String, params: CustomerCreate) -> Result<Self, String> {
        Ok(Self::new(id, params.name, params.email))
    }

    /// Rejects customers without an email address.
    fn on_create(&mut self) -> Result<(), String> {
        if self.email.trim().is_empty() {
            return Err("Email required".to_string());
        }
        Ok(())
    }

    /// Updates the customer's profile information.
    ///
    /// # Fields Updated
    /// - `name`: Customer's display name
    /// - `email`: Customer's email address, must stay non-empty
    fn on_update(&mut self, update: CustomerUpdate) -> Result<(), String> {
        if let Some(email) = update.email {
            if email.trim().is_empty() {
                return Err("Email required".to_string());
            }
            self.email = email;
        }
        if let Some(name) = update.name {
            self.name = name;
        }
        Ok(())
    }
}
