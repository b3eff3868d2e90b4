use crate::actor_framework::Entity;
use crate::domain::{Order, OrderCreate};

impl Entity for Order {
    type Id = String;
    type CreateParams = OrderCreate;
    type UpdateParams = (); // Orders are immutable once created

    fn id(&self) -> &String { &self.id }

    /// Creates a new Order from creation parameters.
    ///
    /// # Arguments
    /// * `id` - Unique identifier for the order
    /// * `params` - The customer and the already-priced lines
    fn from_create_params(id: String, params: OrderCreate) -> Result<Self, String> {
        Ok(Self {
            id,
            customer: params.customer,
            lines: params.lines,
        })
    }

    fn on_create(&mut self) -> Result<(), String> {
        if self.lines.is_empty() {
            return Err("Order has no lines".to_string());
        }
        Ok(())
    }

    fn on_update(&mut self, _update: ()) -> Result<(), String> {
        Err(format!("Order {} cannot be modified", self.id))
    }
}
