use crate::actor_framework::Entity;
use crate::domain::{Product, ProductCreate, ProductUpdate};

fn check_price(price: f64) -> Result<(), String> {
    if price.is_finite() && price >= 0.0 {
        Ok(())
    } else {
        Err(format!("Invalid price: {}", price))
    }
}

impl Entity for Product {
    type Id = String;
    type CreateParams = ProductCreate;
    type UpdateParams = ProductUpdate;

    fn id(&self) -> &String { &self.id }

    /// Creates a new Product from creation parameters.
    ///
    /// # Arguments
    /// * `id` - Unique identifier for the product
    /// * `params` - Product creation parameters containing name, price, and quantity
    fn from_create_params(id: String, params: ProductCreate) -> Result<Self, String> {
        Ok(Self::new(id, params.name, params.price, params.quantity))
    }

    fn on_create(&mut self) -> Result<(), String> {
        check_price(self.price)
    }

    /// Updates the product's price and/or quantity.
    ///
    /// # Fields Updated
    /// - `price`: Product price
    /// - `quantity`: Available stock quantity
    fn on_update(&mut self, update: ProductUpdate) -> Result<(), String> {
        if let Some(price) = update.price {
            check_price(price)?;
            self.price = price;
        }
        if let Some(quantity) = update.quantity {
            self.quantity = quantity;
        }
        Ok(())
    }
}
