use serde::{Deserialize, Serialize};

/// Represents a product in the inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (typically set by the actor system)
    /// * `name` - Product name
    /// * `price` - Unit price
    /// * `quantity` - Available stock quantity
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64, quantity: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            quantity,
        }
    }
}

/// Payload for creating a new product.
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

/// Payload for updating a product.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub price: Option<f64>,
    pub quantity: Option<u32>,
}

impl ProductUpdate {
    pub fn quantity(quantity: u32) -> Self {
        Self { price: None, quantity: Some(quantity) }
    }
}
