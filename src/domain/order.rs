use serde::{Deserialize, Serialize};
use crate::domain::Customer;

/// One requested (product, quantity) pair, as sent by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLineRequest {
    /// Product identifier.
    pub id: String,
    pub quantity: u32,
}

impl OrderLineRequest {
    pub fn new(id: impl Into<String>, quantity: u32) -> Self {
        Self { id: id.into(), quantity }
    }
}

/// A priced line item. `price` is the unit price captured when the order was created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: String,
    pub price: f64,
    pub quantity: u32,
}

/// Represents a customer order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub customer: Customer,
    pub lines: Vec<OrderLine>,
}

/// Payload for creating a new order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub customer: Customer,
    pub lines: Vec<OrderLine>,
}

impl Order {
    /// Sum of unit price times quantity over all lines.
    pub fn total(&self) -> f64 {
        self.lines
            .iter()
            .map(|line| line.price * f64::from(line.quantity))
            .sum()
    }
}
