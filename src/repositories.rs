//! Collaborator contracts consumed by order creation.
//!
//! The service only sees these traits. The actor-backed clients in
//! [`crate::clients`] implement them; tests may script them through
//! the mock framework instead.

use async_trait::async_trait;
use crate::customer_actor::CustomerError;
use crate::domain::{Customer, Order, OrderCreate, Product};
use crate::order_actor::OrderError;
use crate::product_actor::ProductError;

/// Resolves customers by identifier.
#[async_trait]
pub trait CustomerLookup: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<Customer>, CustomerError>;
}

/// Batch access to the product inventory.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Returns the subset of `ids` that exist. Unknown ids are silently skipped.
    async fn find_all_by_id(&self, ids: &[String]) -> Result<Vec<Product>, ProductError>;

    /// Persists the `quantity` of every given product. Other fields are left alone.
    async fn update_quantities(&self, products: &[Product]) -> Result<(), ProductError>;
}

/// Persists new orders.
#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn create(&self, order: OrderCreate) -> Result<Order, OrderError>;
}
