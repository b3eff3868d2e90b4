//! # Order Service
//!
//! Order creation for a commerce application: validate the customer, check
//! stock, price the lines, store the order, and decrement inventory.
//!
//! - [`order_service::CreateOrderService`] holds the business rules and only
//!   talks to the collaborator traits in [`repositories`].
//! - The in-memory collaborators are resource actors ([`actor_framework`])
//!   reached through typed clients ([`clients`]).
//! - [`app_system::CommerceSystem`] wires everything together.

pub mod actor_framework;
pub mod app_system;
pub mod clients;
pub mod customer_actor;
pub mod domain;
pub mod order_actor;
pub mod order_service;
pub mod product_actor;
pub mod repositories;

#[cfg(test)]
mod mock_framework;
