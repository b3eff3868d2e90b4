use std::sync::Arc;
use tracing::{error, info};
use crate::clients::{CustomerClient, OrderClient, ProductClient};
use crate::order_service::CreateOrderService;
use crate::{customer_actor, order_actor, product_actor};
use super::SystemConfig;

/// The main application system that orchestrates all actors.
///
/// Responsible for starting up actors, wiring the order service to their
/// clients, and handling shutdown.
pub struct CommerceSystem {
    pub customer_client: CustomerClient,
    pub product_client: ProductClient,
    pub order_client: OrderClient,
    pub order_service: CreateOrderService,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl CommerceSystem {
    /// Spawns the actors. Must be called from within a tokio runtime.
    pub fn new(config: &SystemConfig) -> Self {
        let (customer_actor, customer_client) = customer_actor::new(config.channel_buffer);
        let customer_handle = tokio::spawn(customer_actor.run());

        let (product_actor, product_client) = product_actor::new(config.channel_buffer);
        let product_handle = tokio::spawn(product_actor.run());

        let (order_actor, order_client) = order_actor::new(config.channel_buffer);
        let order_handle = tokio::spawn(order_actor.run());

        let order_service = CreateOrderService::new(
            Arc::new(customer_client.clone()),
            Arc::new(product_client.clone()),
            Arc::new(order_client.clone()),
        );

        info!(channel_buffer = config.channel_buffer, "Commerce system started");

        Self {
            customer_client,
            product_client,
            order_client,
            order_service,
            handles: vec![customer_handle, product_handle, order_handle],
        }
    }

    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");
        // ResourceActor stops once every client (including the service's copies) is dropped.
        drop(self.order_service);
        drop(self.order_client);
        drop(self.customer_client);
        drop(self.product_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
