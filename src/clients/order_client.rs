use async_trait::async_trait;
use tracing::{debug, info, instrument};
use crate::actor_framework::ResourceClient;
use crate::domain::{Order, OrderCreate};
use crate::order_actor::OrderError;
use crate::repositories::OrderStore;

/// Client for interacting with the Order actor.
///
/// Only persists orders. Validation and pricing happen in
/// [`CreateOrderService`](crate::order_service::CreateOrderService) before
/// anything reaches this client.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl_basic_client!(OrderClient, Order, OrderError, order);

#[async_trait]
impl OrderStore for OrderClient {
    #[instrument(skip(self, order), fields(customer_id = %order.customer.id, lines = order.lines.len()))]
    async fn create(&self, order: OrderCreate) -> Result<Order, OrderError> {
        debug!("Sending request");
        let order = self.inner.create(order).await.map_err(OrderError::from)?;
        info!(order_id = %order.id, "Order stored");
        Ok(order)
    }
}
