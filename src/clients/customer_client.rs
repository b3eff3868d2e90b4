use async_trait::async_trait;
use tracing::{debug, instrument};
use crate::actor_framework::ResourceClient;
use crate::customer_actor::CustomerError;
use crate::domain::{Customer, CustomerCreate};
use crate::repositories::CustomerLookup;

/// Client for interacting with the Customer actor.
#[derive(Clone)]
pub struct CustomerClient {
    inner: ResourceClient<Customer>,
}

impl_basic_client!(CustomerClient, Customer, CustomerError, customer);

impl CustomerClient {
    #[instrument(skip(self))]
    pub async fn create_customer(&self, params: CustomerCreate) -> Result<Customer, CustomerError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(CustomerError::from)
    }
}

#[async_trait]
impl CustomerLookup for CustomerClient {
    async fn find_by_id(&self, id: &str) -> Result<Option<Customer>, CustomerError> {
        self.get_customer(id.to_string()).await
    }
}
