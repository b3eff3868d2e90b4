use async_trait::async_trait;
use tracing::{debug, instrument};
use crate::actor_framework::ResourceClient;
use crate::domain::{Product, ProductCreate, ProductUpdate};
use crate::product_actor::ProductError;
use crate::repositories::ProductCatalog;

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl_basic_client!(ProductClient, Product, ProductError, product);

impl ProductClient {
    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(ProductError::from)
    }
}

#[async_trait]
impl ProductCatalog for ProductClient {
    #[instrument(skip(self))]
    async fn find_all_by_id(&self, ids: &[String]) -> Result<Vec<Product>, ProductError> {
        debug!("Sending request");
        self.inner.get_many(ids.to_vec()).await.map_err(ProductError::from)
    }

    #[instrument(skip(self, products), fields(count = products.len()))]
    async fn update_quantities(&self, products: &[Product]) -> Result<(), ProductError> {
        debug!("Sending request");
        let updates = products
            .iter()
            .map(|product| (product.id.clone(), ProductUpdate::quantity(product.quantity)))
            .collect();
        self.inner.update_many(updates).await.map_err(ProductError::from)?;
        Ok(())
    }
}
