use tracing::{debug, instrument};

use crate::domain::{Product, ProductCreate};
use crate::product::ProductError;
use crate::resource_framework::ResourceClient;

/// Client for the product catalog.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl_basic_client!(ProductClient, Product, ProductError, product);

impl ProductClient {
    /// Lists products in stored order, truncated to `limit` when one is given.
    #[instrument(skip(self))]
    pub async fn list_products(&self, limit: Option<usize>) -> Vec<Product> {
        debug!("Sending request");
        let mut products = self.inner.list().await;
        if let Some(limit) = limit {
            products.truncate(limit);
        }
        products
    }

    #[instrument(skip(self, payload))]
    pub async fn create_product(&self, payload: ProductCreate) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.create(payload).await.map_err(ProductError::from)
    }

    /// Existence check used by the cart client before adding a line item.
    #[instrument(skip(self))]
    pub async fn product_exists(&self, id: u64) -> bool {
        self.inner.get(id).await.is_some()
    }
}
