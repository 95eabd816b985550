use tracing::{debug, info, instrument, warn};

use crate::cart::{CartAction, CartActionResult, CartError};
use crate::clients::ProductClient;
use crate::domain::{Cart, CartCreate};
use crate::resource_framework::ResourceClient;

/// Client for shopping carts.
///
/// Adding a product orchestrates two collections: the cart must exist, then
/// the product must exist in the catalog, and only then is the cart written.
#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<Cart>,
    product_client: ProductClient,
}

impl_client_methods!(CartClient, Cart, CartError, cart);

impl CartClient {
    pub fn new(inner: ResourceClient<Cart>, product_client: ProductClient) -> Self {
        Self {
            inner,
            product_client,
        }
    }

    #[instrument(skip(self))]
    pub async fn list_carts(&self) -> Vec<Cart> {
        debug!("Sending request");
        self.inner.list().await
    }

    #[instrument(skip(self))]
    pub async fn create_cart(&self) -> Result<Cart, CartError> {
        debug!("Sending request");
        self.inner.create(CartCreate).await.map_err(CartError::from)
    }

    #[instrument(skip(self))]
    pub async fn add_product(&self, cart_id: u64, product_id: u64) -> Result<Cart, CartError> {
        info!("Processing add_product request");

        // Step 1: Validate cart
        if self.inner.get(cart_id).await.is_none() {
            warn!("Cart not found");
            return Err(CartError::NotFound(cart_id));
        }

        // Step 2: Validate product
        if !self.product_client.product_exists(product_id).await {
            warn!("Product not found");
            return Err(CartError::ProductNotFound(product_id));
        }

        // Step 3: Add the line item and persist the carts
        let (cart, CartActionResult::AddProduct(quantity)) = self
            .inner
            .perform_action(cart_id, CartAction::AddProduct(product_id))
            .await?;

        info!(quantity, "Product added to cart");
        Ok(cart)
    }
}
