use super::actions::{CartAction, CartActionResult};
use crate::domain::{Cart, CartCreate, CartPatch};
use crate::resource_framework::Entity;

pub const QUANTITY_LIMIT: &str = "Quantity limit reached";

impl Entity for Cart {
    type CreatePayload = CartCreate;
    type Patch = CartPatch;
    type Action = CartAction;
    type ActionResult = CartActionResult;

    const KIND: &'static str = "cart";

    fn id(&self) -> u64 {
        self.id
    }

    fn from_create(id: u64, _payload: CartCreate) -> Result<Self, String> {
        Ok(Cart::new(id))
    }

    /// Merges the submitted fields onto the cart.
    ///
    /// A submitted `id` replaces the stored one; products are not protected
    /// the way they are in the catalog. Unknown fields are merged as is.
    fn on_update(&mut self, patch: CartPatch) {
        let CartPatch {
            id,
            products,
            extra,
        } = patch;

        if let Some(id) = id {
            self.id = id;
        }
        if let Some(products) = products {
            self.products = products;
        }
        self.extra.extend(extra);
    }

    fn handle_action(&mut self, action: CartAction) -> Result<CartActionResult, String> {
        match action {
            CartAction::AddProduct(product_id) => self
                .add_product(product_id)
                .map(CartActionResult::AddProduct)
                .ok_or_else(|| QUANTITY_LIMIT.to_string()),
        }
    }
}
