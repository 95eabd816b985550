use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One product entry inside a cart.
///
/// Line items written by other tools may use other keys; those are kept in
/// `extra` and a missing `product` stays missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<u64>,
    #[serde(default)]
    pub quantity: u64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Represents a shopping cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub id: u64,
    #[serde(default)]
    pub products: Vec<LineItem>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Payload for creating a new cart. Carts always start empty.
#[derive(Debug, Clone, Default)]
pub struct CartCreate;

/// Payload for merge-updating an existing cart.
///
/// Unlike [`ProductPatch`](super::ProductPatch), `id` is accepted and applied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CartPatch {
    pub id: Option<u64>,
    pub products: Option<Vec<LineItem>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LineItem {
    pub fn new(product: u64, quantity: u64) -> Self {
        Self {
            product: Some(product),
            quantity,
            extra: Map::new(),
        }
    }
}

impl Cart {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            products: Vec::new(),
            extra: Map::new(),
        }
    }

    /// Adds one unit of `product_id`, incrementing the existing line item if
    /// there is one. Returns the new quantity, or `None` when the quantity
    /// cannot grow any further; the cart is unchanged in that case.
    pub fn add_product(&mut self, product_id: u64) -> Option<u64> {
        match self
            .products
            .iter_mut()
            .find(|item| item.product == Some(product_id))
        {
            Some(item) => {
                item.quantity = item.quantity.checked_add(1)?;
                Some(item.quantity)
            }
            None => {
                self.products.push(LineItem::new(product_id, 1));
                Some(1)
            }
        }
    }
}
