use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Represents a product in the catalog.
///
/// Records created through the API carry every field. Records already on disk
/// may not: apart from `id`, absent fields stay absent when the collection is
/// written back, and fields this type does not name are kept in `extra`.
/// `price` and `stock` hold whatever JSON value was stored, so an integer
/// price is written back as an integer and a string price survives untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnails: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Payload for creating a new product.
///
/// Every field is optional at the wire level; presence is checked when the
/// product is built so that a missing field is a validation error rather than
/// a body rejection. A submitted `status` is never read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductCreate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub code: Option<String>,
    pub price: Option<Number>,
    pub stock: Option<Number>,
    pub category: Option<String>,
    pub thumbnails: Option<Vec<String>>,
}

/// Payload for merge-updating an existing product.
///
/// Known fields are typed; anything else lands in `extra` and is merged onto
/// the record as is. A submitted `id` is removed before merging.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub code: Option<String>,
    pub price: Option<Number>,
    pub status: Option<bool>,
    pub stock: Option<Number>,
    pub category: Option<String>,
    pub thumbnails: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProductCreate {
    fn has_text(field: &Option<String>) -> bool {
        field.as_deref().is_some_and(|s| !s.is_empty())
    }

    /// True when every required field is present. Empty strings count as
    /// missing, and so does a `null` price or stock; a zero price or stock
    /// does not.
    pub fn is_complete(&self) -> bool {
        Self::has_text(&self.title)
            && Self::has_text(&self.description)
            && Self::has_text(&self.code)
            && Self::has_text(&self.category)
            && self.price.is_some()
            && self.stock.is_some()
    }
}
