use serde_json::{Map, Value};

use crate::domain::{Product, ProductCreate, ProductPatch};
use crate::resource_framework::Entity;

pub const MISSING_FIELDS: &str = "Missing required fields";

impl Entity for Product {
    type CreatePayload = ProductCreate;
    type Patch = ProductPatch;
    type Action = ();
    type ActionResult = ();

    const KIND: &'static str = "product";

    fn id(&self) -> u64 {
        self.id
    }

    fn validate_create(payload: &ProductCreate) -> Result<(), String> {
        if payload.is_complete() {
            Ok(())
        } else {
            Err(MISSING_FIELDS.to_string())
        }
    }

    /// Creates a new Product from creation parameters.
    ///
    /// # Notes
    /// `status` always starts as `true` and `thumbnails` defaults to empty.
    fn from_create(id: u64, payload: ProductCreate) -> Result<Self, String> {
        let ProductCreate {
            title: Some(title),
            description: Some(description),
            code: Some(code),
            price: Some(price),
            stock: Some(stock),
            category: Some(category),
            thumbnails,
        } = payload
        else {
            return Err(MISSING_FIELDS.to_string());
        };

        Ok(Self {
            id,
            title: Some(title),
            description: Some(description),
            code: Some(code),
            price: Some(Value::Number(price)),
            status: Some(true),
            stock: Some(Value::Number(stock)),
            category: Some(category),
            thumbnails: Some(thumbnails.unwrap_or_default()),
            extra: Map::new(),
        })
    }

    /// Merges the submitted fields onto the product. The id is never touched,
    /// even when it arrives among the unknown fields.
    fn on_update(&mut self, patch: ProductPatch) {
        let ProductPatch {
            title,
            description,
            code,
            price,
            status,
            stock,
            category,
            thumbnails,
            mut extra,
        } = patch;

        if title.is_some() {
            self.title = title;
        }
        if description.is_some() {
            self.description = description;
        }
        if code.is_some() {
            self.code = code;
        }
        if let Some(price) = price {
            self.price = Some(Value::Number(price));
        }
        if status.is_some() {
            self.status = status;
        }
        if let Some(stock) = stock {
            self.stock = Some(Value::Number(stock));
        }
        if category.is_some() {
            self.category = category;
        }
        if thumbnails.is_some() {
            self.thumbnails = thumbnails;
        }

        extra.remove("id");
        self.extra.extend(extra);
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), String> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload() -> ProductCreate {
        serde_json::from_value(json!({
            "title": "T", "description": "D", "code": "C1",
            "price": 10, "stock": 5, "category": "cat"
        }))
        .unwrap()
    }

    #[test]
    fn create_defaults_status_and_thumbnails() {
        let product = Product::from_create(1, payload()).unwrap();
        assert_eq!(product.status, Some(true));
        assert_eq!(product.thumbnails, Some(Vec::new()));
    }

    #[test]
    fn create_requires_stock() {
        let mut incomplete = payload();
        incomplete.stock = None;
        assert_eq!(
            Product::validate_create(&incomplete),
            Err(MISSING_FIELDS.to_string())
        );
    }

    #[test]
    fn update_overwrites_only_submitted_fields() {
        let mut product = Product::from_create(3, payload()).unwrap();
        let patch: ProductPatch =
            serde_json::from_value(json!({ "id": 9, "price": 12.5, "status": false, "brand": "acme" }))
                .unwrap();

        product.on_update(patch);

        assert_eq!(product.id, 3);
        assert_eq!(product.title.as_deref(), Some("T"));
        assert_eq!(product.price, Some(json!(12.5)));
        assert_eq!(product.status, Some(false));
        assert_eq!(product.extra.get("brand"), Some(&json!("acme")));
        assert!(!product.extra.contains_key("id"));
    }
}
