/// Custom actions for Cart entities.
#[derive(Debug, Clone)]
pub enum CartAction {
    /// Adds one unit of the given product id.
    ///
    /// The product is expected to have been checked against the catalog
    /// already; the cart itself does not know what products exist.
    AddProduct(u64),
}

/// Results from CartActions - variants match 1:1 with CartAction
#[derive(Debug, Clone, PartialEq)]
pub enum CartActionResult {
    /// Quantity of the line item after the addition.
    AddProduct(u64),
}
