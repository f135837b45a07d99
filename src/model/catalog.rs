//! The product list shown on the Products tab.
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for catalog items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

/// A single product in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Unit price, never negative.
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
}

impl Product {
    /// Creates a new Product.
    ///
    /// # Arguments
    /// * `id` - Catalog identifier
    /// * `name` - Display name
    /// * `price` - Unit price
    /// * `category` - Category label
    /// * `in_stock` - Availability flag
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: f64,
        category: impl Into<String>,
        in_stock: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            category: category.into(),
            in_stock,
        }
    }
}

/// Ordered list of products. Serialized as a bare JSON array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog(pub Vec<Product>);

impl Catalog {
    /// The fixed six-item catalog, served by the provider and used as the fallback.
    pub fn fallback() -> Self {
        Self(vec![
            Product::new(1, "Laptop", 999.99, "Electronics", true),
            Product::new(2, "Wireless Headphones", 199.99, "Electronics", true),
            Product::new(3, "Smart Watch", 299.99, "Electronics", false),
            Product::new(4, "Coffee Maker", 89.99, "Appliances", true),
            Product::new(5, "Desk Chair", 249.99, "Furniture", true),
            Product::new(6, "Backpack", 59.99, "Accessories", true),
        ])
    }

    pub fn items(&self) -> &[Product] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, id: impl Into<ProductId>) -> Option<&Product> {
        let id = id.into();
        self.0.iter().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_catalog_stock_flags() {
        let catalog = Catalog::fallback();
        assert_eq!(catalog.len(), 6);

        let watch = catalog.get(ProductId(3)).expect("item 3 present");
        assert_eq!(watch.name, "Smart Watch");
        assert!(!watch.in_stock);

        for product in catalog.items().iter().filter(|p| p.id != ProductId(3)) {
            assert!(product.in_stock, "{} should be in stock", product.id);
        }
    }

    #[test]
    fn test_catalog_wire_format_is_camel_case_array() {
        let json = serde_json::to_value(Catalog::fallback()).unwrap();
        let items = json.as_array().expect("catalog serializes as an array");
        assert_eq!(items[2]["inStock"], serde_json::json!(false));
        assert_eq!(items[2]["id"], serde_json::json!(3));
        assert_eq!(items[0]["name"], serde_json::json!("Laptop"));
    }

    #[test]
    fn test_lookup_accepts_raw_ids() {
        let catalog = Catalog::fallback();
        assert_eq!(catalog.get(6), catalog.get(ProductId(6)));
        assert_eq!(catalog.get(6).map(|p| p.name.as_str()), Some("Backpack"));
        assert_eq!(catalog.get(7), None);
    }

    #[test]
    fn test_prices_are_non_negative() {
        assert!(Catalog::fallback().items().iter().all(|p| p.price >= 0.0));
    }
}
