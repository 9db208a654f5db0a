use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A sellable catalog entry.
///
/// `base_price` is the reference price the markup band is anchored to and
/// never changes after creation; `current_price` is what the storefront
/// shows and is what the optimizer moves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub sku: String,
    pub name: String,
    pub category: String,
    pub base_price: f64,
    pub current_price: f64,
    pub inventory: i32,
    pub is_active: bool,
    pub metadata: serde_json::Value,
}

impl Product {
    pub fn new(
        sku: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        base_price: f64,
        inventory: i32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            sku: sku.into(),
            name: name.into(),
            category: category.into(),
            base_price,
            current_price: base_price,
            inventory,
            is_active: true,
            metadata: serde_json::json!({}),
        }
    }
}

/// Round a price to whole cents. Applied prices are stored rounded;
/// intermediate scoring math is not.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_product_starts_at_base_price() {
        let product = Product::new("SKU-1", "Walnut desk", "furniture", 349.99, 12);
        assert_eq!(product.current_price, product.base_price);
        assert!(product.is_active);
    }

    #[test]
    fn test_round_to_cents() {
        assert_eq!(round_to_cents(85.556), 85.56);
        assert_eq!(round_to_cents(85.554), 85.55);
        assert_eq!(round_to_cents(110.0), 110.0);
    }
}
