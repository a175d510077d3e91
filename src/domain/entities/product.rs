//! Product entity - a single catalog entry
//!
//! Products are the items every bundled leaf specification knows how to test.

use serde::{Deserialize, Serialize};

use crate::domain::ports::{HasColor, HasName, HasPrice};
use crate::domain::value_objects::Color;

/// A catalog product
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    /// Display name, matched by substring
    name: String,
    /// Color token
    color: Color,
    /// Price in minor currency units, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    price: Option<u32>,
}

impl Product {
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
            price: None,
        }
    }

    /// Builder: set price
    pub fn with_price(mut self, price: u32) -> Self {
        self.price = Some(price);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn price(&self) -> Option<u32> {
        self.price
    }
}

impl HasName for Product {
    fn name(&self) -> &str {
        &self.name
    }
}

impl HasColor for Product {
    fn color(&self) -> Color {
        self.color
    }
}

impl HasPrice for Product {
    fn price(&self) -> Option<u32> {
        self.price
    }
}

impl std::fmt::Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.price {
            Some(price) => write!(f, "{} ({}, {})", self.name, self.color, price),
            None => write!(f, "{} ({})", self.name, self.color),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_new_has_no_price() {
        let product = Product::new("Red Shirt", Color::Red);
        assert_eq!(product.name(), "Red Shirt");
        assert_eq!(product.color(), Color::Red);
        assert_eq!(product.price(), None);
    }

    #[test]
    fn product_with_price() {
        let product = Product::new("Green Hat", Color::Green).with_price(1250);
        assert_eq!(product.price(), Some(1250));
    }

    #[test]
    fn product_display() {
        assert_eq!(
            Product::new("Blue Shirt", Color::Blue).to_string(),
            "Blue Shirt (blue)"
        );
        assert_eq!(
            Product::new("Blue Shirt", Color::Blue)
                .with_price(999)
                .to_string(),
            "Blue Shirt (blue, 999)"
        );
    }

    #[test]
    fn product_deserializes_without_price() {
        let product: Product =
            toml::from_str("name = \"Green Hat\"\ncolor = \"green\"\n").unwrap();
        assert_eq!(product, Product::new("Green Hat", Color::Green));
    }
}
