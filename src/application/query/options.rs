//! Query options
//!
//! A `ProductQuery` describes which products the caller wants and turns that
//! description into a single specification.

use std::fmt;

use crate::domain::entities::Product;
use crate::domain::specifications::{
    all_of, any_of, by_color, by_name, by_price, SharedSpecification, SpecificationExt,
};
use crate::domain::value_objects::{Color, MatchMode, PriceRange};

/// Options for the query command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductQuery {
    /// Accepted colors (a product matches if its color is any of them)
    pub colors: Vec<Color>,
    /// Substrings the name must contain, one condition each
    pub names: Vec<String>,
    /// Price bounds
    pub price: Option<PriceRange>,
    /// How conditions combine
    pub mode: MatchMode,
    /// Invert the whole query
    pub negate: bool,
}

impl ProductQuery {
    /// Create an empty query (matches everything)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color(mut self, color: Color) -> Self {
        if !self.colors.contains(&color) {
            self.colors.push(color);
        }
        self
    }

    pub fn with_name(mut self, substring: impl Into<String>) -> Self {
        self.names.push(substring.into());
        self
    }

    pub fn with_price(mut self, range: PriceRange) -> Self {
        self.price = Some(range);
        self
    }

    pub fn with_mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_negate(mut self, negate: bool) -> Self {
        self.negate = negate;
        self
    }

    /// Number of conditions the query combines
    pub fn condition_count(&self) -> usize {
        usize::from(!self.colors.is_empty()) + self.names.len() + usize::from(self.price.is_some())
    }

    /// Build the specification this query describes.
    ///
    /// A query with no conditions matches every product in either mode.
    pub fn to_specification(&self) -> SharedSpecification<Product> {
        let mut conditions: Vec<SharedSpecification<Product>> = Vec::new();

        if !self.colors.is_empty() {
            conditions.push(any_of(self.colors.iter().copied().map(by_color::<Product>)).shared());
        }
        for name in &self.names {
            conditions.push(by_name(name.clone()).shared());
        }
        if let Some(range) = self.price {
            conditions.push(by_price(range).shared());
        }

        let combined = match self.mode {
            MatchMode::Any if !conditions.is_empty() => any_of(conditions).shared(),
            _ => all_of(conditions).shared(),
        };

        if self.negate {
            combined.not().shared()
        } else {
            combined
        }
    }
}

impl fmt::Display for ProductQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();

        match self.colors.as_slice() {
            [] => {}
            [color] => parts.push(format!("color is {color}")),
            colors => {
                let list: Vec<&str> = colors.iter().map(Color::as_str).collect();
                parts.push(format!("color in [{}]", list.join(", ")));
            }
        }
        for name in &self.names {
            parts.push(format!("name contains {name:?}"));
        }
        if let Some(range) = self.price {
            parts.push(format!("price in {range}"));
        }

        let joined = if parts.is_empty() {
            "everything".to_string()
        } else {
            let sep = match self.mode {
                MatchMode::All => " and ",
                MatchMode::Any => " or ",
            };
            parts.join(sep)
        };

        if self.negate {
            write!(f, "not ({joined})")
        } else {
            write!(f, "{joined}")
        }
    }
}
