//! Price leaf specification
//!
//! Added alongside color and name without touching either of them.

use std::fmt;
use std::marker::PhantomData;

use super::Specification;
use crate::domain::entities::Product;
use crate::domain::ports::HasPrice;
use crate::domain::value_objects::PriceRange;

/// Satisfied when the item has a price inside the range.
///
/// Items without a price never match, even an unbounded range.
pub struct PriceRangeSpecification<T: ?Sized = Product> {
    range: PriceRange,
    _item: PhantomData<fn(&T) -> bool>,
}

impl<T: ?Sized> PriceRangeSpecification<T> {
    pub fn new(range: PriceRange) -> Self {
        Self {
            range,
            _item: PhantomData,
        }
    }

    pub fn range(&self) -> PriceRange {
        self.range
    }
}

/// Shorthand for [`PriceRangeSpecification::new`]
pub fn by_price<T: HasPrice + ?Sized>(range: PriceRange) -> PriceRangeSpecification<T> {
    PriceRangeSpecification::new(range)
}

impl<T: HasPrice + ?Sized> Specification for PriceRangeSpecification<T> {
    type Item = T;

    fn is_satisfied(&self, item: &T) -> bool {
        item.price().is_some_and(|price| self.range.contains(price))
    }
}

impl<T: ?Sized> Clone for PriceRangeSpecification<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for PriceRangeSpecification<T> {}

impl<T: ?Sized> fmt::Debug for PriceRangeSpecification<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriceRangeSpecification")
            .field("range", &self.range.to_string())
            .finish()
    }
}
