//! Name leaf specification

use std::fmt;
use std::marker::PhantomData;

use super::Specification;
use crate::domain::entities::Product;
use crate::domain::ports::HasName;

/// Satisfied when the item's name contains the substring (case-sensitive)
pub struct NameSpecification<T: ?Sized = Product> {
    substring: String,
    _item: PhantomData<fn(&T) -> bool>,
}

impl<T: ?Sized> NameSpecification<T> {
    pub fn new(substring: impl Into<String>) -> Self {
        Self {
            substring: substring.into(),
            _item: PhantomData,
        }
    }

    pub fn substring(&self) -> &str {
        &self.substring
    }
}

/// Shorthand for [`NameSpecification::new`]
pub fn by_name<T: HasName + ?Sized>(substring: impl Into<String>) -> NameSpecification<T> {
    NameSpecification::new(substring)
}

impl<T: HasName + ?Sized> Specification for NameSpecification<T> {
    type Item = T;

    fn is_satisfied(&self, item: &T) -> bool {
        item.name().contains(self.substring.as_str())
    }
}

impl<T: ?Sized> Clone for NameSpecification<T> {
    fn clone(&self) -> Self {
        Self::new(self.substring.clone())
    }
}

impl<T: ?Sized> fmt::Debug for NameSpecification<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NameSpecification")
            .field("substring", &self.substring)
            .finish()
    }
}
