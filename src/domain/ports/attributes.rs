//! Attribute ports - what leaf specifications need from an item
//!
//! Leaf specifications are generic over these traits rather than over
//! `Product`, so any application type exposing a name, color or price can be
//! filtered without touching the leaves.

use crate::domain::value_objects::Color;

/// Item with a textual name
pub trait HasName {
    fn name(&self) -> &str;
}

/// Item with a color token
pub trait HasColor {
    fn color(&self) -> Color;
}

/// Item with an optional price in minor units
pub trait HasPrice {
    fn price(&self) -> Option<u32>;
}

impl<T: HasName + ?Sized> HasName for &T {
    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: HasColor + ?Sized> HasColor for &T {
    fn color(&self) -> Color {
        (**self).color()
    }
}

impl<T: HasPrice + ?Sized> HasPrice for &T {
    fn price(&self) -> Option<u32> {
        (**self).price()
    }
}
