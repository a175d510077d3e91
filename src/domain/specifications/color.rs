//! Color leaf specification

use std::fmt;
use std::marker::PhantomData;

use super::Specification;
use crate::domain::entities::Product;
use crate::domain::ports::HasColor;
use crate::domain::value_objects::Color;

/// Satisfied when the item's color equals the target color
pub struct ColorSpecification<T: ?Sized = Product> {
    color: Color,
    _item: PhantomData<fn(&T) -> bool>,
}

impl<T: ?Sized> ColorSpecification<T> {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            _item: PhantomData,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

/// Shorthand for [`ColorSpecification::new`]
pub fn by_color<T: HasColor + ?Sized>(color: Color) -> ColorSpecification<T> {
    ColorSpecification::new(color)
}

impl<T: HasColor + ?Sized> Specification for ColorSpecification<T> {
    type Item = T;

    fn is_satisfied(&self, item: &T) -> bool {
        item.color() == self.color
    }
}

impl<T: ?Sized> Clone for ColorSpecification<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for ColorSpecification<T> {}

impl<T: ?Sized> fmt::Debug for ColorSpecification<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorSpecification")
            .field("color", &self.color)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_equal_color() {
        let spec = by_color(Color::Red);
        assert!(spec.is_satisfied(&Product::new("Red Shirt", Color::Red)));
        assert!(!spec.is_satisfied(&Product::new("Blue Shirt", Color::Blue)));
    }

    #[test]
    fn works_for_any_item_with_a_color() {
        struct Marble(Color);

        impl HasColor for Marble {
            fn color(&self) -> Color {
                self.0
            }
        }

        let spec = by_color(Color::Yellow);
        assert!(spec.is_satisfied(&Marble(Color::Yellow)));
        assert!(!spec.is_satisfied(&Marble(Color::Black)));
    }

    #[test]
    fn debug_shows_target_color() {
        let spec: ColorSpecification = ColorSpecification::new(Color::Green);
        assert_eq!(format!("{spec:?}"), "ColorSpecification { color: Green }");
        assert_eq!(spec.color(), Color::Green);
    }
}
