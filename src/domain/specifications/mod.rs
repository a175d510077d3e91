//! Specifications - reusable predicates over items
//!
//! A [`Specification`] answers one question: does this item satisfy me?
//! Leaves test a single attribute, composites combine other specifications
//! with a boolean operator. New conditions are added as new types; neither
//! the trait, the existing leaves nor the [`Filter`](crate::domain::services::Filter)
//! change when they are.
//!
//! ## Item type binding
//!
//! The item type is an associated type, so every specification is tied to
//! exactly one item type. Combinators require their children to share it
//! (`B: Specification<Item = A::Item>`); composing mismatched specifications
//! is a compile error, never an evaluation-time one.
//!
//! ## Sharing
//!
//! `&S`, `Box<S>`, `Rc<S>` and `Arc<S>` are specifications whenever `S` is,
//! so one child can appear in several composites.

use std::rc::Rc;
use std::sync::Arc;

mod color;
mod composite;
mod name;
mod predicate;
mod price;

pub use color::{by_color, ColorSpecification};
pub use composite::{
    all_of, and, any_of, not, or, AllOf, AndSpecification, AnyOf, NotSpecification,
    OrSpecification,
};
pub use name::{by_name, NameSpecification};
pub use predicate::{from_fn, PredicateSpecification};
pub use price::{by_price, PriceRangeSpecification};

/// A predicate over values of [`Specification::Item`].
///
/// `is_satisfied` must be a pure function of the item and the values the
/// specification was constructed with.
pub trait Specification {
    /// The item type this specification tests
    type Item: ?Sized;

    /// Check whether `item` satisfies this specification
    fn is_satisfied(&self, item: &Self::Item) -> bool;
}

/// Type-erased specification borrowing for `'a`
pub type BoxedSpecification<'a, T> = Box<dyn Specification<Item = T> + 'a>;

/// Type-erased specification that can cross threads
pub type SharedSpecification<T> = Box<dyn Specification<Item = T> + Send + Sync>;

impl<S: Specification + ?Sized> Specification for &S {
    type Item = S::Item;

    fn is_satisfied(&self, item: &Self::Item) -> bool {
        (**self).is_satisfied(item)
    }
}

impl<S: Specification + ?Sized> Specification for Box<S> {
    type Item = S::Item;

    fn is_satisfied(&self, item: &Self::Item) -> bool {
        (**self).is_satisfied(item)
    }
}

impl<S: Specification + ?Sized> Specification for Rc<S> {
    type Item = S::Item;

    fn is_satisfied(&self, item: &Self::Item) -> bool {
        (**self).is_satisfied(item)
    }
}

impl<S: Specification + ?Sized> Specification for Arc<S> {
    type Item = S::Item;

    fn is_satisfied(&self, item: &Self::Item) -> bool {
        (**self).is_satisfied(item)
    }
}

/// Method-style combinators available on every specification
pub trait SpecificationExt: Specification + Sized {
    /// Both `self` and `other` must hold; `other` is skipped when `self` fails
    fn and<S>(self, other: S) -> AndSpecification<Self, S>
    where
        S: Specification<Item = Self::Item>,
    {
        AndSpecification::new(self, other)
    }

    /// Either `self` or `other` must hold; `other` is skipped when `self` holds
    fn or<S>(self, other: S) -> OrSpecification<Self, S>
    where
        S: Specification<Item = Self::Item>,
    {
        OrSpecification::new(self, other)
    }

    /// Invert `self`
    fn not(self) -> NotSpecification<Self> {
        NotSpecification::new(self)
    }

    /// Erase the concrete type
    fn boxed<'a>(self) -> BoxedSpecification<'a, Self::Item>
    where
        Self: 'a,
    {
        Box::new(self)
    }

    /// Erase the concrete type, keeping the value thread-safe
    fn shared(self) -> SharedSpecification<Self::Item>
    where
        Self: Send + Sync + 'static,
    {
        Box::new(self)
    }
}

impl<S: Specification> SpecificationExt for S {}
