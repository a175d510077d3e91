//! Closure-backed leaf specification

use std::fmt;
use std::marker::PhantomData;

use super::Specification;

/// Wraps any `Fn(&T) -> bool` as a specification
pub struct PredicateSpecification<T: ?Sized, F> {
    predicate: F,
    _item: PhantomData<fn(&T) -> bool>,
}

/// Build an ad-hoc leaf from a closure.
///
/// The closure must be pure: same item in, same answer out.
pub fn from_fn<T, F>(predicate: F) -> PredicateSpecification<T, F>
where
    T: ?Sized,
    F: Fn(&T) -> bool,
{
    PredicateSpecification {
        predicate,
        _item: PhantomData,
    }
}

impl<T: ?Sized, F> Specification for PredicateSpecification<T, F>
where
    F: Fn(&T) -> bool,
{
    type Item = T;

    fn is_satisfied(&self, item: &T) -> bool {
        (self.predicate)(item)
    }
}

impl<T: ?Sized, F: Clone> Clone for PredicateSpecification<T, F> {
    fn clone(&self) -> Self {
        Self {
            predicate: self.predicate.clone(),
            _item: PhantomData,
        }
    }
}

impl<T: ?Sized, F> fmt::Debug for PredicateSpecification<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredicateSpecification").finish_non_exhaustive()
    }
}
