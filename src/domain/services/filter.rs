//! Filter service
//!
//! Applies a specification to a slice and returns the matching items in their
//! original order. The filter holds no state: the same instance can be reused
//! with any specification, from any number of threads.

use tracing::trace;

use crate::domain::specifications::Specification;

/// Applies specifications to collections
pub trait Filter<T> {
    /// Return references to the items satisfying `spec`, in input order.
    ///
    /// `items` is never mutated. An empty result is not an error.
    fn filter<'a, S>(&self, items: &'a [T], spec: &S) -> Vec<&'a T>
    where
        S: Specification<Item = T> + ?Sized;

    /// Same as [`Filter::filter`] but returns owned copies
    fn filter_cloned<S>(&self, items: &[T], spec: &S) -> Vec<T>
    where
        T: Clone,
        S: Specification<Item = T> + ?Sized,
    {
        self.filter(items, spec).into_iter().cloned().collect()
    }
}

/// The stock [`Filter`] implementation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpecFilter;

impl SpecFilter {
    pub fn new() -> Self {
        Self
    }
}

impl<T> Filter<T> for SpecFilter {
    fn filter<'a, S>(&self, items: &'a [T], spec: &S) -> Vec<&'a T>
    where
        S: Specification<Item = T> + ?Sized,
    {
        let matched: Vec<&'a T> = items
            .iter()
            .filter(|item| spec.is_satisfied(item))
            .collect();
        trace!(total = items.len(), matched = matched.len(), "filter applied");
        matched
    }
}
