//! Composite specifications
//!
//! Binary `and`/`or`, unary `not`, and the N-ary `AllOf`/`AnyOf`. None of them
//! know anything about the leaves they combine.

use super::Specification;

/// Satisfied when both children are satisfied
#[derive(Debug, Clone, Copy)]
pub struct AndSpecification<A, B> {
    first: A,
    second: B,
}

impl<A, B> AndSpecification<A, B>
where
    A: Specification,
    B: Specification<Item = A::Item>,
{
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A, B> Specification for AndSpecification<A, B>
where
    A: Specification,
    B: Specification<Item = A::Item>,
{
    type Item = A::Item;

    fn is_satisfied(&self, item: &Self::Item) -> bool {
        self.first.is_satisfied(item) && self.second.is_satisfied(item)
    }
}

/// Satisfied when at least one child is satisfied
#[derive(Debug, Clone, Copy)]
pub struct OrSpecification<A, B> {
    first: A,
    second: B,
}

impl<A, B> OrSpecification<A, B>
where
    A: Specification,
    B: Specification<Item = A::Item>,
{
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A, B> Specification for OrSpecification<A, B>
where
    A: Specification,
    B: Specification<Item = A::Item>,
{
    type Item = A::Item;

    fn is_satisfied(&self, item: &Self::Item) -> bool {
        self.first.is_satisfied(item) || self.second.is_satisfied(item)
    }
}

/// Satisfied when the child is not
#[derive(Debug, Clone, Copy)]
pub struct NotSpecification<S> {
    inner: S,
}

impl<S: Specification> NotSpecification<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S: Specification> Specification for NotSpecification<S> {
    type Item = S::Item;

    fn is_satisfied(&self, item: &Self::Item) -> bool {
        !self.inner.is_satisfied(item)
    }
}

/// Satisfied when every child is satisfied. An empty `AllOf` is satisfied
/// by every item.
///
/// Children share one concrete type `S`; use
/// [`BoxedSpecification`](super::BoxedSpecification) or
/// [`SharedSpecification`](super::SharedSpecification) to mix leaves.
#[derive(Debug, Clone)]
pub struct AllOf<S> {
    specs: Vec<S>,
}

impl<S: Specification> AllOf<S> {
    pub fn new(specs: impl IntoIterator<Item = S>) -> Self {
        Self {
            specs: specs.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

impl<S: Specification> Specification for AllOf<S> {
    type Item = S::Item;

    fn is_satisfied(&self, item: &Self::Item) -> bool {
        self.specs.iter().all(|spec| spec.is_satisfied(item))
    }
}

impl<S: Specification> FromIterator<S> for AllOf<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Satisfied when any child is satisfied. An empty `AnyOf` is satisfied by
/// no item.
#[derive(Debug, Clone)]
pub struct AnyOf<S> {
    specs: Vec<S>,
}

impl<S: Specification> AnyOf<S> {
    pub fn new(specs: impl IntoIterator<Item = S>) -> Self {
        Self {
            specs: specs.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

impl<S: Specification> Specification for AnyOf<S> {
    type Item = S::Item;

    fn is_satisfied(&self, item: &Self::Item) -> bool {
        self.specs.iter().any(|spec| spec.is_satisfied(item))
    }
}

impl<S: Specification> FromIterator<S> for AnyOf<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

pub fn and<A, B>(first: A, second: B) -> AndSpecification<A, B>
where
    A: Specification,
    B: Specification<Item = A::Item>,
{
    AndSpecification::new(first, second)
}

pub fn or<A, B>(first: A, second: B) -> OrSpecification<A, B>
where
    A: Specification,
    B: Specification<Item = A::Item>,
{
    OrSpecification::new(first, second)
}

pub fn not<S: Specification>(inner: S) -> NotSpecification<S> {
    NotSpecification::new(inner)
}

pub fn all_of<S: Specification>(specs: impl IntoIterator<Item = S>) -> AllOf<S> {
    AllOf::new(specs)
}

pub fn any_of<S: Specification>(specs: impl IntoIterator<Item = S>) -> AnyOf<S> {
    AnyOf::new(specs)
}
