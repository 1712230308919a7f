//! Empty-value witnesses and folding with them.

use super::combining::Combining;
use std::fmt;
use std::rc::Rc;

/// An explicit way to produce a starting value of `A`.
///
/// Paired with a [`Combining`] witness for which the produced value is
/// neutral, this is everything a fold needs.
///
/// # Examples
///
/// ```rust
/// use witnessed::witness::{Combining, EmptyInitializing, fold_with};
///
/// let total = fold_with([1, 2, 3, 4], &EmptyInitializing::zero(), &Combining::sum());
/// let product = fold_with([1, 2, 3, 4], &EmptyInitializing::one(), &Combining::product());
///
/// assert_eq!(total, 10);
/// assert_eq!(product, 24);
/// ```
pub struct EmptyInitializing<A> {
    create: Rc<dyn Fn() -> A>,
}

impl<A: 'static> EmptyInitializing<A> {
    /// Creates a witness from a producing function.
    pub fn new<F>(create: F) -> Self
    where
        F: Fn() -> A + 'static,
    {
        Self {
            create: Rc::new(create),
        }
    }

    /// Produces a fresh value.
    #[inline]
    pub fn create(&self) -> A {
        (self.create)()
    }

    /// Produces a `B` by transforming each created `A`.
    #[must_use]
    pub fn map<B, F>(self, function: F) -> EmptyInitializing<B>
    where
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        EmptyInitializing::new(move || function(self.create()))
    }
}

impl<A: From<u8> + 'static> EmptyInitializing<A> {
    /// Produces `0`, the neutral value of addition.
    #[must_use]
    pub fn zero() -> Self {
        Self::new(|| A::from(0))
    }

    /// Produces `1`, the neutral value of multiplication.
    #[must_use]
    pub fn one() -> Self {
        Self::new(|| A::from(1))
    }
}

impl<A: Default + 'static> EmptyInitializing<A> {
    /// Produces `A::default()`.
    #[must_use]
    pub fn default_value() -> Self {
        Self::new(A::default)
    }
}

impl<A> Clone for EmptyInitializing<A> {
    fn clone(&self) -> Self {
        Self {
            create: Rc::clone(&self.create),
        }
    }
}

impl<A> fmt::Debug for EmptyInitializing<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("EmptyInitializing")
            .finish_non_exhaustive()
    }
}

/// Folds `items` left to right, starting from a freshly created value.
///
/// Identical to `items.into_iter().fold(empty.create(), combine)`.
pub fn fold_with<A, I>(items: I, empty: &EmptyInitializing<A>, combining: &Combining<A>) -> A
where
    A: 'static,
    I: IntoIterator<Item = A>,
{
    combining.fold(empty.create(), items)
}
