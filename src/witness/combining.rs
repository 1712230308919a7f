//! Combination witnesses.
//!
//! # Laws
//!
//! A combining witness is expected to be associative:
//!
//! ```text
//! combine(combine(a, b), c) == combine(a, combine(b, c))
//! ```
//!
//! Nothing checks this. [`Combining::fold`] and [`Combining::reduce`] always
//! group from the left, so a non-associative witness still gives a
//! deterministic (if surprising) result.

use std::fmt;
use std::ops::{Add, Mul};
use std::rc::Rc;

/// A shared, cloneable function value, as held by pointwise witnesses.
pub type SharedFn<A, B> = Rc<dyn Fn(A) -> B>;

/// An explicit binary operation on `A`.
///
/// # Examples
///
/// ```rust
/// use witnessed::witness::Combining;
///
/// let pair = Combining::pair(Combining::<String>::concat(), Combining::<i32>::sum());
/// let combined = pair.combine(("A".to_string(), 1), ("B".to_string(), 2));
///
/// assert_eq!(combined, ("AB".to_string(), 3));
/// ```
pub struct Combining<A> {
    combine: Rc<dyn Fn(A, A) -> A>,
}

impl<A: 'static> Combining<A> {
    /// Creates a witness from a binary operation.
    pub fn new<F>(combine: F) -> Self
    where
        F: Fn(A, A) -> A + 'static,
    {
        Self {
            combine: Rc::new(combine),
        }
    }

    /// Combines two values.
    #[inline]
    pub fn combine(&self, left: A, right: A) -> A {
        (self.combine)(left, right)
    }

    /// Combines `items` into `initial`, left to right.
    ///
    /// Identical to `items.into_iter().fold(initial, |acc, x| combine(acc, x))`.
    ///
    /// ```rust
    /// use witnessed::witness::Combining;
    ///
    /// assert_eq!(Combining::<i32>::product().fold(1, [1, 2, 3, 4]), 24);
    /// ```
    pub fn fold<I>(&self, initial: A, items: I) -> A
    where
        I: IntoIterator<Item = A>,
    {
        items
            .into_iter()
            .fold(initial, |accumulated, item| self.combine(accumulated, item))
    }

    /// Combines `items` left to right, or returns `None` when there are none.
    pub fn reduce<I>(&self, items: I) -> Option<A>
    where
        I: IntoIterator<Item = A>,
    {
        items.into_iter().reduce(|accumulated, item| self.combine(accumulated, item))
    }
}

impl<A: 'static, B: 'static> Combining<(A, B)> {
    /// Combines pairs componentwise.
    #[must_use]
    pub fn pair(first: Combining<A>, second: Combining<B>) -> Self {
        Self::new(move |(left_a, left_b), (right_a, right_b)| {
            (
                first.combine(left_a, right_a),
                second.combine(left_b, right_b),
            )
        })
    }
}

impl<A: Clone + 'static, B: 'static> Combining<SharedFn<A, B>> {
    /// Combines functions by combining their results for the same input.
    ///
    /// `pointwise(results).combine(f, g)` is `|x| results.combine(f(x), g(x))`.
    ///
    /// ```rust
    /// use std::rc::Rc;
    /// use witnessed::witness::{Combining, SharedFn};
    ///
    /// let both = Combining::pointwise(Combining::<usize>::sum());
    /// let length: SharedFn<&str, usize> = Rc::new(|text: &str| text.len());
    /// let vowels: SharedFn<&str, usize> =
    ///     Rc::new(|text: &str| text.chars().filter(|c| "aeiou".contains(*c)).count());
    ///
    /// assert_eq!(both.combine(length, vowels)("rust"), 5);
    /// ```
    #[must_use]
    pub fn pointwise(results: Combining<B>) -> Self {
        Self::new(move |left: SharedFn<A, B>, right: SharedFn<A, B>| {
            let results = results.clone();
            let combined: SharedFn<A, B> =
                Rc::new(move |input: A| results.combine(left(input.clone()), right(input)));
            combined
        })
    }
}

impl<A: 'static> Combining<Vec<A>> {
    /// Combines vectors element by element, truncating to the shorter one.
    ///
    /// ```rust
    /// use witnessed::witness::Combining;
    ///
    /// let products = Combining::array(Combining::<i32>::product());
    /// assert_eq!(products.combine(vec![1, 2, 9], vec![1, 3]), vec![1, 6]);
    /// ```
    #[must_use]
    pub fn array(element: Combining<A>) -> Self {
        Self::new(move |left: Vec<A>, right: Vec<A>| {
            left.into_iter()
                .zip(right)
                .map(|(left, right)| element.combine(left, right))
                .collect()
        })
    }

    /// Concatenates vectors.
    #[must_use]
    pub fn append() -> Self {
        Self::new(|mut left: Vec<A>, right: Vec<A>| {
            left.extend(right);
            left
        })
    }
}

impl<A: Add<Output = A> + 'static> Combining<A> {
    /// Addition.
    #[must_use]
    pub fn sum() -> Self {
        Self::new(|left, right| left + right)
    }
}

impl<A: Mul<Output = A> + 'static> Combining<A> {
    /// Multiplication.
    #[must_use]
    pub fn product() -> Self {
        Self::new(|left, right| left * right)
    }
}

impl Combining<String> {
    /// String concatenation.
    #[must_use]
    pub fn concat() -> Self {
        Self::new(|left: String, right: String| left + &right)
    }
}

impl<A: 'static> Combining<Option<A>> {
    /// Keeps the first present value.
    #[must_use]
    pub fn first_some() -> Self {
        Self::new(|left: Option<A>, right: Option<A>| left.or(right))
    }
}

impl<A> Clone for Combining<A> {
    fn clone(&self) -> Self {
        Self {
            combine: Rc::clone(&self.combine),
        }
    }
}

impl<A> fmt::Debug for Combining<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Combining").finish_non_exhaustive()
    }
}
