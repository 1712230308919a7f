//! Transforming sets.
//!
//! A deduplicating set looks like a container, but mapping over it is not a
//! functor. Transforming element by element merges elements that the function
//! maps to equal results, and when the element type's equality is coarser
//! than its identity, *which* element survives a merge changes what a second
//! transform sees. Two passes and one composed pass can then disagree:
//!
//! ```text
//! transform_set(g)(transform_set(f)(s)) != transform_set(compose(g, f))(s)
//! ```
//!
//! The law does hold when every function involved is injective with respect
//! to the equality in use. [`transform_set`] is provided for convenience and
//! documented as exactly this: not a [`Functor`](super::Functor).
//!
//! [`PredicateSet`] shows the other direction. A set represented by its
//! membership test cannot be mapped at all, but it can be *pulled back*
//! through a function with [`PredicateSet::contramap`].

use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::hash::Hash;
use std::rc::Rc;

/// Lifts `function` to transform every element of a `HashSet`.
///
/// Elements mapped to equal values are merged. This is **not** a lawful
/// functor map; see the module documentation.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashSet;
/// use witnessed::transform::transform_set;
///
/// let lengths = transform_set(|word: &str| word.len());
/// let words: HashSet<&str> = HashSet::from(["ab", "cd", "efg"]);
///
/// assert_eq!(lengths(words), HashSet::from([2, 3]));
/// ```
#[inline]
pub fn transform_set<A, B, F>(function: F) -> impl Fn(HashSet<A>) -> HashSet<B>
where
    F: Fn(A) -> B,
    B: Eq + Hash,
{
    move |set: HashSet<A>| set.into_iter().map(&function).collect()
}

/// Lifts `function` to transform every element of a `BTreeSet`.
///
/// Like [`transform_set`], not a functor: which of several equal results
/// survives is unspecified.
#[inline]
pub fn transform_btree_set<A, B, F>(function: F) -> impl Fn(BTreeSet<A>) -> BTreeSet<B>
where
    F: Fn(A) -> B,
    B: Ord,
{
    move |set: BTreeSet<A>| set.into_iter().map(&function).collect()
}

/// A set described by its membership test.
///
/// # Examples
///
/// ```rust
/// use witnessed::transform::PredicateSet;
///
/// let evens = PredicateSet::new(|n: &i32| n % 2 == 0);
/// let even_length = evens.contramap(|text: &String| i32::try_from(text.len()).unwrap_or(-1));
///
/// assert!(even_length.contains(&"ab".to_string()));
/// assert!(!even_length.contains(&"abc".to_string()));
/// ```
pub struct PredicateSet<A> {
    contains: Rc<dyn Fn(&A) -> bool>,
}

impl<A: 'static> PredicateSet<A> {
    /// Creates a set holding exactly the values satisfying `predicate`.
    pub fn new<P>(predicate: P) -> Self
    where
        P: Fn(&A) -> bool + 'static,
    {
        Self {
            contains: Rc::new(predicate),
        }
    }

    /// Creates a set holding exactly the listed values.
    pub fn from_elements(elements: Vec<A>) -> Self
    where
        A: PartialEq,
    {
        Self::new(move |value| elements.contains(value))
    }

    /// The set of every value.
    pub fn universe() -> Self {
        Self::new(|_| true)
    }

    /// The set of no value.
    pub fn empty() -> Self {
        Self::new(|_| false)
    }

    /// Returns `true` if `value` is a member.
    #[inline]
    pub fn contains(&self, value: &A) -> bool {
        (self.contains)(value)
    }

    /// Pulls the set back along `function`.
    ///
    /// The result holds every `b` whose image `function(b)` is in this set.
    /// `contramap(identity)` is the same set, and
    /// `s.contramap(f).contramap(g) == s.contramap(|x| f(&g(x)))`.
    #[must_use]
    pub fn contramap<B, F>(self, function: F) -> PredicateSet<B>
    where
        B: 'static,
        F: Fn(&B) -> A + 'static,
    {
        PredicateSet::new(move |value: &B| self.contains(&function(value)))
    }

    /// Values in either set.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self::new(move |value| self.contains(value) || other.contains(value))
    }

    /// Values in both sets.
    #[must_use]
    pub fn intersection(self, other: Self) -> Self {
        Self::new(move |value| self.contains(value) && other.contains(value))
    }

    /// Values not in this set.
    #[must_use]
    pub fn complement(self) -> Self {
        Self::new(move |value| !self.contains(value))
    }
}

impl<A> Clone for PredicateSet<A> {
    fn clone(&self) -> Self {
        Self {
            contains: Rc::clone(&self.contains),
        }
    }
}

impl<A> fmt::Debug for PredicateSet<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("PredicateSet")
            .finish_non_exhaustive()
    }
}
