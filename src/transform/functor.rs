//! Functor - mapping over container values.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! Both laws hold for every implementation in this module. Deduplicating sets
//! are deliberately absent; see [`transform_set`](super::transform_set).

use super::higher::TypeConstructor;
use crate::either::Either;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// Types whose elements can be transformed without changing their shape.
///
/// Shape means length and order for `Vec`, presence for `Option`, the case
/// for `Result` and `Either`, and the key set for maps.
///
/// # Examples
///
/// ```rust
/// use witnessed::transform::Functor;
/// use std::collections::HashMap;
///
/// let prices = HashMap::from([("tea", 300), ("cake", 450)]);
/// let discounted = prices.fmap(|cents| cents - 50);
///
/// assert_eq!(discounted["tea"], 250);
/// assert_eq!(discounted["cake"], 400);
/// ```
pub trait Functor: TypeConstructor {
    /// Applies `function` to every element.
    ///
    /// The function is `FnMut` because a sequence or map calls it once per
    /// element.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B;

    /// Replaces every element with a clone of `value`.
    #[inline]
    fn replace_all<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
        B: Clone,
    {
        self.fmap(move |_| value.clone())
    }

    /// Discards the elements, keeping only the shape.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.fmap(|_| ())
    }
}

/// Lifts `function` to work on whole containers.
///
/// `map(f)` is the free-standing form of [`Functor::fmap`]: a plain function
/// from `C` to `C::WithType<B>` that can be composed like any other.
///
/// # Examples
///
/// ```rust
/// use witnessed::compose::compose;
/// use witnessed::transform::map;
///
/// let lengths = map::<Vec<&str>, _, _>(|word: &str| word.len());
/// assert_eq!(lengths(vec!["ab", "cde"]), vec![2, 3]);
///
/// let incr = map::<Option<i32>, _, _>(|x: i32| x + 1);
/// let square = map::<Option<i32>, _, _>(|x: i32| x * x);
/// assert_eq!(compose(square, incr)(Some(2)), Some(9));
/// ```
#[inline]
pub fn map<C, B, F>(function: F) -> impl Fn(C) -> C::WithType<B>
where
    C: Functor,
    F: Fn(C::Inner) -> B,
{
    move |container: C| container.fmap(&function)
}

// =============================================================================
// Standard Library Type Implementations
// =============================================================================

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnMut(A) -> B,
    {
        self.map(function)
    }
}

impl<T, E> Functor for Result<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnMut(T) -> B,
    {
        self.map(function)
    }
}

impl<T> Functor for Vec<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(T) -> B,
    {
        self.into_iter().map(function).collect()
    }
}

impl<K, V, S> Functor for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    fn fmap<B, F>(self, mut function: F) -> HashMap<K, B, S>
    where
        F: FnMut(V) -> B,
    {
        self.into_iter()
            .map(|(key, value)| (key, function(value)))
            .collect()
    }
}

impl<K: Ord, V> Functor for BTreeMap<K, V> {
    fn fmap<B, F>(self, mut function: F) -> BTreeMap<K, B>
    where
        F: FnMut(V) -> B,
    {
        self.into_iter()
            .map(|(key, value)| (key, function(value)))
            .collect()
    }
}

impl<L, R> Functor for Either<L, R> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnMut(R) -> B,
    {
        self.map_right(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some(3), Some("3".to_string()))]
    #[case(None, None)]
    fn option_fmap_preserves_presence(#[case] input: Option<i32>, #[case] expected: Option<String>) {
        assert_eq!(input.fmap(|n| n.to_string()), expected);
    }

    #[rstest]
    fn vec_fmap_calls_function_once_per_element_in_order() {
        let mut seen = Vec::new();
        let doubled = vec![1, 2, 3].fmap(|n| {
            seen.push(n);
            n * 2
        });
        assert_eq!(doubled, vec![2, 4, 6]);
        assert_eq!(seen, vec![1, 2, 3]);
    }

    #[rstest]
    fn empty_containers_stay_empty() {
        assert!(Vec::<i32>::new().fmap(|n| n + 1).is_empty());
        assert!(BTreeMap::<u8, i32>::new().fmap(|n| n + 1).is_empty());
    }

    #[rstest]
    fn either_fmap_leaves_left_untouched() {
        let failure: Either<&str, i32> = Either::Left("missing");
        assert_eq!(failure.fmap(|n| n + 1), Either::Left("missing"));
    }

    #[rstest]
    fn replace_all_and_void_keep_shape() {
        assert_eq!(vec![1, 2].replace_all('x'), vec!['x', 'x']);
        assert_eq!(Some(5).void(), Some(()));
        let failed: Result<i32, &str> = Err("no");
        assert_eq!(failed.void(), Err("no"));
    }
}
