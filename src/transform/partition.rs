//! Partitioning containers into two containers of the same shape.
//!
//! [`Partitionable::partition_map`] is the single primitive: every element is
//! sent to the left or the right result by a function returning
//! [`Either`]. Filtering, `filter_map`, `partition`, `separate` and `compact`
//! are all expressed through it.
//!
//! `Either<L, R>` itself cannot be partitioned: splitting a `Right(a)` would
//! have to produce *two* `Either<L, _>` values, and for the side that receives
//! nothing there is no `L` to put in it.

use super::functor::Functor;
use crate::either::Either;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

// =============================================================================
// Element Shapes
// =============================================================================

/// Element types that are an optional value.
pub trait OptionLike {
    /// The value when present.
    type Value;

    /// Converts into a plain `Option`.
    fn into_option(self) -> Option<Self::Value>;
}

impl<T> OptionLike for Option<T> {
    type Value = T;

    #[inline]
    fn into_option(self) -> Self {
        self
    }
}

/// Element types that hold one of two values.
pub trait EitherLike {
    /// The first case.
    type Left;
    /// The second case.
    type Right;

    /// Converts into an `Either`.
    fn into_either(self) -> Either<Self::Left, Self::Right>;
}

impl<L, R> EitherLike for Either<L, R> {
    type Left = L;
    type Right = R;

    #[inline]
    fn into_either(self) -> Self {
        self
    }
}

/// `Err` is the left case, `Ok` the right.
impl<T, E> EitherLike for Result<T, E> {
    type Left = E;
    type Right = T;

    #[inline]
    fn into_either(self) -> Either<E, T> {
        self.into()
    }
}

// =============================================================================
// Partitionable
// =============================================================================

/// Containers that can be split in two while keeping their shape.
///
/// Within each result, elements keep their relative order (for `Vec`) or
/// their keys (for maps). The two results together hold exactly as many
/// elements as the input.
///
/// # Examples
///
/// ```rust
/// use witnessed::either::Either;
/// use witnessed::transform::Partitionable;
///
/// let mixed = vec![Either::Left(1), Either::Right("a"), Either::Left(2)];
/// let (numbers, letters): (Vec<i32>, Vec<&str>) = mixed.separate();
///
/// assert_eq!(numbers, vec![1, 2]);
/// assert_eq!(letters, vec!["a"]);
/// ```
pub trait Partitionable: Functor + Sized {
    /// Sends each element to the left or right result.
    fn partition_map<L, R, F>(self, function: F) -> (Self::WithType<L>, Self::WithType<R>)
    where
        F: FnMut(Self::Inner) -> Either<L, R>;

    /// Transforms each element, dropping those mapped to `None`.
    ///
    /// Absent results go to the left side of [`partition_map`](Self::partition_map),
    /// which is then discarded.
    fn filter_map<B, F>(self, mut function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> Option<B>,
    {
        let (_, kept) = self.partition_map(move |element| {
            function(element).map_or(Either::Left(()), Either::Right)
        });
        kept
    }

    /// Keeps the elements satisfying `predicate`.
    ///
    /// ```rust
    /// use witnessed::transform::Partitionable;
    ///
    /// let evens = vec![1, 2, 3, 4].filter(|n| n % 2 == 0);
    /// assert_eq!(evens, vec![2, 4]);
    /// ```
    fn filter<P>(self, mut predicate: P) -> Self::WithType<Self::Inner>
    where
        P: FnMut(&Self::Inner) -> bool,
    {
        self.filter_map(move |element| predicate(&element).then_some(element))
    }

    /// Splits by `predicate` into `(failing, satisfying)`.
    fn partition<P>(
        self,
        mut predicate: P,
    ) -> (Self::WithType<Self::Inner>, Self::WithType<Self::Inner>)
    where
        P: FnMut(&Self::Inner) -> bool,
    {
        self.partition_map(move |element| {
            if predicate(&element) {
                Either::Right(element)
            } else {
                Either::Left(element)
            }
        })
    }

    /// Splits a container of two-case values by case.
    #[allow(clippy::type_complexity)]
    fn separate(
        self,
    ) -> (
        Self::WithType<<Self::Inner as EitherLike>::Left>,
        Self::WithType<<Self::Inner as EitherLike>::Right>,
    )
    where
        Self::Inner: EitherLike,
    {
        self.partition_map(<Self::Inner as EitherLike>::into_either)
    }

    /// Keeps the present values of a container of optional values.
    fn compact(self) -> Self::WithType<<Self::Inner as OptionLike>::Value>
    where
        Self::Inner: OptionLike,
    {
        self.filter_map(<Self::Inner as OptionLike>::into_option)
    }
}

impl<T> Partitionable for Vec<T> {
    fn partition_map<L, R, F>(self, mut function: F) -> (Vec<L>, Vec<R>)
    where
        F: FnMut(T) -> Either<L, R>,
    {
        let mut lefts = Vec::new();
        let mut rights = Vec::new();
        for element in self {
            match function(element) {
                Either::Left(value) => lefts.push(value),
                Either::Right(value) => rights.push(value),
            }
        }
        (lefts, rights)
    }
}

impl<A> Partitionable for Option<A> {
    fn partition_map<L, R, F>(self, function: F) -> (Option<L>, Option<R>)
    where
        F: FnMut(A) -> Either<L, R>,
    {
        self.map(function)
            .map_or((None, None), Either::into_options)
    }
}

impl<K, V, S> Partitionable for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    fn partition_map<L, R, F>(self, mut function: F) -> (HashMap<K, L, S>, HashMap<K, R, S>)
    where
        F: FnMut(V) -> Either<L, R>,
    {
        let mut lefts = HashMap::with_hasher(S::default());
        let mut rights = HashMap::with_hasher(S::default());
        for (key, value) in self {
            match function(value) {
                Either::Left(value) => {
                    lefts.insert(key, value);
                }
                Either::Right(value) => {
                    rights.insert(key, value);
                }
            }
        }
        (lefts, rights)
    }
}

impl<K: Ord, V> Partitionable for BTreeMap<K, V> {
    fn partition_map<L, R, F>(self, mut function: F) -> (BTreeMap<K, L>, BTreeMap<K, R>)
    where
        F: FnMut(V) -> Either<L, R>,
    {
        let mut lefts = BTreeMap::new();
        let mut rights = BTreeMap::new();
        for (key, value) in self {
            match function(value) {
                Either::Left(value) => {
                    lefts.insert(key, value);
                }
                Either::Right(value) => {
                    rights.insert(key, value);
                }
            }
        }
        (lefts, rights)
    }
}

// =============================================================================
// Free Functions
// =============================================================================

/// Lifts `predicate` to a function filtering whole containers.
///
/// ```rust
/// use witnessed::transform::filter;
///
/// let non_blank = filter::<Vec<&str>, _>(|text: &&str| !text.trim().is_empty());
/// assert_eq!(non_blank(vec!["a", " ", "b"]), vec!["a", "b"]);
/// ```
#[inline]
pub fn filter<C, P>(predicate: P) -> impl Fn(C) -> C::WithType<C::Inner>
where
    C: Partitionable,
    P: Fn(&C::Inner) -> bool,
{
    move |container: C| container.filter(&predicate)
}

/// Keeps the present values of a sequence of optional values, in order.
///
/// ```rust
/// use witnessed::transform::filtered;
///
/// assert_eq!(filtered(vec![Some(1), None, Some(3)]), vec![1, 3]);
/// ```
#[inline]
pub fn filtered<A>(values: Vec<Option<A>>) -> Vec<A> {
    values.compact()
}

/// Splits a sequence of two-case values into its left and right payloads.
#[inline]
pub fn partitioned<A, B>(values: Vec<Either<A, B>>) -> (Vec<A>, Vec<B>) {
    values.separate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some(4), (None, Some(4)))]
    #[case(Some(3), (Some(3), None))]
    #[case(None, (None, None))]
    fn option_partition_routes_single_value(
        #[case] input: Option<i32>,
        #[case] expected: (Option<i32>, Option<i32>),
    ) {
        assert_eq!(input.partition(|n| n % 2 == 0), expected);
    }

    #[rstest]
    fn vec_partition_map_keeps_relative_order() {
        let (small, large): (Vec<i32>, Vec<String>) = vec![5, 50, 7, 70].partition_map(|n| {
            if n < 10 {
                Either::Left(n)
            } else {
                Either::Right(n.to_string())
            }
        });
        assert_eq!(small, vec![5, 7]);
        assert_eq!(large, vec!["50".to_string(), "70".to_string()]);
    }

    #[rstest]
    fn btree_map_filter_map_keeps_keys() {
        let scores = BTreeMap::from([("ann", "12"), ("bob", "n/a"), ("cid", "9")]);
        let parsed: BTreeMap<&str, i32> = scores.filter_map(|text| text.parse().ok());
        assert_eq!(parsed, BTreeMap::from([("ann", 12), ("cid", 9)]));
    }

    #[rstest]
    fn results_separate_into_errors_and_values() {
        let outcomes: Vec<Result<i32, String>> = vec![Ok(1), Err("bad".to_string()), Ok(2)];
        let (errors, values): (Vec<String>, Vec<i32>) = outcomes.separate();
        assert_eq!(errors, vec!["bad".to_string()]);
        assert_eq!(values, vec![1, 2]);
    }

    #[rstest]
    fn empty_input_partitions_to_empty_outputs() {
        let (lefts, rights): (Vec<()>, Vec<()>) = partitioned(Vec::<Either<(), ()>>::new());
        assert!(lefts.is_empty() && rights.is_empty());
        assert!(filtered(Vec::<Option<u8>>::new()).is_empty());
    }
}
