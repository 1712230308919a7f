//! Getters: composable reads.
//!
//! A [`Getter`] turns `&S` into an owned `A`. Getters compose with each
//! other, pass through containers with [`Getter::then_map`], and pass through
//! enum cases with [`Getter::then_case`], where the read becomes partial.
//!
//! # Examples
//!
//! ```
//! use witnessed::getter;
//! use witnessed::setter::Getter;
//!
//! #[derive(Clone)]
//! struct Food { name: String }
//!
//! #[derive(Clone)]
//! struct User { favorite_foods: Vec<Food> }
//!
//! let food_names = getter!(User, favorite_foods).then_map(getter!(Food, name));
//! let user = User {
//!     favorite_foods: vec![Food { name: "Tacos".into() }, Food { name: "Nachos".into() }],
//! };
//!
//! assert_eq!(food_names.get(&user), vec!["Tacos".to_string(), "Nachos".to_string()]);
//! ```

use super::case_lens::CaseLens;
use crate::transform::Functor;
use std::fmt;
use std::marker::PhantomData;

/// A composable read of an `A` out of an `S`.
pub trait Getter<S, A> {
    /// Reads the focus.
    fn get(&self, source: &S) -> A;

    /// Reads further, through `inner`.
    fn compose<B, I>(self, inner: I) -> ComposedGetter<Self, I, A>
    where
        Self: Sized,
        I: Getter<A, B>,
    {
        ComposedGetter::new(self, inner)
    }

    /// Reads through every element of a container focus.
    ///
    /// The result keeps the container's shape: an absent `Option` stays
    /// absent, a `Vec` keeps its length and order.
    fn then_map<B, I>(self, inner: I) -> MappedGetter<Self, I, A, B>
    where
        Self: Sized,
        A: Functor,
        I: Getter<A::Inner, B>,
    {
        MappedGetter::new(self, inner)
    }

    /// Reads through one case of an enum focus, yielding `None` for any other
    /// case.
    ///
    /// ```
    /// use witnessed::getter;
    /// use witnessed::setter::{Getter, ok_case};
    ///
    /// struct Job { outcome: Result<u32, String> }
    ///
    /// let succeeded = getter!(Job, outcome).then_case(ok_case());
    ///
    /// assert_eq!(succeeded.get(&Job { outcome: Ok(7) }), Some(7));
    /// assert_eq!(succeeded.get(&Job { outcome: Err("x".into()) }), None);
    /// ```
    fn then_case<B, L>(self, lens: L) -> CaseGetter<Self, L, A>
    where
        Self: Sized,
        L: CaseLens<A, B>,
    {
        CaseGetter::new(self, lens)
    }

    /// Lifts the getter to read through the success case of a `Result`.
    ///
    /// ```
    /// use witnessed::getter;
    /// use witnessed::setter::Getter;
    ///
    /// struct Profile { bio: String }
    ///
    /// let bio = getter!(Profile, bio).through_ok::<std::io::ErrorKind>();
    /// let loaded: Result<Profile, _> = Ok(Profile { bio: "hi".into() });
    ///
    /// assert_eq!(bio.get(&loaded), Some("hi".to_string()));
    /// assert_eq!(bio.get(&Err(std::io::ErrorKind::NotFound)), None);
    /// ```
    fn through_ok<E>(self) -> ThroughOk<Self, E>
    where
        Self: Sized,
    {
        ThroughOk::new(self)
    }

    /// Converts the getter into a plain function.
    ///
    /// ```
    /// use witnessed::getter;
    /// use witnessed::setter::Getter;
    ///
    /// struct Word { text: String }
    ///
    /// let words = [Word { text: "a".into() }, Word { text: "bc".into() }];
    /// let non_empty = getter!(Word, text).compose(getter!(String, len())).into_fn();
    ///
    /// assert!(words.iter().all(|word| non_empty(word) > 0));
    /// ```
    fn into_fn(self) -> impl Fn(&S) -> A
    where
        Self: Sized,
    {
        move |source: &S| self.get(source)
    }
}

// =============================================================================
// FunctionGetter
// =============================================================================

/// A getter from a reading function.
pub struct FunctionGetter<S, A, F>
where
    F: Fn(&S) -> A,
{
    function: F,
    _marker: PhantomData<fn(&S) -> A>,
}

impl<S, A, F> FunctionGetter<S, A, F>
where
    F: Fn(&S) -> A,
{
    /// Wraps a reading function.
    #[must_use]
    pub const fn new(function: F) -> Self {
        Self {
            function,
            _marker: PhantomData,
        }
    }
}

impl<S, A, F> Getter<S, A> for FunctionGetter<S, A, F>
where
    F: Fn(&S) -> A,
{
    #[inline]
    fn get(&self, source: &S) -> A {
        (self.function)(source)
    }
}

impl<S, A, F> Clone for FunctionGetter<S, A, F>
where
    F: Fn(&S) -> A + Clone,
{
    fn clone(&self) -> Self {
        Self::new(self.function.clone())
    }
}

impl<S, A, F> fmt::Debug for FunctionGetter<S, A, F>
where
    F: Fn(&S) -> A,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("FunctionGetter")
            .finish_non_exhaustive()
    }
}

/// Builds a getter reading a field path, or calling a method, on a type.
///
/// Fields are cloned out. A trailing method call such as `len()` or
/// `is_empty()` is evaluated on the borrowed value.
///
/// # Syntax
///
/// ```text
/// getter!(Type, field)
/// getter!(Type, field.nested)
/// getter!(Type, method())
/// ```
///
/// # Examples
///
/// ```
/// use witnessed::getter;
/// use witnessed::setter::Getter;
///
/// assert!(getter!(String, is_empty()).get(&String::new()));
/// assert_eq!(getter!((u8, char), 1).get(&(4, 'x')), 'x');
/// ```
#[macro_export]
macro_rules! getter {
    ($source_type:ty, $method:ident ()) => {
        $crate::setter::FunctionGetter::new(|source: &$source_type| source.$method())
    };
    ($source_type:ty, $($field:tt).+) => {
        $crate::setter::FunctionGetter::new(|source: &$source_type| {
            ::core::clone::Clone::clone(&source $(.$field)+)
        })
    };
}

// =============================================================================
// Composition
// =============================================================================

/// Two getters chained. Built by [`Getter::compose`].
pub struct ComposedGetter<O, I, M> {
    outer: O,
    inner: I,
    _marker: PhantomData<fn(M) -> M>,
}

impl<O, I, M> ComposedGetter<O, I, M> {
    const fn new(outer: O, inner: I) -> Self {
        Self {
            outer,
            inner,
            _marker: PhantomData,
        }
    }
}

impl<S, M, B, O, I> Getter<S, B> for ComposedGetter<O, I, M>
where
    O: Getter<S, M>,
    I: Getter<M, B>,
{
    fn get(&self, source: &S) -> B {
        self.inner.get(&self.outer.get(source))
    }
}

/// A getter reading through every element of a container. Built by
/// [`Getter::then_map`].
pub struct MappedGetter<O, I, A, B> {
    outer: O,
    inner: I,
    _marker: PhantomData<fn(A) -> B>,
}

impl<O, I, A, B> MappedGetter<O, I, A, B> {
    const fn new(outer: O, inner: I) -> Self {
        Self {
            outer,
            inner,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, O, I> Getter<S, A::WithType<B>> for MappedGetter<O, I, A, B>
where
    O: Getter<S, A>,
    A: Functor,
    I: Getter<A::Inner, B>,
{
    fn get(&self, source: &S) -> A::WithType<B> {
        self.outer
            .get(source)
            .fmap(|element| self.inner.get(&element))
    }
}

/// A getter reading through one case of an enum. Built by
/// [`Getter::then_case`].
pub struct CaseGetter<O, L, A> {
    outer: O,
    lens: L,
    _marker: PhantomData<fn(A) -> A>,
}

impl<O, L, A> CaseGetter<O, L, A> {
    const fn new(outer: O, lens: L) -> Self {
        Self {
            outer,
            lens,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, O, L> Getter<S, Option<B>> for CaseGetter<O, L, A>
where
    O: Getter<S, A>,
    L: CaseLens<A, B>,
{
    fn get(&self, source: &S) -> Option<B> {
        self.lens.extract(self.outer.get(source))
    }
}

/// A getter lifted through the success case of a `Result`. Built by
/// [`Getter::through_ok`].
pub struct ThroughOk<G, E> {
    getter: G,
    _marker: PhantomData<fn(E) -> E>,
}

impl<G, E> ThroughOk<G, E> {
    const fn new(getter: G) -> Self {
        Self {
            getter,
            _marker: PhantomData,
        }
    }
}

impl<S, A, E, G> Getter<Result<S, E>, Option<A>> for ThroughOk<G, E>
where
    G: Getter<S, A>,
{
    fn get(&self, source: &Result<S, E>) -> Option<A> {
        source.as_ref().ok().map(|value| self.getter.get(value))
    }
}

macro_rules! impl_combinator_traits {
    ($name:ident < $first:ident, $second:ident, $($marker:ident),+ >, $first_field:ident, $second_field:ident) => {
        impl<$first: Clone, $second: Clone, $($marker),+> Clone for $name<$first, $second, $($marker),+> {
            fn clone(&self) -> Self {
                Self::new(self.$first_field.clone(), self.$second_field.clone())
            }
        }

        impl<$first: fmt::Debug, $second: fmt::Debug, $($marker),+> fmt::Debug
            for $name<$first, $second, $($marker),+>
        {
            fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter
                    .debug_struct(stringify!($name))
                    .field(stringify!($first_field), &self.$first_field)
                    .field(stringify!($second_field), &self.$second_field)
                    .finish()
            }
        }
    };
}

impl_combinator_traits!(ComposedGetter<O, I, M>, outer, inner);
impl_combinator_traits!(MappedGetter<O, I, A, B>, outer, inner);
impl_combinator_traits!(CaseGetter<O, L, A>, outer, lens);

impl<G: Clone, E> Clone for ThroughOk<G, E> {
    fn clone(&self) -> Self {
        Self::new(self.getter.clone())
    }
}

impl<G: fmt::Debug, E> fmt::Debug for ThroughOk<G, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ThroughOk")
            .field("getter", &self.getter)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setter::some_case;
    use rstest::rstest;
    use std::collections::BTreeMap;

    #[derive(Clone, Debug, PartialEq)]
    struct Address {
        city: String,
    }

    #[derive(Clone, Debug, PartialEq)]
    struct Person {
        address: Option<Address>,
        nickname: Option<String>,
    }

    fn person(city: Option<&str>) -> Person {
        Person {
            address: city.map(|city| Address {
                city: city.to_string(),
            }),
            nickname: None,
        }
    }

    #[rstest]
    #[case(Some("Oslo"), Some("Oslo".to_string()))]
    #[case(None, None)]
    fn then_map_through_option(#[case] city: Option<&str>, #[case] expected: Option<String>) {
        let city_name = getter!(Person, address).then_map(getter!(Address, city));
        assert_eq!(city_name.get(&person(city)), expected);
    }

    #[rstest]
    fn then_case_matches_then_map_for_options() {
        let via_case = getter!(Person, nickname).then_case(some_case());
        let via_map = getter!(Person, nickname).then_map(getter!(String, len()));

        let named = Person {
            nickname: Some("Ziggy".to_string()),
            ..person(None)
        };

        assert_eq!(via_case.get(&named), Some("Ziggy".to_string()));
        assert_eq!(via_map.get(&named), Some(5));
        assert_eq!(via_case.get(&person(None)), None);
    }

    #[rstest]
    fn then_map_keeps_map_keys() {
        let lengths = FunctionGetter::new(|scores: &BTreeMap<&str, String>| scores.clone())
            .then_map(getter!(String, len()));
        let scores = BTreeMap::from([("a", "xx".to_string()), ("b", String::new())]);

        assert_eq!(lengths.get(&scores), BTreeMap::from([("a", 2), ("b", 0)]));
    }

    #[rstest]
    fn composition_reads_outer_then_inner() {
        let pair = getter!((Address, u8), 0).compose(getter!(Address, city));
        let source = (
            Address {
                city: "Lima".to_string(),
            },
            1,
        );
        assert_eq!(pair.get(&source), "Lima");
    }
}
