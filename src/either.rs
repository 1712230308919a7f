//! Two-case sum type.
//!
//! `Either<L, R>` holds exactly one of two typed payloads. It is the uniform
//! shape used by partitioning (`partition_map` sends each element left or
//! right) and by the case-lens combinator that joins two case lenses.
//!
//! Functions *out of* a sum are equivalent to a pair of functions, one per
//! case. [`split`] and [`unsplit`] witness that equivalence:
//!
//! ```text
//! (Either<B, C>) -> A  ≅  ((B) -> A, (C) -> A)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use witnessed::either::Either;
//!
//! let parsed: Vec<Either<String, i32>> = ["1", "x", "3"]
//!     .iter()
//!     .map(|text| match text.parse::<i32>() {
//!         Ok(number) => Either::Right(number),
//!         Err(_) => Either::Left((*text).to_string()),
//!     })
//!     .collect();
//!
//! let described: Vec<String> = parsed
//!     .into_iter()
//!     .map(|value| value.fold(|text| format!("bad {text}"), |number| number.to_string()))
//!     .collect();
//!
//! assert_eq!(described, vec!["1", "bad x", "3"]);
//! ```

use std::fmt;
use std::rc::Rc;

/// A value holding either a `Left(L)` or a `Right(R)`.
///
/// Mapping through the [`Functor`](crate::transform::Functor) view of `Either`
/// is right-biased: `fmap` touches `Right` and leaves `Left` alone.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Either<L, R> {
    /// The first case.
    Left(L),
    /// The second case.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Case Checking
    // =========================================================================

    /// Returns `true` for `Left`.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` for `Right`.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the left payload, or `None` for `Right`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use witnessed::either::Either;
    ///
    /// assert_eq!(Either::<i32, &str>::Left(1).left(), Some(1));
    /// assert_eq!(Either::<i32, &str>::Right("a").left(), None);
    /// ```
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns the right payload, or `None` for `Left`.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Borrows the payload in place.
    #[inline]
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Converts into a pair of options, exactly one of which is present.
    #[inline]
    pub fn into_options(self) -> (Option<L>, Option<R>) {
        match self {
            Self::Left(value) => (Some(value), None),
            Self::Right(value) => (None, Some(value)),
        }
    }

    // =========================================================================
    // Mapping
    // =========================================================================

    /// Transforms the left payload, leaving a `Right` untouched.
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Transforms the right payload, leaving a `Left` untouched.
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Transforms whichever payload is present, one function per case.
    ///
    /// `bimap(identity, identity)` is the identity, and
    /// `bimap(f1, g1).bimap(f2, g2) == bimap(f2 ∘ f1, g2 ∘ g1)`.
    /// The same operation for `Result` and pairs is
    /// [`Bifunctor::bimap`](crate::transform::Bifunctor::bimap).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use witnessed::either::Either;
    ///
    /// let failure: Either<&str, i32> = Either::Left("timeout");
    /// let mapped = failure.bimap(|message| message.len(), |code| code * 10);
    /// assert_eq!(mapped, Either::Left(7));
    /// ```
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    /// Eliminates the sum by handling each case.
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Exchanges the two cases.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }
}

impl<A> Either<A, A> {
    /// Returns the payload of an `Either` whose cases share a type.
    #[inline]
    pub fn into_inner(self) -> A {
        match self {
            Self::Left(value) | Self::Right(value) => value,
        }
    }
}

// =============================================================================
// Function Equivalences
// =============================================================================

/// Splits a function out of `Either<B, C>` into one function per case.
///
/// # Examples
///
/// ```rust
/// use witnessed::either::{split, Either};
///
/// let describe = |value: Either<i32, bool>| match value {
///     Either::Left(number) => format!("number {number}"),
///     Either::Right(flag) => format!("flag {flag}"),
/// };
///
/// let (on_number, on_flag) = split(describe);
/// assert_eq!(on_number(3), "number 3");
/// assert_eq!(on_flag(true), "flag true");
/// ```
pub fn split<A, B, C, F>(function: F) -> (impl Fn(B) -> A, impl Fn(C) -> A)
where
    F: Fn(Either<B, C>) -> A,
{
    let function = Rc::new(function);
    let on_right = Rc::clone(&function);
    (
        move |value: B| function(Either::Left(value)),
        move |value: C| on_right(Either::Right(value)),
    )
}

/// Joins one function per case into a function out of `Either<B, C>`.
///
/// Inverse of [`split`]: `unsplit(split(f))` behaves as `f`.
pub fn unsplit<A, B, C, F, G>(on_left: F, on_right: G) -> impl Fn(Either<B, C>) -> A
where
    F: Fn(B) -> A,
    G: Fn(C) -> A,
{
    move |value| match value {
        Either::Left(left) => on_left(left),
        Either::Right(right) => on_right(right),
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// `Ok` becomes `Right`, `Err` becomes `Left`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

#[cfg(feature = "serde")]
impl<L: serde::Serialize, R: serde::Serialize> serde::Serialize for Either<L, R> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Left(value) => serializer.serialize_newtype_variant("Either", 0, "Left", value),
            Self::Right(value) => serializer.serialize_newtype_variant("Either", 1, "Right", value),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, L, R> serde::Deserialize<'de> for Either<L, R>
where
    L: serde::Deserialize<'de>,
    R: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{EnumAccess, VariantAccess};
        use std::marker::PhantomData;

        enum Case {
            Left,
            Right,
        }

        struct CaseVisitor;

        impl serde::de::Visitor<'_> for CaseVisitor {
            type Value = Case;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("`Left` or `Right`")
            }

            fn visit_str<E: serde::de::Error>(self, value: &str) -> Result<Case, E> {
                match value {
                    "Left" => Ok(Case::Left),
                    "Right" => Ok(Case::Right),
                    other => Err(E::unknown_variant(other, VARIANTS)),
                }
            }
        }

        impl<'de> serde::Deserialize<'de> for Case {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                deserializer.deserialize_identifier(CaseVisitor)
            }
        }

        struct EitherVisitor<L, R>(PhantomData<(L, R)>);

        impl<'de, L, R> serde::de::Visitor<'de> for EitherVisitor<L, R>
        where
            L: serde::Deserialize<'de>,
            R: serde::Deserialize<'de>,
        {
            type Value = Either<L, R>;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("enum Either")
            }

            fn visit_enum<A>(self, data: A) -> Result<Self::Value, A::Error>
            where
                A: EnumAccess<'de>,
            {
                match data.variant::<Case>()? {
                    (Case::Left, variant) => variant.newtype_variant().map(Either::Left),
                    (Case::Right, variant) => variant.newtype_variant().map(Either::Right),
                }
            }
        }

        const VARIANTS: &[&str] = &["Left", "Right"];

        deserializer.deserialize_enum("Either", VARIANTS, EitherVisitor(PhantomData))
    }
}
