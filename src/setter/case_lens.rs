//! Case lenses: first-class access to one variant of an enum.
//!
//! A struct field is always there, so a field accessor can both read and
//! write. An enum variant is only *sometimes* there. A [`CaseLens`] captures
//! the two directions that remain meaningful:
//!
//! - [`CaseLens::try_extract`] reads the payload when the whole is in this
//!   case, handing the whole back untouched otherwise;
//! - [`CaseLens::embed`] builds the whole from a payload, always succeeding.
//!
//! # Laws
//!
//! ```text
//! lens.extract(lens.embed(value)) == Some(value)
//! lens.try_extract(whole) == Err(whole)      // whole in another case
//! lens.embed(payload) == whole               // when try_extract(whole) == Ok(payload)
//! ```
//!
//! # Examples
//!
//! ```
//! use witnessed::case_lens;
//! use witnessed::setter::{CaseLens, Setter};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! enum Payment {
//!     Card(String),
//!     Cash(u32),
//! }
//!
//! let cash = case_lens!(Payment, Cash);
//!
//! assert_eq!(cash.extract(Payment::Cash(20)), Some(20));
//! assert_eq!(cash.extract(Payment::Card("visa".to_string())), None);
//! assert_eq!(cash.embed(5), Payment::Cash(5));
//!
//! let doubled = cash.as_setter().over(Payment::Cash(20), |amount| amount * 2);
//! assert_eq!(doubled, Payment::Cash(40));
//! ```

use super::functional_setter::Setter;
use crate::either::Either;
use std::fmt;
use std::marker::PhantomData;

/// Partial read and total construction of one case of `S` carrying an `A`.
///
/// # Type Parameters
///
/// - `S`: The enum (the whole)
/// - `A`: The payload of the focused case
pub trait CaseLens<S, A> {
    /// Extracts the payload, or returns the whole unchanged when it is in
    /// another case.
    ///
    /// # Errors
    ///
    /// Returns `Err(source)` when `source` is not in the focused case.
    fn try_extract(&self, source: S) -> Result<A, S>;

    /// Builds the whole in the focused case.
    fn embed(&self, value: A) -> S;

    /// Extracts the payload, discarding wholes in another case.
    #[inline]
    fn extract(&self, source: S) -> Option<A> {
        self.try_extract(source).ok()
    }

    /// Returns `true` if `source` is in the focused case.
    #[inline]
    fn matches(&self, source: &S) -> bool
    where
        S: Clone,
    {
        self.try_extract(source.clone()).is_ok()
    }

    /// Focuses further into a case of the payload.
    ///
    /// Extraction succeeds only when both lenses match. Embedding always
    /// succeeds and nests both cases.
    ///
    /// ```
    /// use witnessed::setter::{CaseLens, ok_case, some_case};
    ///
    /// let present_ok = ok_case::<Option<i32>, String>().compose(some_case());
    ///
    /// assert_eq!(present_ok.extract(Ok(Some(3))), Some(3));
    /// assert_eq!(present_ok.extract(Ok(None)), None);
    /// assert_eq!(present_ok.extract(Err("e".to_string())), None);
    /// assert_eq!(present_ok.embed(3), Ok(Some(3)));
    /// ```
    fn compose<B, I>(self, inner: I) -> ComposedCaseLens<Self, I, A>
    where
        Self: Sized,
        I: CaseLens<A, B>,
    {
        ComposedCaseLens::new(self, inner)
    }

    /// Views the lens as a setter that updates the payload when the whole is
    /// in the focused case, and leaves any other case untouched.
    fn as_setter(self) -> CaseSetter<Self, S, A>
    where
        Self: Sized,
    {
        CaseSetter::new(self)
    }
}

// =============================================================================
// FunctionCaseLens
// =============================================================================

/// A case lens built from an extracting and an embedding function.
///
/// Usually created through [`case_lens!`](crate::case_lens) or
/// `#[derive(CaseLenses)]`.
pub struct FunctionCaseLens<S, A, X, E>
where
    X: Fn(S) -> Result<A, S>,
    E: Fn(A) -> S,
{
    extractor: X,
    embedder: E,
    _marker: PhantomData<fn(S) -> A>,
}

impl<S, A, X, E> FunctionCaseLens<S, A, X, E>
where
    X: Fn(S) -> Result<A, S>,
    E: Fn(A) -> S,
{
    /// Creates a case lens from its two directions.
    ///
    /// ```
    /// use witnessed::setter::{CaseLens, FunctionCaseLens};
    ///
    /// // The non-negative case of an integer.
    /// let natural = FunctionCaseLens::new(
    ///     |n: i64| u64::try_from(n).map_err(|_| n),
    ///     |n: u64| i64::try_from(n).unwrap_or(i64::MAX),
    /// );
    ///
    /// assert_eq!(natural.extract(7), Some(7));
    /// assert_eq!(natural.extract(-7), None);
    /// ```
    #[must_use]
    pub const fn new(extractor: X, embedder: E) -> Self {
        Self {
            extractor,
            embedder,
            _marker: PhantomData,
        }
    }
}

impl<S, A, X, E> CaseLens<S, A> for FunctionCaseLens<S, A, X, E>
where
    X: Fn(S) -> Result<A, S>,
    E: Fn(A) -> S,
{
    #[inline]
    fn try_extract(&self, source: S) -> Result<A, S> {
        (self.extractor)(source)
    }

    #[inline]
    fn embed(&self, value: A) -> S {
        (self.embedder)(value)
    }
}

impl<S, A, X, E> Clone for FunctionCaseLens<S, A, X, E>
where
    X: Fn(S) -> Result<A, S> + Clone,
    E: Fn(A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self::new(self.extractor.clone(), self.embedder.clone())
    }
}

impl<S, A, X, E> fmt::Debug for FunctionCaseLens<S, A, X, E>
where
    X: Fn(S) -> Result<A, S>,
    E: Fn(A) -> S,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("FunctionCaseLens")
            .finish_non_exhaustive()
    }
}

/// Builds a case lens for a single-payload enum variant.
///
/// # Syntax
///
/// ```text
/// case_lens!(Enum, Variant)
/// case_lens!(Enum<T>, Variant)
/// ```
///
/// # Examples
///
/// ```
/// use witnessed::case_lens;
/// use witnessed::setter::CaseLens;
///
/// #[derive(Debug, PartialEq)]
/// enum Shape<T> { Circle(T), Square(T) }
///
/// let circle = case_lens!(Shape<f64>, Circle);
/// assert_eq!(circle.extract(Shape::Circle(1.5)), Some(1.5));
/// assert!(circle.try_extract(Shape::Square(2.0)).is_err());
/// ```
#[macro_export]
macro_rules! case_lens {
    ($enum_type:ident, $variant:ident) => {
        $crate::setter::FunctionCaseLens::new(
            |source: $enum_type| match source {
                $enum_type::$variant(value) => ::core::result::Result::Ok(value),
                #[allow(unreachable_patterns)]
                other => ::core::result::Result::Err(other),
            },
            $enum_type::$variant,
        )
    };
    ($enum_type:ident < $($generic:ty),+ >, $variant:ident) => {
        $crate::setter::FunctionCaseLens::new(
            |source: $enum_type<$($generic),+>| match source {
                $enum_type::$variant(value) => ::core::result::Result::Ok(value),
                #[allow(unreachable_patterns)]
                other => ::core::result::Result::Err(other),
            },
            $enum_type::<$($generic),+>::$variant,
        )
    };
}

// =============================================================================
// ComposedCaseLens
// =============================================================================

/// A case of a case. Built by [`CaseLens::compose`].
pub struct ComposedCaseLens<O, I, M> {
    outer: O,
    inner: I,
    _marker: PhantomData<fn(M) -> M>,
}

impl<O, I, M> ComposedCaseLens<O, I, M> {
    /// Chains `outer` and `inner`.
    #[must_use]
    pub const fn new(outer: O, inner: I) -> Self {
        Self {
            outer,
            inner,
            _marker: PhantomData,
        }
    }
}

impl<S, M, B, O, I> CaseLens<S, B> for ComposedCaseLens<O, I, M>
where
    O: CaseLens<S, M>,
    I: CaseLens<M, B>,
{
    fn try_extract(&self, source: S) -> Result<B, S> {
        let middle = self.outer.try_extract(source)?;
        self.inner
            .try_extract(middle)
            .map_err(|middle| self.outer.embed(middle))
    }

    fn embed(&self, value: B) -> S {
        self.outer.embed(self.inner.embed(value))
    }
}

impl<O: Clone, I: Clone, M> Clone for ComposedCaseLens<O, I, M> {
    fn clone(&self) -> Self {
        Self::new(self.outer.clone(), self.inner.clone())
    }
}

impl<O: fmt::Debug, I: fmt::Debug, M> fmt::Debug for ComposedCaseLens<O, I, M> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ComposedCaseLens")
            .field("outer", &self.outer)
            .field("inner", &self.inner)
            .finish()
    }
}

// =============================================================================
// EitherCase
// =============================================================================

/// Two cases of the same enum viewed as one case carrying an [`Either`].
///
/// Built by [`either_case`].
pub struct EitherCase<L, R, B, C> {
    left: L,
    right: R,
    _marker: PhantomData<fn(B, C) -> (B, C)>,
}

/// Combines two case lenses of the same whole into one lens whose payload
/// says which case matched.
///
/// Extraction tries `left` first, then `right`. Embedding a `Left` builds the
/// left case and embedding a `Right` builds the right one.
///
/// # Examples
///
/// ```
/// use witnessed::case_lens;
/// use witnessed::either::Either;
/// use witnessed::setter::{CaseLens, either_case};
///
/// #[derive(Clone, Debug, PartialEq)]
/// enum Reading { Celsius(f64), Kelvin(f64), Missing(()) }
///
/// let numeric = either_case(case_lens!(Reading, Celsius), case_lens!(Reading, Kelvin));
///
/// assert_eq!(numeric.extract(Reading::Kelvin(3.0)), Some(Either::Right(3.0)));
/// assert_eq!(numeric.extract(Reading::Missing(())), None);
/// assert_eq!(numeric.embed(Either::Left(20.0)), Reading::Celsius(20.0));
/// ```
#[must_use]
pub const fn either_case<L, R, B, C>(left: L, right: R) -> EitherCase<L, R, B, C> {
    EitherCase {
        left,
        right,
        _marker: PhantomData,
    }
}

impl<S, B, C, L, R> CaseLens<S, Either<B, C>> for EitherCase<L, R, B, C>
where
    L: CaseLens<S, B>,
    R: CaseLens<S, C>,
{
    fn try_extract(&self, source: S) -> Result<Either<B, C>, S> {
        match self.left.try_extract(source) {
            Ok(value) => Ok(Either::Left(value)),
            Err(source) => self.right.try_extract(source).map(Either::Right),
        }
    }

    fn embed(&self, value: Either<B, C>) -> S {
        match value {
            Either::Left(value) => self.left.embed(value),
            Either::Right(value) => self.right.embed(value),
        }
    }
}

impl<L: Clone, R: Clone, B, C> Clone for EitherCase<L, R, B, C> {
    fn clone(&self) -> Self {
        either_case(self.left.clone(), self.right.clone())
    }
}

impl<L: fmt::Debug, R: fmt::Debug, B, C> fmt::Debug for EitherCase<L, R, B, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("EitherCase")
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}

// =============================================================================
// CaseSetter
// =============================================================================

/// A case lens used as a setter. Built by [`CaseLens::as_setter`].
pub struct CaseSetter<L, S, A> {
    lens: L,
    _marker: PhantomData<fn(S) -> A>,
}

impl<L, S, A> CaseSetter<L, S, A> {
    const fn new(lens: L) -> Self {
        Self {
            lens,
            _marker: PhantomData,
        }
    }
}

impl<L, S, A> Setter<S, A> for CaseSetter<L, S, A>
where
    L: CaseLens<S, A>,
{
    fn over<U>(&self, source: S, mut update: U) -> S
    where
        U: FnMut(A) -> A,
    {
        match self.lens.try_extract(source) {
            Ok(value) => self.lens.embed(update(value)),
            Err(source) => source,
        }
    }
}

impl<L: Clone, S, A> Clone for CaseSetter<L, S, A> {
    fn clone(&self) -> Self {
        Self::new(self.lens.clone())
    }
}

impl<L: fmt::Debug, S, A> fmt::Debug for CaseSetter<L, S, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("CaseSetter")
            .field("lens", &self.lens)
            .finish()
    }
}

// =============================================================================
// Standard Case Lenses
// =============================================================================

marker_optic! {
    /// The `Some` case of an `Option`. Built by [`some_case`].
    SomeCase<A>
}

marker_optic! {
    /// The `Ok` case of a `Result`. Built by [`ok_case`].
    OkCase<T, E>
}

marker_optic! {
    /// The `Err` case of a `Result`. Built by [`err_case`].
    ErrCase<T, E>
}

marker_optic! {
    /// The `Left` case of an `Either`. Built by [`left_case`].
    LeftCase<L, R>
}

marker_optic! {
    /// The `Right` case of an `Either`. Built by [`right_case`].
    RightCase<L, R>
}

/// The `Some` case of an `Option`.
#[must_use]
pub const fn some_case<A>() -> SomeCase<A> {
    SomeCase::new()
}

/// The `Ok` case of a `Result`.
#[must_use]
pub const fn ok_case<T, E>() -> OkCase<T, E> {
    OkCase::new()
}

/// The `Err` case of a `Result`.
#[must_use]
pub const fn err_case<T, E>() -> ErrCase<T, E> {
    ErrCase::new()
}

/// The `Left` case of an `Either`.
#[must_use]
pub const fn left_case<L, R>() -> LeftCase<L, R> {
    LeftCase::new()
}

/// The `Right` case of an `Either`.
#[must_use]
pub const fn right_case<L, R>() -> RightCase<L, R> {
    RightCase::new()
}

impl<A> CaseLens<Option<A>, A> for SomeCase<A> {
    fn try_extract(&self, source: Option<A>) -> Result<A, Option<A>> {
        source.ok_or(None)
    }

    fn embed(&self, value: A) -> Option<A> {
        Some(value)
    }
}

impl<T, E> CaseLens<Result<T, E>, T> for OkCase<T, E> {
    fn try_extract(&self, source: Result<T, E>) -> Result<T, Result<T, E>> {
        source.map_err(Err)
    }

    fn embed(&self, value: T) -> Result<T, E> {
        Ok(value)
    }
}

impl<T, E> CaseLens<Result<T, E>, E> for ErrCase<T, E> {
    fn try_extract(&self, source: Result<T, E>) -> Result<E, Result<T, E>> {
        match source {
            Err(error) => Ok(error),
            Ok(value) => Err(Ok(value)),
        }
    }

    fn embed(&self, value: E) -> Result<T, E> {
        Err(value)
    }
}

impl<L, R> CaseLens<Either<L, R>, L> for LeftCase<L, R> {
    fn try_extract(&self, source: Either<L, R>) -> Result<L, Either<L, R>> {
        match source {
            Either::Left(value) => Ok(value),
            other @ Either::Right(_) => Err(other),
        }
    }

    fn embed(&self, value: L) -> Either<L, R> {
        Either::Left(value)
    }
}

impl<L, R> CaseLens<Either<L, R>, R> for RightCase<L, R> {
    fn try_extract(&self, source: Either<L, R>) -> Result<R, Either<L, R>> {
        match source {
            Either::Right(value) => Ok(value),
            other @ Either::Left(_) => Err(other),
        }
    }

    fn embed(&self, value: R) -> Either<L, R> {
        Either::Right(value)
    }
}
