//! Mapping over both sides of a two-parameter type.
//!
//! # Laws
//!
//! ```text
//! value.bimap(|a| a, |b| b) == value
//! value.bimap(|a| f2(f1(a)), |b| g2(g1(b))) == value.bimap(f1, g1).bimap(f2, g2)
//! value.bimap(f, g) == value.first(f).second(g)
//! ```
//!
//! `Result<T, E>` is a `Bifunctor<E, T>`: the failure is the first side and
//! the success the second, matching `Either<L, R>` where `Left` conventionally
//! carries the failure. `second` is then the same as [`Functor::fmap`] and
//! `first` the same as `Result::map_err`.
//!
//! [`Functor::fmap`]: super::Functor::fmap

use crate::either::Either;

/// Types with two independently mappable sides.
///
/// # Examples
///
/// ```rust
/// use witnessed::transform::Bifunctor;
///
/// let parsed: Result<u16, String> = "8080".parse::<u16>().map_err(|error| error.to_string());
/// let described = parsed.bimap(|message| format!("invalid port: {message}"), |port| port + 1);
///
/// assert_eq!(described, Ok(8081));
/// ```
pub trait Bifunctor<A, B> {
    /// The same shape with sides `C` and `D`.
    type Target<C, D>;

    /// Transforms whichever sides are present, one function per side.
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D;

    /// Transforms the first side only.
    #[inline]
    fn first<C, F>(self, function: F) -> Self::Target<C, B>
    where
        Self: Sized,
        F: FnOnce(A) -> C,
    {
        self.bimap(function, |second| second)
    }

    /// Transforms the second side only.
    #[inline]
    fn second<D, G>(self, function: G) -> Self::Target<A, D>
    where
        Self: Sized,
        G: FnOnce(B) -> D,
    {
        self.bimap(|first| first, function)
    }
}

impl<L, R> Bifunctor<L, R> for Either<L, R> {
    type Target<C, D> = Either<C, D>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Either<C, D>
    where
        F: FnOnce(L) -> C,
        G: FnOnce(R) -> D,
    {
        match self {
            Self::Left(value) => Either::Left(first_function(value)),
            Self::Right(value) => Either::Right(second_function(value)),
        }
    }
}

impl<T, E> Bifunctor<E, T> for Result<T, E> {
    type Target<C, D> = Result<D, C>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Result<D, C>
    where
        F: FnOnce(E) -> C,
        G: FnOnce(T) -> D,
    {
        match self {
            Ok(value) => Ok(second_function(value)),
            Err(error) => Err(first_function(error)),
        }
    }
}

impl<A, B> Bifunctor<A, B> for (A, B) {
    type Target<C, D> = (C, D);

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> (C, D)
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D,
    {
        (first_function(self.0), second_function(self.1))
    }
}
