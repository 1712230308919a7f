//! The `Setter` and `MutSetter` traits and their composition.
//!
//! A setter answers one question: *if you tell me how to transform a part,
//! I will tell you how to transform the whole.* Its single primitive is
//! [`Setter::over`]; `set` and `lift` are derived from it.
//!
//! # Laws
//!
//! 1. **Identity**: `setter.over(whole, |part| part) == whole`
//! 2. **Composition**: `setter.over(setter.over(whole, f), g) == setter.over(whole, |part| g(f(part)))`
//!
//! Composition of setters threads the update from the outer focus to the
//! inner one: `outer.compose(inner).over(w, f) == outer.over(w, |m| inner.over(m, f))`.

use std::fmt;
use std::marker::PhantomData;

/// A composable update of every `A` focused inside an `S`.
///
/// # Type Parameters
///
/// - `S`: The whole structure
/// - `A`: The focused part
pub trait Setter<S, A> {
    /// Applies `update` to every focus and returns the rebuilt whole.
    ///
    /// The update may run zero times (an absent optional, an empty vector),
    /// once, or many times (every element of a vector).
    fn over<U>(&self, source: S, update: U) -> S
    where
        U: FnMut(A) -> A;

    /// Replaces every focus with a clone of `value`.
    #[inline]
    fn set(&self, source: S, value: A) -> S
    where
        A: Clone,
    {
        self.over(source, move |_| value.clone())
    }

    /// Turns the setter and an update into a plain function on wholes.
    ///
    /// This is the curried shape `(update) -> (whole) -> whole`.
    ///
    /// # Examples
    ///
    /// ```
    /// use witnessed::prop;
    /// use witnessed::setter::Setter;
    ///
    /// #[derive(Clone, Debug, PartialEq)]
    /// struct Account { balance: i64 }
    ///
    /// let charge_fee = prop!(Account, balance).lift(|balance| balance - 5);
    /// let accounts: Vec<Account> = vec![Account { balance: 100 }, Account { balance: 7 }]
    ///     .into_iter()
    ///     .map(charge_fee)
    ///     .collect();
    ///
    /// assert_eq!(accounts, vec![Account { balance: 95 }, Account { balance: 2 }]);
    /// ```
    fn lift<U>(self, update: U) -> impl Fn(S) -> S
    where
        Self: Sized,
        U: Fn(A) -> A,
    {
        move |source| self.over(source, &update)
    }

    /// Focuses further, through `inner`, into a part of the part.
    ///
    /// # Examples
    ///
    /// ```
    /// use witnessed::prop;
    /// use witnessed::setter::{second, Setter};
    ///
    /// #[derive(Clone, Debug, PartialEq)]
    /// struct Order { lines: (String, u32) }
    ///
    /// let quantity = prop!(Order, lines).compose(second());
    /// let order = Order { lines: ("tea".to_string(), 2) };
    ///
    /// assert_eq!(quantity.over(order, |n| n * 3).lines.1, 6);
    /// ```
    fn compose<B, I>(self, inner: I) -> ComposedSetter<Self, I, A>
    where
        Self: Sized,
        I: Setter<A, B>,
    {
        ComposedSetter::new(self, inner)
    }
}

/// A setter that can also update a whole in place.
///
/// The observable effect of `over_in_place(&mut w, f)` is the same as
/// `w = over(w, f)`: the referenced whole is mutated once and nothing is
/// returned.
pub trait MutSetter<S, A>: Setter<S, A> {
    /// Applies `update` to every focus of `source` in place.
    fn over_in_place<U>(&self, source: &mut S, update: U)
    where
        U: FnMut(A) -> A;

    /// Replaces every focus of `source` with a clone of `value`, in place.
    #[inline]
    fn set_in_place(&self, source: &mut S, value: A)
    where
        A: Clone,
    {
        self.over_in_place(source, move |_| value.clone());
    }

    /// Turns the setter and an update into a plain in-place function.
    ///
    /// ```
    /// use witnessed::prop;
    /// use witnessed::setter::MutSetter;
    ///
    /// struct Counter { hits: u32 }
    ///
    /// let hit = prop!(Counter, hits).lift_in_place(|hits| hits + 1);
    /// let mut counter = Counter { hits: 0 };
    /// hit(&mut counter);
    /// hit(&mut counter);
    /// assert_eq!(counter.hits, 2);
    /// ```
    fn lift_in_place<U>(self, update: U) -> impl Fn(&mut S)
    where
        Self: Sized,
        U: Fn(A) -> A,
    {
        move |source: &mut S| self.over_in_place(source, &update)
    }
}

// =============================================================================
// ComposedSetter
// =============================================================================

/// Two setters chained: the outer focuses on `M`, the inner on a part of `M`.
///
/// Built by [`Setter::compose`].
pub struct ComposedSetter<O, I, M> {
    outer: O,
    inner: I,
    _marker: PhantomData<fn(M) -> M>,
}

impl<O, I, M> ComposedSetter<O, I, M> {
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

impl<S, M, B, O, I> Setter<S, B> for ComposedSetter<O, I, M>
where
    O: Setter<S, M>,
    I: Setter<M, B>,
{
    fn over<U>(&self, source: S, mut update: U) -> S
    where
        U: FnMut(B) -> B,
    {
        self.outer
            .over(source, |part| self.inner.over(part, &mut update))
    }
}

impl<S, M, B, O, I> MutSetter<S, B> for ComposedSetter<O, I, M>
where
    O: MutSetter<S, M>,
    I: Setter<M, B>,
{
    fn over_in_place<U>(&self, source: &mut S, mut update: U)
    where
        U: FnMut(B) -> B,
    {
        self.outer
            .over_in_place(source, |part| self.inner.over(part, &mut update));
    }
}

impl<O: Clone, I: Clone, M> Clone for ComposedSetter<O, I, M> {
    fn clone(&self) -> Self {
        Self::new(self.outer.clone(), self.inner.clone())
    }
}

impl<O: fmt::Debug, I: fmt::Debug, M> fmt::Debug for ComposedSetter<O, I, M> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ComposedSetter")
            .field("outer", &self.outer)
            .field("inner", &self.inner)
            .finish()
    }
}

// =============================================================================
// FunctionSetter
// =============================================================================

/// A setter written by hand as a rebuilding function.
///
/// The function receives the whole and the update, and returns the rebuilt
/// whole. Use it for foci that no built-in setter reaches.
///
/// # Examples
///
/// ```
/// use witnessed::setter::{FunctionSetter, Setter};
///
/// // Every character of a string, as a setter.
/// let chars = FunctionSetter::new(|text: String, update: &mut dyn FnMut(char) -> char| {
///     text.chars().map(update).collect::<String>()
/// });
///
/// assert_eq!(chars.over("abc".to_string(), |c: char| c.to_ascii_uppercase()), "ABC");
/// ```
pub struct FunctionSetter<S, A, F>
where
    F: Fn(S, &mut dyn FnMut(A) -> A) -> S,
{
    function: F,
    _marker: PhantomData<fn(S, A) -> (S, A)>,
}

impl<S, A, F> FunctionSetter<S, A, F>
where
    F: Fn(S, &mut dyn FnMut(A) -> A) -> S,
{
    /// Wraps a rebuilding function.
    #[must_use]
    pub const fn new(function: F) -> Self {
        Self {
            function,
            _marker: PhantomData,
        }
    }
}

impl<S, A, F> Setter<S, A> for FunctionSetter<S, A, F>
where
    F: Fn(S, &mut dyn FnMut(A) -> A) -> S,
{
    fn over<U>(&self, source: S, mut update: U) -> S
    where
        U: FnMut(A) -> A,
    {
        (self.function)(source, &mut update)
    }
}

impl<S, A, F> Clone for FunctionSetter<S, A, F>
where
    F: Fn(S, &mut dyn FnMut(A) -> A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self::new(self.function.clone())
    }
}

impl<S, A, F> fmt::Debug for FunctionSetter<S, A, F>
where
    F: Fn(S, &mut dyn FnMut(A) -> A) -> S,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("FunctionSetter")
            .finish_non_exhaustive()
    }
}
