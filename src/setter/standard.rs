//! Ready-made setters for standard containers.
//!
//! | Constructor          | Whole                         | Focus        |
//! |----------------------|-------------------------------|--------------|
//! | [`each`]             | any [`Functor`]               | every element|
//! | [`first`], [`second`]| `(A, B)`                      | one position |
//! | [`key`]              | `HashMap` / `BTreeMap`        | `Option<V>`  |
//! | [`key_if_exists`]    | `HashMap` / `BTreeMap`        | `V`          |
//! | [`element`]          | `HashSet` / `BTreeSet`        | membership   |
//! | [`index`]            | `Vec<A>`                      | one element  |
//! | [`ok`], [`err`]      | `Result<T, E>`                | one case     |
//! | [`left`], [`right`]  | `Either<L, R>`                | one case     |
//!
//! Setters that focus on a case ([`ok`], [`left`], ...) leave a whole in the
//! other case untouched.
//!
//! # Panicking updates
//!
//! The in-place forms move the focus out of the whole before the update runs.
//! If the update panics, the whole is left valid but without what was moved
//! out:
//!
//! - [`each`]: the container is left empty (its `Default`)
//! - [`key`], [`key_if_exists`]: the entry under the key is removed
//! - [`index`]: the element at the position is removed; the others keep
//!   their order

use super::functional_setter::{MutSetter, Setter};
use crate::either::Either;
use crate::transform::Functor;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::marker::PhantomData;

// =============================================================================
// Each
// =============================================================================

marker_optic! {
    /// Focuses on every element of a functor. Built by [`each`].
    Each<C>
}

/// Focuses on every element of a container.
///
/// `each().over(container, f)` is `container.fmap(f)`: the update runs once
/// per element and the shape is kept.
///
/// # Examples
///
/// ```
/// use witnessed::setter::{each, Setter};
///
/// assert_eq!(each().over(vec![1, 2, 3], |n| n * 10), vec![10, 20, 30]);
/// assert_eq!(each().over(None::<i32>, |n| n * 10), None);
/// ```
#[must_use]
pub const fn each<C>() -> Each<C> {
    Each::new()
}

impl<C> Setter<C, C::Inner> for Each<C>
where
    C: Functor,
    C::WithType<C::Inner>: Into<C>,
{
    #[inline]
    fn over<U>(&self, source: C, update: U) -> C
    where
        U: FnMut(C::Inner) -> C::Inner,
    {
        source.fmap(update).into()
    }
}

impl<C> MutSetter<C, C::Inner> for Each<C>
where
    C: Functor + Default,
    C::WithType<C::Inner>: Into<C>,
{
    fn over_in_place<U>(&self, source: &mut C, update: U)
    where
        U: FnMut(C::Inner) -> C::Inner,
    {
        let taken = std::mem::take(source);
        *source = self.over(taken, update);
    }
}

// =============================================================================
// Tuples
// =============================================================================

marker_optic! {
    /// Focuses on the first position of a pair. Built by [`first`].
    First<A, B>
}

marker_optic! {
    /// Focuses on the second position of a pair. Built by [`second`].
    Second<A, B>
}

/// Focuses on the first position of a pair.
///
/// ```
/// use witnessed::setter::{first, Setter};
///
/// assert_eq!(first().over((1, "one"), |n: i32| n + 1), (2, "one"));
/// assert_eq!(first().set((1, "one"), 2), (2, "one"));
/// ```
#[must_use]
pub const fn first<A, B>() -> First<A, B> {
    First::new()
}

/// Focuses on the second position of a pair.
#[must_use]
pub const fn second<A, B>() -> Second<A, B> {
    Second::new()
}

impl<A, B> Setter<(A, B), A> for First<A, B> {
    #[inline]
    fn over<U>(&self, (a, b): (A, B), mut update: U) -> (A, B)
    where
        U: FnMut(A) -> A,
    {
        (update(a), b)
    }
}

impl<A: Clone, B> MutSetter<(A, B), A> for First<A, B> {
    fn over_in_place<U>(&self, source: &mut (A, B), mut update: U)
    where
        U: FnMut(A) -> A,
    {
        source.0 = update(source.0.clone());
    }
}

impl<A, B> Setter<(A, B), B> for Second<A, B> {
    #[inline]
    fn over<U>(&self, (a, b): (A, B), mut update: U) -> (A, B)
    where
        U: FnMut(B) -> B,
    {
        (a, update(b))
    }
}

impl<A, B: Clone> MutSetter<(A, B), B> for Second<A, B> {
    fn over_in_place<U>(&self, source: &mut (A, B), mut update: U)
    where
        U: FnMut(B) -> B,
    {
        source.1 = update(source.1.clone());
    }
}

// =============================================================================
// Map Keys
// =============================================================================

/// Focuses on the optional value under one key of a map `M`. Built by [`key`].
pub struct Key<K, M> {
    key: K,
    _whole: PhantomData<fn(M) -> M>,
}

/// Focuses on the optional value stored under `key`.
///
/// The update sees `None` when the key is absent. Returning `None` removes
/// the entry and returning `Some` inserts or replaces it.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use witnessed::setter::{key, Setter};
///
/// let stock = HashMap::from([("tea", 3)]);
///
/// let restocked = key("cake").set(stock.clone(), Some(12));
/// assert_eq!(restocked.get("cake"), Some(&12));
///
/// let sold_out = key("tea").set(stock, None);
/// assert!(sold_out.is_empty());
/// ```
#[must_use]
pub const fn key<K, M>(key: K) -> Key<K, M> {
    Key {
        key,
        _whole: PhantomData,
    }
}

impl<K, V, S> MutSetter<HashMap<K, V, S>, Option<V>> for Key<K, HashMap<K, V, S>>
where
    K: Eq + Hash + Clone,
    S: BuildHasher,
{
    fn over_in_place<U>(&self, source: &mut HashMap<K, V, S>, mut update: U)
    where
        U: FnMut(Option<V>) -> Option<V>,
    {
        if let Some(value) = update(source.remove(&self.key)) {
            source.insert(self.key.clone(), value);
        }
    }
}

impl<K, V, S> Setter<HashMap<K, V, S>, Option<V>> for Key<K, HashMap<K, V, S>>
where
    K: Eq + Hash + Clone,
    S: BuildHasher,
{
    fn over<U>(&self, mut source: HashMap<K, V, S>, update: U) -> HashMap<K, V, S>
    where
        U: FnMut(Option<V>) -> Option<V>,
    {
        self.over_in_place(&mut source, update);
        source
    }
}

impl<K, V> MutSetter<BTreeMap<K, V>, Option<V>> for Key<K, BTreeMap<K, V>>
where
    K: Ord + Clone,
{
    fn over_in_place<U>(&self, source: &mut BTreeMap<K, V>, mut update: U)
    where
        U: FnMut(Option<V>) -> Option<V>,
    {
        if let Some(value) = update(source.remove(&self.key)) {
            source.insert(self.key.clone(), value);
        }
    }
}

impl<K, V> Setter<BTreeMap<K, V>, Option<V>> for Key<K, BTreeMap<K, V>>
where
    K: Ord + Clone,
{
    fn over<U>(&self, mut source: BTreeMap<K, V>, update: U) -> BTreeMap<K, V>
    where
        U: FnMut(Option<V>) -> Option<V>,
    {
        self.over_in_place(&mut source, update);
        source
    }
}

/// Focuses on the value under one key of a map `M`, only when present.
/// Built by [`key_if_exists`].
pub struct KeyIfExists<K, M> {
    key: K,
    _whole: PhantomData<fn(M) -> M>,
}

/// Focuses on the value stored under `key`, skipping absent keys.
///
/// Equivalent to `key(k).compose(each())`: the update runs only when the key
/// is present and can never add or remove an entry.
///
/// ```
/// use std::collections::BTreeMap;
/// use witnessed::setter::{key_if_exists, Setter};
///
/// let prices = BTreeMap::from([("tea", 300)]);
/// let raised = key_if_exists("tea").over(prices.clone(), |p| p + 20);
/// let untouched = key_if_exists("cake").over(prices.clone(), |p| p + 20);
///
/// assert_eq!(raised["tea"], 320);
/// assert_eq!(untouched, prices);
/// ```
#[must_use]
pub const fn key_if_exists<K, M>(key: K) -> KeyIfExists<K, M> {
    KeyIfExists {
        key,
        _whole: PhantomData,
    }
}

impl<K, V, S> MutSetter<HashMap<K, V, S>, V> for KeyIfExists<K, HashMap<K, V, S>>
where
    K: Eq + Hash + Clone,
    S: BuildHasher,
{
    fn over_in_place<U>(&self, source: &mut HashMap<K, V, S>, mut update: U)
    where
        U: FnMut(V) -> V,
    {
        if let Some(value) = source.remove(&self.key) {
            source.insert(self.key.clone(), update(value));
        }
    }
}

impl<K, V, S> Setter<HashMap<K, V, S>, V> for KeyIfExists<K, HashMap<K, V, S>>
where
    K: Eq + Hash + Clone,
    S: BuildHasher,
{
    fn over<U>(&self, mut source: HashMap<K, V, S>, update: U) -> HashMap<K, V, S>
    where
        U: FnMut(V) -> V,
    {
        self.over_in_place(&mut source, update);
        source
    }
}

impl<K, V> MutSetter<BTreeMap<K, V>, V> for KeyIfExists<K, BTreeMap<K, V>>
where
    K: Ord + Clone,
{
    fn over_in_place<U>(&self, source: &mut BTreeMap<K, V>, mut update: U)
    where
        U: FnMut(V) -> V,
    {
        if let Some(value) = source.remove(&self.key) {
            source.insert(self.key.clone(), update(value));
        }
    }
}

impl<K, V> Setter<BTreeMap<K, V>, V> for KeyIfExists<K, BTreeMap<K, V>>
where
    K: Ord + Clone,
{
    fn over<U>(&self, mut source: BTreeMap<K, V>, update: U) -> BTreeMap<K, V>
    where
        U: FnMut(V) -> V,
    {
        self.over_in_place(&mut source, update);
        source
    }
}

impl<K: Clone, M> Clone for Key<K, M> {
    fn clone(&self) -> Self {
        key(self.key.clone())
    }
}

impl<K: fmt::Debug, M> fmt::Debug for Key<K, M> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Key").field("key", &self.key).finish()
    }
}

impl<K: Clone, M> Clone for KeyIfExists<K, M> {
    fn clone(&self) -> Self {
        key_if_exists(self.key.clone())
    }
}

impl<K: fmt::Debug, M> fmt::Debug for KeyIfExists<K, M> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("KeyIfExists")
            .field("key", &self.key)
            .finish()
    }
}

// =============================================================================
// Set Membership
// =============================================================================

/// Focuses on whether one value belongs to a set `C`. Built by [`element`].
pub struct Element<A, C> {
    element: A,
    _whole: PhantomData<fn(C) -> C>,
}

/// Focuses on the membership of `element` in a set.
///
/// The update receives `true` when the element is present. Returning `true`
/// inserts it and returning `false` removes it.
///
/// ```
/// use std::collections::HashSet;
/// use witnessed::setter::{element, Setter};
///
/// let tags = HashSet::from(["new"]);
/// let toggled = element("new").over(tags, |present| !present);
/// assert!(toggled.is_empty());
/// ```
#[must_use]
pub const fn element<A, C>(element: A) -> Element<A, C> {
    Element {
        element,
        _whole: PhantomData,
    }
}

impl<A, S> MutSetter<HashSet<A, S>, bool> for Element<A, HashSet<A, S>>
where
    A: Eq + Hash + Clone,
    S: BuildHasher,
{
    fn over_in_place<U>(&self, source: &mut HashSet<A, S>, mut update: U)
    where
        U: FnMut(bool) -> bool,
    {
        if update(source.contains(&self.element)) {
            source.insert(self.element.clone());
        } else {
            source.remove(&self.element);
        }
    }
}

impl<A, S> Setter<HashSet<A, S>, bool> for Element<A, HashSet<A, S>>
where
    A: Eq + Hash + Clone,
    S: BuildHasher,
{
    fn over<U>(&self, mut source: HashSet<A, S>, update: U) -> HashSet<A, S>
    where
        U: FnMut(bool) -> bool,
    {
        self.over_in_place(&mut source, update);
        source
    }
}

impl<A> MutSetter<BTreeSet<A>, bool> for Element<A, BTreeSet<A>>
where
    A: Ord + Clone,
{
    fn over_in_place<U>(&self, source: &mut BTreeSet<A>, mut update: U)
    where
        U: FnMut(bool) -> bool,
    {
        if update(source.contains(&self.element)) {
            source.insert(self.element.clone());
        } else {
            source.remove(&self.element);
        }
    }
}

impl<A> Setter<BTreeSet<A>, bool> for Element<A, BTreeSet<A>>
where
    A: Ord + Clone,
{
    fn over<U>(&self, mut source: BTreeSet<A>, update: U) -> BTreeSet<A>
    where
        U: FnMut(bool) -> bool,
    {
        self.over_in_place(&mut source, update);
        source
    }
}

impl<A: Clone, C> Clone for Element<A, C> {
    fn clone(&self) -> Self {
        element(self.element.clone())
    }
}

impl<A: fmt::Debug, C> fmt::Debug for Element<A, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Element")
            .field("element", &self.element)
            .finish()
    }
}

// =============================================================================
// Vector Positions
// =============================================================================

/// Focuses on one position of a `Vec<A>`. Built by [`index`].
pub struct Index<A> {
    position: usize,
    _whole: PhantomData<fn(Vec<A>) -> Vec<A>>,
}

/// Focuses on the element at `position`.
///
/// A position past the end focuses on nothing: the update does not run and
/// the vector is returned unchanged.
///
/// ```
/// use witnessed::setter::{index, Setter};
///
/// assert_eq!(index(1).set(vec!['a', 'b'], 'z'), vec!['a', 'z']);
/// assert_eq!(index(5).set(vec!['a', 'b'], 'z'), vec!['a', 'b']);
/// ```
#[must_use]
pub const fn index<A>(position: usize) -> Index<A> {
    Index {
        position,
        _whole: PhantomData,
    }
}

/// Shifts the tail left over a hole left by `swap_remove` if dropped while
/// still armed.
struct CloseHoleOnUnwind<'a, A> {
    vector: &'a mut Vec<A>,
    position: usize,
    armed: bool,
}

impl<A> Drop for CloseHoleOnUnwind<'_, A> {
    fn drop(&mut self) {
        if self.armed && self.position < self.vector.len() {
            self.vector[self.position..].rotate_left(1);
        }
    }
}

impl<A> MutSetter<Vec<A>, A> for Index<A> {
    fn over_in_place<U>(&self, source: &mut Vec<A>, mut update: U)
    where
        U: FnMut(A) -> A,
    {
        if self.position >= source.len() {
            return;
        }

        // The former last element now sits at `position`.
        let current = source.swap_remove(self.position);
        let mut guard = CloseHoleOnUnwind {
            vector: source,
            position: self.position,
            armed: true,
        };
        let updated = update(current);

        guard.vector.push(updated);
        let last = guard.vector.len() - 1;
        guard.vector.swap(self.position, last);
        guard.armed = false;
    }
}

impl<A> Setter<Vec<A>, A> for Index<A> {
    fn over<U>(&self, mut source: Vec<A>, update: U) -> Vec<A>
    where
        U: FnMut(A) -> A,
    {
        self.over_in_place(&mut source, update);
        source
    }
}

impl<A> Clone for Index<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A> Copy for Index<A> {}

impl<A> fmt::Debug for Index<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Index")
            .field("position", &self.position)
            .finish()
    }
}

// =============================================================================
// Cases
// =============================================================================

marker_optic! {
    /// Focuses on the success value of a `Result`. Built by [`ok`].
    OkValue<T, E>
}

marker_optic! {
    /// Focuses on the failure value of a `Result`. Built by [`err`].
    ErrValue<T, E>
}

marker_optic! {
    /// Focuses on the left value of an `Either`. Built by [`left`].
    LeftValue<L, R>
}

marker_optic! {
    /// Focuses on the right value of an `Either`. Built by [`right`].
    RightValue<L, R>
}

/// Focuses on the success value of a `Result`.
///
/// ```
/// use witnessed::setter::{ok, Setter};
///
/// let parsed: Result<i32, String> = Ok(4);
/// assert_eq!(ok().over(parsed, |n| n + 1), Ok(5));
///
/// let failed: Result<i32, String> = Err("bad".to_string());
/// assert_eq!(ok().over(failed.clone(), |n| n + 1), failed);
/// ```
#[must_use]
pub const fn ok<T, E>() -> OkValue<T, E> {
    OkValue::new()
}

/// Focuses on the failure value of a `Result`.
#[must_use]
pub const fn err<T, E>() -> ErrValue<T, E> {
    ErrValue::new()
}

/// Focuses on the left value of an `Either`.
#[must_use]
pub const fn left<L, R>() -> LeftValue<L, R> {
    LeftValue::new()
}

/// Focuses on the right value of an `Either`.
#[must_use]
pub const fn right<L, R>() -> RightValue<L, R> {
    RightValue::new()
}

impl<T, E> Setter<Result<T, E>, T> for OkValue<T, E> {
    #[inline]
    fn over<U>(&self, source: Result<T, E>, update: U) -> Result<T, E>
    where
        U: FnMut(T) -> T,
    {
        source.map(update)
    }
}

impl<T, E> Setter<Result<T, E>, E> for ErrValue<T, E> {
    #[inline]
    fn over<U>(&self, source: Result<T, E>, update: U) -> Result<T, E>
    where
        U: FnMut(E) -> E,
    {
        source.map_err(update)
    }
}

impl<L, R> Setter<Either<L, R>, L> for LeftValue<L, R> {
    #[inline]
    fn over<U>(&self, source: Either<L, R>, update: U) -> Either<L, R>
    where
        U: FnMut(L) -> L,
    {
        source.map_left(update)
    }
}

impl<L, R> Setter<Either<L, R>, R> for RightValue<L, R> {
    #[inline]
    fn over<U>(&self, source: Either<L, R>, update: U) -> Either<L, R>
    where
        U: FnMut(R) -> R,
    {
        source.map_right(update)
    }
}
