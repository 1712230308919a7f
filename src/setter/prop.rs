//! Setters over struct fields.
//!
//! A [`Prop`] is built from a function that borrows the field mutably out of
//! the whole. Both the value-returning [`Setter::over`] and the in-place
//! [`MutSetter::over_in_place`] come from that one accessor, so a field
//! setter works for owned and borrowed wholes alike.
//!
//! # Examples
//!
//! ```
//! use witnessed::prop;
//! use witnessed::setter::{MutSetter, Setter};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Location { name: String }
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct User { id: u32, location: Location }
//!
//! let city = prop!(User, location.name);
//! let user = User { id: 1, location: Location { name: "Brooklyn".to_string() } };
//!
//! let moved = city.set(user, "Los Angeles".to_string());
//! assert_eq!(moved.location.name, "Los Angeles");
//!
//! let mut user = moved;
//! city.over_in_place(&mut user, |name: String| name.to_uppercase());
//! assert_eq!(user.location.name, "LOS ANGELES");
//! ```

use super::functional_setter::{MutSetter, Setter};
use std::fmt;
use std::marker::PhantomData;

/// A setter focusing on one field reached through a mutable accessor.
///
/// The focused value is cloned out of its slot before the update runs, and
/// the update's result is written back. That clone is deep: a setter on a
/// `Vec<Food>` field copies the whole vector on every update. Focus further
/// in (`prop!(User, foods).compose(each())` clones one element at a time), or
/// use [`take_over_in_place`](Self::take_over_in_place) when the field type
/// has a cheap `Default`.
pub struct Prop<S, A, P>
where
    P: Fn(&mut S) -> &mut A,
{
    accessor: P,
    _marker: PhantomData<fn(S) -> A>,
}

impl<S, A, P> Prop<S, A, P>
where
    P: Fn(&mut S) -> &mut A,
{
    /// Creates a field setter from a mutable accessor.
    ///
    /// ```
    /// use witnessed::setter::{Prop, Setter};
    ///
    /// let width = Prop::new(|size: &mut (u32, u32)| &mut size.0);
    /// assert_eq!(width.over((3, 4), |w| w * 10), (30, 4));
    /// ```
    #[must_use]
    pub const fn new(accessor: P) -> Self {
        Self {
            accessor,
            _marker: PhantomData,
        }
    }
}

impl<S, A, P> Prop<S, A, P>
where
    P: Fn(&mut S) -> &mut A,
    A: Default,
{
    /// Updates the field in place by moving it out instead of cloning it.
    ///
    /// The slot holds `A::default()` while the update runs, and keeps it if
    /// the update panics.
    ///
    /// ```
    /// use witnessed::prop;
    ///
    /// struct Inbox { messages: Vec<String> }
    ///
    /// let mut inbox = Inbox { messages: vec!["hi".to_string()] };
    /// prop!(Inbox, messages).take_over_in_place(&mut inbox, |mut messages: Vec<String>| {
    ///     messages.push("bye".to_string());
    ///     messages
    /// });
    /// assert_eq!(inbox.messages, vec!["hi", "bye"]);
    /// ```
    pub fn take_over_in_place<U>(&self, source: &mut S, update: U)
    where
        U: FnOnce(A) -> A,
    {
        let slot = (self.accessor)(source);
        *slot = update(std::mem::take(slot));
    }
}

impl<S, A, P> Setter<S, A> for Prop<S, A, P>
where
    P: Fn(&mut S) -> &mut A,
    A: Clone,
{
    fn over<U>(&self, mut source: S, update: U) -> S
    where
        U: FnMut(A) -> A,
    {
        self.over_in_place(&mut source, update);
        source
    }
}

impl<S, A, P> MutSetter<S, A> for Prop<S, A, P>
where
    P: Fn(&mut S) -> &mut A,
    A: Clone,
{
    fn over_in_place<U>(&self, source: &mut S, mut update: U)
    where
        U: FnMut(A) -> A,
    {
        let slot = (self.accessor)(source);
        *slot = update(slot.clone());
    }
}

impl<S, A, P> Clone for Prop<S, A, P>
where
    P: Fn(&mut S) -> &mut A + Clone,
{
    fn clone(&self) -> Self {
        Self::new(self.accessor.clone())
    }
}

impl<S, A, P> fmt::Debug for Prop<S, A, P>
where
    P: Fn(&mut S) -> &mut A,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Prop").finish_non_exhaustive()
    }
}

/// Builds a [`Prop`] setter for a field path of a type.
///
/// The path may go through nested fields and tuple positions.
///
/// # Syntax
///
/// ```text
/// prop!(Type, field)
/// prop!(Type, field.nested.0)
/// ```
///
/// # Examples
///
/// ```
/// use witnessed::prop;
/// use witnessed::setter::Setter;
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Food { name: String }
///
/// let food = prop!(Food, name).over(Food { name: "bread".to_string() }, |name| name + "!");
/// assert_eq!(food.name, "bread!");
/// ```
#[macro_export]
macro_rules! prop {
    ($source_type:ty, $($field:tt).+) => {
        $crate::setter::Prop::new(|source: &mut $source_type| &mut source $(.$field)+)
    };
}
