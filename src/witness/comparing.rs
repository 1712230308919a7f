//! Ordering witnesses.
//!
//! A [`Comparing`] witness is built from exactly two primitives: an
//! [`Equating`] witness and a strict `less_than`. Every other relation is
//! derived from those two, so the derived relations can never disagree with
//! the base pair:
//!
//! ```text
//! less_or_equal(a, b)    == less_than(a, b) || equal(a, b)
//! greater_than(a, b)     == !less_than(a, b)
//! greater_or_equal(a, b) == greater_than(a, b) || equal(a, b)
//! ```
//!
//! `greater_than` is the plain negation of `less_than`, so it holds for equal
//! values too. Use [`Comparing::ordering`] when a strict three-way answer is
//! needed.

use super::equating::Equating;
use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

/// An explicit ordering on `A`.
///
/// # Examples
///
/// ```rust
/// use witnessed::witness::Comparing;
///
/// let by_length = Comparing::<usize>::natural().contramap(|word: &&str| word.len());
/// let mut words = vec!["ccc", "a", "bb"];
/// by_length.sort(&mut words);
///
/// assert_eq!(words, vec!["a", "bb", "ccc"]);
/// assert!(by_length.less_than(&"a", &"bb"));
/// ```
pub struct Comparing<A> {
    equating: Equating<A>,
    less_than: Rc<dyn Fn(&A, &A) -> bool>,
}

impl<A: 'static> Comparing<A> {
    /// Creates a witness from an equality witness and a strict less-than.
    pub fn new<F>(equating: Equating<A>, less_than: F) -> Self
    where
        F: Fn(&A, &A) -> bool + 'static,
    {
        Self {
            equating,
            less_than: Rc::new(less_than),
        }
    }

    /// The equality this ordering was built with.
    #[must_use]
    pub const fn equating(&self) -> &Equating<A> {
        &self.equating
    }

    /// Equality under the underlying [`Equating`] witness.
    #[inline]
    pub fn equal(&self, left: &A, right: &A) -> bool {
        self.equating.equal(left, right)
    }

    /// The strict less-than this ordering was built with.
    #[inline]
    pub fn less_than(&self, left: &A, right: &A) -> bool {
        (self.less_than)(left, right)
    }

    /// `less_than || equal`.
    #[inline]
    pub fn less_or_equal(&self, left: &A, right: &A) -> bool {
        self.less_than(left, right) || self.equal(left, right)
    }

    /// `!less_than`.
    #[inline]
    pub fn greater_than(&self, left: &A, right: &A) -> bool {
        !self.less_than(left, right)
    }

    /// `greater_than || equal`.
    #[inline]
    pub fn greater_or_equal(&self, left: &A, right: &A) -> bool {
        self.greater_than(left, right) || self.equal(left, right)
    }

    /// Three-way comparison: `Less` if `less_than`, `Equal` if `equal`,
    /// otherwise `Greater`.
    pub fn ordering(&self, left: &A, right: &A) -> Ordering {
        if self.less_than(left, right) {
            Ordering::Less
        } else if self.equal(left, right) {
            Ordering::Equal
        } else {
            Ordering::Greater
        }
    }

    /// The same ordering, reversed. Equality is unchanged.
    #[must_use]
    pub fn reversed(self) -> Self {
        let less_than = Rc::clone(&self.less_than);
        Self::new(self.equating, move |left: &A, right: &A| less_than(right, left))
    }

    /// Orders `B`s by ordering their images under `function`.
    #[must_use]
    pub fn contramap<B, F>(self, function: F) -> Comparing<B>
    where
        B: 'static,
        F: Fn(&B) -> A + 'static,
    {
        let function = Rc::new(function);
        let key = Rc::clone(&function);
        let less_than = self.less_than;
        Comparing::new(
            self.equating.contramap(move |value: &B| function(value)),
            move |left: &B, right: &B| less_than(&key(left), &key(right)),
        )
    }

    /// Sorts `values` in place, stably, by [`ordering`](Self::ordering).
    ///
    /// The witness must be a strict weak ordering; otherwise the resulting
    /// order is unspecified and the standard sort may panic.
    pub fn sort(&self, values: &mut [A]) {
        values.sort_by(|left, right| self.ordering(left, right));
    }
}

impl<A: PartialOrd + 'static> Comparing<A> {
    /// The ordering of `PartialOrd`, with `PartialEq` equality.
    #[must_use]
    pub fn natural() -> Self {
        Self::new(Equating::natural(), |left, right| left < right)
    }
}

impl<A> Clone for Comparing<A> {
    fn clone(&self) -> Self {
        Self {
            equating: self.equating.clone(),
            less_than: Rc::clone(&self.less_than),
        }
    }
}

impl<A> fmt::Debug for Comparing<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Comparing").finish_non_exhaustive()
    }
}
