//! Equality witnesses.

use std::fmt;
use std::rc::Rc;

/// An explicit equality on `A`.
///
/// The witness is expected to be an equivalence relation (reflexive,
/// symmetric, transitive). Nothing checks this.
///
/// # Examples
///
/// ```rust
/// use witnessed::witness::Equating;
///
/// let case_insensitive = Equating::<String>::natural()
///     .contramap(|text: &String| text.to_lowercase());
///
/// assert!(case_insensitive.equal(&"Tea".to_string(), &"TEA".to_string()));
/// ```
pub struct Equating<A> {
    equal: Rc<dyn Fn(&A, &A) -> bool>,
}

impl<A: 'static> Equating<A> {
    /// Creates a witness from an equality function.
    pub fn new<F>(equal: F) -> Self
    where
        F: Fn(&A, &A) -> bool + 'static,
    {
        Self {
            equal: Rc::new(equal),
        }
    }

    /// Returns `true` if the values are equal under this witness.
    #[inline]
    pub fn equal(&self, left: &A, right: &A) -> bool {
        (self.equal)(left, right)
    }

    /// Negation of [`equal`](Self::equal).
    #[inline]
    pub fn not_equal(&self, left: &A, right: &A) -> bool {
        !self.equal(left, right)
    }

    /// Compares `B`s by comparing their images under `function`.
    #[must_use]
    pub fn contramap<B, F>(self, function: F) -> Equating<B>
    where
        B: 'static,
        F: Fn(&B) -> A + 'static,
    {
        Equating::new(move |left: &B, right: &B| self.equal(&function(left), &function(right)))
    }
}

impl<A: PartialEq + 'static> Equating<A> {
    /// Equality through `PartialEq`.
    #[must_use]
    pub fn natural() -> Self {
        Self::new(|left, right| left == right)
    }
}

impl<A: 'static, B: 'static> Equating<(A, B)> {
    /// Pairs are equal when both components are.
    #[must_use]
    pub fn pair(first: Equating<A>, second: Equating<B>) -> Self {
        Self::new(move |left: &(A, B), right: &(A, B)| {
            first.equal(&left.0, &right.0) && second.equal(&left.1, &right.1)
        })
    }
}

impl<A> Clone for Equating<A> {
    fn clone(&self) -> Self {
        Self {
            equal: Rc::clone(&self.equal),
        }
    }
}

impl<A> fmt::Debug for Equating<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Equating").finish_non_exhaustive()
    }
}
