//! Validation state as a tag.
//!
//! A function that needs checked input takes `Validated<A>`; the only way to
//! obtain one is [`validate`]. [`ValidatedTag`] does not implement
//! [`FreelyTagged`], so neither `Tagged::new` nor any other constructing
//! operation accepts it:
//!
//! ```compile_fail
//! use witnessed::tagged::Validated;
//!
//! let forged: Validated<String> = Validated::new("not checked".to_string());
//! ```
//!
//! ```compile_fail
//! use witnessed::tagged::{Unvalidated, Validated, ValidatedTag};
//!
//! let unchecked = Unvalidated::new(3);
//! let forged: Option<Validated<i32>> = unchecked.convert::<ValidatedTag, _, _>(Some);
//! ```
//!
//! ```compile_fail
//! use witnessed::tagged::Validated;
//!
//! let forged: Validated<u32> = "12".parse().unwrap();
//! ```
//!
//! A validated value can still be read, compared, cloned and converted back
//! into an unchecked one.

use super::{FreelyTagged, Tagged};

/// Tag for values that have not been checked.
#[derive(Debug)]
pub enum UnvalidatedTag {}

/// Tag for values that passed a check.
#[derive(Debug)]
pub enum ValidatedTag {}

impl FreelyTagged for UnvalidatedTag {}

/// A value that has not been checked.
pub type Unvalidated<A> = Tagged<UnvalidatedTag, A>;

/// A value that passed a check.
pub type Validated<A> = Tagged<ValidatedTag, A>;

static_assertions::assert_not_impl_any!(
    Validated<u8>: Default, std::str::FromStr, std::ops::Add<Validated<u8>>, std::ops::AddAssign<Validated<u8>>, std::iter::Sum
);
static_assertions::assert_impl_all!(Validated<u8>: Clone, Copy, Ord, std::hash::Hash);

/// Promotes `value` to [`Validated`] when `is_valid` accepts it.
///
/// # Examples
///
/// ```rust
/// use witnessed::tagged::{Unvalidated, validate};
///
/// struct User { name: String, email: String }
///
/// fn is_valid(user: &User) -> bool {
///     !user.name.is_empty() && user.email.contains('@')
/// }
///
/// let valid = Unvalidated::new(User { name: "Test".into(), email: "test@test.com".into() });
/// let no_name = Unvalidated::new(User { name: String::new(), email: "@".into() });
///
/// assert!(validate(valid, is_valid).is_some());
/// assert!(validate(no_name, is_valid).is_none());
/// ```
pub fn validate<A, P>(value: Unvalidated<A>, is_valid: P) -> Option<Validated<A>>
where
    P: FnOnce(&A) -> bool,
{
    let raw = value.into_raw();
    is_valid(&raw).then(|| Tagged::new_unchecked(raw))
}
