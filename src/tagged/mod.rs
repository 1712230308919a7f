//! Phantom-tagged values.
//!
//! [`Tagged<Tag, Raw>`] is a `Raw` value carrying a compile-time-only `Tag`.
//! Two tagged types with the same raw type but different tags are different
//! types: an email address cannot be passed where a user name is expected,
//! and Celsius cannot be added to Fahrenheit.
//!
//! Every trait the raw type offers (equality, ordering, hashing, arithmetic,
//! formatting, parsing) is offered by the tagged type. Operations that only
//! read or compare are bounded on `Raw` alone. Operations that produce a
//! tagged value from an arbitrary raw value (`new`, `map`, `raw_mut`,
//! `Default`, `FromStr`, arithmetic, deserializing) also require the tag to
//! implement [`FreelyTagged`]. Tags that certify something about the value,
//! such as [`ValidatedTag`], do not implement it, so their values can only
//! come from the function that checks them. Uninhabited enums make good
//! tags.
//!
//! # Examples
//!
//! ```rust
//! use witnessed::tagged::{FreelyTagged, Tagged};
//!
//! enum EmailTag {}
//! enum NameTag {}
//!
//! impl FreelyTagged for EmailTag {}
//! impl FreelyTagged for NameTag {}
//!
//! type Email = Tagged<EmailTag, String>;
//! type Name = Tagged<NameTag, String>;
//!
//! fn send_welcome(to: &Email, name: &Name) -> String {
//!     format!("to {to}: hello {name}")
//! }
//!
//! let email: Email = "blob@example.com".parse().unwrap();
//! let name = Name::new("Blob".to_string());
//!
//! assert_eq!(send_welcome(&email, &name), "to blob@example.com: hello Blob");
//! ```
//!
//! Mixing tags does not compile:
//!
//! ```compile_fail
//! use witnessed::tagged::{FreelyTagged, Tagged};
//!
//! enum EmailTag {}
//! enum NameTag {}
//!
//! impl FreelyTagged for EmailTag {}
//! impl FreelyTagged for NameTag {}
//!
//! let email: Tagged<EmailTag, String> = Tagged::new("a@b.c".to_string());
//! let name: Tagged<NameTag, String> = email;
//! ```
//!
//! ```compile_fail
//! use witnessed::tagged::units::{Celsius, Fahrenheit};
//!
//! let total = Celsius::new(1.0) + Fahrenheit::new(1.0);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::Sum;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

pub mod light;
pub mod units;
pub mod validation;

pub use light::{Color, Light, Off, On, change_color, turn_off, turn_on};
pub use units::{
    Celsius, CelsiusTag, Cents, CentsTag, Fahrenheit, FahrenheitTag, celsius_to_fahrenheit,
    fahrenheit_to_celsius,
};
pub use validation::{Unvalidated, UnvalidatedTag, Validated, ValidatedTag, validate};

/// Tags whose values may be built from any raw value.
///
/// Implement it for plain distinguishing tags (identifiers, units, states).
/// Leave it off tags that promise a checked property of the raw value; values
/// under such a tag are produced only by crate functions that perform the
/// check, like [`validate`].
///
/// ```rust
/// use witnessed::tagged::{FreelyTagged, Tagged};
///
/// enum OrderTag {}
/// impl FreelyTagged for OrderTag {}
///
/// let order = Tagged::<OrderTag, u64>::new(7);
/// assert_eq!(order.map(|id| id + 1).into_raw(), 8);
/// ```
pub trait FreelyTagged {}

impl FreelyTagged for () {}

/// A `Raw` value distinguished at compile time by `Tag`.
///
/// The representation is exactly that of `Raw`; the tag is a zero-sized
/// marker that never affects auto traits or layout.
#[repr(transparent)]
pub struct Tagged<Tag, Raw> {
    raw: Raw,
    _tag: PhantomData<fn() -> Tag>,
}

static_assertions::assert_eq_size!(Tagged<(), u64>, u64);
static_assertions::assert_eq_size!(Tagged<(), String>, String);
static_assertions::assert_impl_all!(Tagged<std::rc::Rc<()>, u8>: Send, Sync, Copy);
static_assertions::assert_not_impl_any!(Tagged<(), u8>: From<Tagged<u8, u8>>);

impl<Tag, Raw> Tagged<Tag, Raw> {
    /// Tags a raw value without any check on `Tag`.
    #[inline]
    pub(crate) const fn new_unchecked(raw: Raw) -> Self {
        Self {
            raw,
            _tag: PhantomData,
        }
    }

    /// Borrows the raw value.
    #[inline]
    pub const fn raw(&self) -> &Raw {
        &self.raw
    }

    /// Returns the raw value, dropping the tag.
    #[inline]
    pub fn into_raw(self) -> Raw {
        self.raw
    }

    /// Moves the value under another tag, if `function` accepts it.
    ///
    /// This is the only way to change a tag short of unwrapping the raw
    /// value; the conversion function decides which values carry over.
    ///
    /// ```rust
    /// use witnessed::tagged::{FreelyTagged, Tagged};
    ///
    /// enum Raw {}
    /// enum Positive {}
    /// impl FreelyTagged for Raw {}
    /// impl FreelyTagged for Positive {}
    ///
    /// let checked = Tagged::<Raw, i32>::new(5).convert::<Positive, _, _>(|n| (n > 0).then_some(n));
    /// assert_eq!(checked.map(Tagged::into_raw), Some(5));
    /// ```
    #[inline]
    pub fn convert<NewTag, NewRaw, F>(self, function: F) -> Option<Tagged<NewTag, NewRaw>>
    where
        NewTag: FreelyTagged,
        F: FnOnce(Raw) -> Option<NewRaw>,
    {
        function(self.raw).map(Tagged::new_unchecked)
    }
}

impl<Tag: FreelyTagged, Raw> Tagged<Tag, Raw> {
    /// Tags a raw value.
    #[inline]
    pub const fn new(raw: Raw) -> Self {
        Self::new_unchecked(raw)
    }

    /// Mutably borrows the raw value.
    #[inline]
    pub const fn raw_mut(&mut self) -> &mut Raw {
        &mut self.raw
    }

    /// Transforms the raw value, keeping the tag.
    ///
    /// ```rust
    /// use witnessed::tagged::Cents;
    ///
    /// let price = Cents::new(250);
    /// assert_eq!(price.map(|cents| cents * 2), Cents::new(500));
    /// ```
    #[inline]
    pub fn map<NewRaw, F>(self, function: F) -> Tagged<Tag, NewRaw>
    where
        F: FnOnce(Raw) -> NewRaw,
    {
        Tagged::new(function(self.raw))
    }
}

// =============================================================================
// Comparison and Hashing
// =============================================================================

impl<Tag, Raw: Clone> Clone for Tagged<Tag, Raw> {
    #[inline]
    fn clone(&self) -> Self {
        Self::new_unchecked(self.raw.clone())
    }
}

impl<Tag, Raw: Copy> Copy for Tagged<Tag, Raw> {}

impl<Tag, Raw: PartialEq> PartialEq for Tagged<Tag, Raw> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<Tag, Raw: Eq> Eq for Tagged<Tag, Raw> {}

impl<Tag, Raw: PartialOrd> PartialOrd for Tagged<Tag, Raw> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.raw.partial_cmp(&other.raw)
    }
}

impl<Tag, Raw: Ord> Ord for Tagged<Tag, Raw> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.raw.cmp(&other.raw)
    }
}

impl<Tag, Raw: Hash> Hash for Tagged<Tag, Raw> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

// =============================================================================
// Formatting and Parsing
// =============================================================================

impl<Tag, Raw: fmt::Debug> fmt::Debug for Tagged<Tag, Raw> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Tagged").field(&self.raw).finish()
    }
}

impl<Tag, Raw: fmt::Display> fmt::Display for Tagged<Tag, Raw> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.raw, formatter)
    }
}

impl<Tag: FreelyTagged, Raw: Default> Default for Tagged<Tag, Raw> {
    fn default() -> Self {
        Self::new(Raw::default())
    }
}

impl<Tag: FreelyTagged, Raw: FromStr> FromStr for Tagged<Tag, Raw> {
    type Err = Raw::Err;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        text.parse().map(Self::new)
    }
}

// =============================================================================
// Arithmetic
// =============================================================================

impl<Tag: FreelyTagged, Raw: Add<Output = Raw>> Add for Tagged<Tag, Raw> {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.raw + other.raw)
    }
}

impl<Tag: FreelyTagged, Raw: Sub<Output = Raw>> Sub for Tagged<Tag, Raw> {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.raw - other.raw)
    }
}

impl<Tag: FreelyTagged, Raw: Mul<Output = Raw>> Mul for Tagged<Tag, Raw> {
    type Output = Self;

    #[inline]
    fn mul(self, other: Self) -> Self {
        Self::new(self.raw * other.raw)
    }
}

impl<Tag: FreelyTagged, Raw: Neg<Output = Raw>> Neg for Tagged<Tag, Raw> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.raw)
    }
}

impl<Tag: FreelyTagged, Raw: AddAssign> AddAssign for Tagged<Tag, Raw> {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.raw += other.raw;
    }
}

impl<Tag: FreelyTagged, Raw: SubAssign> SubAssign for Tagged<Tag, Raw> {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.raw -= other.raw;
    }
}

impl<Tag: FreelyTagged, Raw: MulAssign> MulAssign for Tagged<Tag, Raw> {
    #[inline]
    fn mul_assign(&mut self, other: Self) {
        self.raw *= other.raw;
    }
}

impl<Tag: FreelyTagged, Raw: Sum> Sum for Tagged<Tag, Raw> {
    fn sum<I: Iterator<Item = Self>>(iterator: I) -> Self {
        Self::new(iterator.map(Self::into_raw).sum())
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<Tag, Raw: serde::Serialize> serde::Serialize for Tagged<Tag, Raw> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.raw.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, Tag: FreelyTagged, Raw: serde::Deserialize<'de>> serde::Deserialize<'de> for Tagged<Tag, Raw> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Raw::deserialize(deserializer).map(Self::new)
    }
}
