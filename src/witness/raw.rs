//! Raw-value conversion witnesses.
//!
//! A [`RawRepresenting`] witness pairs a fallible conversion from a raw
//! representation with a total conversion back to it. The two directions
//! are independent functions: nothing enforces that
//! `convert(raw_value(v)) == Some(v)`, and witnesses for which it fails
//! (lossy formatting, normalizing parsers) are legitimate.

use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

/// Types with a canonical raw representation.
///
/// # Examples
///
/// ```rust
/// use witnessed::witness::{RawRepresentable, RawRepresenting};
///
/// #[derive(Clone, Copy, Debug, PartialEq)]
/// enum Foo { Bar, Baz }
///
/// impl RawRepresentable for Foo {
///     type Raw = String;
///
///     fn from_raw(raw: String) -> Option<Self> {
///         match raw.as_str() {
///             "bar" => Some(Self::Bar),
///             "baz" => Some(Self::Baz),
///             _ => None,
///         }
///     }
///
///     fn raw_value(&self) -> String {
///         match self {
///             Self::Bar => "bar".to_string(),
///             Self::Baz => "baz".to_string(),
///         }
///     }
/// }
///
/// let witness = RawRepresenting::<Foo, String>::raw_representable();
/// assert_eq!(witness.raw_value(&Foo::Bar), "bar");
/// assert_eq!(witness.convert("baz".to_string()), Some(Foo::Baz));
/// assert_eq!(witness.convert("qux".to_string()), None);
/// ```
pub trait RawRepresentable: Sized {
    /// The raw representation.
    type Raw;

    /// Converts from the raw representation, if it denotes a value.
    fn from_raw(raw: Self::Raw) -> Option<Self>;

    /// Converts to the raw representation.
    fn raw_value(&self) -> Self::Raw;
}

/// A raw value that the witness could not convert.
///
/// ```rust
/// use witnessed::witness::RawRepresenting;
///
/// let numbers = RawRepresenting::<u8, String>::parsing();
/// let error = numbers.try_convert("300".to_string()).unwrap_err();
///
/// assert_eq!(error.raw(), "300");
/// assert_eq!(error.to_string(), "raw value \"300\" has no representation");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnrepresentableRawValue<R> {
    raw: R,
}

impl<R> UnrepresentableRawValue<R> {
    /// Wraps the rejected raw value.
    pub const fn new(raw: R) -> Self {
        Self { raw }
    }

    /// The rejected raw value.
    pub const fn raw(&self) -> &R {
        &self.raw
    }

    /// Returns the rejected raw value.
    pub fn into_raw(self) -> R {
        self.raw
    }
}

impl<R: fmt::Debug> fmt::Display for UnrepresentableRawValue<R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "raw value {:?} has no representation", self.raw)
    }
}

impl<R: fmt::Debug> std::error::Error for UnrepresentableRawValue<R> {}

/// An explicit conversion between values `V` and raw values `R`.
pub struct RawRepresenting<V, R> {
    convert: Rc<dyn Fn(R) -> Option<V>>,
    raw_value: Rc<dyn Fn(&V) -> R>,
}

impl<V: 'static, R: 'static> RawRepresenting<V, R> {
    /// Creates a witness from its two directions.
    pub fn new<C, F>(convert: C, raw_value: F) -> Self
    where
        C: Fn(R) -> Option<V> + 'static,
        F: Fn(&V) -> R + 'static,
    {
        Self {
            convert: Rc::new(convert),
            raw_value: Rc::new(raw_value),
        }
    }

    /// Converts a raw value, if it denotes a value.
    #[inline]
    pub fn convert(&self, raw: R) -> Option<V> {
        (self.convert)(raw)
    }

    /// Converts a raw value, reporting which raw value was rejected.
    ///
    /// # Errors
    ///
    /// Returns [`UnrepresentableRawValue`] holding `raw` when the conversion
    /// fails.
    pub fn try_convert(&self, raw: R) -> Result<V, UnrepresentableRawValue<R>>
    where
        R: Clone,
    {
        self.convert(raw.clone())
            .ok_or_else(|| UnrepresentableRawValue::new(raw))
    }

    /// Converts a value to its raw representation.
    #[inline]
    pub fn raw_value(&self, value: &V) -> R {
        (self.raw_value)(value)
    }

    /// The witness given by a [`RawRepresentable`] impl.
    #[must_use]
    pub fn raw_representable() -> Self
    where
        V: RawRepresentable<Raw = R>,
    {
        Self::new(V::from_raw, V::raw_value)
    }
}

impl<V> RawRepresenting<V, String>
where
    V: FromStr + fmt::Display + 'static,
{
    /// Parses from and formats to text.
    ///
    /// ```rust
    /// use witnessed::witness::RawRepresenting;
    ///
    /// let integers = RawRepresenting::<i32, String>::parsing();
    /// assert_eq!(integers.convert("42".to_string()), Some(42));
    /// assert_eq!(integers.raw_value(&1), "1");
    /// ```
    #[must_use]
    pub fn parsing() -> Self {
        Self::new(|raw: String| raw.parse().ok(), ToString::to_string)
    }
}

#[cfg(feature = "tagged")]
impl<Tag, R> RawRepresenting<crate::tagged::Tagged<Tag, R>, R>
where
    Tag: crate::tagged::FreelyTagged + 'static,
    R: Clone + 'static,
{
    /// Every raw value denotes a tagged value; the tag is added or dropped.
    #[must_use]
    pub fn tagged() -> Self {
        Self::new(
            |raw: R| Some(crate::tagged::Tagged::new(raw)),
            |value: &crate::tagged::Tagged<Tag, R>| value.raw().clone(),
        )
    }
}

impl<V, R> Clone for RawRepresenting<V, R> {
    fn clone(&self) -> Self {
        Self {
            convert: Rc::clone(&self.convert),
            raw_value: Rc::clone(&self.raw_value),
        }
    }
}

impl<V, R> fmt::Debug for RawRepresenting<V, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("RawRepresenting")
            .finish_non_exhaustive()
    }
}
