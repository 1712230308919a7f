//! Units of measure as tags.
//!
//! ```rust
//! use witnessed::tagged::{Celsius, celsius_to_fahrenheit, fahrenheit_to_celsius};
//!
//! let boiling = celsius_to_fahrenheit(Celsius::new(100.0));
//! assert_eq!(boiling.into_raw(), 212.0);
//! assert_eq!(fahrenheit_to_celsius(boiling), Celsius::new(100.0));
//! ```

use super::{FreelyTagged, Tagged};

/// Tag for temperatures in degrees Celsius.
#[derive(Debug)]
pub enum CelsiusTag {}

/// Tag for temperatures in degrees Fahrenheit.
#[derive(Debug)]
pub enum FahrenheitTag {}

/// Tag for money amounts in cents.
#[derive(Debug)]
pub enum CentsTag {}

/// A temperature in degrees Celsius.
pub type Celsius = Tagged<CelsiusTag, f64>;

/// A temperature in degrees Fahrenheit.
pub type Fahrenheit = Tagged<FahrenheitTag, f64>;

/// An amount of money in cents.
pub type Cents = Tagged<CentsTag, i64>;

impl FreelyTagged for CelsiusTag {}
impl FreelyTagged for FahrenheitTag {}
impl FreelyTagged for CentsTag {}

/// `f = c * 9 / 5 + 32`
#[must_use]
pub fn celsius_to_fahrenheit(temperature: Celsius) -> Fahrenheit {
    Tagged::new(temperature.into_raw().mul_add(9.0 / 5.0, 32.0))
}

/// `c = (f - 32) * 5 / 9`
#[must_use]
pub fn fahrenheit_to_celsius(temperature: Fahrenheit) -> Celsius {
    Tagged::new((temperature.into_raw() - 32.0) * 5.0 / 9.0)
}
