//! A light whose on/off state lives in its type.
//!
//! Changing the color of a light that is off is a type error rather than a
//! runtime check:
//!
//! ```compile_fail
//! use witnessed::tagged::{Color, Light, Off, change_color};
//!
//! let dark: Light<Off> = Light::new(Color::WHITE);
//! change_color(dark, Color::new(255, 0, 0));
//! ```

use super::{FreelyTagged, Tagged};

/// An RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Color {
    /// Red channel.
    pub red: u8,
    /// Green channel.
    pub green: u8,
    /// Blue channel.
    pub blue: u8,
}

impl Color {
    /// Full white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Creates a color from its channels.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

/// State tag: the light is on.
#[derive(Debug)]
pub enum On {}

/// State tag: the light is off.
#[derive(Debug)]
pub enum Off {}

impl FreelyTagged for On {}
impl FreelyTagged for Off {}

/// A light of some color in the state `State`.
pub type Light<State> = Tagged<State, Color>;

/// Switches a light on, keeping its color.
#[must_use]
pub fn turn_on(light: Light<Off>) -> Light<On> {
    Tagged::new(light.into_raw())
}

/// Switches a light off, keeping its color.
#[must_use]
pub fn turn_off(light: Light<On>) -> Light<Off> {
    Tagged::new(light.into_raw())
}

/// Changes the color of a light that is on.
///
/// ```rust
/// use witnessed::tagged::{Color, Light, On, change_color, turn_off};
///
/// let lamp: Light<On> = Light::new(Color::WHITE);
/// let red = change_color(lamp, Color::new(255, 0, 0));
///
/// assert_eq!(turn_off(red).raw().green, 0);
/// ```
#[must_use]
pub fn change_color(light: Light<On>, color: Color) -> Light<On> {
    light.map(|_| color)
}
