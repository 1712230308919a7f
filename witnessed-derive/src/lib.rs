//! Derive macros for witnessed setters and case lenses.
//!
//! # Available Derive Macros
//!
//! - [`Setters`]: one in-place setter per named struct field
//! - [`CaseLenses`]: one case lens per enum variant
//!
//! # Example: Setters
//!
//! ```rust,ignore
//! use witnessed::derive::Setters;
//! use witnessed::setter::Setter;
//!
//! #[derive(Clone, Setters)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! // Generated methods:
//! // - Point::x_prop() -> impl MutSetter<Point, i32>
//! // - Point::y_prop() -> impl MutSetter<Point, i32>
//!
//! let moved = Point::x_prop().over(Point { x: 1, y: 2 }, |x| x + 10);
//! assert_eq!(moved.x, 11);
//! ```
//!
//! # Example: Case Lenses
//!
//! ```rust,ignore
//! use witnessed::derive::CaseLenses;
//! use witnessed::setter::CaseLens;
//!
//! #[derive(CaseLenses)]
//! enum Shape {
//!     Circle(f64),
//!     Rectangle(f64, f64),
//! }
//!
//! // Generated methods:
//! // - Shape::circle_case() -> impl CaseLens<Shape, f64>
//! // - Shape::rectangle_case() -> impl CaseLens<Shape, (f64, f64)>
//!
//! assert_eq!(Shape::circle_case().extract(Shape::Circle(5.0)), Some(5.0));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod case_lenses;
mod setters;

use proc_macro::TokenStream;

/// Derive macro generating a setter for each named struct field.
///
/// For each field `foo` of type `T`, generates:
///
/// ```rust,ignore
/// impl StructName {
///     pub fn foo_prop() -> impl MutSetter<StructName, T> + Clone where T: Clone { ... }
/// }
/// ```
///
/// The setter updates the field in place and works both on owned values
/// (`over`, `set`) and through `&mut` (`over_in_place`, `set_in_place`).
/// Field types must be `Clone` for the setter to be usable.
///
/// # Requirements
///
/// - The struct must have named fields (not a tuple or unit struct)
///
/// # Generics
///
/// Generic structs are supported; call the method on the concrete type:
///
/// ```rust,ignore
/// #[derive(Setters)]
/// struct Container<T> {
///     value: T,
/// }
///
/// let doubled = Container::<i32>::value_prop().over(Container { value: 21 }, |v| v * 2);
/// assert_eq!(doubled.value, 42);
/// ```
#[proc_macro_derive(Setters)]
pub fn derive_setters(input: TokenStream) -> TokenStream {
    setters::derive_setters_impl(input)
}

/// Derive macro generating a case lens for each enum variant.
///
/// The method name is `{variant_name_snake_case}_case()`.
///
/// # Variant Types
///
/// - **Unit variants** (e.g., `Empty`): `impl CaseLens<Enum, ()>`
/// - **Single-field tuple variants** (e.g., `Some(T)`): `impl CaseLens<Enum, T>`
/// - **Multi-field tuple variants** (e.g., `Point(i32, i32)`): `impl CaseLens<Enum, (i32, i32)>`
/// - **Struct variants** (e.g., `Click { x: i32, y: i32 }`): the fields as a
///   tuple in definition order
///
/// # Example
///
/// ```rust,ignore
/// use witnessed::derive::CaseLenses;
/// use witnessed::setter::CaseLens;
///
/// #[derive(Debug, PartialEq, CaseLenses)]
/// enum Event {
///     KeyPress(char),
///     Click { x: i32, y: i32 },
///     Quit,
/// }
///
/// assert_eq!(Event::click_case().extract(Event::Click { x: 1, y: 2 }), Some((1, 2)));
/// assert_eq!(Event::key_press_case().embed('q'), Event::KeyPress('q'));
/// assert!(Event::quit_case().matches(&Event::Quit));
/// ```
#[proc_macro_derive(CaseLenses)]
pub fn derive_case_lenses(input: TokenStream) -> TokenStream {
    case_lenses::derive_case_lenses_impl(input)
}
