//! Functional setters, getters and case lenses.
//!
//! This module turns "where a value lives" into a first-class value:
//!
//! - [`Setter`]: how to update every `A` inside an `S`, given an update for
//!   one `A`. Setters compose outer-to-inner, so a deeply nested update is a
//!   chain of small, reusable pieces.
//! - [`MutSetter`]: the same update applied to a `&mut S`.
//! - [`Getter`]: how to read an `A` out of an `&S`, composable with other
//!   getters, with functors ([`Getter::then_map`]) and with case lenses.
//! - [`CaseLens`]: the enum counterpart of a field accessor. It extracts the
//!   payload of one variant (partially) and embeds a payload back into that
//!   variant (totally).
//!
//! # Laws
//!
//! For every setter:
//!
//! ```text
//! setter.over(whole, |part| part) == whole
//! setter.over(setter.over(whole, f), g) == setter.over(whole, |part| g(f(part)))
//! ```
//!
//! For every case lens:
//!
//! ```text
//! lens.extract(lens.embed(value)) == Some(value)
//! lens.try_extract(whole) == Err(whole)  // when `whole` is another case
//! ```
//!
//! # Examples
//!
//! ```
//! use witnessed::prelude::*;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Food { name: String }
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct User { name: String, favorite_foods: Vec<Food> }
//!
//! let user = User {
//!     name: "Blob".to_string(),
//!     favorite_foods: vec![
//!         Food { name: "Tacos".to_string() },
//!         Food { name: "Nachos".to_string() },
//!     ],
//! };
//!
//! let food_names = prop!(User, favorite_foods)
//!     .compose(each())
//!     .compose(prop!(Food, name));
//!
//! let shouted = food_names.over(user, |name: String| name.to_uppercase());
//! assert_eq!(shouted.favorite_foods[1].name, "NACHOS");
//!
//! // Filtering is an update like any other.
//! let only_tacos = prop!(User, favorite_foods)
//!     .over(shouted, |foods: Vec<Food>| foods.filter(|food| food.name == "TACOS"));
//! assert_eq!(only_tacos.favorite_foods.len(), 1);
//! ```

/// Declares a field-less optic type that remembers the types it works on.
macro_rules! marker_optic {
    ($(#[$meta:meta])* $name:ident<$($param:ident),+>) => {
        $(#[$meta])*
        #[allow(unused_parens)]
        pub struct $name<$($param),+> {
            _whole: ::std::marker::PhantomData<fn($($param),+) -> ($($param),+)>,
        }

        impl<$($param),+> $name<$($param),+> {
            const fn new() -> Self {
                Self {
                    _whole: ::std::marker::PhantomData,
                }
            }
        }

        impl<$($param),+> Clone for $name<$($param),+> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<$($param),+> Copy for $name<$($param),+> {}

        impl<$($param),+> Default for $name<$($param),+> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<$($param),+> ::std::fmt::Debug for $name<$($param),+> {
            fn fmt(&self, formatter: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                formatter.write_str(stringify!($name))
            }
        }
    };
}

mod case_lens;
mod functional_setter;
mod getter;
mod prop;
mod standard;

pub use case_lens::{
    CaseLens, CaseSetter, ComposedCaseLens, EitherCase, ErrCase, FunctionCaseLens, LeftCase,
    OkCase, RightCase, SomeCase, either_case, err_case, left_case, ok_case, right_case,
    some_case,
};
pub use functional_setter::{ComposedSetter, FunctionSetter, MutSetter, Setter};
pub use getter::{CaseGetter, ComposedGetter, FunctionGetter, Getter, MappedGetter, ThroughOk};
pub use prop::Prop;
pub use standard::{
    Each, Element, ErrValue, First, Index, Key, KeyIfExists, LeftValue, OkValue, RightValue,
    Second, each, element, err, first, index, key, key_if_exists, left, ok, right, second,
};

pub use crate::{case_lens, getter, prop};
