//! Function combinators.
//!
//! Building blocks for point-free code: composing, piping, currying,
//! uncurrying and flipping functions.
//!
//! # Overview
//!
//! - [`compose!`]: compose any number of functions right-to-left
//! - [`pipe!`]: push a value through functions left-to-right
//! - [`curry2!`], [`curry3!`]: turn an n-ary function into a chain of unary ones
//!
//! # Helper Functions
//!
//! - [`identity`], [`constant`], [`with`], [`zurry`]
//! - [`compose()`], [`pipe()`]: two-function composition as plain functions
//! - [`flip`]: swap two curried arguments; [`flip_binary`] for uncurried ones
//! - [`uncurry2`], [`uncurry3`]: inverse of currying
//! - [`fanout`], [`split_pair`]: `(C) -> (A, B)` is the same as `((C) -> A, (C) -> B)`
//! - [`concat`], [`concat_in_place`]: run a list of endomorphisms in order
//!
//! # Examples
//!
//! ```
//! use witnessed::{compose, curry2, pipe};
//! use witnessed::compose::{flip, uncurry2};
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! assert_eq!(compose!(add_one, double)(5), 11);
//! assert_eq!(pipe!(5, double, add_one), 11);
//!
//! let subtract = curry2!(|minuend: i32, subtrahend: i32| minuend - subtrahend);
//! assert_eq!(subtract(10)(3), 7);
//! assert_eq!(flip(subtract)(10)(3), -7);
//!
//! let power = uncurry2(|base: i32| move |exponent: u32| base.pow(exponent));
//! assert_eq!(power(2, 10), 1024);
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Identity**: `compose!(identity, f) == f == compose!(f, identity)`
//! - **Mirror**: `pipe(f, g) == compose(g, f)`
//! - **Curry inverse**: `uncurry2(curry2!(f))(a, b) == f(a, b)`
//! - **Double flip**: `flip(flip(f))(a)(b) == f(a)(b)`

mod compose_macro;
mod curry_macro;
mod pipe_macro;
mod utils;

pub use utils::{
    compose, concat, concat_in_place, constant, fanout, flip, flip_binary, identity, pipe,
    split_pair, uncurry2, uncurry3, with, zurry,
};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::compose;
pub use crate::curry2;
pub use crate::curry3;
pub use crate::pipe;
