//! # witnessed
//!
//! Functional combinators, composable setters, value-witness records and
//! phantom-tagged values for Rust.
//!
//! ## Overview
//!
//! - **Combinators**: `compose!`, `pipe!`, `curry2!`/`curry3!`, `uncurry`, `flip`, `identity`
//! - **Container transforms**: `map`, `filter`, `partition_map`, `compact` over
//!   `Vec`, `Option`, `HashMap`, `BTreeMap` and `Either`
//! - **Setters**: functional setters for struct fields and collection elements,
//!   getters, and case lenses for enum variants
//! - **Witnesses**: equality, ordering, combination, description, empty values
//!   and raw-value conversion as explicit values instead of trait impls
//! - **Tagged values**: `Tagged<Tag, Raw>`, a zero-cost nominal wrapper
//!
//! ## Feature Flags
//!
//! - `compose`: Function combinators
//! - `transform`: Functor and partition operations over containers
//! - `setter`: Setters, getters and case lenses
//! - `witness`: Witness records
//! - `tagged`: Phantom-tagged wrapper
//! - `derive`: `#[derive(Setters)]` and `#[derive(CaseLenses)]`
//! - `serde`: Transparent serialization of tagged values and `Either`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use witnessed::prelude::*;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Food { name: String }
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Location { name: String }
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct User { favorite_foods: Vec<Food>, location: Location }
//!
//! let user = User {
//!     favorite_foods: vec![Food { name: "Tacos".to_string() }],
//!     location: Location { name: "Brooklyn".to_string() },
//! };
//!
//! let healthier = prop!(User, favorite_foods)
//!     .compose(each())
//!     .compose(prop!(Food, name))
//!     .over(user, |name: String| format!("Healthy {name}"));
//!
//! assert_eq!(healthier.favorite_foods[0].name, "Healthy Tacos");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use witnessed::prelude::*;
/// ```
pub mod prelude {
    pub use crate::either::Either;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "transform")]
    pub use crate::transform::*;

    #[cfg(feature = "setter")]
    pub use crate::setter::*;

    #[cfg(feature = "witness")]
    pub use crate::witness::*;

    #[cfg(feature = "tagged")]
    pub use crate::tagged::*;

    #[cfg(feature = "derive")]
    pub use crate::derive::*;
}

pub mod either;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "transform")]
pub mod transform;

#[cfg(feature = "setter")]
pub mod setter;

#[cfg(feature = "witness")]
pub mod witness;

#[cfg(feature = "tagged")]
pub mod tagged;

/// Derive macros generating setters and case lenses.
///
/// See [`witnessed_derive`] for the generated method shapes.
#[cfg(feature = "derive")]
pub mod derive {
    pub use witnessed_derive::{CaseLenses, Setters};
}
