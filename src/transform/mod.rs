//! Shape-preserving transformations over containers.
//!
//! Containers here are finite sequences (`Vec`), zero-or-one values
//! (`Option`, `Result`), key-value mappings (`HashMap`, `BTreeMap`) and the
//! two-case sum [`Either`](crate::either::Either).
//!
//! - [`Functor::fmap`] and the lifted [`map`]: transform every element,
//!   keeping length, presence, keys or case
//! - [`Bifunctor::bimap`]: transform both sides of `Either`, `Result` or a
//!   pair, one function per side
//! - [`Partitionable::partition_map`]: route every element left or right,
//!   producing two containers of the same shape; `filter`, `filter_map`,
//!   `partition`, `separate` and `compact` are all derived from it
//! - [`transform_set`]: element-wise transform of a deduplicating set, which
//!   is *not* a functor
//! - [`PredicateSet`]: a set given by its membership test, transformable only
//!   contravariantly
//!
//! # Laws
//!
//! - **Identity**: `map(identity)(c) == c`
//! - **Composition**: `map(g)(map(f)(c)) == map(compose(g, f))(c)`
//!
//! # Examples
//!
//! ```rust
//! use witnessed::either::Either;
//! use witnessed::transform::{Functor, Partitionable};
//!
//! let readings = vec!["12", "oops", "7"];
//! let (failures, numbers): (Vec<&str>, Vec<i32>) = readings.partition_map(|text| {
//!     text.parse::<i32>().map_or(Either::Left(text), Either::Right)
//! });
//!
//! assert_eq!(failures, vec!["oops"]);
//! assert_eq!(numbers.fmap(|n| n * 2), vec![24, 14]);
//! ```

mod bifunctor;
mod functor;
mod higher;
mod partition;
mod set;

pub use bifunctor::Bifunctor;
pub use functor::{Functor, map};
pub use higher::TypeConstructor;
pub use partition::{EitherLike, OptionLike, Partitionable, filter, filtered, partitioned};
pub use set::{PredicateSet, transform_btree_set, transform_set};
