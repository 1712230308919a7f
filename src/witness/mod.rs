//! Witness records: capabilities as explicit values.
//!
//! A trait impl gives a type exactly one way to be compared, combined or
//! described. A witness record is a plain value holding that operation
//! instead, so a type can have several (sum *and* product, ascending *and*
//! descending), and a witness can be adapted to another type with
//! `contramap`.
//!
//! | Witness                 | Operation                                |
//! |-------------------------|------------------------------------------|
//! | [`Describing<A>`]       | `describe(&A) -> String`                 |
//! | [`Combining<A>`]        | `combine(A, A) -> A`                     |
//! | [`EmptyInitializing<A>`]| `create() -> A`                          |
//! | [`Equating<A>`]         | `equal(&A, &A) -> bool`                  |
//! | [`Comparing<A>`]        | equality plus strict `less_than`         |
//! | [`RawRepresenting<V, R>`]| `convert(R) -> Option<V>`, `raw_value(&V) -> R` |
//!
//! Witnesses share their functions through `Rc`, so cloning is cheap and
//! they are not `Send`.
//!
//! # Examples
//!
//! ```rust
//! use witnessed::witness::{Combining, EmptyInitializing, fold_with};
//!
//! let words = vec!["Hello".to_string(), " ".to_string(), "Blob".to_string()];
//! let sentence = fold_with(words, &EmptyInitializing::default_value(), &Combining::concat());
//!
//! assert_eq!(sentence, "Hello Blob");
//! ```

mod combining;
mod comparing;
mod describing;
mod empty;
mod equating;
mod raw;

pub use combining::{Combining, SharedFn};
pub use comparing::Comparing;
pub use describing::{DefaultDescribing, Describing, describe_tagged};
pub use empty::{EmptyInitializing, fold_with};
pub use equating::Equating;
pub use raw::{RawRepresentable, RawRepresenting, UnrepresentableRawValue};
