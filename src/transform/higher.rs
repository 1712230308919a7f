//! Higher-kinded type emulation through generic associated types.
//!
//! Rust cannot abstract over `Option<_>` or `Vec<_>` as type constructors
//! directly. [`TypeConstructor`] names the element type and lets a container
//! be re-applied to another element type, which is all `fmap` and
//! `partition_map` need.
//!
//! ```rust
//! use witnessed::transform::TypeConstructor;
//! use std::collections::BTreeMap;
//!
//! fn assert_inner<T: TypeConstructor<Inner = u8>>() {}
//!
//! assert_inner::<Option<u8>>();
//! assert_inner::<BTreeMap<String, u8>>();
//! ```

use crate::either::Either;
use std::collections::{BTreeMap, HashMap};

/// A container applied to an element type.
///
/// # Laws
///
/// **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The element type the constructor is currently applied to.
    type Inner;

    /// The same constructor applied to `B`.
    ///
    /// Fixed parts of the container (the error of a `Result`, the left side
    /// of an `Either`, the key and hasher of a map) are kept.
    type WithType<B>: TypeConstructor<Inner = B>;
}

// =============================================================================
// Standard Library Type Implementations
// =============================================================================

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T, E> TypeConstructor for Result<T, E> {
    type Inner = T;
    type WithType<B> = Result<B, E>;
}

impl<T> TypeConstructor for Vec<T> {
    type Inner = T;
    type WithType<B> = Vec<B>;
}

impl<K, V, S> TypeConstructor for HashMap<K, V, S> {
    type Inner = V;
    type WithType<B> = HashMap<K, B, S>;
}

impl<K, V> TypeConstructor for BTreeMap<K, V> {
    type Inner = V;
    type WithType<B> = BTreeMap<K, B>;
}

// Right-biased: the left side is fixed.
impl<L, R> TypeConstructor for Either<L, R> {
    type Inner = R;
    type WithType<B> = Either<L, B>;
}
