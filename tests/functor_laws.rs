#![cfg(feature = "transform")]
//! Property-based tests for Functor and Partitionable laws.
//!
//! ## Functor Laws
//! - **Identity**: `fa.fmap(|x| x) == fa`
//! - **Composition**: `fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))`
//!
//! ## Partition Laws
//! - **Conservation**: every element lands in exactly one side
//! - **Filter/Partition agreement**: `filter(p) == partition(p).1`
//!
//! ## Bifunctor Laws
//! - **Identity**: `bimap(|a| a, |b| b) == id`
//! - **Composition**: `bimap(f1, g1).bimap(f2, g2) == bimap(f2 . f1, g2 . g1)`
//! - **Consistency**: `bimap(f, g) == first(f).second(g)`

use proptest::prelude::*;
use std::collections::{BTreeMap, HashMap};
use witnessed::either::Either;
use witnessed::transform::{Bifunctor, Functor, Partitionable, filter, map};

// =============================================================================
// Functor Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_vec_identity(values in prop::collection::vec(any::<i32>(), 0..32)) {
        prop_assert_eq!(values.clone().fmap(|x| x), values);
    }

    #[test]
    fn prop_vec_composition(values in prop::collection::vec(any::<i32>(), 0..32)) {
        let f = |n: i32| i64::from(n) * 2;
        let g = |n: i64| n.to_string();

        prop_assert_eq!(values.clone().fmap(f).fmap(g), values.fmap(|x| g(f(x))));
    }

    #[test]
    fn prop_option_laws(value in any::<Option<i16>>()) {
        let f = |n: i16| i32::from(n) + 1;
        let g = |n: i32| n % 7;

        prop_assert_eq!(value.fmap(|x| x), value);
        prop_assert_eq!(value.fmap(f).fmap(g), value.fmap(|x| g(f(x))));
    }

    #[test]
    fn prop_result_keeps_error(value in any::<i32>(), error in ".*") {
        let failed: Result<i32, String> = Err(error.clone());

        prop_assert_eq!(failed.fmap(|n| n.wrapping_add(1)), Err(error));
        prop_assert_eq!(Ok::<i32, String>(value).fmap(|n| n.wrapping_add(1)), Ok(value.wrapping_add(1)));
    }

    #[test]
    fn prop_btree_map_keeps_keys(entries in prop::collection::btree_map(any::<u8>(), any::<i32>(), 0..16)) {
        let mapped = entries.clone().fmap(|n| n.wrapping_mul(3));

        prop_assert!(mapped.keys().eq(entries.keys()));
        prop_assert_eq!(entries.clone().fmap(|x| x), entries);
    }

    #[test]
    fn prop_hash_map_keeps_keys(entries in prop::collection::hash_map(any::<u8>(), any::<i32>(), 0..16)) {
        let mapped: HashMap<u8, bool> = entries.clone().fmap(|n| n > 0);

        prop_assert_eq!(mapped.len(), entries.len());
        for (key, value) in &entries {
            prop_assert_eq!(mapped.get(key), Some(&(*value > 0)));
        }
    }

    #[test]
    fn prop_either_maps_right_only(value in any::<i32>(), left in any::<bool>()) {
        let either: Either<i32, i32> = if left { Either::Left(value) } else { Either::Right(value) };
        let mapped = either.clone().fmap(|n| n.wrapping_add(1));

        if left {
            prop_assert_eq!(mapped, Either::Left(value));
        } else {
            prop_assert_eq!(mapped, Either::Right(value.wrapping_add(1)));
        }
    }

    #[test]
    fn prop_free_map_matches_fmap(values in prop::collection::vec(any::<u16>(), 0..16)) {
        let to_u32 = map(|n: u16| u32::from(n) + 1);

        prop_assert_eq!(to_u32(values.clone()), values.fmap(|n| u32::from(n) + 1));
    }
}

// =============================================================================
// Partition Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_partition_conserves_elements(values in prop::collection::vec(any::<i32>(), 0..32)) {
        let (odd, even) = values.clone().partition(|n| n % 2 == 0);

        prop_assert_eq!(odd.len() + even.len(), values.len());
        prop_assert!(even.iter().all(|n| n % 2 == 0));
        prop_assert!(odd.iter().all(|n| n % 2 != 0));
    }

    #[test]
    fn prop_filter_agrees_with_partition(values in prop::collection::vec(any::<i32>(), 0..32)) {
        let predicate = |n: &i32| *n > 0;
        let (_, kept) = values.clone().partition(predicate);

        prop_assert_eq!(values.clone().filter(predicate), kept.clone());
        prop_assert_eq!(filter(predicate)(values), kept);
    }

    #[test]
    fn prop_compact_drops_only_none(values in prop::collection::vec(any::<Option<u8>>(), 0..32)) {
        let present = values.iter().filter(|value| value.is_some()).count();

        prop_assert_eq!(values.compact().len(), present);
    }

    #[test]
    fn prop_map_partition_keeps_keys(entries in prop::collection::btree_map(any::<u8>(), any::<i32>(), 0..16)) {
        let (negative, rest): (BTreeMap<u8, i32>, BTreeMap<u8, u32>) =
            entries.clone().partition_map(|n| match u32::try_from(n) {
                Ok(natural) => Either::Right(natural),
                Err(_) => Either::Left(n),
            });

        prop_assert_eq!(negative.len() + rest.len(), entries.len());
        prop_assert!(negative.keys().all(|key| !rest.contains_key(key)));
    }
}

// =============================================================================
// Bifunctor Laws
// =============================================================================

fn outcome() -> impl Strategy<Value = Result<i32, String>> {
    prop_oneof![
        any::<i32>().prop_map(Ok::<i32, String>),
        "[a-z]{0,8}".prop_map(Err::<i32, String>),
    ]
}

proptest! {
    #[test]
    fn prop_result_bimap_identity(value in outcome()) {
        prop_assert_eq!(value.clone().bimap(|error| error, |n| n), value);
    }

    #[test]
    fn prop_result_bimap_composition(value in outcome()) {
        let f1 = |error: String| error.len();
        let f2 = |length: usize| length * 2;
        let g1 = |n: i32| i64::from(n) - 1;
        let g2 = |n: i64| n.to_string();

        prop_assert_eq!(
            value.clone().bimap(f1, g1).bimap(f2, g2),
            value.bimap(|error| f2(f1(error)), |n| g2(g1(n)))
        );
    }

    #[test]
    fn prop_result_bimap_is_map_err_then_map(value in outcome()) {
        let f = |error: String| error.to_uppercase();
        let g = |n: i32| n.wrapping_mul(3);

        prop_assert_eq!(value.clone().bimap(f, g), value.clone().first(f).second(g));
        prop_assert_eq!(value.clone().bimap(f, g), value.map_err(f).map(g));
    }
}
