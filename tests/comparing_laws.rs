#![cfg(feature = "witness")]
//! Property-based tests for ordering and equality witnesses.
//!
//! Every derived relation of a [`Comparing`] witness follows from its two
//! primitives:
//!
//! - `less_or_equal(a, b) == less_than(a, b) || equal(a, b)`
//! - `greater_than(a, b) == !less_than(a, b)`
//! - `greater_or_equal(a, b) == greater_than(a, b) || equal(a, b)`

use proptest::prelude::*;
use rstest::rstest;
use std::cmp::Ordering;
use witnessed::witness::{Comparing, Equating};

#[derive(Clone, Debug, PartialEq)]
struct Player {
    name: String,
    score: u32,
}

fn player_strategy() -> impl Strategy<Value = Player> {
    ("[a-c]{1,3}", 0_u32..5).prop_map(|(name, score)| Player { name, score })
}

proptest! {
    #[test]
    fn prop_derived_relations(a in any::<i32>(), b in any::<i32>()) {
        let natural = Comparing::<i32>::natural();

        prop_assert_eq!(natural.less_or_equal(&a, &b), natural.less_than(&a, &b) || natural.equal(&a, &b));
        prop_assert_eq!(natural.greater_than(&a, &b), !natural.less_than(&a, &b));
        prop_assert_eq!(
            natural.greater_or_equal(&a, &b),
            natural.greater_than(&a, &b) || natural.equal(&a, &b)
        );
    }

    #[test]
    fn prop_natural_ordering_agrees_with_ord(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(Comparing::<i32>::natural().ordering(&a, &b), a.cmp(&b));
    }

    #[test]
    fn prop_reversed_flips_strict_order(a in any::<i32>(), b in any::<i32>()) {
        let natural = Comparing::<i32>::natural();
        let reversed = natural.clone().reversed();

        prop_assert_eq!(reversed.less_than(&a, &b), natural.less_than(&b, &a));
        prop_assert_eq!(reversed.equal(&a, &b), natural.equal(&a, &b));
        prop_assert_eq!(reversed.ordering(&a, &b), natural.ordering(&a, &b).reverse());
    }

    #[test]
    fn prop_contramap_orders_by_projection(a in player_strategy(), b in player_strategy()) {
        let by_score = Comparing::<u32>::natural().contramap(|player: &Player| player.score);

        prop_assert_eq!(by_score.less_than(&a, &b), a.score < b.score);
        prop_assert_eq!(by_score.equal(&a, &b), a.score == b.score);
    }

    #[test]
    fn prop_sort_is_stable(players in prop::collection::vec(player_strategy(), 0..16)) {
        let by_score = Comparing::<u32>::natural().contramap(|player: &Player| player.score);
        let mut sorted = players.clone();
        by_score.sort(&mut sorted);

        let mut expected = players;
        expected.sort_by_key(|player| player.score);
        prop_assert_eq!(sorted, expected);
    }

    #[test]
    fn prop_equating_pair_is_componentwise(
        a in (any::<u8>(), "[a-b]{0,2}"),
        b in (any::<u8>(), "[a-b]{0,2}"),
    ) {
        let both = Equating::pair(Equating::<u8>::natural(), Equating::<String>::natural());

        prop_assert_eq!(both.equal(&a, &b), a == b);
        prop_assert_eq!(both.not_equal(&a, &b), a != b);
    }
}

#[rstest]
fn greater_than_holds_for_equal_values() {
    let natural = Comparing::<i32>::natural();

    assert!(natural.greater_than(&3, &3));
    assert!(natural.greater_or_equal(&3, &3));
    assert_eq!(natural.ordering(&3, &3), Ordering::Equal);
}

#[rstest]
fn ordering_with_custom_equality() {
    let case_insensitive = Equating::new(|left: &String, right: &String| {
        left.eq_ignore_ascii_case(right)
    });
    let alphabetical = Comparing::new(case_insensitive, |left: &String, right: &String| {
        left.to_lowercase() < right.to_lowercase()
    });

    let mut names = vec!["bob".to_string(), "Ann".to_string(), "ann".to_string()];
    alphabetical.sort(&mut names);

    assert_eq!(names, vec!["Ann", "ann", "bob"]);
    assert!(alphabetical.equating().equal(&"ANN".to_string(), &"ann".to_string()));
}

#[rstest]
#[case(1, 2, true)]
#[case(2, 1, false)]
#[case(2, 2, false)]
fn descending_order(#[case] a: i32, #[case] b: i32, #[case] expected: bool) {
    let descending = Comparing::<i32>::natural().reversed();

    assert_eq!(descending.less_than(&b, &a), expected);
}
