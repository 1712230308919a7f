#![cfg(feature = "setter")]
//! Scenario tests for setters on nested data.

use rstest::rstest;
use std::collections::{BTreeMap, HashMap, HashSet};
use witnessed::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct Food {
    name: String,
}

#[derive(Clone, Debug, PartialEq)]
struct Location {
    name: String,
}

#[derive(Clone, Debug, PartialEq)]
struct User {
    favorite_foods: Vec<Food>,
    location: Location,
    tags: HashSet<String>,
}

fn blob() -> User {
    User {
        favorite_foods: vec![
            Food {
                name: "Tacos".to_string(),
            },
            Food {
                name: "Nachos".to_string(),
            },
        ],
        location: Location {
            name: "Brooklyn".to_string(),
        },
        tags: HashSet::from(["admin".to_string()]),
    }
}

fn food_names(user: &User) -> Vec<&str> {
    user.favorite_foods
        .iter()
        .map(|food| food.name.as_str())
        .collect()
}

// =============================================================================
// Nested Updates
// =============================================================================

#[rstest]
fn nested_field_update_leaves_siblings_alone() {
    let moved = prop!(User, location.name).set(blob(), "Los Angeles".to_string());

    assert_eq!(moved.location.name, "Los Angeles");
    assert_eq!(moved.favorite_foods, blob().favorite_foods);
}

#[rstest]
fn updating_every_element_of_a_nested_collection() {
    let healthier = prop!(User, favorite_foods)
        .compose(each())
        .compose(prop!(Food, name))
        .over(blob(), |name: String| format!("Healthy {name}"));

    assert_eq!(food_names(&healthier), vec!["Healthy Tacos", "Healthy Nachos"]);
}

#[rstest]
fn composed_setter_equals_nested_application() {
    let shout = |name: String| name.to_uppercase();

    let composed = prop!(User, favorite_foods)
        .compose(each())
        .compose(prop!(Food, name))
        .over(blob(), shout);
    let nested = prop!(User, favorite_foods).over(blob(), |foods: Vec<Food>| {
        each().over(foods, |food: Food| prop!(Food, name).over(food, shout))
    });

    assert_eq!(composed, nested);
}

#[rstest]
fn in_place_update_through_a_composed_setter() {
    let mut user = blob();
    prop!(User, favorite_foods)
        .compose(each())
        .compose(prop!(Food, name))
        .over_in_place(&mut user, |name: String| name.to_lowercase());

    assert_eq!(food_names(&user), vec!["tacos", "nachos"]);
}

#[rstest]
fn lifted_setters_are_plain_functions() {
    let uppercase_location = prop!(User, location.name).lift(|name: String| name.to_uppercase());
    let users = vec![blob(), blob()].fmap(uppercase_location);

    assert!(users.iter().all(|user| user.location.name == "BROOKLYN"));

    let reset = prop!(User, favorite_foods).lift_in_place(|_: Vec<Food>| Vec::new());
    let mut user = blob();
    reset(&mut user);
    assert!(user.favorite_foods.is_empty());
}

#[rstest]
fn set_in_place_replaces_nested_value() {
    let mut user = blob();
    prop!(User, favorite_foods)
        .compose(index(1))
        .set_in_place(&mut user, Food {
            name: "Salad".to_string(),
        });

    assert_eq!(food_names(&user), vec!["Tacos", "Salad"]);
}

#[rstest]
fn filtering_is_an_update() {
    let only_tacos = prop!(User, favorite_foods).over(blob(), |foods: Vec<Food>| {
        foods.filter(|food| food.name.starts_with('T'))
    });

    assert_eq!(food_names(&only_tacos), vec!["Tacos"]);
}

// =============================================================================
// Tuples
// =============================================================================

#[rstest]
fn tuple_setters_compose() {
    let nested = ((1, true), "Swift");

    let toggled = first().compose(second()).over(nested, |flag: bool| !flag);
    assert_eq!(toggled, ((1, false), "Swift"));

    let relabeled = second().set(nested, "Rust");
    assert_eq!(relabeled, ((1, true), "Rust"));
}

#[rstest]
fn updates_through_each_element_of_tuple_pairs() {
    let pairs = vec![(1, "one"), (2, "two")];
    let doubled = each::<Vec<(i32, &str)>>()
        .compose(first())
        .over(pairs, |n: i32| n * 2);

    assert_eq!(doubled, vec![(2, "one"), (4, "two")]);
}

// =============================================================================
// Collections
// =============================================================================

#[rstest]
#[case(Some(1), Some(2))]
#[case(None, None)]
fn key_setter_sees_absence(#[case] stored: Option<i32>, #[case] expected: Option<i32>) {
    let mut counts: HashMap<&str, i32> = HashMap::new();
    if let Some(count) = stored {
        counts.insert("visits", count);
    }

    let bumped = key("visits").over(counts, |count: Option<i32>| count.map(|n| n + 1));
    assert_eq!(bumped.get("visits").copied(), expected);
}

#[rstest]
fn key_setter_inserts_and_removes() {
    let scores = BTreeMap::from([("ann", 3), ("bob", 5)]);

    let with_cid = key("cid").set(scores.clone(), Some(9));
    let without_bob = key("bob").set(scores, None);

    assert_eq!(with_cid.get("cid"), Some(&9));
    assert_eq!(without_bob, BTreeMap::from([("ann", 3)]));
}

#[rstest]
fn key_if_exists_never_inserts() {
    let scores = BTreeMap::from([("ann", 3)]);

    let unchanged = key_if_exists("bob").over(scores.clone(), |n: i32| n + 100);
    let bumped = key_if_exists("ann").over(scores.clone(), |n: i32| n + 100);

    assert_eq!(unchanged, scores);
    assert_eq!(bumped.get("ann"), Some(&103));
}

#[rstest]
fn element_setter_toggles_membership() {
    let tags = prop!(User, tags);

    let promoted = tags.clone().compose(element("owner".to_string())).set(blob(), true);
    let demoted = tags.compose(element("admin".to_string())).set(blob(), false);

    assert!(promoted.tags.contains("owner") && promoted.tags.contains("admin"));
    assert!(demoted.tags.is_empty());
}

#[rstest]
#[case(0, vec![10, 2, 3])]
#[case(2, vec![1, 2, 30])]
#[case(3, vec![1, 2, 3])]
fn index_setter_ignores_out_of_range(#[case] position: usize, #[case] expected: Vec<i32>) {
    assert_eq!(index(position).over(vec![1, 2, 3], |n: i32| n * 10), expected);
}

#[rstest]
fn each_reaches_map_values_and_options() {
    let prices = BTreeMap::from([("tea", 3), ("cake", 5)]);

    assert_eq!(
        each().over(prices, |n: i32| n * 2),
        BTreeMap::from([("tea", 6), ("cake", 10)])
    );
    assert_eq!(each().over(Some("hi"), str::trim), Some("hi"));
}

// =============================================================================
// Cases
// =============================================================================

#[rstest]
fn result_case_setters_touch_only_their_case() {
    let loaded: Result<Vec<i32>, String> = Ok(vec![1, 2]);
    let failed: Result<Vec<i32>, String> = Err("timeout".to_string());

    let through_values = ok::<Vec<i32>, String>().compose(each());

    let doubled = through_values.over(loaded, |n: i32| n * 2);
    assert_eq!(doubled, Ok(vec![2, 4]));

    let annotated = err().over(failed.clone(), |message: String| format!("network: {message}"));
    assert_eq!(annotated, Err("network: timeout".to_string()));
    assert_eq!(through_values.over(failed.clone(), |n: i32| n * 2), failed);
}

#[rstest]
fn custom_setter_from_a_function() {
    let words = FunctionSetter::new(|text: String, update: &mut dyn FnMut(String) -> String| {
        text.split(' ')
            .map(|word| update(word.to_string()))
            .collect::<Vec<_>>()
            .join(" ")
    });

    let capitalized = words.over("hello blob".to_string(), |word: String| {
        let mut characters = word.chars();
        characters.next().map_or_else(String::new, |head| {
            head.to_uppercase().chain(characters).collect()
        })
    });

    assert_eq!(capitalized, "Hello Blob");
}
