#![cfg(feature = "tagged")]
//! Tests for phantom-tagged values and the typestate helpers built on them.

use proptest::prelude::*;
use rstest::rstest;
use std::collections::{BTreeSet, HashMap};
use witnessed::tagged::{
    Celsius, Cents, Color, Fahrenheit, FreelyTagged, Light, Off, On, Tagged, Unvalidated,
    Validated, celsius_to_fahrenheit, change_color, fahrenheit_to_celsius, turn_off, turn_on,
    validate,
};

enum OrderIdTag {}
enum CustomerIdTag {}

impl FreelyTagged for OrderIdTag {}
impl FreelyTagged for CustomerIdTag {}

type OrderId = Tagged<OrderIdTag, u64>;
type CustomerId = Tagged<CustomerIdTag, u64>;

#[derive(Debug)]
struct Order {
    id: OrderId,
    customer: CustomerId,
    total: Cents,
}

fn orders() -> Vec<Order> {
    vec![
        Order {
            id: OrderId::new(1),
            customer: CustomerId::new(10),
            total: Cents::new(1_250),
        },
        Order {
            id: OrderId::new(2),
            customer: CustomerId::new(11),
            total: Cents::new(300),
        },
        Order {
            id: OrderId::new(3),
            customer: CustomerId::new(10),
            total: Cents::new(50),
        },
    ]
}

// =============================================================================
// Tagged
// =============================================================================

#[rstest]
fn tagged_values_work_as_map_keys() {
    let mut spent: HashMap<CustomerId, Cents> = HashMap::new();
    for order in orders() {
        *spent.entry(order.customer).or_default() += order.total;
    }

    assert_eq!(spent[&CustomerId::new(10)], Cents::new(1_300));
    assert_eq!(spent[&CustomerId::new(11)], Cents::new(300));
}

#[rstest]
fn tagged_values_sum_and_sort() {
    let total: Cents = orders().into_iter().map(|order| order.total).sum();
    let ids: BTreeSet<OrderId> = orders().into_iter().map(|order| order.id).collect();

    assert_eq!(total, Cents::new(1_600));
    assert_eq!(ids.into_iter().map(Tagged::into_raw).collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[rstest]
#[case("42", Some(42))]
#[case("-1", None)]
#[case("forty", None)]
fn tagged_values_parse_as_their_raw_type(#[case] text: &str, #[case] expected: Option<u64>) {
    let parsed = text.parse::<OrderId>().ok().map(Tagged::into_raw);

    assert_eq!(parsed, expected);
}

#[rstest]
fn display_shows_only_the_raw_value() {
    let id = OrderId::new(7);

    assert_eq!(id.to_string(), "7");
    assert_eq!(format!("{id:?}"), "Tagged(7)");
}

#[rstest]
fn raw_mut_updates_in_place() {
    let mut price = Cents::new(100);
    *price.raw_mut() += 1;

    assert_eq!(price.into_raw(), 101);
}

// =============================================================================
// Units
// =============================================================================

#[rstest]
#[case(37.0, 98.6)]
#[case(-17.5, 0.5)]
fn temperature_conversions(#[case] celsius: f64, #[case] fahrenheit: f64) {
    let converted = celsius_to_fahrenheit(Celsius::new(celsius));

    assert!((converted.into_raw() - fahrenheit).abs() < 1e-9);
}

proptest! {
    #[test]
    fn prop_temperature_round_trip(degrees in -1_000.0_f64..1_000.0) {
        let back: Celsius = fahrenheit_to_celsius(celsius_to_fahrenheit(Celsius::new(degrees)));
        prop_assert!((back.into_raw() - degrees).abs() < 1e-9);
    }

    #[test]
    fn prop_tagged_ordering_matches_raw(a in any::<i64>(), b in any::<i64>()) {
        prop_assert_eq!(Cents::new(a).cmp(&Cents::new(b)), a.cmp(&b));
        prop_assert_eq!(Cents::new(a) == Cents::new(b), a == b);
    }
}

#[rstest]
fn temperatures_of_one_scale_add() {
    let total = Fahrenheit::new(10.0) + Fahrenheit::new(22.0);

    assert_eq!(fahrenheit_to_celsius(total), Celsius::new(0.0));
}

// =============================================================================
// Validation
// =============================================================================

fn register(email: Unvalidated<String>) -> Result<String, String> {
    let email = validate(email, |address: &String| address.contains('@'))
        .ok_or_else(|| "invalid email".to_string())?;
    Ok(format!("registered {email}"))
}

#[rstest]
#[case("blob@example.com", Ok("registered blob@example.com".to_string()))]
#[case("blob", Err("invalid email".to_string()))]
fn only_validated_values_pass(#[case] address: &str, #[case] expected: Result<String, String>) {
    assert_eq!(register(Unvalidated::new(address.to_string())), expected);
}

#[rstest]
fn validated_values_can_be_read_but_not_rebuilt_unchecked() {
    let checked: Validated<String> =
        validate(Unvalidated::new("blob@example.com".to_string()), |address: &String| {
            address.contains('@')
        })
        .expect("address should pass");

    assert_eq!(checked.clone(), checked);
    assert_eq!(checked.raw(), "blob@example.com");

    // Editing means leaving the validated tag and checking again.
    let edited = checked
        .convert::<witnessed::tagged::UnvalidatedTag, _, _>(|address| {
            Some(address.replace('@', " at "))
        })
        .map(|unchecked: Unvalidated<String>| {
            validate(unchecked, |address: &String| address.contains('@'))
        });
    assert_eq!(edited, Some(None));
}

// =============================================================================
// Light Typestate
// =============================================================================

#[rstest]
fn lights_keep_their_color_across_states() {
    let warm = Color::new(255, 180, 120);
    let off: Light<Off> = Light::new(Color::WHITE);

    let on: Light<On> = change_color(turn_on(off), warm);
    let off_again = turn_off(on);

    assert_eq!(*off_again.raw(), warm);
    assert_eq!(turn_on(off_again).into_raw(), warm);
}
