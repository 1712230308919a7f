#![cfg(feature = "derive")]
//! Tests for the derive macros.
//!
//! - `#[derive(Setters)]` generates a `<field>_prop()` setter per named field
//! - `#[derive(CaseLenses)]` generates a `<variant>_case()` lens per variant

use rstest::rstest;
use witnessed::derive::{CaseLenses, Setters};
use witnessed::setter::{CaseLens, MutSetter, Setter, each};

// =============================================================================
// Setters
// =============================================================================

#[derive(Clone, Debug, PartialEq, Setters)]
struct Address {
    street: String,
    city: String,
}

#[derive(Clone, Debug, PartialEq, Setters)]
struct Person {
    name: String,
    age: u32,
    address: Address,
    nicknames: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Setters)]
struct Labeled<T> {
    value: T,
    label: String,
}

fn person() -> Person {
    Person {
        name: "Blob".to_string(),
        age: 30,
        address: Address {
            street: "Main St".to_string(),
            city: "Brooklyn".to_string(),
        },
        nicknames: vec!["blobby".to_string()],
    }
}

#[rstest]
fn field_setters_update_one_field() {
    let older = Person::age_prop().over(person(), |age: u32| age + 1);

    assert_eq!(older.age, 31);
    assert_eq!(older.name, person().name);
}

#[rstest]
fn derived_setters_compose() {
    let city = Person::address_prop().compose(Address::city_prop());
    let moved = city.set(person(), "Los Angeles".to_string());

    assert_eq!(moved.address.city, "Los Angeles");
    assert_eq!(moved.address.street, "Main St");
}

#[rstest]
fn derived_setters_work_in_place() {
    let mut blob = person();
    Person::nicknames_prop()
        .compose(each())
        .over_in_place(&mut blob, |nickname: String| nickname.to_uppercase());
    Person::name_prop().set_in_place(&mut blob, "Blob Sr.".to_string());

    assert_eq!(blob.nicknames, vec!["BLOBBY"]);
    assert_eq!(blob.name, "Blob Sr.");
}

#[rstest]
fn generic_struct_setters() {
    let tagged = Labeled {
        value: 2.5_f64,
        label: "ratio".to_string(),
    };

    let doubled = Labeled::<f64>::value_prop().over(tagged.clone(), |value: f64| value * 2.0);
    let renamed = Labeled::<f64>::label_prop().set(tagged, "scale".to_string());

    assert!((doubled.value - 5.0).abs() < f64::EPSILON);
    assert_eq!(renamed.label, "scale");
}

// =============================================================================
// Case Lenses
// =============================================================================

#[derive(Clone, Debug, PartialEq, CaseLenses)]
enum Message {
    Ping,
    Text(String),
    Move(i32, i32),
    Resize { width: u32, height: u32 },
}

#[derive(Clone, Debug, PartialEq, CaseLenses)]
enum Reply<T> {
    Value(T),
    Failure(String),
}

#[rstest]
#[case(Message::Ping, true)]
#[case(Message::Text("hi".to_string()), false)]
fn unit_variant_lens(#[case] message: Message, #[case] expected: bool) {
    assert_eq!(Message::ping_case().matches(&message), expected);
    assert_eq!(Message::ping_case().embed(()), Message::Ping);
}

#[rstest]
fn single_field_variant_lens() {
    let text = Message::text_case();

    assert_eq!(text.extract(Message::Text("hi".to_string())), Some("hi".to_string()));
    assert_eq!(text.extract(Message::Ping), None);
    assert_eq!(
        text.as_setter().over(Message::Text("hi".to_string()), |s: String| s + "!"),
        Message::Text("hi!".to_string())
    );
}

#[rstest]
fn multi_field_variant_lens_focuses_a_tuple() {
    let movement = Message::move_case();

    assert_eq!(movement.extract(Message::Move(1, -2)), Some((1, -2)));
    assert_eq!(movement.embed((3, 4)), Message::Move(3, 4));
}

#[rstest]
fn struct_variant_lens_focuses_fields_in_order() {
    let resize = Message::resize_case();
    let message = Message::Resize {
        width: 640,
        height: 480,
    };

    assert_eq!(resize.extract(message.clone()), Some((640, 480)));
    assert_eq!(resize.try_extract(Message::Ping), Err(Message::Ping));
    assert_eq!(resize.embed((640, 480)), message);
}

#[rstest]
fn generic_enum_lens() {
    let value = Reply::<u8>::value_case();
    let failure = Reply::<u8>::failure_case();

    assert_eq!(value.extract(Reply::Value(3)), Some(3));
    assert_eq!(failure.extract(Reply::Value(3)), None);
    assert_eq!(failure.embed("timeout".to_string()), Reply::Failure("timeout".to_string()));
}
