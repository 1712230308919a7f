#![cfg(feature = "witness")]
//! Tests for witness records used as ordinary values.

use rstest::rstest;
use std::io;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;
use witnessed::witness::{
    Combining, DefaultDescribing, Describing, EmptyInitializing, Equating, RawRepresentable,
    RawRepresenting, SharedFn, UnrepresentableRawValue, describe_tagged, fold_with,
};

#[derive(Clone, Debug, PartialEq)]
struct User {
    id: u32,
    name: String,
}

// =============================================================================
// Describing
// =============================================================================

#[rstest]
fn several_descriptions_for_one_type() {
    let short = Describing::new(|user: &User| user.name.clone());
    let long = Describing::<User>::debug();
    let user = User {
        id: 1,
        name: "Blob".to_string(),
    };

    assert_eq!(short.describe(&user), "Blob");
    assert_eq!(long.describe(&user), r#"User { id: 1, name: "Blob" }"#);
    assert!(Describing::<User>::pretty().describe(&user).contains('\n'));
}

#[rstest]
fn contramap_describes_through_a_projection() {
    let id = Describing::<u32>::display().contramap(|user: &User| user.id);
    let user = User {
        id: 42,
        name: "Blob".to_string(),
    };

    assert_eq!(id.describe_tagged("user", &user), "[user] 42");
}

#[derive(Debug)]
struct Temperature(i32);

impl DefaultDescribing for Temperature {
    fn default_describing() -> Describing<Self> {
        Describing::new(|temperature: &Self| format!("{}°", temperature.0))
    }
}

#[rstest]
fn default_describing_can_be_overridden() {
    assert_eq!(describe_tagged("weather", &Temperature(21)), "[weather] 21°");
}

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().expect("lock poisoned").clone()).expect("utf-8 output")
    }
}

impl io::Write for Captured {
    fn write(&mut self, buffer: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .expect("lock poisoned")
            .extend_from_slice(buffer);
        Ok(buffer.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[rstest]
fn log_tagged_emits_an_info_event() {
    let captured = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(captured.clone())
        .with_ansi(false)
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        Describing::<i32>::display().log_tagged("debug", &12);
    });

    let output = captured.contents();
    assert!(output.contains("INFO"));
    assert!(output.contains("[debug] 12"));
}

// =============================================================================
// Combining and EmptyInitializing
// =============================================================================

#[rstest]
fn sum_and_product_are_two_witnesses_for_one_type() {
    let numbers = vec![2, 3, 4];

    assert_eq!(fold_with(numbers.clone(), &EmptyInitializing::zero(), &Combining::sum()), 9);
    assert_eq!(fold_with(numbers, &EmptyInitializing::one(), &Combining::product()), 24);
}

#[rstest]
fn reduce_without_an_empty_value() {
    let longest = Combining::new(|left: String, right: String| {
        if right.len() > left.len() { right } else { left }
    });

    assert_eq!(
        longest.reduce(["a", "abc", "ab"].map(String::from)),
        Some("abc".to_string())
    );
    assert_eq!(longest.reduce(Vec::new()), None);
}

#[rstest]
fn array_combining_is_elementwise() {
    let totals = Combining::array(Combining::<i32>::sum());

    assert_eq!(totals.combine(vec![1, 2, 3], vec![10, 20]), vec![11, 22]);
    assert_eq!(Combining::<Vec<u8>>::append().combine(vec![1], vec![2]), vec![1, 2]);
}

#[rstest]
fn pointwise_combines_results_of_functions() {
    let combined = Combining::<SharedFn<i32, i32>>::pointwise(Combining::sum());
    let double: SharedFn<i32, i32> = std::rc::Rc::new(|n: i32| n * 2);
    let square: SharedFn<i32, i32> = std::rc::Rc::new(|n: i32| n * n);

    let both = combined.combine(double, square);
    assert_eq!(both(3), 15);
}

#[rstest]
fn pair_and_first_some() {
    let stats = Combining::pair(Combining::<u32>::sum(), Combining::<String>::concat());
    assert_eq!(stats.combine((1, "a".to_string()), (2, "b".to_string())), (3, "ab".to_string()));

    let fallback = Combining::<Option<&str>>::first_some();
    assert_eq!(fallback.fold(None, [None, Some("x"), Some("y")]), Some("x"));
}

#[rstest]
fn mapped_empty_value() {
    let empty_label = EmptyInitializing::<String>::default_value().map(|text| format!("<{text}>"));

    assert_eq!(empty_label.create(), "<>");
    assert_eq!(fold_with(Vec::<String>::new(), &empty_label, &Combining::concat()), "<>");
}

// =============================================================================
// Equating and RawRepresenting
// =============================================================================

#[rstest]
fn equating_by_identifier() {
    let same_user = Equating::<u32>::natural().contramap(|user: &User| user.id);
    let a = User {
        id: 7,
        name: "Blob".to_string(),
    };
    let b = User {
        id: 7,
        name: "Blob Jr.".to_string(),
    };

    assert!(same_user.equal(&a, &b));
    assert!(!Equating::<User>::natural().equal(&a, &b));
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Planet {
    Mercury,
    Venus,
}

impl RawRepresentable for Planet {
    type Raw = u8;

    fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            1 => Some(Self::Mercury),
            2 => Some(Self::Venus),
            _ => None,
        }
    }

    fn raw_value(&self) -> u8 {
        match self {
            Self::Mercury => 1,
            Self::Venus => 2,
        }
    }
}

#[rstest]
#[case(1, Ok(Planet::Mercury))]
#[case(2, Ok(Planet::Venus))]
#[case(9, Err(UnrepresentableRawValue::new(9)))]
fn raw_representable_witness(
    #[case] raw: u8,
    #[case] expected: Result<Planet, UnrepresentableRawValue<u8>>,
) {
    let witness = RawRepresenting::<Planet, u8>::raw_representable();

    assert_eq!(witness.try_convert(raw), expected);
}

#[rstest]
fn parsing_witness_reports_failures() {
    let numbers = RawRepresenting::<i64, String>::parsing();

    assert_eq!(numbers.convert("-12".to_string()), Some(-12));
    assert_eq!(numbers.raw_value(&-12), "-12");

    let error = numbers
        .try_convert("twelve".to_string())
        .expect_err("not a number");
    assert_eq!(error.to_string(), r#"raw value "twelve" has no representation"#);
}

#[cfg(feature = "tagged")]
#[rstest]
fn tagged_witness_adds_and_drops_the_tag() {
    use witnessed::tagged::Cents;

    let cents = RawRepresenting::<Cents, i64>::tagged();

    assert_eq!(cents.convert(250), Some(Cents::new(250)));
    assert_eq!(cents.raw_value(&Cents::new(-5)), -5);
}
