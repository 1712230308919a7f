//! Combinators over plain function values.
//!
//! - [`identity`] (I), [`constant`] (K), [`flip`] and [`flip_binary`] (C)
//! - [`compose`] and [`pipe`] for two functions
//! - [`uncurry2`] and [`uncurry3`], the inverses of `curry2!`/`curry3!`
//! - [`with`] and [`zurry`] for applying functions
//! - [`fanout`] and [`split_pair`], the product equivalence
//! - [`concat`] and [`concat_in_place`] for lists of endomorphisms

use std::rc::Rc;

/// Returns the value unchanged.
///
/// Neutral element of composition: `compose(f, identity)` and
/// `compose(identity, f)` both behave as `f`.
///
/// # Examples
///
/// ```
/// use witnessed::compose::identity;
///
/// assert_eq!(identity("unchanged"), "unchanged");
/// let kept: Vec<Option<i32>> = vec![Some(1), None].into_iter().map(identity).collect();
/// assert_eq!(kept, vec![Some(1), None]);
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that ignores its input and returns `value`.
///
/// # Examples
///
/// ```
/// use witnessed::compose::constant;
///
/// let reset: Vec<i32> = vec![4, 5, 6].into_iter().map(constant(0)).collect();
/// assert_eq!(reset, vec![0, 0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Builds a function that applies `inner` and then `outer`.
///
/// The function form of [`compose!`](crate::compose!) for exactly two
/// functions: `compose(f, g)(x) == f(g(x))`.
///
/// # Examples
///
/// ```
/// use witnessed::compose::compose;
///
/// let length_of_text = compose(|text: String| text.len(), |n: i32| n.to_string());
/// assert_eq!(length_of_text(-120), 4);
/// ```
#[inline]
pub fn compose<A, B, C, F, G>(outer: F, inner: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    move |input| outer(inner(input))
}

/// Builds a function that applies `first` and then `second`.
///
/// Mirror image of [`compose`]: `pipe(f, g)(x) == compose(g, f)(x) == g(f(x))`.
///
/// # Examples
///
/// ```
/// use witnessed::compose::pipe;
///
/// let incr_then_square = pipe(|x: i32| x + 1, |x: i32| x * x);
/// assert_eq!(incr_then_square(2), 9);
/// ```
#[inline]
pub fn pipe<A, B, C, F, G>(first: F, second: G) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    move |input| second(first(input))
}

/// Applies `function` to `value`.
///
/// Reads like a pipeline when the value is built first.
///
/// ```
/// use witnessed::compose::with;
///
/// assert_eq!(with(3, |x: i32| x * 7), 21);
/// ```
#[inline]
pub fn with<A, B, F>(value: A, function: F) -> B
where
    F: FnOnce(A) -> B,
{
    function(value)
}

/// Evaluates a function of zero arguments.
///
/// `zurry` flattens a nullary function into the value it returns, much like
/// `uncurry` flattens a chain of unary functions.
#[inline]
pub fn zurry<A, F>(function: F) -> A
where
    F: FnOnce() -> A,
{
    function()
}

/// Swaps the two arguments of a curried function.
///
/// `flip(f)(b)(a) == f(a)(b)`. Handy for fixing the second argument of a
/// curried method reference first.
///
/// # Laws
///
/// - **Double flip identity**: `flip(flip(f))(a)(b) == f(a)(b)`
///
/// # Examples
///
/// ```
/// use witnessed::compose::flip;
///
/// let repeat = |text: String| move |times: usize| text.repeat(times);
/// let three_times = flip(repeat)(3);
/// assert_eq!(three_times("ab".to_string()), "ababab");
/// ```
pub fn flip<A, B, C, F, G>(function: F) -> impl Fn(B) -> Box<dyn Fn(A) -> C>
where
    F: Fn(A) -> G + 'static,
    G: Fn(B) -> C,
    A: 'static,
    B: Clone + 'static,
    C: 'static,
{
    let function = Rc::new(function);
    move |second| {
        let function = Rc::clone(&function);
        let flipped: Box<dyn Fn(A) -> C> = Box::new(move |first| function(first)(second.clone()));
        flipped
    }
}

/// Swaps the two arguments of an uncurried binary function.
///
/// `flip_binary(f)(b, a) == f(a, b)`.
///
/// # Examples
///
/// ```
/// use witnessed::compose::flip_binary;
///
/// let divide = |numerator: f64, denominator: f64| numerator / denominator;
/// let divide_into = flip_binary(divide);
/// assert!((divide_into(2.0, 10.0) - 5.0).abs() < f64::EPSILON);
/// ```
#[inline]
pub fn flip_binary<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second, first| function(first, second)
}

/// Turns a curried function of two arguments back into a binary one.
///
/// `uncurry2(curry2!(f))(a, b) == f(a, b)`.
///
/// # Examples
///
/// ```
/// use witnessed::compose::uncurry2;
/// use witnessed::curry2;
///
/// let concat = |left: String, right: &str| left + right;
/// let round_trip = uncurry2(curry2!(concat));
/// assert_eq!(round_trip("ab".to_string(), "cd"), concat("ab".to_string(), "cd"));
/// ```
#[inline]
pub fn uncurry2<A, B, C, F, G>(function: F) -> impl Fn(A, B) -> C
where
    F: Fn(A) -> G,
    G: Fn(B) -> C,
{
    move |first, second| function(first)(second)
}

/// Turns a curried function of three arguments back into a ternary one.
///
/// `uncurry3(curry3!(f))(a, b, c) == f(a, b, c)`.
#[inline]
pub fn uncurry3<A, B, C, D, F, G, H>(function: F) -> impl Fn(A, B, C) -> D
where
    F: Fn(A) -> G,
    G: Fn(B) -> H,
    H: Fn(C) -> D,
{
    move |first, second, third| function(first)(second)(third)
}

/// Runs two functions on the same input and pairs the results.
///
/// Together with [`split_pair`] this witnesses
/// `(C) -> (A, B) ≅ ((C) -> A, (C) -> B)`.
///
/// # Examples
///
/// ```
/// use witnessed::compose::{fanout, split_pair};
///
/// let stats = fanout(|values: Vec<i32>| values.len(), |values: Vec<i32>| values.iter().sum::<i32>());
/// assert_eq!(stats(vec![1, 2, 3]), (3, 6));
///
/// let (count, total) = split_pair(stats);
/// assert_eq!(count(vec![5, 5]), 2);
/// assert_eq!(total(vec![5, 5]), 10);
/// ```
#[inline]
pub fn fanout<A, B, C, F, G>(first: F, second: G) -> impl Fn(C) -> (A, B)
where
    F: Fn(C) -> A,
    G: Fn(C) -> B,
    C: Clone,
{
    move |input: C| (first(input.clone()), second(input))
}

/// Splits a pair-producing function into one function per component.
///
/// Inverse of [`fanout`] up to behavior.
pub fn split_pair<A, B, C, F>(function: F) -> (impl Fn(C) -> A, impl Fn(C) -> B)
where
    F: Fn(C) -> (A, B),
{
    let function = Rc::new(function);
    let for_second = Rc::clone(&function);
    (
        move |input: C| function(input).0,
        move |input: C| for_second(input).1,
    )
}

/// Composes a list of endomorphisms, running them first to last.
///
/// An empty list yields the identity.
///
/// # Examples
///
/// ```
/// use witnessed::compose::concat;
///
/// let normalize = concat::<String>(vec![
///     Box::new(|text: String| text.trim().to_string()),
///     Box::new(|text: String| text.to_lowercase()),
///     Box::new(|text: String| text.replace(' ', "-")),
/// ]);
/// assert_eq!(normalize("  Hello World ".to_string()), "hello-world");
/// ```
pub fn concat<A>(functions: Vec<Box<dyn Fn(A) -> A>>) -> impl Fn(A) -> A {
    move |input| {
        functions
            .iter()
            .fold(input, |accumulator, function| function(accumulator))
    }
}

/// Composes a list of in-place updates, running them first to last.
///
/// ```
/// use witnessed::compose::concat_in_place;
///
/// let update = concat_in_place::<Vec<i32>>(vec![
///     Box::new(|values: &mut Vec<i32>| values.push(3)),
///     Box::new(|values: &mut Vec<i32>| values.reverse()),
/// ]);
/// let mut values = vec![1, 2];
/// update(&mut values);
/// assert_eq!(values, vec![3, 2, 1]);
/// ```
pub fn concat_in_place<A: ?Sized>(functions: Vec<Box<dyn Fn(&mut A)>>) -> impl Fn(&mut A) {
    move |target: &mut A| {
        for function in &functions {
            function(target);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn constant_ignores_reference_input() {
        let always_hello = constant("hello");
        assert_eq!(always_hello(&[1, 2, 3]), "hello");
    }

    #[rstest]
    fn flip_of_flip_restores_argument_order() {
        let subtract = |minuend: i32| move |subtrahend: i32| minuend - subtrahend;
        let restored = flip(flip(subtract));
        assert_eq!(restored(10)(3), 7);
    }

    #[rstest]
    fn flip_binary_swaps_asymmetric_arguments() {
        let power = |base: i32, exponent: u32| base.pow(exponent);
        assert_eq!(flip_binary(power)(3, 2), 8);
    }

    #[rstest]
    fn uncurry3_applies_all_arguments() {
        let curried = |a: i32| move |b: i32| move |c: i32| a * 100 + b * 10 + c;
        assert_eq!(uncurry3(curried)(1, 2, 3), 123);
    }

    #[rstest]
    fn zurry_evaluates_nullary_function() {
        assert_eq!(zurry(|| "ready"), "ready");
    }

    #[rstest]
    fn empty_concat_is_identity() {
        let nothing = concat::<i32>(Vec::new());
        assert_eq!(nothing(9), 9);
    }
}
