//! The `pipe!` macro.

/// Pushes a value through functions from left to right.
///
/// `pipe!(x, f, g, h)` is `h(g(f(x)))`, the same as `compose!(h, g, f)(x)`.
/// Unlike [`compose!`](crate::compose!), the value is applied immediately, so
/// each function only needs [`FnOnce`].
///
/// # Examples
///
/// ```
/// use witnessed::pipe;
///
/// let words = pipe!(
///     "the quick brown fox",
///     |text: &str| text.split(' ').map(str::to_string).collect::<Vec<_>>(),
///     |words: Vec<String>| words.into_iter().filter(|word| word.len() > 3).collect::<Vec<_>>(),
///     |words: Vec<String>| words.join(",")
/// );
/// assert_eq!(words, "quick,brown");
/// ```
///
/// ```
/// use witnessed::{compose, pipe};
///
/// fn f(x: i32) -> i32 { x + 1 }
/// fn g(x: i32) -> i32 { x * 2 }
///
/// assert_eq!(pipe!(10, f, g), compose!(g, f)(10));
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr) => {
        $value
    };

    ($value:expr, $function:expr $(,)?) => {
        $function($value)
    };

    ($value:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::pipe!($function($value), $($remaining_functions),+)
    };
}
