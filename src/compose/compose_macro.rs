//! The `compose!` macro.

/// Composes functions right to left.
///
/// `compose!(f, g, h)(x)` is `f(g(h(x)))`: the rightmost function runs first.
/// A single argument is returned unchanged.
///
/// Every function must implement [`Fn`], and each output type must match the
/// input type of the function to its left.
///
/// # Examples
///
/// ```
/// use witnessed::compose;
///
/// fn trim(text: String) -> String { text.trim().to_string() }
/// fn shout(text: String) -> String { text.to_uppercase() }
/// fn length(text: String) -> usize { text.len() }
///
/// let shouted_length = compose!(length, shout, trim);
/// assert_eq!(shouted_length("  hi  ".to_string()), 2);
/// ```
///
/// Closures capturing their environment compose the same way:
///
/// ```
/// use witnessed::compose;
///
/// let rate = 3;
/// let scale = move |x: i32| x * rate;
/// let offset = |x: i32| x + 10;
///
/// assert_eq!(compose!(offset, scale)(5), 25);
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr) => {
        $function
    };

    ($outer_function:expr, $inner_function:expr $(,)?) => {{
        let outer = $outer_function;
        let inner = $inner_function;
        move |input| outer(inner(input))
    }};

    // compose!(f, g, h, ...) = compose!(f, compose!(g, h, ...))
    ($outer_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let outer = $outer_function;
        let inner_composed = $crate::compose!($($remaining_functions),+);
        move |input| outer(inner_composed(input))
    }};
}
