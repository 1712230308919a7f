//! The curry macro family.
//!
//! The function lives behind `std::rc::Rc`, so a curried function and each of
//! its partial applications can be called any number of times. Arguments
//! other than the last must implement [`Clone`]: every call that completes an
//! application passes the function a fresh clone of each fixed argument, and
//! `curry3!` also clones the first argument into each second-level partial
//! application.
//!
//! The returned closures implement `Fn`, so they feed straight into
//! `compose!`, `flip` and `uncurry2`/`uncurry3`.

/// Converts a 2-argument function into a chain of unary closures.
///
/// `curry2!(f)(a)(b) == f(a, b)`.
///
/// # Examples
///
/// ```
/// use witnessed::curry2;
///
/// fn greet(greeting: String, name: &str) -> String { format!("{greeting}, {name}!") }
///
/// let hello = curry2!(greet)("Hello".to_string());
/// assert_eq!(hello("Blob"), "Hello, Blob!");
/// assert_eq!(hello("Blob Jr."), "Hello, Blob Jr.!");
/// ```
#[macro_export]
macro_rules! curry2 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |arg1| {
            let function = ::std::rc::Rc::clone(&function);
            move |arg2| function(::std::clone::Clone::clone(&arg1), arg2)
        }
    }};
}

/// Converts a 3-argument function into a chain of unary closures.
///
/// `curry3!(f)(a)(b)(c) == f(a, b, c)`.
///
/// # Examples
///
/// ```
/// use witnessed::curry3;
///
/// fn clamp(low: i32, high: i32, value: i32) -> i32 { value.max(low).min(high) }
///
/// let percentage = curry3!(clamp)(0)(100);
/// assert_eq!(percentage(140), 100);
/// assert_eq!(percentage(-3), 0);
/// assert_eq!(percentage(42), 42);
/// ```
#[macro_export]
macro_rules! curry3 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |arg1| {
            let function = ::std::rc::Rc::clone(&function);
            move |arg2| {
                let function = ::std::rc::Rc::clone(&function);
                let arg1 = ::std::clone::Clone::clone(&arg1);
                move |arg3| {
                    function(
                        ::std::clone::Clone::clone(&arg1),
                        ::std::clone::Clone::clone(&arg2),
                        arg3,
                    )
                }
            }
        }
    }};
}
