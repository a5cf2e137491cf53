//! Composition and currying macros.

/// Composes functions right to left: `compose!(f, g, h)(x) == f(g(h(x)))`.
///
/// # Examples
///
/// ```
/// use railway::compose;
///
/// let to_text = |n: i32| n.to_string();
/// let length = |s: String| s.len();
///
/// assert_eq!(compose!(length, to_text)(12345), 5);
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr $(,)?) => {
        $function
    };
    ($outer:expr, $($inner:expr),+ $(,)?) => {{
        let outer = $outer;
        let inner = $crate::compose!($($inner),+);
        move |input| outer(inner(input))
    }};
}

/// Composes functions left to right: `flow!(f, g, h)(x) == h(g(f(x)))`.
///
/// # Examples
///
/// ```
/// use railway::flow;
///
/// let normalize = flow!(|s: &str| s.trim().to_string(), |s: String| s.to_lowercase());
/// assert_eq!(normalize("  HeLLo "), "hello");
/// ```
#[macro_export]
macro_rules! flow {
    ($function:expr $(,)?) => {
        $function
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {{
        let first = $first;
        let rest = $crate::flow!($($rest),+);
        move |input| rest(first(input))
    }};
}

/// Applies functions to a value left to right: `pipe!(x, f, g) == g(f(x))`.
///
/// # Examples
///
/// ```
/// use railway::pipe;
///
/// let result = pipe!("42", |s: &str| s.parse::<i32>().unwrap_or(0), |n| n + 1);
/// assert_eq!(result, 43);
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr $(,)?) => {
        $value
    };
    ($value:expr, $function:expr $(, $rest:expr)* $(,)?) => {
        $crate::pipe!(($function)($value) $(, $rest)*)
    };
}

/// Curries a two-argument function.
///
/// Arguments applied early must be `Clone`, since every partial application
/// can be called again.
///
/// # Examples
///
/// ```
/// use railway::curry2;
///
/// let add = curry2!(|a: i32, b: i32| a + b);
/// let add_five = add(5);
/// assert_eq!(add_five(3), 8);
/// assert_eq!(add_five(10), 15);
/// ```
#[macro_export]
macro_rules! curry2 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            move |second| function(::std::clone::Clone::clone(&first), second)
        }
    }};
}

/// Curries a three-argument function.
///
/// # Examples
///
/// ```
/// use railway::curry3;
///
/// let clamp = curry3!(|low: i32, high: i32, value: i32| value.max(low).min(high));
/// let percent = clamp(0)(100);
/// assert_eq!(percent(140), 100);
/// assert_eq!(percent(-5), 0);
/// ```
#[macro_export]
macro_rules! curry3 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            move |second| {
                let function = ::std::rc::Rc::clone(&function);
                let first = ::std::clone::Clone::clone(&first);
                move |third| {
                    function(
                        ::std::clone::Clone::clone(&first),
                        ::std::clone::Clone::clone(&second),
                        third,
                    )
                }
            }
        }
    }};
}

/// Curries a four-argument function.
///
/// # Examples
///
/// ```
/// use railway::curry4;
///
/// let sum = curry4!(|a: i32, b: i32, c: i32, d: i32| a + b + c + d);
/// assert_eq!(sum(1)(2)(3)(4), 10);
/// ```
#[macro_export]
macro_rules! curry4 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            move |second| {
                let function = ::std::rc::Rc::clone(&function);
                let first = ::std::clone::Clone::clone(&first);
                move |third| {
                    let function = ::std::rc::Rc::clone(&function);
                    let first = ::std::clone::Clone::clone(&first);
                    let second = ::std::clone::Clone::clone(&second);
                    move |fourth| {
                        function(
                            ::std::clone::Clone::clone(&first),
                            ::std::clone::Clone::clone(&second),
                            ::std::clone::Clone::clone(&third),
                            fourth,
                        )
                    }
                }
            }
        }
    }};
}

/// Fixes some arguments of a two- or three-argument function.
///
/// `__` marks an argument left open; it is matched as a literal token.
/// Fixed values are cloned on every call.
///
/// # Examples
///
/// ```
/// use railway::partial;
///
/// fn divide(numerator: f64, denominator: f64) -> f64 {
///     numerator / denominator
/// }
///
/// let half = partial!(divide, __, 2.0);
/// assert_eq!(half(10.0), 5.0);
///
/// let tag = partial!(|open: &str, text: &str, close: &str| format!("{open}{text}{close}"), "<", __, ">");
/// assert_eq!(tag("b"), "<b>");
/// ```
#[macro_export]
macro_rules! partial {
    // three arguments
    ($function:expr, __, __, __ $(,)?) => {{
        let function = $function;
        move |first, second, third| function(first, second, third)
    }};
    ($function:expr, $first:expr, __, __ $(,)?) => {{
        let function = $function;
        let first = $first;
        move |second, third| function(::std::clone::Clone::clone(&first), second, third)
    }};
    ($function:expr, __, $second:expr, __ $(,)?) => {{
        let function = $function;
        let second = $second;
        move |first, third| function(first, ::std::clone::Clone::clone(&second), third)
    }};
    ($function:expr, __, __, $third:expr $(,)?) => {{
        let function = $function;
        let third = $third;
        move |first, second| function(first, second, ::std::clone::Clone::clone(&third))
    }};
    ($function:expr, $first:expr, $second:expr, __ $(,)?) => {{
        let function = $function;
        let first = $first;
        let second = $second;
        move |third| {
            function(
                ::std::clone::Clone::clone(&first),
                ::std::clone::Clone::clone(&second),
                third,
            )
        }
    }};
    ($function:expr, $first:expr, __, $third:expr $(,)?) => {{
        let function = $function;
        let first = $first;
        let third = $third;
        move |second| {
            function(
                ::std::clone::Clone::clone(&first),
                second,
                ::std::clone::Clone::clone(&third),
            )
        }
    }};
    ($function:expr, __, $second:expr, $third:expr $(,)?) => {{
        let function = $function;
        let second = $second;
        let third = $third;
        move |first| {
            function(
                first,
                ::std::clone::Clone::clone(&second),
                ::std::clone::Clone::clone(&third),
            )
        }
    }};
    ($function:expr, $first:expr, $second:expr, $third:expr $(,)?) => {{
        let function = $function;
        let first = $first;
        let second = $second;
        let third = $third;
        move || {
            function(
                ::std::clone::Clone::clone(&first),
                ::std::clone::Clone::clone(&second),
                ::std::clone::Clone::clone(&third),
            )
        }
    }};

    // two arguments
    ($function:expr, __, __ $(,)?) => {{
        let function = $function;
        move |first, second| function(first, second)
    }};
    ($function:expr, $first:expr, __ $(,)?) => {{
        let function = $function;
        let first = $first;
        move |second| function(::std::clone::Clone::clone(&first), second)
    }};
    ($function:expr, __, $second:expr $(,)?) => {{
        let function = $function;
        let second = $second;
        move |first| function(first, ::std::clone::Clone::clone(&second))
    }};
    ($function:expr, $first:expr, $second:expr $(,)?) => {{
        let function = $function;
        let first = $first;
        let second = $second;
        move || function(::std::clone::Clone::clone(&first), ::std::clone::Clone::clone(&second))
    }};
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    #[rstest]
    fn test_compose_is_associative() {
        let f = |x: i32| x + 1;
        let g = |x: i32| x * 2;
        let h = |x: i32| x - 3;

        let left = compose!(f, compose!(g, h));
        let right = compose!(compose!(f, g), h);
        for value in [-10, 0, 7] {
            assert_eq!(left(value), right(value));
        }
    }

    #[rstest]
    fn test_flow_is_reversed_compose() {
        let f = |x: i32| x + 1;
        let g = |x: i32| x * 2;
        assert_eq!(flow!(f, g)(4), compose!(g, f)(4));
    }

    #[rstest]
    fn test_curry2_with_owned_strings() {
        let join = curry2!(|a: String, b: &str| format!("{a}-{b}"));
        let prefixed = join("id".to_string());
        assert_eq!(prefixed("1"), "id-1");
        assert_eq!(prefixed("2"), "id-2");
    }

    #[rstest]
    #[case(2, 10, 8)]
    #[case(0, 0, 0)]
    fn test_partial_fixes_either_position(#[case] fixed: i32, #[case] open: i32, #[case] expected_difference: i32) {
        let subtract = |minuend: i32, subtrahend: i32| minuend - subtrahend;
        assert_eq!(partial!(subtract, __, fixed)(open), expected_difference);
        assert_eq!(partial!(subtract, open, __)(fixed), expected_difference);
        assert_eq!(partial!(subtract, __, __)(open, fixed), expected_difference);
        assert_eq!(partial!(subtract, open, fixed)(), expected_difference);
    }

    #[rstest]
    fn test_partial_three_arguments_clones_fixed_values() {
        let join = |a: String, b: String, c: String| format!("{a}{b}{c}");
        let wrap = partial!(join, "[".to_string(), __, "]".to_string());
        assert_eq!(wrap("x".to_string()), "[x]");
        assert_eq!(wrap("y".to_string()), "[y]");

        let suffix = partial!(join, __, __, "!".to_string());
        assert_eq!(suffix("a".to_string(), "b".to_string()), "ab!");
        let middle = partial!(join, __, "-".to_string(), __);
        assert_eq!(middle("a".to_string(), "b".to_string()), "a-b");
    }
}
