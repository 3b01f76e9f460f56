//! Macros for composing heterogeneous closures.

/// Compose closures right to left.
///
/// `compose!(f, g, h)` is `move |x| f(g(h(x)))`. Unlike
/// [`compose`](crate::compose) the closures may have distinct types, and
/// the intermediate values may change type along the way. `compose!()` is the
/// identity and `compose!(f)` is `f` itself.
///
/// # Example
///
/// ```
/// use oneway::compose;
///
/// let parse = |s: &str| s.len();
/// let double = |n: usize| n * 2;
/// let describe = |n: usize| format!("{n} bytes");
///
/// let pipeline = compose!(describe, double, parse);
/// assert_eq!(pipeline("abc"), "6 bytes");
/// ```
#[macro_export]
macro_rules! compose {
    () => {
        |x| x
    };
    ($f:expr $(,)?) => {
        $f
    };
    ($f:expr, $($rest:expr),+ $(,)?) => {{
        let outer = $f;
        let inner = $crate::compose!($($rest),+);
        move |x| outer(inner(x))
    }};
}
