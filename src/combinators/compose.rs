//! Right-to-left function composition.

/// Compose functions right to left.
///
/// `compose(vec![f, g, h])(x) == f(g(h(x)))`. With no functions the result is
/// the identity; with one it behaves exactly like that function.
///
/// All functions share one type. For closures of different types use the
/// [`compose!`](crate::compose!) macro.
///
/// # Example
///
/// ```rust
/// use oneway::compose;
///
/// let double = |x: i32| x * 2;
/// let inc = |x: i32| x + 1;
/// let funcs: Vec<Box<dyn Fn(i32) -> i32>> = vec![Box::new(double), Box::new(inc)];
///
/// assert_eq!(compose(funcs)(5), 12);
/// ```
pub fn compose<T, F>(funcs: Vec<F>) -> impl Fn(T) -> T
where
    F: Fn(T) -> T,
{
    move |x| funcs.iter().rev().fold(x, |acc, f| f(acc))
}
