//! Small combinators commonly handed to other operations.

/// Returns the value unchanged.
///
/// The identity function is the unit of pipeline composition: a
/// `map(identity)` stage forwards every item as-is.
///
/// # Examples
///
/// ```
/// use pipars::prelude::*;
///
/// assert_eq!(identity(42), 42);
///
/// let result = pipe!(vec![1, 2, 3], map(identity), take(2));
/// assert_eq!(result, vec![1, 2]);
/// ```
#[inline]
pub const fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns the given value, ignoring its
/// input.
///
/// # Examples
///
/// ```
/// use pipars::prelude::*;
///
/// let result = pipe!(vec![1, 2, 3], map(constant("x")));
/// assert_eq!(result, vec!["x", "x", "x"]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}
