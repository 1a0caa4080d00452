//! Reducing operation: `fold`.

use crate::pipeline::{Materialize, PipeStep, Transform};

/// Creates an operation that reduces the items into a single accumulator,
/// front to back.
///
/// `combine` receives the accumulator by value and returns its successor,
/// starting from `initial`. Not lazy-capable: every item is consumed.
///
/// # Examples
///
/// ```
/// use pipars::prelude::*;
///
/// let total = pipe!(
///     vec![1, 2, 3, 4],
///     fold(0, |accumulator, value| accumulator + value),
/// );
/// assert_eq!(total, 10);
/// ```
///
/// The accumulator can be a different type than the items:
///
/// ```
/// use pipars::prelude::*;
///
/// let joined = pipe!(
///     vec!['a', 'b', 'c'],
///     fold(String::new(), |mut text: String, character| {
///         text.push(character);
///         text
///     }),
/// );
/// assert_eq!(joined, "abc");
/// ```
#[inline]
#[must_use]
pub const fn fold<Acc, F>(initial: Acc, combine: F) -> Fold<Acc, F> {
    Fold { initial, combine }
}

/// The `fold` operation value. Built by [`fold`].
#[derive(Debug, Clone)]
pub struct Fold<Acc, F> {
    initial: Acc,
    combine: F,
}

impl<P, Acc, F> Transform<P> for Fold<Acc, F>
where
    P: Materialize,
    F: FnMut(Acc, P::Item) -> Acc,
{
    type Output = Acc;

    #[inline]
    fn transform(self, input: P) -> Acc {
        input
            .materialize()
            .into_iter()
            .fold(self.initial, self.combine)
    }
}

impl<P, Acc, F> PipeStep<P> for Fold<Acc, F>
where
    P: Materialize,
    F: FnMut(Acc, P::Item) -> Acc,
{
    type Piped = Acc;

    #[inline]
    fn step(self, input: P) -> Acc {
        self.transform(input)
    }
}
