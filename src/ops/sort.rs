//! Whole-collection reordering: `sort_by` and `reverse`.
//!
//! These operations need every item before they can produce anything, so
//! they are not lazy-capable: applied mid-pipeline they end the fused run,
//! evaluate, and hand a concrete `Vec` to the next stage.

use crate::pipeline::{Materialize, PipeStep, Transform};

/// Creates an operation that sorts items ascending by the key `key`
/// derives.
///
/// The sort is stable: items with equal keys keep their input order.
///
/// # Examples
///
/// ```
/// use pipars::prelude::*;
///
/// let result = pipe!(vec!["bb", "a", "ccc"], sort_by(|word: &&str| word.len()));
/// assert_eq!(result, vec!["a", "bb", "ccc"]);
/// ```
#[inline]
#[must_use]
pub const fn sort_by<F>(key: F) -> SortBy<F> {
    SortBy { key }
}

/// Creates an operation that reverses the item order.
///
/// # Examples
///
/// ```
/// use pipars::prelude::*;
///
/// let result = pipe!(vec![1, 2, 3], reverse());
/// assert_eq!(result, vec![3, 2, 1]);
/// ```
#[inline]
#[must_use]
pub const fn reverse() -> Reverse {
    Reverse
}

/// The `sort_by` operation value. Built by [`sort_by`].
#[derive(Debug, Clone)]
pub struct SortBy<F> {
    key: F,
}

/// The `reverse` operation value. Built by [`reverse`].
#[derive(Debug, Clone, Copy)]
pub struct Reverse;

impl<P, Key, F> Transform<P> for SortBy<F>
where
    P: Materialize,
    Key: Ord,
    F: FnMut(&P::Item) -> Key,
{
    type Output = Vec<P::Item>;

    fn transform(self, input: P) -> Vec<P::Item> {
        let mut items = input.materialize();
        items.sort_by_key(self.key);
        items
    }
}

impl<P, Key, F> PipeStep<P> for SortBy<F>
where
    P: Materialize,
    Key: Ord,
    F: FnMut(&P::Item) -> Key,
{
    type Piped = Vec<P::Item>;

    #[inline]
    fn step(self, input: P) -> Vec<P::Item> {
        self.transform(input)
    }
}

impl<P> Transform<P> for Reverse
where
    P: Materialize,
{
    type Output = Vec<P::Item>;

    fn transform(self, input: P) -> Vec<P::Item> {
        let mut items = input.materialize();
        items.reverse();
        items
    }
}

impl<P> PipeStep<P> for Reverse
where
    P: Materialize,
{
    type Piped = Vec<P::Item>;

    #[inline]
    fn step(self, input: P) -> Vec<P::Item> {
        self.transform(input)
    }
}
