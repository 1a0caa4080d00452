//! Deduplicating operations: `unique` and `unique_by`.

use std::collections::HashSet;
use std::hash::Hash;

use crate::pipeline::{
    ChainExtend, Extended, IntoLazySeq, LazyChain, LazyEvaluator, LazyResult, LazySeq, PipeStep,
    SourceItem, Transform,
};

/// The hasher state used by the seen-sets of [`unique`] and [`unique_by`].
///
/// With the `fxhash` feature enabled this is `rustc-hash`'s `FxBuildHasher`;
/// otherwise the standard library's `RandomState`.
#[cfg(feature = "fxhash")]
pub type DedupHasher = rustc_hash::FxBuildHasher;

/// The hasher state used by the seen-sets of [`unique`] and [`unique_by`].
///
/// With the `fxhash` feature enabled this is `rustc-hash`'s `FxBuildHasher`;
/// otherwise the standard library's `RandomState`.
#[cfg(not(feature = "fxhash"))]
pub type DedupHasher = std::collections::hash_map::RandomState;

/// Creates an operation that keeps the first occurrence of each item.
///
/// Lazy-capable: the seen-set grows only as far as downstream demand pulls,
/// so `unique` before a `take` inspects just enough of the input.
///
/// # Examples
///
/// ```
/// use pipars::prelude::*;
///
/// let result = pipe!(vec![1, 2, 2, 5, 1, 6, 7], unique(), take(3));
/// assert_eq!(result, vec![1, 2, 5]);
/// ```
#[inline]
#[must_use]
pub const fn unique() -> Unique {
    Unique
}

/// Creates an operation that keeps the first item for each distinct key.
///
/// `key` is applied to every incoming item; an item survives when its key
/// has not been produced before.
///
/// # Examples
///
/// ```
/// use pipars::prelude::*;
///
/// let result = pipe!(
///     vec!["apple", "avocado", "beet"],
///     unique_by(|word: &&str| word.as_bytes()[0]),
/// );
/// assert_eq!(result, vec!["apple", "beet"]);
/// ```
#[inline]
#[must_use]
pub const fn unique_by<F>(key: F) -> UniqueBy<F> {
    UniqueBy { key }
}

/// The `unique` operation value. Built by [`unique`].
#[derive(Debug, Clone, Copy)]
pub struct Unique;

/// The `unique_by` operation value. Built by [`unique_by`].
#[derive(Debug, Clone)]
pub struct UniqueBy<F> {
    key: F,
}

/// Per-run evaluator behind [`unique`], owning the seen-set.
#[derive(Debug, Clone)]
pub struct UniqueEvaluator<T> {
    seen: HashSet<T, DedupHasher>,
}

impl<T> LazyEvaluator<T> for UniqueEvaluator<T>
where
    T: Eq + Hash + Clone,
{
    type Output = T;

    fn evaluate(&mut self, item: T) -> LazyResult<T> {
        if self.seen.insert(item.clone()) {
            LazyResult::next(item)
        } else {
            LazyResult::empty()
        }
    }
}

/// Per-run evaluator behind [`unique_by`], owning the seen-key set.
#[derive(Debug, Clone)]
pub struct UniqueByEvaluator<F, K> {
    key: F,
    seen: HashSet<K, DedupHasher>,
}

impl<T, K, F> LazyEvaluator<T> for UniqueByEvaluator<F, K>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    type Output = T;

    fn evaluate(&mut self, item: T) -> LazyResult<T> {
        let item_key = (self.key)(&item);
        if self.seen.insert(item_key) {
            LazyResult::next(item)
        } else {
            LazyResult::empty()
        }
    }
}

impl<P> PipeStep<P> for Unique
where
    P: IntoLazySeq,
    P::Item: Eq + Hash + Clone,
    P::Chain: ChainExtend<UniqueEvaluator<P::Item>>,
{
    type Piped = LazySeq<P::Source, Extended<P, UniqueEvaluator<P::Item>>>;

    #[inline]
    fn step(self, input: P) -> Self::Piped {
        input.into_lazy_seq().extended(UniqueEvaluator {
            seen: HashSet::default(),
        })
    }
}

impl<P> Transform<P> for Unique
where
    P: IntoLazySeq,
    P::Item: Eq + Hash + Clone,
    P::Chain: ChainExtend<UniqueEvaluator<P::Item>>,
    Extended<P, UniqueEvaluator<P::Item>>: LazyChain<SourceItem<P>, Output = P::Item>,
{
    type Output = Vec<P::Item>;

    #[inline]
    fn transform(self, input: P) -> Vec<P::Item> {
        input
            .into_lazy_seq()
            .extended(UniqueEvaluator {
                seen: HashSet::default(),
            })
            .run_to_vec()
    }
}

impl<P, K, F> PipeStep<P> for UniqueBy<F>
where
    P: IntoLazySeq,
    K: Eq + Hash,
    F: FnMut(&P::Item) -> K,
    P::Chain: ChainExtend<UniqueByEvaluator<F, K>>,
{
    type Piped = LazySeq<P::Source, Extended<P, UniqueByEvaluator<F, K>>>;

    #[inline]
    fn step(self, input: P) -> Self::Piped {
        input.into_lazy_seq().extended(UniqueByEvaluator {
            key: self.key,
            seen: HashSet::default(),
        })
    }
}

impl<P, K, F> Transform<P> for UniqueBy<F>
where
    P: IntoLazySeq,
    K: Eq + Hash,
    F: FnMut(&P::Item) -> K,
    P::Chain: ChainExtend<UniqueByEvaluator<F, K>>,
    Extended<P, UniqueByEvaluator<F, K>>: LazyChain<SourceItem<P>, Output = P::Item>,
{
    type Output = Vec<P::Item>;

    #[inline]
    fn transform(self, input: P) -> Vec<P::Item> {
        input
            .into_lazy_seq()
            .extended(UniqueByEvaluator {
                key: self.key,
                seen: HashSet::default(),
            })
            .run_to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::{map, take};
    use std::cell::Cell;

    #[test]
    fn unique_keeps_first_occurrences_in_order() {
        let result = unique().transform(vec![1, 2, 2, 5, 1, 6, 7]);
        assert_eq!(result, vec![1, 2, 5, 6, 7]);
    }

    #[test]
    fn unique_pulls_through_duplicates_until_demand_is_met() {
        let calls = Cell::new(0);
        let result = crate::pipe!(
            vec![1, 2, 2, 5, 1, 6, 7],
            map(|value: i32| {
                calls.set(calls.get() + 1);
                value
            }),
            unique(),
            take(3),
        );

        assert_eq!(result, vec![1, 2, 5]);
        assert_eq!(calls.get(), 4);
    }

    #[test]
    fn unique_by_uses_the_derived_key() {
        let result = unique_by(|value: &i32| value % 3).transform(vec![3, 4, 6, 7, 5]);
        assert_eq!(result, vec![3, 4, 5]);
    }

    #[test]
    fn unique_by_keeps_the_first_item_per_key() {
        let result =
            unique_by(|word: &&str| word.len()).transform(vec!["bb", "aa", "c", "ddd", "e"]);
        assert_eq!(result, vec!["bb", "c", "ddd"]);
    }

    #[test]
    fn unique_works_on_characters() {
        let result = unique().transform("mississippi");
        assert_eq!(result, vec!['m', 'i', 's', 'p']);
    }
}
