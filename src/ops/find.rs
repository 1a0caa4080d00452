//! Single-value operations: `first`, `find`, and `find_index`.
//!
//! These are lazy-capable but single-valued: they fuse with the stages
//! before them, end the run on their first output, and produce an `Option`
//! instead of a collection. Because the result is already concrete, a
//! single-value operation ends the fused run even mid-pipeline.

use crate::pipeline::{
    ChainExtend, Extended, IntoLazySeq, LazyChain, LazyEvaluator, LazyResult, PipeStep, SourceItem,
    Transform,
};

/// Creates an operation that produces the first item, if any.
///
/// # Examples
///
/// ```
/// use pipars::prelude::*;
///
/// let smallest = pipe!(vec![3, 1, 2], sort_by(|value: &i32| *value), first());
/// assert_eq!(smallest, Some(1));
///
/// assert_eq!(first().transform(Vec::<i32>::new()), None);
/// ```
#[inline]
#[must_use]
pub const fn first() -> First {
    First
}

/// Creates an operation that produces the first item satisfying
/// `predicate`.
///
/// The run ends as soon as a match is produced; items after it are never
/// pulled.
///
/// # Examples
///
/// ```
/// use pipars::prelude::*;
///
/// let found = pipe!(vec![1, 3, 8, 5], find(|value: &i32| value % 2 == 0));
/// assert_eq!(found, Some(8));
/// ```
#[inline]
#[must_use]
pub const fn find<Pred>(predicate: Pred) -> Find<Pred> {
    Find { predicate }
}

/// Creates an operation that produces the position of the first item
/// satisfying `predicate`.
///
/// The index counts the items this stage received, so stages before it
/// (`filter`, `flat_map`) shift what the index refers to.
#[inline]
#[must_use]
pub const fn find_index<Pred>(predicate: Pred) -> FindIndex<Pred> {
    FindIndex { predicate }
}

/// The `first` operation value. Built by [`first`].
#[derive(Debug, Clone, Copy)]
pub struct First;

/// The `find` operation value. Built by [`find`].
#[derive(Debug, Clone)]
pub struct Find<Pred> {
    predicate: Pred,
}

/// The `find_index` operation value. Built by [`find_index`].
#[derive(Debug, Clone)]
pub struct FindIndex<Pred> {
    predicate: Pred,
}

/// Per-run evaluator behind [`first`].
#[derive(Debug, Clone, Copy)]
pub struct FirstEvaluator;

impl<T> LazyEvaluator<T> for FirstEvaluator {
    type Output = T;

    #[inline]
    fn evaluate(&mut self, item: T) -> LazyResult<T> {
        LazyResult::next_and_stop(item)
    }
}

/// Per-run evaluator behind [`find`].
#[derive(Debug, Clone)]
pub struct FindEvaluator<Pred> {
    predicate: Pred,
}

impl<T, Pred> LazyEvaluator<T> for FindEvaluator<Pred>
where
    Pred: FnMut(&T) -> bool,
{
    type Output = T;

    #[inline]
    fn evaluate(&mut self, item: T) -> LazyResult<T> {
        if (self.predicate)(&item) {
            LazyResult::next_and_stop(item)
        } else {
            LazyResult::empty()
        }
    }
}

/// Per-run evaluator behind [`find_index`], owning the position counter.
#[derive(Debug, Clone)]
pub struct FindIndexEvaluator<Pred> {
    predicate: Pred,
    index: usize,
}

impl<T, Pred> LazyEvaluator<T> for FindIndexEvaluator<Pred>
where
    Pred: FnMut(&T) -> bool,
{
    type Output = usize;

    fn evaluate(&mut self, item: T) -> LazyResult<usize> {
        let index = self.index;
        self.index += 1;
        if (self.predicate)(&item) {
            LazyResult::next_and_stop(index)
        } else {
            LazyResult::empty()
        }
    }
}

impl<P> Transform<P> for First
where
    P: IntoLazySeq,
    P::Chain: ChainExtend<FirstEvaluator>,
    Extended<P, FirstEvaluator>: LazyChain<SourceItem<P>, Output = P::Item>,
{
    type Output = Option<P::Item>;

    #[inline]
    fn transform(self, input: P) -> Option<P::Item> {
        input
            .into_lazy_seq()
            .extended(FirstEvaluator)
            .run_to_single()
    }
}

impl<P> PipeStep<P> for First
where
    P: IntoLazySeq,
    P::Chain: ChainExtend<FirstEvaluator>,
    Extended<P, FirstEvaluator>: LazyChain<SourceItem<P>, Output = P::Item>,
{
    type Piped = Option<P::Item>;

    #[inline]
    fn step(self, input: P) -> Option<P::Item> {
        self.transform(input)
    }
}

impl<P, Pred> Transform<P> for Find<Pred>
where
    P: IntoLazySeq,
    Pred: FnMut(&P::Item) -> bool,
    P::Chain: ChainExtend<FindEvaluator<Pred>>,
    Extended<P, FindEvaluator<Pred>>: LazyChain<SourceItem<P>, Output = P::Item>,
{
    type Output = Option<P::Item>;

    #[inline]
    fn transform(self, input: P) -> Option<P::Item> {
        input
            .into_lazy_seq()
            .extended(FindEvaluator {
                predicate: self.predicate,
            })
            .run_to_single()
    }
}

impl<P, Pred> PipeStep<P> for Find<Pred>
where
    P: IntoLazySeq,
    Pred: FnMut(&P::Item) -> bool,
    P::Chain: ChainExtend<FindEvaluator<Pred>>,
    Extended<P, FindEvaluator<Pred>>: LazyChain<SourceItem<P>, Output = P::Item>,
{
    type Piped = Option<P::Item>;

    #[inline]
    fn step(self, input: P) -> Option<P::Item> {
        self.transform(input)
    }
}

impl<P, Pred> Transform<P> for FindIndex<Pred>
where
    P: IntoLazySeq,
    Pred: FnMut(&P::Item) -> bool,
    P::Chain: ChainExtend<FindIndexEvaluator<Pred>>,
    Extended<P, FindIndexEvaluator<Pred>>: LazyChain<SourceItem<P>, Output = usize>,
{
    type Output = Option<usize>;

    #[inline]
    fn transform(self, input: P) -> Option<usize> {
        input
            .into_lazy_seq()
            .extended(FindIndexEvaluator {
                predicate: self.predicate,
                index: 0,
            })
            .run_to_single()
    }
}

impl<P, Pred> PipeStep<P> for FindIndex<Pred>
where
    P: IntoLazySeq,
    Pred: FnMut(&P::Item) -> bool,
    P::Chain: ChainExtend<FindIndexEvaluator<Pred>>,
    Extended<P, FindIndexEvaluator<Pred>>: LazyChain<SourceItem<P>, Output = usize>,
{
    type Piped = Option<usize>;

    #[inline]
    fn step(self, input: P) -> Option<usize> {
        self.transform(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::map;
    use std::cell::Cell;

    #[test]
    fn first_takes_the_head() {
        assert_eq!(first().transform(vec![9, 8, 7]), Some(9));
    }

    #[test]
    fn first_of_empty_is_none() {
        assert_eq!(first().transform(Vec::<i32>::new()), None);
    }

    #[test]
    fn first_pulls_exactly_one_item() {
        let pulls = Cell::new(0);
        let found = crate::pipe!(
            vec![1, 2, 3],
            map(|value: i32| {
                pulls.set(pulls.get() + 1);
                value * 10
            }),
            first(),
        );

        assert_eq!(found, Some(10));
        assert_eq!(pulls.get(), 1);
    }

    #[test]
    fn find_stops_at_the_first_match() {
        let probes = Cell::new(0);
        let found = find(|value: &i32| {
            probes.set(probes.get() + 1);
            *value > 2
        })
        .transform(vec![1, 2, 3, 4]);

        assert_eq!(found, Some(3));
        assert_eq!(probes.get(), 3);
    }

    #[test]
    fn find_misses_cleanly() {
        assert_eq!(find(|value: &i32| *value > 9).transform(vec![1, 2]), None);
    }

    #[test]
    fn find_miss_probes_every_item_exactly_once() {
        let probes = Cell::new(0);
        let found = find(|value: &i32| {
            probes.set(probes.get() + 1);
            *value > 9
        })
        .transform(vec![1, 2, 3, 4]);

        assert_eq!(found, None);
        assert_eq!(probes.get(), 4);
    }

    #[test]
    fn find_index_counts_received_items() {
        let found = find_index(|value: &i32| *value == 30).transform(vec![10, 20, 30]);
        assert_eq!(found, Some(2));
    }

    #[test]
    fn find_index_sees_positions_after_upstream_stages() {
        let found = crate::pipe!(
            vec![1, 2, 3, 4],
            crate::ops::filter(|value: &i32| value % 2 == 0),
            find_index(|value: &i32| *value == 4),
        );
        assert_eq!(found, Some(1));
    }
}
