//! Dropping operations: `filter` and `filter_indexed`.

use crate::pipeline::{
    ChainExtend, Extended, IntoLazySeq, LazyChain, LazyEvaluator, LazyResult, LazySeq, PipeStep,
    SourceItem, Transform,
};

/// Creates an operation that keeps only the items satisfying `predicate`.
///
/// Lazy-capable: items are tested one at a time, and a dropped item never
/// reaches the stages after this one.
///
/// # Examples
///
/// ```
/// use pipars::prelude::*;
///
/// let result = pipe!(vec![1, 2, 3, 4], filter(|value: &i32| value % 2 == 0));
/// assert_eq!(result, vec![2, 4]);
/// ```
#[inline]
#[must_use]
pub const fn filter<Pred>(predicate: Pred) -> Filter<Pred> {
    Filter { predicate }
}

/// Creates an operation that keeps items by predicate, with access to the
/// item's index and the items delivered so far.
///
/// The callback receives `(&item, index, seen)`; `seen` includes the current
/// item, and `index` counts received items, not survivors.
#[inline]
#[must_use]
pub const fn filter_indexed<Pred>(predicate: Pred) -> FilterIndexed<Pred> {
    FilterIndexed { predicate }
}

/// The `filter` operation value. Built by [`filter`].
#[derive(Debug, Clone)]
pub struct Filter<Pred> {
    predicate: Pred,
}

/// The `filter_indexed` operation value. Built by [`filter_indexed`].
#[derive(Debug, Clone)]
pub struct FilterIndexed<Pred> {
    predicate: Pred,
}

/// Per-run evaluator behind [`filter`].
#[derive(Debug, Clone)]
pub struct FilterEvaluator<Pred> {
    predicate: Pred,
}

impl<T, Pred> LazyEvaluator<T> for FilterEvaluator<Pred>
where
    Pred: FnMut(&T) -> bool,
{
    type Output = T;

    #[inline]
    fn evaluate(&mut self, item: T) -> LazyResult<T> {
        if (self.predicate)(&item) {
            LazyResult::next(item)
        } else {
            LazyResult::empty()
        }
    }
}

/// Per-run evaluator behind [`filter_indexed`], owning the index counter
/// and the seen-items buffer.
#[derive(Debug, Clone)]
pub struct FilterIndexedEvaluator<T, Pred> {
    predicate: Pred,
    index: usize,
    seen: Vec<T>,
}

impl<T, Pred> LazyEvaluator<T> for FilterIndexedEvaluator<T, Pred>
where
    T: Clone,
    Pred: FnMut(&T, usize, &[T]) -> bool,
{
    type Output = T;

    fn evaluate(&mut self, item: T) -> LazyResult<T> {
        self.seen.push(item.clone());
        let index = self.index;
        self.index += 1;
        if (self.predicate)(&item, index, &self.seen) {
            LazyResult::next(item)
        } else {
            LazyResult::empty()
        }
    }
}

impl<P, Pred> PipeStep<P> for Filter<Pred>
where
    P: IntoLazySeq,
    Pred: FnMut(&P::Item) -> bool,
    P::Chain: ChainExtend<FilterEvaluator<Pred>>,
{
    type Piped = LazySeq<P::Source, Extended<P, FilterEvaluator<Pred>>>;

    #[inline]
    fn step(self, input: P) -> Self::Piped {
        input.into_lazy_seq().extended(FilterEvaluator {
            predicate: self.predicate,
        })
    }
}

impl<P, Pred> Transform<P> for Filter<Pred>
where
    P: IntoLazySeq,
    Pred: FnMut(&P::Item) -> bool,
    P::Chain: ChainExtend<FilterEvaluator<Pred>>,
    Extended<P, FilterEvaluator<Pred>>: LazyChain<SourceItem<P>, Output = P::Item>,
{
    type Output = Vec<P::Item>;

    #[inline]
    fn transform(self, input: P) -> Vec<P::Item> {
        input
            .into_lazy_seq()
            .extended(FilterEvaluator {
                predicate: self.predicate,
            })
            .run_to_vec()
    }
}

impl<P, Pred> PipeStep<P> for FilterIndexed<Pred>
where
    P: IntoLazySeq,
    P::Item: Clone,
    Pred: FnMut(&P::Item, usize, &[P::Item]) -> bool,
    P::Chain: ChainExtend<FilterIndexedEvaluator<P::Item, Pred>>,
{
    type Piped = LazySeq<P::Source, Extended<P, FilterIndexedEvaluator<P::Item, Pred>>>;

    #[inline]
    fn step(self, input: P) -> Self::Piped {
        input.into_lazy_seq().extended(FilterIndexedEvaluator {
            predicate: self.predicate,
            index: 0,
            seen: Vec::new(),
        })
    }
}

impl<P, Pred> Transform<P> for FilterIndexed<Pred>
where
    P: IntoLazySeq,
    P::Item: Clone,
    Pred: FnMut(&P::Item, usize, &[P::Item]) -> bool,
    P::Chain: ChainExtend<FilterIndexedEvaluator<P::Item, Pred>>,
    Extended<P, FilterIndexedEvaluator<P::Item, Pred>>: LazyChain<SourceItem<P>, Output = P::Item>,
{
    type Output = Vec<P::Item>;

    #[inline]
    fn transform(self, input: P) -> Vec<P::Item> {
        input
            .into_lazy_seq()
            .extended(FilterIndexedEvaluator {
                predicate: self.predicate,
                index: 0,
                seen: Vec::new(),
            })
            .run_to_vec()
    }
}
