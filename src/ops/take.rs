//! Prefix operations: `take` and `take_while`.

use crate::pipeline::{
    ChainExtend, Extended, IntoLazySeq, LazyChain, LazyEvaluator, LazyResult, LazySeq, PipeStep,
    SourceItem, Transform,
};

/// Creates an operation that keeps the first `count` items.
///
/// Lazy-capable, and the usual reason a pipeline short-circuits: the run
/// ends the moment the last kept item has been routed through the remaining
/// stages. `take(0)` produces nothing and ends the run on the first item it
/// receives.
///
/// # Examples
///
/// ```
/// use pipars::prelude::*;
///
/// let result = pipe!(vec![1, 2, 3, 4], take(2));
/// assert_eq!(result, vec![1, 2]);
/// ```
#[inline]
#[must_use]
pub const fn take(count: usize) -> Take {
    Take { count }
}

/// Creates an operation that keeps items until `predicate` first fails.
///
/// The failing item itself is dropped, and the run ends there.
///
/// # Examples
///
/// ```
/// use pipars::prelude::*;
///
/// let result = pipe!(vec![1, 2, 9, 1], take_while(|value: &i32| *value < 5));
/// assert_eq!(result, vec![1, 2]);
/// ```
#[inline]
#[must_use]
pub const fn take_while<Pred>(predicate: Pred) -> TakeWhile<Pred> {
    TakeWhile { predicate }
}

/// The `take` operation value. Built by [`take`].
#[derive(Debug, Clone, Copy)]
pub struct Take {
    count: usize,
}

/// The `take_while` operation value. Built by [`take_while`].
#[derive(Debug, Clone)]
pub struct TakeWhile<Pred> {
    predicate: Pred,
}

/// Per-run evaluator behind [`take`], owning the countdown.
#[derive(Debug, Clone)]
pub struct TakeEvaluator {
    remaining: usize,
}

impl<T> LazyEvaluator<T> for TakeEvaluator {
    type Output = T;

    fn evaluate(&mut self, item: T) -> LazyResult<T> {
        if self.remaining == 0 {
            return LazyResult::empty_and_stop();
        }
        self.remaining -= 1;
        if self.remaining == 0 {
            LazyResult::next_and_stop(item)
        } else {
            LazyResult::next(item)
        }
    }
}

/// Per-run evaluator behind [`take_while`].
#[derive(Debug, Clone)]
pub struct TakeWhileEvaluator<Pred> {
    predicate: Pred,
}

impl<T, Pred> LazyEvaluator<T> for TakeWhileEvaluator<Pred>
where
    Pred: FnMut(&T) -> bool,
{
    type Output = T;

    #[inline]
    fn evaluate(&mut self, item: T) -> LazyResult<T> {
        if (self.predicate)(&item) {
            LazyResult::next(item)
        } else {
            LazyResult::empty_and_stop()
        }
    }
}

impl<P> PipeStep<P> for Take
where
    P: IntoLazySeq,
    P::Chain: ChainExtend<TakeEvaluator>,
{
    type Piped = LazySeq<P::Source, Extended<P, TakeEvaluator>>;

    #[inline]
    fn step(self, input: P) -> Self::Piped {
        input.into_lazy_seq().extended(TakeEvaluator {
            remaining: self.count,
        })
    }
}

impl<P> Transform<P> for Take
where
    P: IntoLazySeq,
    P::Chain: ChainExtend<TakeEvaluator>,
    Extended<P, TakeEvaluator>: LazyChain<SourceItem<P>, Output = P::Item>,
{
    type Output = Vec<P::Item>;

    #[inline]
    fn transform(self, input: P) -> Vec<P::Item> {
        input
            .into_lazy_seq()
            .extended(TakeEvaluator {
                remaining: self.count,
            })
            .run_to_vec()
    }
}

impl<P, Pred> PipeStep<P> for TakeWhile<Pred>
where
    P: IntoLazySeq,
    Pred: FnMut(&P::Item) -> bool,
    P::Chain: ChainExtend<TakeWhileEvaluator<Pred>>,
{
    type Piped = LazySeq<P::Source, Extended<P, TakeWhileEvaluator<Pred>>>;

    #[inline]
    fn step(self, input: P) -> Self::Piped {
        input.into_lazy_seq().extended(TakeWhileEvaluator {
            predicate: self.predicate,
        })
    }
}

impl<P, Pred> Transform<P> for TakeWhile<Pred>
where
    P: IntoLazySeq,
    Pred: FnMut(&P::Item) -> bool,
    P::Chain: ChainExtend<TakeWhileEvaluator<Pred>>,
    Extended<P, TakeWhileEvaluator<Pred>>: LazyChain<SourceItem<P>, Output = P::Item>,
{
    type Output = Vec<P::Item>;

    #[inline]
    fn transform(self, input: P) -> Vec<P::Item> {
        input
            .into_lazy_seq()
            .extended(TakeWhileEvaluator {
                predicate: self.predicate,
            })
            .run_to_vec()
    }
}
