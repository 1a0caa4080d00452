//! Prefix-removing operations: `drop_first` and `drop_while`.

use crate::pipeline::{
    ChainExtend, Extended, IntoLazySeq, LazyChain, LazyEvaluator, LazyResult, LazySeq, PipeStep,
    SourceItem, Transform,
};

/// Creates an operation that discards the first `count` items.
///
/// Lazy-capable. Unlike `take`, dropping can never end the run early: the
/// stage merely swallows items until the count is spent.
///
/// Named `drop_first` rather than `drop` to stay clear of
/// [`std::mem::drop`].
///
/// # Examples
///
/// ```
/// use pipars::prelude::*;
///
/// let result = pipe!(vec![1, 2, 3, 4], drop_first(2));
/// assert_eq!(result, vec![3, 4]);
/// ```
#[inline]
#[must_use]
pub const fn drop_first(count: usize) -> DropFirst {
    DropFirst { count }
}

/// Creates an operation that discards items until `predicate` first fails;
/// the failing item and everything after it pass through untouched.
///
/// # Examples
///
/// ```
/// use pipars::prelude::*;
///
/// let result = pipe!(vec![1, 2, 9, 1], drop_while(|value: &i32| *value < 5));
/// assert_eq!(result, vec![9, 1]);
/// ```
#[inline]
#[must_use]
pub const fn drop_while<Pred>(predicate: Pred) -> DropWhile<Pred> {
    DropWhile { predicate }
}

/// The `drop_first` operation value. Built by [`drop_first`].
#[derive(Debug, Clone, Copy)]
pub struct DropFirst {
    count: usize,
}

/// The `drop_while` operation value. Built by [`drop_while`].
#[derive(Debug, Clone)]
pub struct DropWhile<Pred> {
    predicate: Pred,
}

/// Per-run evaluator behind [`drop_first`], owning the countdown.
#[derive(Debug, Clone)]
pub struct DropFirstEvaluator {
    remaining: usize,
}

impl<T> LazyEvaluator<T> for DropFirstEvaluator {
    type Output = T;

    fn evaluate(&mut self, item: T) -> LazyResult<T> {
        if self.remaining == 0 {
            LazyResult::next(item)
        } else {
            self.remaining -= 1;
            LazyResult::empty()
        }
    }
}

/// Per-run evaluator behind [`drop_while`], owning the still-dropping flag.
#[derive(Debug, Clone)]
pub struct DropWhileEvaluator<Pred> {
    predicate: Pred,
    dropping: bool,
}

impl<T, Pred> LazyEvaluator<T> for DropWhileEvaluator<Pred>
where
    Pred: FnMut(&T) -> bool,
{
    type Output = T;

    fn evaluate(&mut self, item: T) -> LazyResult<T> {
        if self.dropping {
            if (self.predicate)(&item) {
                return LazyResult::empty();
            }
            self.dropping = false;
        }
        LazyResult::next(item)
    }
}

impl<P> PipeStep<P> for DropFirst
where
    P: IntoLazySeq,
    P::Chain: ChainExtend<DropFirstEvaluator>,
{
    type Piped = LazySeq<P::Source, Extended<P, DropFirstEvaluator>>;

    #[inline]
    fn step(self, input: P) -> Self::Piped {
        input.into_lazy_seq().extended(DropFirstEvaluator {
            remaining: self.count,
        })
    }
}

impl<P> Transform<P> for DropFirst
where
    P: IntoLazySeq,
    P::Chain: ChainExtend<DropFirstEvaluator>,
    Extended<P, DropFirstEvaluator>: LazyChain<SourceItem<P>, Output = P::Item>,
{
    type Output = Vec<P::Item>;

    #[inline]
    fn transform(self, input: P) -> Vec<P::Item> {
        input
            .into_lazy_seq()
            .extended(DropFirstEvaluator {
                remaining: self.count,
            })
            .run_to_vec()
    }
}

impl<P, Pred> PipeStep<P> for DropWhile<Pred>
where
    P: IntoLazySeq,
    Pred: FnMut(&P::Item) -> bool,
    P::Chain: ChainExtend<DropWhileEvaluator<Pred>>,
{
    type Piped = LazySeq<P::Source, Extended<P, DropWhileEvaluator<Pred>>>;

    #[inline]
    fn step(self, input: P) -> Self::Piped {
        input.into_lazy_seq().extended(DropWhileEvaluator {
            predicate: self.predicate,
            dropping: true,
        })
    }
}

impl<P, Pred> Transform<P> for DropWhile<Pred>
where
    P: IntoLazySeq,
    Pred: FnMut(&P::Item) -> bool,
    P::Chain: ChainExtend<DropWhileEvaluator<Pred>>,
    Extended<P, DropWhileEvaluator<Pred>>: LazyChain<SourceItem<P>, Output = P::Item>,
{
    type Output = Vec<P::Item>;

    #[inline]
    fn transform(self, input: P) -> Vec<P::Item> {
        input
            .into_lazy_seq()
            .extended(DropWhileEvaluator {
                predicate: self.predicate,
                dropping: true,
            })
            .run_to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    #[case(0, vec![1, 2, 3])]
    #[case(2, vec![3])]
    #[case(3, Vec::new())]
    #[case(9, Vec::new())]
    fn drop_first_discards_a_prefix(#[case] count: usize, #[case] expected: Vec<i32>) {
        let result = drop_first(count).transform(vec![1, 2, 3]);
        assert_eq!(result, expected);
    }

    #[test]
    fn drop_while_keeps_the_failing_item() {
        let result = drop_while(|value: &i32| *value < 5).transform(vec![1, 4, 9, 2]);
        assert_eq!(result, vec![9, 2]);
    }

    #[test]
    fn drop_while_stops_probing_after_first_failure() {
        let probes = Cell::new(0);
        let result = drop_while(|value: &i32| {
            probes.set(probes.get() + 1);
            *value < 5
        })
        .transform(vec![1, 9, 1, 1]);

        assert_eq!(result, vec![9, 1, 1]);
        assert_eq!(probes.get(), 2);
    }

    #[test]
    fn drop_while_can_discard_everything() {
        let result = drop_while(|_value: &i32| true).transform(vec![1, 2, 3]);
        assert!(result.is_empty());
    }
}
