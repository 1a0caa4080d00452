//! Pairing operation: `zip`.

use crate::pipeline::{
    ChainExtend, Extended, IntoLazySeq, LazyChain, LazyEvaluator, LazyResult, LazySeq, PipeStep,
    SourceItem, Transform,
};

/// Creates an operation that pairs each item with the next value from
/// `other`.
///
/// The output length is the shorter of the two sides. Lazy-capable: once
/// `other` is exhausted the run ends, so an infinite-ish source zipped with
/// a short `Vec` pulls only as many items as `other` provides.
///
/// # Examples
///
/// ```
/// use pipars::prelude::*;
///
/// let result = pipe!(vec![1, 2, 3], zip(vec!["one", "two"]));
/// assert_eq!(result, vec![(1, "one"), (2, "two")]);
/// ```
#[inline]
#[must_use]
pub const fn zip<U>(other: Vec<U>) -> Zip<U> {
    Zip { other }
}

/// The `zip` operation value. Built by [`zip`].
#[derive(Debug, Clone)]
pub struct Zip<U> {
    other: Vec<U>,
}

/// Per-run evaluator behind [`zip`], owning the right-hand side.
#[derive(Debug, Clone)]
pub struct ZipEvaluator<U> {
    other: std::vec::IntoIter<U>,
}

impl<T, U> LazyEvaluator<T> for ZipEvaluator<U> {
    type Output = (T, U);

    fn evaluate(&mut self, item: T) -> LazyResult<(T, U)> {
        match self.other.next() {
            Some(other_item) if self.other.as_slice().is_empty() => {
                LazyResult::next_and_stop((item, other_item))
            }
            Some(other_item) => LazyResult::next((item, other_item)),
            None => LazyResult::empty_and_stop(),
        }
    }
}

impl<P, U> PipeStep<P> for Zip<U>
where
    P: IntoLazySeq,
    P::Chain: ChainExtend<ZipEvaluator<U>>,
{
    type Piped = LazySeq<P::Source, Extended<P, ZipEvaluator<U>>>;

    #[inline]
    fn step(self, input: P) -> Self::Piped {
        input.into_lazy_seq().extended(ZipEvaluator {
            other: self.other.into_iter(),
        })
    }
}

impl<P, U> Transform<P> for Zip<U>
where
    P: IntoLazySeq,
    P::Chain: ChainExtend<ZipEvaluator<U>>,
    Extended<P, ZipEvaluator<U>>: LazyChain<SourceItem<P>, Output = (P::Item, U)>,
{
    type Output = Vec<(P::Item, U)>;

    #[inline]
    fn transform(self, input: P) -> Vec<(P::Item, U)> {
        input
            .into_lazy_seq()
            .extended(ZipEvaluator {
                other: self.other.into_iter(),
            })
            .run_to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::map;
    use std::cell::Cell;

    #[test]
    fn zip_pairs_in_order() {
        let result = zip(vec!['a', 'b']).transform(vec![1, 2]);
        assert_eq!(result, vec![(1, 'a'), (2, 'b')]);
    }

    #[test]
    fn zip_truncates_to_the_shorter_left_side() {
        let result = zip(vec!['a', 'b', 'c']).transform(vec![1]);
        assert_eq!(result, vec![(1, 'a')]);
    }

    #[test]
    fn zip_stops_pulling_when_the_right_side_runs_out() {
        let pulls = Cell::new(0);
        let result = crate::pipe!(
            vec![1, 2, 3, 4, 5],
            map(|value: i32| {
                pulls.set(pulls.get() + 1);
                value
            }),
            zip(vec!["x", "y"]),
        );

        assert_eq!(result, vec![(1, "x"), (2, "y")]);
        assert_eq!(pulls.get(), 2);
    }

    #[test]
    fn zip_with_empty_right_side_yields_nothing() {
        let result = zip(Vec::<char>::new()).transform(vec![1, 2]);
        assert!(result.is_empty());
    }
}
