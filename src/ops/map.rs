//! Transforming operations: `map` and `map_indexed`.

use crate::pipeline::{
    ChainExtend, Extended, IntoLazySeq, LazyChain, LazyEvaluator, LazyResult, LazySeq, PipeStep,
    SourceItem, Transform,
};

/// Creates an operation that transforms every item with `transform`.
///
/// Lazy-capable: inside a pipeline, items are transformed one at a time as
/// downstream stages demand them, so a following `take` or `find` bounds how
/// often `transform` runs.
///
/// # Examples
///
/// ```
/// use pipars::prelude::*;
///
/// let result = pipe!(vec![1, 2, 3], map(|value| value + 1));
/// assert_eq!(result, vec![2, 3, 4]);
/// ```
///
/// Standalone, data last:
///
/// ```
/// use pipars::prelude::*;
///
/// let lengths = map(|word: &str| word.len()).transform(vec!["a", "bcd"]);
/// assert_eq!(lengths, vec![1, 3]);
/// ```
#[inline]
#[must_use]
pub const fn map<F>(transform: F) -> Map<F> {
    Map { transform }
}

/// Creates an operation that transforms every item with access to its index
/// and to the items delivered so far.
///
/// The callback receives `(item, index, seen)`, where `index` counts the
/// items this stage has received and `seen` is the slice of those items up
/// to and including the current one.
///
/// # Examples
///
/// ```
/// use pipars::prelude::*;
///
/// let result = pipe!(
///     vec!['a', 'b'],
///     map_indexed(|value: char, index, _seen: &[char]| (index, value)),
/// );
/// assert_eq!(result, vec![(0, 'a'), (1, 'b')]);
/// ```
#[inline]
#[must_use]
pub const fn map_indexed<F>(transform: F) -> MapIndexed<F> {
    MapIndexed { transform }
}

/// The `map` operation value. Built by [`map`].
#[derive(Debug, Clone)]
pub struct Map<F> {
    transform: F,
}

/// The `map_indexed` operation value. Built by [`map_indexed`].
#[derive(Debug, Clone)]
pub struct MapIndexed<F> {
    transform: F,
}

/// Per-run evaluator behind [`map`].
#[derive(Debug, Clone)]
pub struct MapEvaluator<F> {
    transform: F,
}

impl<In, Out, F> LazyEvaluator<In> for MapEvaluator<F>
where
    F: FnMut(In) -> Out,
{
    type Output = Out;

    #[inline]
    fn evaluate(&mut self, item: In) -> LazyResult<Out> {
        LazyResult::next((self.transform)(item))
    }
}

/// Per-run evaluator behind [`map_indexed`], owning the index counter and
/// the seen-items buffer.
#[derive(Debug, Clone)]
pub struct MapIndexedEvaluator<T, F> {
    transform: F,
    index: usize,
    seen: Vec<T>,
}

impl<T, Out, F> LazyEvaluator<T> for MapIndexedEvaluator<T, F>
where
    T: Clone,
    F: FnMut(T, usize, &[T]) -> Out,
{
    type Output = Out;

    fn evaluate(&mut self, item: T) -> LazyResult<Out> {
        self.seen.push(item.clone());
        let index = self.index;
        self.index += 1;
        LazyResult::next((self.transform)(item, index, &self.seen))
    }
}

impl<P, Out, F> PipeStep<P> for Map<F>
where
    P: IntoLazySeq,
    F: FnMut(P::Item) -> Out,
    P::Chain: ChainExtend<MapEvaluator<F>>,
{
    type Piped = LazySeq<P::Source, Extended<P, MapEvaluator<F>>>;

    #[inline]
    fn step(self, input: P) -> Self::Piped {
        input.into_lazy_seq().extended(MapEvaluator {
            transform: self.transform,
        })
    }
}

impl<P, Out, F> Transform<P> for Map<F>
where
    P: IntoLazySeq,
    F: FnMut(P::Item) -> Out,
    P::Chain: ChainExtend<MapEvaluator<F>>,
    Extended<P, MapEvaluator<F>>: LazyChain<SourceItem<P>, Output = Out>,
{
    type Output = Vec<Out>;

    #[inline]
    fn transform(self, input: P) -> Vec<Out> {
        input
            .into_lazy_seq()
            .extended(MapEvaluator {
                transform: self.transform,
            })
            .run_to_vec()
    }
}

impl<P, Out, F> PipeStep<P> for MapIndexed<F>
where
    P: IntoLazySeq,
    P::Item: Clone,
    F: FnMut(P::Item, usize, &[P::Item]) -> Out,
    P::Chain: ChainExtend<MapIndexedEvaluator<P::Item, F>>,
{
    type Piped = LazySeq<P::Source, Extended<P, MapIndexedEvaluator<P::Item, F>>>;

    #[inline]
    fn step(self, input: P) -> Self::Piped {
        input.into_lazy_seq().extended(MapIndexedEvaluator {
            transform: self.transform,
            index: 0,
            seen: Vec::new(),
        })
    }
}

impl<P, Out, F> Transform<P> for MapIndexed<F>
where
    P: IntoLazySeq,
    P::Item: Clone,
    F: FnMut(P::Item, usize, &[P::Item]) -> Out,
    P::Chain: ChainExtend<MapIndexedEvaluator<P::Item, F>>,
    Extended<P, MapIndexedEvaluator<P::Item, F>>: LazyChain<SourceItem<P>, Output = Out>,
{
    type Output = Vec<Out>;

    #[inline]
    fn transform(self, input: P) -> Vec<Out> {
        input
            .into_lazy_seq()
            .extended(MapIndexedEvaluator {
                transform: self.transform,
                index: 0,
                seen: Vec::new(),
            })
            .run_to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::take;
    use std::cell::Cell;

    #[test]
    fn map_transforms_every_item() {
        let result = map(|value: i32| value * 2).transform(vec![1, 2, 3]);
        assert_eq!(result, vec![2, 4, 6]);
    }

    #[test]
    fn map_handles_empty_input() {
        let result = map(|value: i32| value * 2).transform(Vec::new());
        assert!(result.is_empty());
    }

    #[test]
    fn map_is_lazy_inside_a_pipeline() {
        let calls = Cell::new(0);
        let result = crate::pipe!(
            vec![1, 2, 3, 4, 5],
            map(|value: i32| {
                calls.set(calls.get() + 1);
                value
            }),
            take(2),
        );

        assert_eq!(result, vec![1, 2]);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn map_works_on_string_sources() {
        let result = map(|character: char| character.to_ascii_uppercase()).transform("abc");
        assert_eq!(result, vec!['A', 'B', 'C']);
    }

    #[test]
    fn map_indexed_counts_from_zero() {
        let result =
            map_indexed(|value: i32, index, _seen: &[i32]| (index, value)).transform(vec![7, 8]);
        assert_eq!(result, vec![(0, 7), (1, 8)]);
    }

    #[test]
    fn map_indexed_seen_includes_the_current_item() {
        let result = map_indexed(|value: i32, _index, seen: &[i32]| (value, seen.to_vec()))
            .transform(vec![5, 6]);
        assert_eq!(result, vec![(5, vec![5]), (6, vec![5, 6])]);
    }
}
