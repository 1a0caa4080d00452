//! Expanding operations: `flatten` and `flat_map`.

use crate::pipeline::{
    ChainExtend, Extended, IntoLazySeq, LazyChain, LazyEvaluator, LazyResult, LazySeq, PipeStep,
    SourceItem, Transform,
};

/// Creates an operation that splices one level of nesting into the stream.
///
/// Each incoming collection is expanded in order, and every produced value
/// runs through the remaining stages before the next source item is pulled.
/// A downstream stage finishing mid-expansion abandons the rest of the
/// burst.
///
/// # Examples
///
/// ```
/// use pipars::prelude::*;
///
/// let result = pipe!(vec![vec![1, 2], vec![], vec![3]], flatten());
/// assert_eq!(result, vec![1, 2, 3]);
/// ```
#[inline]
#[must_use]
pub const fn flatten() -> Flatten {
    Flatten
}

/// Creates an operation that maps every item to a collection and splices
/// the results into the stream.
///
/// `flat_map(transform)` behaves like `map(transform)` followed by
/// [`flatten`], in a single stage.
///
/// # Examples
///
/// ```
/// use pipars::prelude::*;
///
/// let result = pipe!(vec![1, 2, 3], flat_map(|value: i32| vec![value, -value]));
/// assert_eq!(result, vec![1, -1, 2, -2, 3, -3]);
/// ```
#[inline]
#[must_use]
pub const fn flat_map<F>(transform: F) -> FlatMap<F> {
    FlatMap { transform }
}

/// The `flatten` operation value. Built by [`flatten`].
#[derive(Debug, Clone, Copy)]
pub struct Flatten;

/// The `flat_map` operation value. Built by [`flat_map`].
#[derive(Debug, Clone)]
pub struct FlatMap<F> {
    transform: F,
}

/// Per-run evaluator behind [`flatten`].
#[derive(Debug, Clone, Copy)]
pub struct FlattenEvaluator;

impl<Col> LazyEvaluator<Col> for FlattenEvaluator
where
    Col: IntoIterator,
{
    type Output = Col::Item;

    #[inline]
    fn evaluate(&mut self, item: Col) -> LazyResult<Col::Item> {
        LazyResult::many(item.into_iter().collect())
    }
}

/// Per-run evaluator behind [`flat_map`].
#[derive(Debug, Clone)]
pub struct FlatMapEvaluator<F> {
    transform: F,
}

impl<In, Col, F> LazyEvaluator<In> for FlatMapEvaluator<F>
where
    Col: IntoIterator,
    F: FnMut(In) -> Col,
{
    type Output = Col::Item;

    #[inline]
    fn evaluate(&mut self, item: In) -> LazyResult<Col::Item> {
        LazyResult::many((self.transform)(item).into_iter().collect())
    }
}

impl<P> PipeStep<P> for Flatten
where
    P: IntoLazySeq,
    P::Item: IntoIterator,
    P::Chain: ChainExtend<FlattenEvaluator>,
{
    type Piped = LazySeq<P::Source, Extended<P, FlattenEvaluator>>;

    #[inline]
    fn step(self, input: P) -> Self::Piped {
        input.into_lazy_seq().extended(FlattenEvaluator)
    }
}

impl<P> Transform<P> for Flatten
where
    P: IntoLazySeq,
    P::Item: IntoIterator,
    P::Chain: ChainExtend<FlattenEvaluator>,
    Extended<P, FlattenEvaluator>:
        LazyChain<SourceItem<P>, Output = <P::Item as IntoIterator>::Item>,
{
    type Output = Vec<<P::Item as IntoIterator>::Item>;

    #[inline]
    fn transform(self, input: P) -> Self::Output {
        input
            .into_lazy_seq()
            .extended(FlattenEvaluator)
            .run_to_vec()
    }
}

impl<P, Col, F> PipeStep<P> for FlatMap<F>
where
    P: IntoLazySeq,
    Col: IntoIterator,
    F: FnMut(P::Item) -> Col,
    P::Chain: ChainExtend<FlatMapEvaluator<F>>,
{
    type Piped = LazySeq<P::Source, Extended<P, FlatMapEvaluator<F>>>;

    #[inline]
    fn step(self, input: P) -> Self::Piped {
        input.into_lazy_seq().extended(FlatMapEvaluator {
            transform: self.transform,
        })
    }
}

impl<P, Col, F> Transform<P> for FlatMap<F>
where
    P: IntoLazySeq,
    Col: IntoIterator,
    F: FnMut(P::Item) -> Col,
    P::Chain: ChainExtend<FlatMapEvaluator<F>>,
    Extended<P, FlatMapEvaluator<F>>: LazyChain<SourceItem<P>, Output = Col::Item>,
{
    type Output = Vec<Col::Item>;

    #[inline]
    fn transform(self, input: P) -> Vec<Col::Item> {
        input
            .into_lazy_seq()
            .extended(FlatMapEvaluator {
                transform: self.transform,
            })
            .run_to_vec()
    }
}
