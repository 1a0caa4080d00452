//! The fused stage chain walked once per source item.
//!
//! A chain is a typed, heterogeneous list of evaluators terminated by
//! [`ChainEnd`]. Feeding an item walks the links in stage order: each link's
//! evaluator consumes the current value, and the link routes whatever came
//! out to the remainder of the chain. Values that survive the final link
//! land in the caller's sink.

use super::{LazyEvaluator, LazyResult};

/// A runnable remainder of a pipeline.
///
/// `feed` returns `true` when the chain has concluded that no further source
/// item can contribute output, which lets the driver stop pulling early.
pub trait LazyChain<In> {
    /// The item type that survives the whole chain.
    type Output;

    /// Routes one item through the chain, appending survivors to `sink`.
    ///
    /// Returns `true` to request that the driver stop pulling items.
    fn feed(&mut self, item: In, sink: &mut Vec<Self::Output>) -> bool;
}

/// The empty chain: every fed item is a survivor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChainEnd;

impl<T> LazyChain<T> for ChainEnd {
    type Output = T;

    #[inline]
    fn feed(&mut self, item: T, sink: &mut Vec<T>) -> bool {
        sink.push(item);
        false
    }
}

/// One evaluator followed by the rest of the chain.
///
/// Built through [`ChainExtend`]; the type spells out the full stage list,
/// so a fused `map` then `take` chain reads as
/// `ChainLink<MapEvaluator<_>, ChainLink<TakeEvaluator, ChainEnd>>`.
#[derive(Debug, Clone)]
pub struct ChainLink<E, N> {
    evaluator: E,
    next: N,
}

impl<In, E, N> LazyChain<In> for ChainLink<E, N>
where
    E: LazyEvaluator<In>,
    N: LazyChain<E::Output>,
{
    type Output = N::Output;

    fn feed(&mut self, item: In, sink: &mut Vec<Self::Output>) -> bool {
        match self.evaluator.evaluate(item) {
            LazyResult::Empty { done } => done,
            LazyResult::Next { value, done } => {
                // A `done` verdict still lets its value finish the rest of
                // the chain before the driver is told to stop.
                let downstream_stop = self.next.feed(value, sink);
                done || downstream_stop
            }
            LazyResult::Many { values, done } => {
                for value in values {
                    if self.next.feed(value, sink) {
                        return true;
                    }
                }
                done
            }
        }
    }
}

/// Appends an evaluator at the tail of a chain, preserving stage order.
pub trait ChainExtend<E>: Sized {
    /// The chain type produced by the append.
    type Extended;

    /// Consumes the chain and returns it with `evaluator` as the last stage.
    fn extend(self, evaluator: E) -> Self::Extended;
}

impl<E> ChainExtend<E> for ChainEnd {
    type Extended = ChainLink<E, Self>;

    #[inline]
    fn extend(self, evaluator: E) -> Self::Extended {
        ChainLink {
            evaluator,
            next: Self,
        }
    }
}

impl<E, Head, Tail> ChainExtend<E> for ChainLink<Head, Tail>
where
    Tail: ChainExtend<E>,
{
    type Extended = ChainLink<Head, Tail::Extended>;

    #[inline]
    fn extend(self, evaluator: E) -> Self::Extended {
        ChainLink {
            evaluator: self.evaluator,
            next: self.next.extend(evaluator),
        }
    }
}

static_assertions::assert_impl_all!(ChainEnd: Send, Sync, Clone, Copy);
