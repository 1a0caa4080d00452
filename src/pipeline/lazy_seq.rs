//! The pipeline driver: a source of items plus the fused chain they run
//! through.

use std::fmt;

use super::{ChainEnd, ChainExtend, LazyChain};

/// Type alias: the chain of input `P` after appending evaluator `E`.
///
/// Shortens the operation impls, which would otherwise spell the projection
/// `<<P as IntoLazySeq>::Chain as ChainExtend<E>>::Extended` in full.
pub type Extended<P, E> = <<P as IntoLazySeq>::Chain as ChainExtend<E>>::Extended;

/// Type alias: the item type the source iterator of input `P` yields.
pub type SourceItem<P> = <<P as IntoLazySeq>::Source as Iterator>::Item;

/// A deferred pipeline run.
///
/// `LazySeq` pairs a `source` of items with the fused `chain` those items
/// will be routed through. Nothing is pulled from the source until one of
/// the `run_*` methods is called; until then, appending further stages via
/// [`extended`](Self::extended) is free.
///
/// Sequences are single-use by construction: running consumes the value,
/// and with it the per-run evaluator state inside the chain.
pub struct LazySeq<I, C> {
    source: I,
    chain: C,
}

impl<I: Iterator> LazySeq<I, ChainEnd> {
    /// Wraps a bare iterator as a sequence with no stages attached.
    #[inline]
    #[must_use]
    pub const fn new(source: I) -> Self {
        Self {
            source,
            chain: ChainEnd,
        }
    }
}

impl<I, C> LazySeq<I, C> {
    /// Returns the sequence with `evaluator` appended as the last stage.
    #[inline]
    #[must_use]
    pub fn extended<E>(self, evaluator: E) -> LazySeq<I, C::Extended>
    where
        C: ChainExtend<E>,
    {
        LazySeq {
            source: self.source,
            chain: self.chain.extend(evaluator),
        }
    }
}

impl<I, C> LazySeq<I, C>
where
    I: Iterator,
    C: LazyChain<I::Item>,
{
    /// Pulls items from the source until it is exhausted or the chain
    /// signals `done`, collecting every survivor in order.
    #[must_use]
    pub fn run_to_vec(mut self) -> Vec<C::Output> {
        let mut sink = Vec::new();
        for item in self.source.by_ref() {
            if self.chain.feed(item, &mut sink) {
                break;
            }
        }
        sink
    }

    /// Runs the pipeline and returns the first survivor, if any.
    ///
    /// Intended for chains whose final evaluator emits at most one value and
    /// signals `done` alongside it, the way `first` and `find` do.
    #[must_use]
    pub fn run_to_single(self) -> Option<C::Output> {
        self.run_to_vec().into_iter().next()
    }
}

impl<I, C> fmt::Debug for LazySeq<I, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("LazySeq").finish_non_exhaustive()
    }
}

// ============================================================================
// IntoLazySeq
// ============================================================================

/// Conversion into a runnable [`LazySeq`].
///
/// Implemented by the container types a pipeline can start from, and by
/// [`LazySeq`] itself (as the identity), so every operation accepts plain
/// data and half-built pipelines through the same bound.
pub trait IntoLazySeq {
    /// The element type the converted sequence yields.
    type Item;
    /// The source iterator driving the run.
    type Source: Iterator;
    /// The chain of stages already fused onto the source.
    type Chain: LazyChain<<Self::Source as Iterator>::Item, Output = Self::Item>;

    /// Performs the conversion.
    fn into_lazy_seq(self) -> LazySeq<Self::Source, Self::Chain>;
}

impl<I, C> IntoLazySeq for LazySeq<I, C>
where
    I: Iterator,
    C: LazyChain<I::Item>,
{
    type Item = C::Output;
    type Source = I;
    type Chain = C;

    #[inline]
    fn into_lazy_seq(self) -> Self {
        self
    }
}

impl<T> IntoLazySeq for Vec<T> {
    type Item = T;
    type Source = std::vec::IntoIter<T>;
    type Chain = ChainEnd;

    #[inline]
    fn into_lazy_seq(self) -> LazySeq<Self::Source, Self::Chain> {
        LazySeq::new(self.into_iter())
    }
}

impl<'a, T: Clone> IntoLazySeq for &'a [T] {
    type Item = T;
    type Source = std::iter::Cloned<std::slice::Iter<'a, T>>;
    type Chain = ChainEnd;

    #[inline]
    fn into_lazy_seq(self) -> LazySeq<Self::Source, Self::Chain> {
        LazySeq::new(self.iter().cloned())
    }
}

impl<T, const N: usize> IntoLazySeq for [T; N] {
    type Item = T;
    type Source = std::array::IntoIter<T, N>;
    type Chain = ChainEnd;

    #[inline]
    fn into_lazy_seq(self) -> LazySeq<Self::Source, Self::Chain> {
        LazySeq::new(self.into_iter())
    }
}

impl<'a> IntoLazySeq for &'a str {
    type Item = char;
    type Source = std::str::Chars<'a>;
    type Chain = ChainEnd;

    #[inline]
    fn into_lazy_seq(self) -> LazySeq<Self::Source, Self::Chain> {
        LazySeq::new(self.chars())
    }
}

impl IntoLazySeq for String {
    type Item = char;
    type Source = std::vec::IntoIter<char>;
    type Chain = ChainEnd;

    #[inline]
    fn into_lazy_seq(self) -> LazySeq<Self::Source, Self::Chain> {
        LazySeq::new(self.chars().collect::<Vec<_>>().into_iter())
    }
}

// ============================================================================
// Materialize
// ============================================================================

/// Eager conversion of any pipeline input into a `Vec` of its items.
///
/// The whole-collection operations (`sort_by`, `reverse`, `fold`) go through
/// this trait: plain containers convert directly, while a [`LazySeq`] first
/// runs its pending fused stages to completion.
pub trait Materialize {
    /// The element type of the materialized items.
    type Item;

    /// Returns every item as an owned `Vec`.
    fn materialize(self) -> Vec<Self::Item>;
}

impl<I, C> Materialize for LazySeq<I, C>
where
    I: Iterator,
    C: LazyChain<I::Item>,
{
    type Item = C::Output;

    #[inline]
    fn materialize(self) -> Vec<C::Output> {
        self.run_to_vec()
    }
}

impl<T> Materialize for Vec<T> {
    type Item = T;

    #[inline]
    fn materialize(self) -> Vec<T> {
        self
    }
}

impl<T: Clone> Materialize for &[T] {
    type Item = T;

    #[inline]
    fn materialize(self) -> Vec<T> {
        self.to_vec()
    }
}

impl<T, const N: usize> Materialize for [T; N] {
    type Item = T;

    #[inline]
    fn materialize(self) -> Vec<T> {
        self.into_iter().collect()
    }
}

impl Materialize for &str {
    type Item = char;

    #[inline]
    fn materialize(self) -> Vec<char> {
        self.chars().collect()
    }
}

impl Materialize for String {
    type Item = char;

    #[inline]
    fn materialize(self) -> Vec<char> {
        self.chars().collect()
    }
}

static_assertions::assert_impl_all!(
    LazySeq<std::vec::IntoIter<i32>, ChainEnd>: Send, Sync, fmt::Debug
);
