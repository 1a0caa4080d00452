//! The per-item verdict produced by lazy evaluators.
//!
//! Every lazy-capable operation reduces to a function from one input item to
//! a [`LazyResult`]: zero, one, or many output values, plus a `done` flag
//! that asks the pipeline driver to stop pulling from the source.

/// The outcome of feeding a single item to a
/// [`LazyEvaluator`](crate::pipeline::LazyEvaluator).
///
/// The three variants encode how many values the item produced. The `done`
/// flag is orthogonal to that count: it only means "no later source item can
/// contribute output", so an evaluator can emit a value *and* end the run in
/// the same verdict, as `take` does on its last item.
///
/// # Examples
///
/// ```rust
/// use pipars::pipeline::LazyResult;
///
/// let kept: LazyResult<i32> = LazyResult::next(7);
/// assert!(kept.has_output());
/// assert!(!kept.is_done());
///
/// let last: LazyResult<i32> = LazyResult::next_and_stop(7);
/// assert!(last.has_output());
/// assert!(last.is_done());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LazyResult<T> {
    /// The item produced no output value.
    Empty {
        /// Stop pulling further items from the source.
        done: bool,
    },
    /// The item produced exactly one output value.
    Next {
        /// The produced value.
        value: T,
        /// Stop pulling further items from the source.
        done: bool,
    },
    /// The item expanded into zero or more output values.
    Many {
        /// The produced values, in emission order.
        values: Vec<T>,
        /// Stop pulling further items from the source.
        done: bool,
    },
}

impl<T> LazyResult<T> {
    /// An item that passes through as `value`, with more items welcome.
    #[inline]
    #[must_use]
    pub const fn next(value: T) -> Self {
        Self::Next { value, done: false }
    }

    /// A final `value`: route it downstream, then stop pulling.
    #[inline]
    #[must_use]
    pub const fn next_and_stop(value: T) -> Self {
        Self::Next { value, done: true }
    }

    /// An item that was dropped, with more items welcome.
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self::Empty { done: false }
    }

    /// A dropped item that also ends the run, as `take(0)` reports.
    #[inline]
    #[must_use]
    pub const fn empty_and_stop() -> Self {
        Self::Empty { done: true }
    }

    /// An item expanded into `values`, with more items welcome.
    #[inline]
    #[must_use]
    pub const fn many(values: Vec<T>) -> Self {
        Self::Many {
            values,
            done: false,
        }
    }

    /// A final expansion: route every value downstream, then stop pulling.
    #[inline]
    #[must_use]
    pub const fn many_and_stop(values: Vec<T>) -> Self {
        Self::Many { values, done: true }
    }

    /// Whether this verdict asks the driver to stop pulling source items.
    #[inline]
    #[must_use]
    pub const fn is_done(&self) -> bool {
        match self {
            Self::Empty { done } | Self::Next { done, .. } | Self::Many { done, .. } => *done,
        }
    }

    /// Whether this verdict carries output values.
    ///
    /// This reports the variant, not the count: a [`LazyResult::Many`] with
    /// an empty `values` list still answers `true`.
    #[inline]
    #[must_use]
    pub const fn has_output(&self) -> bool {
        !matches!(self, Self::Empty { .. })
    }
}

static_assertions::assert_impl_all!(LazyResult<i32>: Send, Sync, Clone);
