//! The per-item stage protocol that fusable operations implement.

use super::LazyResult;

/// A pipeline stage reduced to its per-item behavior.
///
/// An evaluator receives one input item at a time and answers with a
/// [`LazyResult`]: keep the item, drop it, expand it into several values,
/// and/or declare the whole run finished. Whatever state the operation needs
/// across items lives in the implementor itself, such as the countdown of
/// `take` or the seen-set of `unique`. A fresh evaluator is constructed for
/// every pipeline run, so state never leaks between runs.
///
/// Implementing this trait is the whole cost of a downstream operation that
/// fuses like the built-in ones:
///
/// ```rust
/// use pipars::pipeline::{IntoLazySeq, LazyEvaluator, LazyResult};
///
/// /// Emits each item twice, stopping once the output budget is spent.
/// struct EchoTwice {
///     budget: usize,
/// }
///
/// impl LazyEvaluator<i32> for EchoTwice {
///     type Output = i32;
///
///     fn evaluate(&mut self, item: i32) -> LazyResult<i32> {
///         self.budget = self.budget.saturating_sub(2);
///         if self.budget == 0 {
///             LazyResult::many_and_stop(vec![item, item])
///         } else {
///             LazyResult::many(vec![item, item])
///         }
///     }
/// }
///
/// let echoed = vec![1, 2, 3, 4]
///     .into_lazy_seq()
///     .extended(EchoTwice { budget: 4 })
///     .run_to_vec();
///
/// // The source is abandoned after the second item.
/// assert_eq!(echoed, vec![1, 1, 2, 2]);
/// ```
pub trait LazyEvaluator<In> {
    /// The item type this evaluator emits.
    type Output;

    /// Feeds one input item and reports what it produced.
    fn evaluate(&mut self, item: In) -> LazyResult<Self::Output>;
}
