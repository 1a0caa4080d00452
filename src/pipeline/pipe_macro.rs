//! The `pipe!` macro for left-to-right pipeline application.
//!
//! This module provides the [`pipe!`] macro which threads a value through a
//! series of operations from left to right, fusing adjacent lazy-capable
//! operations into a single pass over the data.

/// Pipes a value through a series of operations from left to right.
///
/// `pipe!(x, f, g, h)` applies `f`, then `g`, then `h`, and fully evaluates
/// the result. Operations before the last are applied through
/// [`PipeStep`](crate::pipeline::PipeStep); the final operation is applied
/// through [`Transform`](crate::pipeline::Transform), which runs whatever
/// fused lazy stages have accumulated by then.
///
/// Adjacent lazy-capable operations hand a deferred
/// [`LazySeq`](crate::pipeline::LazySeq) down the pipeline instead of an
/// evaluated collection, so a pipeline such as `map` followed by `take(2)`
/// invokes the mapping function exactly twice no matter how long the input
/// is.
///
/// # Syntax
///
/// - `pipe!(x)` - Returns `x` unchanged
/// - `pipe!(x, op)` - Applies `op` to `x`, fully evaluated
/// - `pipe!(x, op1, op2, ...)` - Threads `x` through each operation in turn
///
/// # Type Requirements
///
/// Each operation is consumed exactly once, so operation values holding
/// captured state (closures, seen-sets, countdowns) move into the pipeline
/// and cannot be reused afterwards. Build a fresh operation value per run.
///
/// # Examples
///
/// ## Basic pipeline
///
/// ```
/// use pipars::prelude::*;
///
/// let result = pipe!(
///     vec![1, 2, 3, 4],
///     map(|value| value * 2),
///     filter(|value: &i32| *value > 4),
/// );
/// assert_eq!(result, vec![6, 8]);
/// ```
///
/// ## Short-circuiting search
///
/// ```
/// use pipars::prelude::*;
///
/// // Stops pulling from the source as soon as a match is produced.
/// let found = pipe!(
///     vec![1, 3, 8, 5],
///     map(|value| value * 10),
///     find(|value: &i32| *value > 50),
/// );
/// assert_eq!(found, Some(80));
/// ```
///
/// ## Mixing lazy and whole-collection operations
///
/// ```
/// use pipars::prelude::*;
///
/// let result = pipe!(
///     vec![3, 1, 2, 2],
///     unique(),
///     sort_by(|value: &i32| *value),
///     take(2),
/// );
/// assert_eq!(result, vec![1, 2]);
/// ```
///
/// ## Ending with a plain function
///
/// ```
/// use pipars::prelude::*;
///
/// let summary = pipe!(
///     vec![1, 2, 3],
///     fold(0, |accumulator, value| accumulator + value),
///     then(|total| format!("total = {total}")),
/// );
/// assert_eq!(summary, "total = 6");
/// ```
#[macro_export]
macro_rules! pipe {
    // Value only: return as is
    ($value:expr) => {
        $value
    };

    // Single operation: the final stage, fully evaluated
    ($value:expr, $operation:expr $(,)?) => {
        $crate::pipeline::Transform::transform($operation, $value)
    };

    // Multiple operations: step through all but the last, left to right
    ($value:expr, $operation:expr, $($remaining_operations:expr),+ $(,)?) => {
        $crate::pipe!(
            $crate::pipeline::PipeStep::step($operation, $value),
            $($remaining_operations),+
        )
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_pipe_value_only() {
        let result = pipe!(42);
        assert_eq!(result, 42);
    }
}
