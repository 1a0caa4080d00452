//! The two application traits behind [`pipe!`](crate::pipe) and standalone
//! calls.
//!
//! Every operation value implements both: [`Transform`] for the final
//! pipeline position (and for standalone, data-last use), [`PipeStep`] for
//! every position before the last. The split is what lets a trailing run of
//! lazy-capable stages stay fused until the pipeline ends, while still
//! guaranteeing that `pipe!` always hands back a concrete value.

/// A data-last operation applied as the final step of a pipeline.
///
/// `transform` consumes the operation value and fully evaluates: for a
/// lazy-capable operation this runs the fused pipeline to completion, so the
/// caller always receives a concrete result (a `Vec`, an `Option`, a folded
/// accumulator) rather than a deferred one.
///
/// Implementing `Transform` directly is also how downstream crates add
/// whole-collection operations of their own:
///
/// ```rust
/// use pipars::pipeline::Transform;
///
/// struct Summed;
///
/// impl Transform<Vec<i32>> for Summed {
///     type Output = i32;
///
///     fn transform(self, input: Vec<i32>) -> i32 {
///         input.into_iter().sum()
///     }
/// }
///
/// assert_eq!(Summed.transform(vec![1, 2, 3]), 6);
/// ```
pub trait Transform<Input> {
    /// The fully evaluated result type.
    type Output;

    /// Applies the operation to `input`, running any pending lazy stages.
    fn transform(self, input: Input) -> Self::Output;
}

/// A data-last operation applied mid-pipeline.
///
/// Lazy-capable operations implement `step` by fusing their evaluator onto
/// the input's chain and returning the still-deferred
/// [`LazySeq`](super::LazySeq). Whole-collection operations evaluate on the
/// spot and hand a concrete value to the following stage, which ends the
/// fused run at that point.
pub trait PipeStep<Input> {
    /// The value handed to the next pipeline stage.
    type Piped;

    /// Applies the operation to `input` on behalf of the following stage.
    fn step(self, input: Input) -> Self::Piped;
}
