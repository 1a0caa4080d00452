//! Escape hatch: `then` lifts a plain function into a pipeline stage.

use crate::pipeline::{PipeStep, Transform};

/// Creates an operation that applies an arbitrary function to the piped
/// value.
///
/// `then` accepts whatever the previous stage produced, whether that is a
/// collection or a single value such as the `Option` from `find`, so it is
/// the way to slot one-off logic into a pipeline without defining an
/// operation type.
///
/// Note that `then` consumes a concrete value. Directly after lazy-capable
/// stages inside `pipe!`, the deferred sequence type will not match a plain
/// function's argument; put `then` after an evaluated stage, or give the
/// function the collection produced by ending the lazy run.
///
/// # Examples
///
/// ```
/// use pipars::prelude::*;
///
/// let description = pipe!(
///     vec![4, 1, 8],
///     sort_by(|value: &i32| *value),
///     then(|sorted: Vec<i32>| format!("{sorted:?}")),
/// );
/// assert_eq!(description, "[1, 4, 8]");
/// ```
#[inline]
#[must_use]
pub const fn then<F>(function: F) -> Then<F> {
    Then { function }
}

/// The `then` operation value. Built by [`then`].
#[derive(Debug, Clone)]
pub struct Then<F> {
    function: F,
}

impl<In, Out, F> Transform<In> for Then<F>
where
    F: FnOnce(In) -> Out,
{
    type Output = Out;

    #[inline]
    fn transform(self, input: In) -> Out {
        (self.function)(input)
    }
}

impl<In, Out, F> PipeStep<In> for Then<F>
where
    F: FnOnce(In) -> Out,
{
    type Piped = Out;

    #[inline]
    fn step(self, input: In) -> Out {
        (self.function)(input)
    }
}
