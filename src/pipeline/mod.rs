//! The lazy pipeline evaluation engine.
//!
//! This module provides the machinery that lets adjacent lazy-capable
//! operations in a [`pipe!`](crate::pipe) call fuse into a single pass over
//! the input, with early termination once no further item can contribute
//! output.
//!
//! # Overview
//!
//! The engine is built from a small set of pieces:
//!
//! - [`LazyResult`]: the per-item verdict an operation produces (zero, one,
//!   or many output values, plus a `done` flag ending the run)
//! - [`LazyEvaluator`]: the per-item protocol a fusable operation implements,
//!   owning whatever state it needs across items
//! - [`LazyChain`] / [`ChainLink`] / [`ChainEnd`]: the typed stage list an
//!   item is routed through, built up with [`ChainExtend`]
//! - [`LazySeq`]: a deferred run, pairing a source with its fused chain
//! - [`Transform`] / [`PipeStep`]: how `pipe!` applies an operation in final
//!   and non-final position respectively
//! - [`IntoLazySeq`] / [`Materialize`]: the capability bounds operations put
//!   on their inputs
//!
//! # Execution model
//!
//! Evaluation is pull-based and item-driven. The driver takes one item from
//! the source and feeds it through every fused stage before touching the
//! next item; a stage that drops the item ends that walk early, and a stage
//! that expands it routes each produced value through the remaining stages
//! in order. When any stage reports `done`, the driver stops pulling after
//! the current item has finished its walk, so a value emitted alongside the
//! `done` flag is still processed by later stages.
//!
//! Runs are synchronous and single-threaded, and evaluation order is
//! observable: side effects in user closures happen in exactly the order
//! the items flow.
//!
//! # Example
//!
//! ```rust
//! use pipars::prelude::*;
//! use std::cell::Cell;
//!
//! let calls = Cell::new(0);
//! let result = pipe!(
//!     vec![1, 2, 3, 4, 5, 6],
//!     map(|value| {
//!         calls.set(calls.get() + 1);
//!         value * 10
//!     }),
//!     take(2),
//! );
//!
//! assert_eq!(result, vec![10, 20]);
//! assert_eq!(calls.get(), 2); // items 3..=6 were never mapped
//! ```

mod chain;
mod evaluator;
mod lazy_result;
mod lazy_seq;
mod pipe_macro;
mod transform;

pub use chain::{ChainEnd, ChainExtend, ChainLink, LazyChain};
pub use evaluator::LazyEvaluator;
pub use lazy_result::LazyResult;
pub use lazy_seq::{Extended, IntoLazySeq, LazySeq, Materialize, SourceItem};
pub use transform::{PipeStep, Transform};

// Re-export the macro (it is already at crate root via #[macro_export])
pub use crate::pipe;
