//! # pipars
//!
//! A functional utility library for Rust providing data-last operations,
//! pipeline composition, and fused lazy evaluation.
//!
//! ## Overview
//!
//! This library brings the data-first/data-last utility style of functional
//! collection libraries to Rust. It includes:
//!
//! - **Pipeline Composition**: the [`pipe!`] macro threads a value through a
//!   sequence of operations, left to right
//! - **Lazy Evaluation**: adjacent lazy-capable operations fuse into a single
//!   pass over the input, with short-circuiting
//! - **Operations**: `map`, `filter`, `take`, `unique`, `flat_map`, `zip`,
//!   `first`, `find`, `sort_by`, `fold`, and friends
//! - **Extensibility**: the [`pipeline::LazyEvaluator`] trait lets downstream
//!   crates define operations that fuse like the built-in ones
//!
//! ## Feature Flags
//!
//! - `pipeline`: The lazy evaluation engine and the [`pipe!`] macro
//! - `ops`: The built-in operation set (implies `pipeline`)
//! - `fxhash`: Faster hashing for `unique`/`unique_by` via `rustc-hash`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use pipars::prelude::*;
//!
//! let result = pipe!(
//!     vec![1, 2, 2, 5, 1, 6, 7],
//!     map(|value| value * 10),
//!     unique(),
//!     take(3),
//! );
//!
//! assert_eq!(result, vec![10, 20, 50]);
//! ```
//!
//! Every operation is also callable standalone, data last:
//!
//! ```rust
//! use pipars::prelude::*;
//!
//! let doubled = map(|value: i32| value * 2).transform(vec![1, 2, 3]);
//! assert_eq!(doubled, vec![2, 4, 6]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use pipars::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "pipeline")]
    pub use crate::pipeline::*;

    #[cfg(feature = "pipeline")]
    pub use crate::pipe;

    #[cfg(feature = "ops")]
    pub use crate::ops::*;
}

#[cfg(feature = "pipeline")]
pub mod pipeline;

#[cfg(feature = "ops")]
pub mod ops;

#[cfg(all(test, feature = "ops"))]
mod tests {
    #[test]
    fn library_compiles() {
        let doubled = crate::pipe!(vec![1, 2], crate::ops::map(|value: i32| value * 2));
        assert_eq!(doubled, vec![2, 4]);
    }
}
