//! The built-in operation set.
//!
//! Every operation here is data-last: calling the constructor yields an
//! operation value that is handed a collection afterwards, either standalone
//! through [`Transform::transform`](crate::pipeline::Transform) or by
//! position inside [`pipe!`](crate::pipe). Standalone application and
//! pipeline application share the same evaluators, so the two always agree
//! on results.
//!
//! # Overview
//!
//! Lazy-capable operations, which fuse with their neighbors inside a
//! pipeline:
//!
//! - [`map`] / [`map_indexed`]: transform items
//! - [`filter`] / [`filter_indexed`]: drop items by predicate
//! - [`take`] / [`take_while`]: keep a prefix, ending the run early
//! - [`drop_first`] / [`drop_while`]: discard a prefix
//! - [`unique`] / [`unique_by`]: keep first occurrences
//! - [`flatten`] / [`flat_map`]: splice nested collections into the stream
//! - [`zip`]: pair items with a second collection
//!
//! Single-value operations, lazy-capable but producing an `Option`:
//!
//! - [`first`], [`find`], [`find_index`]
//!
//! Whole-collection operations, which evaluate eagerly wherever they
//! appear:
//!
//! - [`sort_by`], [`reverse`], [`fold`]
//!
//! And the escape hatch [`then`], which lifts any plain function into a
//! pipeline stage.
//!
//! # Example
//!
//! ```rust
//! use pipars::prelude::*;
//!
//! let top_words = pipe!(
//!     vec!["ant", "bee", "ant", "cat", "bee", "dog"],
//!     unique(),
//!     sort_by(|word: &&str| (*word).to_string()),
//!     take(3),
//! );
//!
//! assert_eq!(top_words, vec!["ant", "bee", "cat"]);
//! ```

mod drop;
mod filter;
mod find;
mod flatten;
mod fold;
mod helpers;
mod map;
mod sort;
mod take;
mod then;
mod unique;
mod zip;

pub use drop::{
    DropFirst, DropFirstEvaluator, DropWhile, DropWhileEvaluator, drop_first, drop_while,
};
pub use filter::{
    Filter, FilterEvaluator, FilterIndexed, FilterIndexedEvaluator, filter, filter_indexed,
};
pub use find::{
    Find, FindEvaluator, FindIndex, FindIndexEvaluator, First, FirstEvaluator, find, find_index,
    first,
};
pub use flatten::{FlatMap, FlatMapEvaluator, Flatten, FlattenEvaluator, flat_map, flatten};
pub use fold::{Fold, fold};
pub use helpers::{constant, identity};
pub use map::{Map, MapEvaluator, MapIndexed, MapIndexedEvaluator, map, map_indexed};
pub use sort::{Reverse, SortBy, reverse, sort_by};
pub use take::{Take, TakeEvaluator, TakeWhile, TakeWhileEvaluator, take, take_while};
pub use then::{Then, then};
pub use unique::{
    DedupHasher, Unique, UniqueBy, UniqueByEvaluator, UniqueEvaluator, unique, unique_by,
};
pub use zip::{Zip, ZipEvaluator, zip};
