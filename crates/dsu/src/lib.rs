//! A disjoint-set forest over a fixed universe of integer-labeled elements
//!
//! [`UnionFind`] merges sets by size and compresses paths on every lookup.
//! Its parent links are only reachable through the checked operations, so
//! the backing forest cannot be handed a dangling or cyclic link:
//!
//! ```compile_fail
//! let mut forest = dsu::vec_forest::VecForest::new(3);
//! ```
//!
//! ```compile_fail
//! use dsu::disjoint_set::ForestFind;
//! ```

#![deny(
    clippy::disallowed_methods,
    clippy::suspicious,
    clippy::style,
    clippy::clone_on_ref_ptr,
    missing_debug_implementations,
    missing_copy_implementations
)]
#![warn(clippy::pedantic, missing_docs)]
#![allow(clippy::module_name_repetitions)]

mod disjoint_set;
#[cfg(any(test, feature = "test"))]
pub mod reference;
#[cfg(any(test, feature = "proptest"))]
pub mod strategy;
mod union_find;
mod vec_forest;

pub use disjoint_set::{NoNode, Unioned};
pub use union_find::{OutOfRange, Parent, UnionFind};
pub use vec_forest::Roots;
