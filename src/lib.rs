//! Sequence primitives for selector extension.
//!
//! This crate provides the two combinatorial building blocks a selector
//! extension pass leans on when it weaves compound selectors together:
//!
//! - [`paths`]: every way of picking one element from each of several ordered
//!   groups (a cross product, first group varying fastest);
//! - [`lcs`]: a longest common subsequence whose comparator both decides
//!   what matches and chooses the element that represents each match.
//!
//! Values live in a [`Scope`], an index-based arena of tree nodes (leaves,
//! collections, and `Nil` sentinels). The LCS engine clones its operands into
//! the scope before touching them, so inputs are never modified.
//!
//! ## Quick start
//! ```
//! use seqmerge::{lcs, paths, NodeEquality, Scope, Value};
//!
//! let mut scope = Scope::new();
//! let x = scope.seq_of(["a", "b", "c", "d"]);
//! let y = scope.seq_of(["a", "c", "d"]);
//! let merged = lcs(x, y, NodeEquality, &mut scope);
//! assert_eq!(scope.export(merged), Value::seq(["a", "c", "d"]));
//!
//! let combos = paths(&[vec![1, 2], vec![3]]);
//! assert_eq!(combos, vec![vec![1, 3], vec![2, 3]]);
//! ```
//!
//! ## Layers
//! - [`table`] fills the O(n·m) length table over sentinel-prefixed slices.
//! - [`backtrack`](mod@backtrack) reads one subsequence back out of it.
//! - [`engine`] clones, augments, and runs both over scoped nodes.
//!
//! The first two are generic over any element type and any
//! [`MergeComparator`], so they can be used without a scope.

pub mod backtrack;
pub mod builder;
pub mod engine;
pub mod error;
pub mod node;
pub mod paths;
pub mod table;
pub mod traits;
pub mod utils;

pub use crate::builder::LcsEngineBuilder;
pub use crate::engine::{lcs, LcsEngine, OperandMode};
pub use crate::error::NodeError;
pub use crate::node::{Node, NodeId, NodeKind, Scope, Value};
pub use crate::paths::{paths, paths_in};
pub use crate::table::{build_table, LcsTable};
pub use crate::traits::{Equality, InScope, MergeComparator, NodeComparator, NodeEquality};
