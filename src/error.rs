//! Error type for fallible node accessors.
//!
//! The algorithms themselves never return errors: contract violations panic
//! with the message of the corresponding [`NodeError`].

use crate::node::{NodeId, NodeKind};

/// Failure raised when a node handle is used in a way its kind forbids.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NodeError {
    /// A collection accessor was called on a leaf or nil node.
    #[error("node {id} is {found}, expected a collection")]
    NotACollection { id: NodeId, found: NodeKind },

    /// The handle was not produced by this scope.
    #[error("node {id} does not belong to this scope ({len} nodes allocated)")]
    UnknownNode { id: NodeId, len: usize },
}
