//! Comparator contracts for the merging LCS.
//!
//! A comparator answers one question for a pair of elements: do they match,
//! and if so, which element represents the match in the output? Returning
//! `Some(merged)` signals a match; `None` signals a mismatch.
//!
//! Two flavours are provided:
//! - [`MergeComparator<E>`] works on plain elements and drives the table
//!   builder and backtracker directly.
//! - [`NodeComparator<T>`] works on nodes of a [`Scope`] and is what
//!   [`LcsEngine`](crate::engine::LcsEngine) takes. [`InScope`] bridges the two.
//!
//! Comparators must be deterministic and free of side effects. The algorithms
//! call them repeatedly on the same pairs (once while filling the table and
//! again while backtracking) and assume identical answers; an inconsistent
//! comparator voids the length and ordering guarantees.

use crate::node::{NodeId, Scope};

/// Match-and-merge strategy over plain elements.
pub trait MergeComparator<E> {
    /// The merged representative of `a` and `b`, or `None` if they differ.
    fn merge(&self, a: &E, b: &E) -> Option<E>;
}

impl<E, F> MergeComparator<E> for F
where
    F: Fn(&E, &E) -> Option<E>,
{
    #[inline]
    fn merge(&self, a: &E, b: &E) -> Option<E> {
        self(a, b)
    }
}

/// Value equality; the left element represents the match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Equality;

impl<E: PartialEq + Clone> MergeComparator<E> for Equality {
    #[inline]
    fn merge(&self, a: &E, b: &E) -> Option<E> {
        (a == b).then(|| a.clone())
    }
}

/// Match-and-merge strategy over nodes of a scope.
///
/// The returned handle must belong to `scope`; typically it is `a` or `b`.
pub trait NodeComparator<T> {
    fn merge(&self, scope: &Scope<T>, a: NodeId, b: NodeId) -> Option<NodeId>;
}

impl<T, F> NodeComparator<T> for F
where
    F: Fn(&Scope<T>, NodeId, NodeId) -> Option<NodeId>,
{
    #[inline]
    fn merge(&self, scope: &Scope<T>, a: NodeId, b: NodeId) -> Option<NodeId> {
        self(scope, a, b)
    }
}

/// Structural equality ([`Scope::deep_eq`]); the left node represents the match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NodeEquality;

impl<T: PartialEq> NodeComparator<T> for NodeEquality {
    #[inline]
    fn merge(&self, scope: &Scope<T>, a: NodeId, b: NodeId) -> Option<NodeId> {
        scope.deep_eq(a, b).then_some(a)
    }
}

/// Presents a [`NodeComparator`] bound to one scope as a
/// [`MergeComparator`] over node handles.
pub struct InScope<'a, T, C: ?Sized> {
    scope: &'a Scope<T>,
    inner: &'a C,
}

impl<'a, T, C: ?Sized> InScope<'a, T, C> {
    pub fn new(scope: &'a Scope<T>, inner: &'a C) -> Self {
        Self { scope, inner }
    }
}

impl<'a, T, C> MergeComparator<NodeId> for InScope<'a, T, C>
where
    C: NodeComparator<T> + ?Sized,
{
    #[inline]
    fn merge(&self, a: &NodeId, b: &NodeId) -> Option<NodeId> {
        self.inner.merge(self.scope, *a, *b)
    }
}
