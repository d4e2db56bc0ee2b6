//! Merging LCS engine.
//!
//! This module wires the pieces together:
//! 1. clone both operands into the scope and prepend a `Nil` sentinel to each
//!    clone, so index 0 of either sequence is the empty prefix;
//! 2. fill the length table over the augmented children;
//! 3. backtrack from the bottom-right cell, collecting merged elements;
//! 4. allocate the merged elements as a new collection in the scope.
//!
//! The inputs are never modified. The table is dropped before returning.

use crate::backtrack::backtrack;
use crate::node::{NodeId, Scope};
use crate::table::build_table;
use crate::traits::{InScope, NodeComparator, NodeEquality};

/// Which value is compared against the first operand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OperandMode {
    /// Compare `x` against `y`.
    #[default]
    Distinct,
    /// Compare `x` against a second clone of itself and ignore `y`.
    ///
    /// This reproduces the output of older selector-extension passes, which
    /// cloned the first operand twice. With an equality comparator the result
    /// is always a copy of `x`.
    MirrorFirst,
}

/// Longest-common-subsequence engine with a pluggable merge strategy.
///
/// ```
/// use seqmerge::{LcsEngine, Scope, Value};
///
/// let mut scope = Scope::new();
/// let x = scope.seq_of([1, 2, 3, 4, 5]);
/// let y = scope.seq_of([1, 3, 4, 5]);
/// let merged = LcsEngine::default().run(&mut scope, x, y);
/// assert_eq!(scope.export(merged), Value::seq([1, 3, 4, 5]));
/// ```
#[derive(Debug, Clone)]
pub struct LcsEngine<C = NodeEquality> {
    comparator: C,
    mode: OperandMode,
}

impl Default for LcsEngine<NodeEquality> {
    fn default() -> Self {
        Self::new(NodeEquality)
    }
}

impl<C> LcsEngine<C> {
    /// Create an engine comparing distinct operands.
    pub fn new(comparator: C) -> Self {
        Self::with_mode(comparator, OperandMode::default())
    }

    pub fn with_mode(comparator: C, mode: OperandMode) -> Self {
        Self { comparator, mode }
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    pub fn mode(&self) -> OperandMode {
        self.mode
    }

    /// Compute one merged LCS of the collections `x` and `y`.
    ///
    /// Returns a new collection in `scope` whose children are the merged
    /// elements in left-to-right order.
    ///
    /// # Panics
    /// Panics if `x` or `y` is not a collection of `scope`.
    pub fn run<T: Clone>(&self, scope: &mut Scope<T>, x: NodeId, y: NodeId) -> NodeId
    where
        C: NodeComparator<T>,
    {
        self.run_with_length(scope, x, y).1
    }

    /// Like [`run`](Self::run), also returning the LCS length read from the
    /// table.
    pub fn run_with_length<T: Clone>(
        &self,
        scope: &mut Scope<T>,
        x: NodeId,
        y: NodeId,
    ) -> (u32, NodeId)
    where
        C: NodeComparator<T>,
    {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("lcs_run", %x, %y, mode = ?self.mode);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let second = match self.mode {
            OperandMode::Distinct => y,
            OperandMode::MirrorFirst => {
                #[cfg(feature = "tracing")]
                tracing::debug!(ignored = %y, "mirroring first operand");
                x
            }
        };

        let ax = augment(scope, x);
        let ay = augment(scope, second);
        let xs: Vec<NodeId> = scope.children(ax).iter().copied().collect();
        let ys: Vec<NodeId> = scope.children(ay).iter().copied().collect();

        let comparator = InScope::new(&*scope, &self.comparator);
        let table = build_table(&xs, &ys, &comparator);
        let merged = backtrack(&table, &xs, &ys, xs.len() - 1, ys.len() - 1, &comparator);
        let length = table.lcs_len();
        drop(table);

        #[cfg(feature = "tracing")]
        tracing::trace!(length, "lcs reconstructed");

        (length, scope.collection_from(merged))
    }
}

/// Compute one merged LCS of `x` and `y` with `comparator`, allocating the
/// clones and the result in `scope`.
///
/// Shorthand for `LcsEngine::new(comparator).run(scope, x, y)`.
pub fn lcs<T, C>(x: NodeId, y: NodeId, comparator: C, scope: &mut Scope<T>) -> NodeId
where
    T: Clone,
    C: NodeComparator<T>,
{
    LcsEngine::new(comparator).run(scope, x, y)
}

/// Clone `seq` and prepend a fresh sentinel to the clone.
fn augment<T: Clone>(scope: &mut Scope<T>, seq: NodeId) -> NodeId {
    assert!(
        scope.is_collection(seq),
        "LCS operand {seq} is {}, expected a collection",
        scope.kind(seq)
    );
    let copy = scope.clone_node(seq);
    let sentinel = scope.nil();
    scope.push_front(copy, sentinel);
    copy
}
