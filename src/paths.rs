//! Cross-product enumeration of alternative groups.
//!
//! Every combination picks one element per group and keeps the groups in
//! order. Combinations are produced odometer-style with the *first* group as
//! the fastest-moving digit:
//!
//! ```
//! use seqmerge::paths::paths;
//!
//! let out = paths(&[vec![1, 2], vec![3, 4], vec![5]]);
//! assert_eq!(out, vec![vec![1, 3, 5], vec![2, 3, 5], vec![1, 4, 5], vec![2, 4, 5]]);
//! ```
//!
//! An empty group annihilates the product; an empty list of groups yields a
//! single empty combination.

use crate::node::{NodeId, Scope};

/// All combinations of one element from each group.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "trace", skip_all, fields(groups = groups.len()))
)]
pub fn paths<E: Clone>(groups: &[Vec<E>]) -> Vec<Vec<E>> {
    let mut acc: Vec<Vec<E>> = vec![Vec::with_capacity(groups.len())];
    for group in groups {
        let mut next = Vec::with_capacity(acc.len().saturating_mul(group.len()));
        for element in group {
            for prefix in &acc {
                let mut combo = prefix.clone();
                combo.push(element.clone());
                next.push(combo);
            }
        }
        acc = next;
        if acc.is_empty() {
            break;
        }
    }
    acc
}

/// [`paths`] over a collection of collections held in `scope`.
///
/// Each chosen element is deep-cloned into its combination, so combinations
/// never share nodes with the input or with each other. Returns a new
/// collection of combination collections.
///
/// # Panics
/// Panics if `groups` or any of its children is not a collection.
pub fn paths_in<T: Clone>(scope: &mut Scope<T>, groups: NodeId) -> NodeId {
    let mut alternatives = Vec::with_capacity(scope.children(groups).len());
    for &group in scope.children(groups) {
        alternatives.push(scope.children(group).iter().copied().collect::<Vec<_>>());
    }

    let combos = paths(&alternatives);
    let mut out = Vec::with_capacity(combos.len());
    for combo in combos {
        let mut cloned = Vec::with_capacity(combo.len());
        for element in combo {
            cloned.push(scope.clone_node(element));
        }
        out.push(scope.collection_from(cloned));
    }
    scope.collection_from(out)
}
