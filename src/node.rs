//! Scoped tree values.
//!
//! A [`Scope`] is an index-based arena that owns every node it creates.
//! Nodes are addressed through [`NodeId`] handles, which are only meaningful
//! for the scope that produced them. A node is one of:
//! - `Nil`: the synthetic marker used as a sentinel,
//! - `Leaf(T)`: an opaque comparable element,
//! - `Collection`: an ordered list of child handles.
//!
//! Cloning ([`Scope::clone_node`]) copies a whole subtree into fresh slots, so
//! editing a clone in place never affects the source.

use std::collections::VecDeque;
use std::fmt;

use crate::error::NodeError;

/// Handle to a node owned by a [`Scope`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// Build a handle from a raw slot index.
    #[inline]
    pub fn from_raw(index: u32) -> Self {
        NodeId(index)
    }

    /// Raw slot index inside the owning scope.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Payload of a node slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<T> {
    Nil,
    Leaf(T),
    Collection(VecDeque<NodeId>),
}

/// Discriminant of a [`Node`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Nil,
    Leaf,
    Collection,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Nil => f.write_str("nil"),
            NodeKind::Leaf => f.write_str("a leaf"),
            NodeKind::Collection => f.write_str("a collection"),
        }
    }
}

impl<T> Node<T> {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Nil => NodeKind::Nil,
            Node::Leaf(_) => NodeKind::Leaf,
            Node::Collection(_) => NodeKind::Collection,
        }
    }
}

/// Owned, scope-free tree value.
///
/// Used to move data in and out of a scope: [`Scope::import`] allocates a
/// `Value` as nodes, [`Scope::export`] reads a subtree back.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value<T> {
    Nil,
    Leaf(T),
    Seq(Vec<Value<T>>),
}

impl<T> Value<T> {
    /// A sequence of leaves.
    pub fn seq<I: IntoIterator<Item = T>>(items: I) -> Self {
        Value::Seq(items.into_iter().map(Value::Leaf).collect())
    }

    /// A sequence of arbitrary values.
    pub fn nested<I: IntoIterator<Item = Value<T>>>(items: I) -> Self {
        Value::Seq(items.into_iter().collect())
    }
}

/// Arena owning tree values.
#[derive(Debug, Clone)]
pub struct Scope<T> {
    nodes: Vec<Node<T>>,
}

impl<T> Default for Scope<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scope<T> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Number of nodes allocated so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn alloc(&mut self, node: Node<T>) -> NodeId {
        let index = u32::try_from(self.nodes.len()).expect("scope exceeded u32::MAX nodes");
        self.nodes.push(node);
        NodeId(index)
    }

    /// Allocate a fresh sentinel marker.
    pub fn nil(&mut self) -> NodeId {
        self.alloc(Node::Nil)
    }

    pub fn leaf(&mut self, value: T) -> NodeId {
        self.alloc(Node::Leaf(value))
    }

    /// Allocate an empty collection.
    pub fn collection(&mut self) -> NodeId {
        self.alloc(Node::Collection(VecDeque::new()))
    }

    /// Allocate a collection holding `children` in order.
    ///
    /// The children are referenced, not copied.
    pub fn collection_from<I: IntoIterator<Item = NodeId>>(&mut self, children: I) -> NodeId {
        self.alloc(Node::Collection(children.into_iter().collect()))
    }

    /// Allocate a collection of freshly allocated leaves.
    pub fn seq_of<I: IntoIterator<Item = T>>(&mut self, items: I) -> NodeId {
        let children: VecDeque<NodeId> = items.into_iter().map(|v| self.leaf(v)).collect();
        self.alloc(Node::Collection(children))
    }

    pub fn try_get(&self, id: NodeId) -> Result<&Node<T>, NodeError> {
        self.nodes.get(id.index()).ok_or(NodeError::UnknownNode {
            id,
            len: self.nodes.len(),
        })
    }

    /// # Panics
    /// Panics if `id` was not produced by this scope.
    pub fn get(&self, id: NodeId) -> &Node<T> {
        self.try_get(id).unwrap_or_else(|err| panic!("{err}"))
    }

    pub fn kind(&self, id: NodeId) -> NodeKind {
        self.get(id).kind()
    }

    pub fn is_nil(&self, id: NodeId) -> bool {
        matches!(self.get(id), Node::Nil)
    }

    pub fn is_collection(&self, id: NodeId) -> bool {
        matches!(self.get(id), Node::Collection(_))
    }

    pub fn try_children(&self, id: NodeId) -> Result<&VecDeque<NodeId>, NodeError> {
        match self.try_get(id)? {
            Node::Collection(children) => Ok(children),
            other => Err(NodeError::NotACollection {
                id,
                found: other.kind(),
            }),
        }
    }

    /// Children of a collection node.
    ///
    /// # Panics
    /// Panics if `id` is not a collection of this scope.
    pub fn children(&self, id: NodeId) -> &VecDeque<NodeId> {
        self.try_children(id).unwrap_or_else(|err| panic!("{err}"))
    }

    fn try_children_mut(&mut self, id: NodeId) -> Result<&mut VecDeque<NodeId>, NodeError> {
        let len = self.nodes.len();
        match self.nodes.get_mut(id.index()) {
            Some(Node::Collection(children)) => Ok(children),
            Some(other) => Err(NodeError::NotACollection {
                id,
                found: other.kind(),
            }),
            None => Err(NodeError::UnknownNode { id, len }),
        }
    }

    pub fn try_push_front(&mut self, collection: NodeId, child: NodeId) -> Result<(), NodeError> {
        self.try_children_mut(collection)?.push_front(child);
        Ok(())
    }

    pub fn try_push_back(&mut self, collection: NodeId, child: NodeId) -> Result<(), NodeError> {
        self.try_children_mut(collection)?.push_back(child);
        Ok(())
    }

    /// # Panics
    /// Panics if `collection` is not a collection of this scope.
    pub fn push_front(&mut self, collection: NodeId, child: NodeId) {
        self.try_push_front(collection, child)
            .unwrap_or_else(|err| panic!("{err}"))
    }

    /// # Panics
    /// Panics if `collection` is not a collection of this scope.
    pub fn push_back(&mut self, collection: NodeId, child: NodeId) {
        self.try_push_back(collection, child)
            .unwrap_or_else(|err| panic!("{err}"))
    }

    /// Structural equality of two subtrees of this scope.
    pub fn deep_eq(&self, a: NodeId, b: NodeId) -> bool
    where
        T: PartialEq,
    {
        if a == b {
            return true;
        }
        match (self.get(a), self.get(b)) {
            (Node::Nil, Node::Nil) => true,
            (Node::Leaf(l), Node::Leaf(r)) => l == r,
            (Node::Collection(l), Node::Collection(r)) => {
                l.len() == r.len() && l.iter().zip(r).all(|(&l, &r)| self.deep_eq(l, r))
            }
            _ => false,
        }
    }
}

impl<T: Clone> Scope<T> {
    /// Deep-copy the subtree rooted at `id` into fresh slots of this scope.
    pub fn clone_node(&mut self, id: NodeId) -> NodeId {
        let node = self.get(id).clone();
        match node {
            Node::Nil => self.nil(),
            Node::Leaf(value) => self.leaf(value),
            Node::Collection(children) => {
                let mut copied = VecDeque::with_capacity(children.len());
                for child in children {
                    copied.push_back(self.clone_node(child));
                }
                self.alloc(Node::Collection(copied))
            }
        }
    }

    /// Allocate an owned value as nodes of this scope.
    pub fn import(&mut self, value: &Value<T>) -> NodeId {
        match value {
            Value::Nil => self.nil(),
            Value::Leaf(v) => self.leaf(v.clone()),
            Value::Seq(items) => {
                let mut children = VecDeque::with_capacity(items.len());
                for item in items {
                    children.push_back(self.import(item));
                }
                self.alloc(Node::Collection(children))
            }
        }
    }

    /// Read the subtree rooted at `id` back into an owned value.
    pub fn export(&self, id: NodeId) -> Value<T> {
        match self.get(id) {
            Node::Nil => Value::Nil,
            Node::Leaf(v) => Value::Leaf(v.clone()),
            Node::Collection(children) => {
                Value::Seq(children.iter().map(|&c| self.export(c)).collect())
            }
        }
    }
}
