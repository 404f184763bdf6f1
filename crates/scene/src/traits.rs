//! Core hierarchy traits for scene graphs

use crate::node::{Node, NodeId, NodeKind};
use std::collections::{HashSet, VecDeque};

/// A forest of objects linked by parent/child relations
///
/// This trait provides the read-only view of a host scene graph. Scenes may
/// hold several top-level objects, so there is no single root. Implementations
/// provide basic navigation while derived methods build higher-level queries
/// on top of it.
///
/// Host data is not trusted to be acyclic: every derived method that follows
/// parent links stops after revisiting a node.
///
/// # Example
///
/// ```ignore
/// fn print_scene<T: Tree>(tree: &T) {
///     for id in tree.walk(TraversalOrder::PreOrder) {
///         let depth = tree.depth(id);
///         println!("{:indent$}{}", "", tree.name(id).unwrap(), indent = depth * 2);
///     }
/// }
/// ```
pub trait Tree {
    /// Host data stored at each node
    type NodeData;

    /// Iterate over the top-level objects (those without a parent)
    fn roots(&self) -> Box<dyn Iterator<Item = NodeId> + '_>;

    /// Get a node by its ID
    ///
    /// Returns `None` if the ID is invalid.
    fn get(&self, id: NodeId) -> Option<&Node<Self::NodeData>>;

    /// Get the parent of a node
    ///
    /// Returns `None` for top-level objects.
    fn parent(&self, id: NodeId) -> Option<NodeId>;

    /// Iterate over children of a node in creation order
    ///
    /// Returns an empty iterator for invalid IDs.
    fn children(&self, id: NodeId) -> Box<dyn Iterator<Item = NodeId> + '_>;

    /// Count total live nodes
    fn node_count(&self) -> usize;

    /// Check whether an ID refers to a live node
    fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    /// Get the name of a node
    ///
    /// Returns `None` if the ID is invalid.
    fn name(&self, id: NodeId) -> Option<&str> {
        self.get(id).map(|n| n.name.as_str())
    }

    /// Get the kind of a node
    ///
    /// Invalid IDs are reported as `Regular`.
    fn kind(&self, id: NodeId) -> NodeKind {
        self.get(id).map(|n| n.kind).unwrap_or_default()
    }

    /// Check if a node is a label decoration
    fn is_label(&self, id: NodeId) -> bool {
        self.kind(id).is_label()
    }

    /// Check if a node has no parent
    fn is_top_level(&self, id: NodeId) -> bool {
        self.parent(id).is_none()
    }

    /// Get all ancestors of a node, from parent to top-level object
    ///
    /// Returns an empty vector for top-level objects or invalid IDs.
    fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut ancestors = Vec::new();
        let mut seen = HashSet::from([id]);
        let mut current = self.parent(id);
        while let Some(parent_id) = current {
            if !seen.insert(parent_id) {
                break;
            }
            ancestors.push(parent_id);
            current = self.parent(parent_id);
        }
        ancestors
    }

    /// Get the depth of a node (top-level = 0)
    fn depth(&self, id: NodeId) -> usize {
        self.ancestors(id).len()
    }

    /// Get the slash separated chain of names from the top-level object
    fn path(&self, id: NodeId) -> String {
        let mut names: Vec<&str> = self
            .ancestors(id)
            .into_iter()
            .filter_map(|a| self.name(a))
            .collect();
        names.reverse();
        names.extend(self.name(id));
        names.join("/")
    }

    /// Count children of a node
    fn child_count(&self, id: NodeId) -> usize {
        self.children(id).count()
    }

    /// Check if a node is an ancestor of another
    fn is_ancestor_of(&self, ancestor: NodeId, descendant: NodeId) -> bool {
        self.ancestors(descendant).contains(&ancestor)
    }
}

/// Traversal order for walking the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
    /// Visit parent before children (top-down)
    PreOrder,
    /// Visit children before parent (bottom-up)
    PostOrder,
    /// Visit level by level (breadth-first)
    BreadthFirst,
}

/// Extension trait providing traversal and search utilities
///
/// This trait is automatically implemented for all types that implement `Tree`.
pub trait TreeTraversal: Tree {
    /// Walk every object, one top-level subtree after another
    fn walk(&self, order: TraversalOrder) -> TreeWalker<'_, Self>
    where
        Self: Sized,
    {
        TreeWalker::with_starts(self, self.roots().collect(), order)
    }

    /// Walk the subtree starting from a specific node
    fn walk_from(&self, start: NodeId, order: TraversalOrder) -> TreeWalker<'_, Self>
    where
        Self: Sized,
    {
        TreeWalker::with_starts(self, vec![start], order)
    }

    /// Every node below `id`, excluding `id` itself
    fn descendants(&self, id: NodeId) -> Vec<NodeId>
    where
        Self: Sized,
    {
        self.walk_from(id, TraversalOrder::PreOrder)
            .filter(|&d| d != id)
            .collect()
    }

    /// Find nodes matching a predicate
    fn find<F>(&self, predicate: F) -> Vec<NodeId>
    where
        F: Fn(&Node<Self::NodeData>) -> bool,
        Self: Sized,
    {
        self.walk(TraversalOrder::PreOrder)
            .filter(|&id| self.get(id).map(&predicate).unwrap_or(false))
            .collect()
    }

    /// Find nodes of a given kind
    fn find_kind(&self, kind: NodeKind) -> Vec<NodeId>
    where
        Self: Sized,
    {
        self.find(|n| n.kind == kind)
    }

    /// Find a node by name (first match only)
    fn find_by_name(&self, name: &str) -> Option<NodeId>
    where
        Self: Sized,
    {
        self.walk(TraversalOrder::PreOrder)
            .find(|&id| self.name(id) == Some(name))
    }
}

// Blanket implementation for all Tree types
impl<T: Tree> TreeTraversal for T {}

/// Iterator for traversing a tree in different orders
///
/// Each node is yielded at most once, even if the host hands back a cyclic
/// structure.
pub struct TreeWalker<'a, T: Tree + ?Sized> {
    tree: &'a T,
    order: TraversalOrder,
    pending: VecDeque<NodeId>,
    visited: HashSet<NodeId>,
    expanded: HashSet<NodeId>,
}

impl<'a, T: Tree + ?Sized> TreeWalker<'a, T> {
    /// Create a new walker starting from the given node
    pub fn new(tree: &'a T, start: NodeId, order: TraversalOrder) -> Self {
        Self::with_starts(tree, vec![start], order)
    }

    /// Create a new walker visiting several subtrees in order
    pub fn with_starts(tree: &'a T, starts: Vec<NodeId>, order: TraversalOrder) -> Self {
        let mut pending: VecDeque<NodeId> = starts.into_iter().collect();

        // Depth-first orders pop from the back
        if !matches!(order, TraversalOrder::BreadthFirst) {
            pending.make_contiguous().reverse();
        }

        Self {
            tree,
            order,
            pending,
            visited: HashSet::new(),
            expanded: HashSet::new(),
        }
    }

    fn next_preorder(&mut self) -> Option<NodeId> {
        while let Some(current) = self.pending.pop_back() {
            if !self.visited.insert(current) {
                continue;
            }

            // Add children in reverse order so they're popped in correct order
            let children: Vec<_> = self.tree.children(current).collect();
            for child in children.into_iter().rev() {
                if !self.visited.contains(&child) {
                    self.pending.push_back(child);
                }
            }

            return Some(current);
        }
        None
    }

    fn next_postorder(&mut self) -> Option<NodeId> {
        while let Some(&current) = self.pending.back() {
            if self.visited.contains(&current) {
                self.pending.pop_back();
                continue;
            }

            if self.expanded.contains(&current) {
                self.pending.pop_back();
                self.visited.insert(current);
                return Some(current);
            }

            self.expanded.insert(current);

            let children: Vec<_> = self.tree.children(current).collect();
            for child in children.into_iter().rev() {
                if !self.expanded.contains(&child) && !self.visited.contains(&child) {
                    self.pending.push_back(child);
                }
            }
        }
        None
    }

    fn next_breadthfirst(&mut self) -> Option<NodeId> {
        while let Some(current) = self.pending.pop_front() {
            if !self.visited.insert(current) {
                continue;
            }

            for child in self.tree.children(current) {
                if !self.visited.contains(&child) {
                    self.pending.push_back(child);
                }
            }

            return Some(current);
        }
        None
    }
}

impl<'a, T: Tree + ?Sized> Iterator for TreeWalker<'a, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        match self.order {
            TraversalOrder::PreOrder => self.next_preorder(),
            TraversalOrder::PostOrder => self.next_postorder(),
            TraversalOrder::BreadthFirst => self.next_breadthfirst(),
        }
    }
}
