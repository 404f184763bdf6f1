//! Family resolution: which objects travel with a root when it is shown or hidden

use std::collections::HashSet;

use log::trace;
use scene_tree::{NodeId, TraversalOrder, Tree, TreeWalker};

/// Traversal policy for [`family`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FamilyMode {
    /// The root and its whole subtree
    All,
    /// The root and the label decorations hanging below it
    LabelsOnly,
}

impl FamilyMode {
    /// `All` when following the parent's visibility, `LabelsOnly` otherwise
    pub const fn following_parent(follow_parent: bool) -> Self {
        if follow_parent {
            FamilyMode::All
        } else {
            FamilyMode::LabelsOnly
        }
    }
}

/// A duplicate-free set of objects, in discovery order, starting with its root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Family {
    members: Vec<NodeId>,
    index: HashSet<NodeId>,
}

impl Family {
    fn with_root(root: NodeId) -> Self {
        Self {
            members: vec![root],
            index: HashSet::from([root]),
        }
    }

    fn insert(&mut self, id: NodeId) -> bool {
        if self.index.insert(id) {
            self.members.push(id);
            true
        } else {
            false
        }
    }

    /// The object the family was resolved from
    pub fn root(&self) -> NodeId {
        self.members[0]
    }

    /// Whether `id` belongs to the family
    pub fn contains(&self, id: NodeId) -> bool {
        self.index.contains(&id)
    }

    /// Number of members, root included
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always false: a family holds at least its root
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members in discovery order
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.members.iter().copied()
    }

    /// Members as a slice
    pub fn as_slice(&self) -> &[NodeId] {
        &self.members
    }
}

impl<'a> IntoIterator for &'a Family {
    type Item = NodeId;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, NodeId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter().copied()
    }
}

/// Resolve the family of `root`
///
/// In [`FamilyMode::LabelsOnly`] the root's direct children are all looked
/// into, but only their label children are collected, and deeper levels are
/// reached through labels alone. So `A -> B -> C.t -> D-line` yields
/// `{A, C.t, D-line}` while a label two regular levels below `A` is not
/// part of `A`'s family.
///
/// Malformed cyclic input is tolerated; each object is visited once.
pub fn family<T>(tree: &T, root: NodeId, mode: FamilyMode) -> Family
where
    T: Tree + ?Sized,
{
    let mut family = Family::with_root(root);

    match mode {
        FamilyMode::All => {
            for id in TreeWalker::new(tree, root, TraversalOrder::PreOrder) {
                family.insert(id);
            }
        }
        FamilyMode::LabelsOnly => {
            let mut expanded = HashSet::from([root]);
            let mut stack: Vec<NodeId> = Vec::new();

            for child in tree.children(root) {
                if tree.is_label(child) {
                    family.insert(child);
                }
                stack.push(child);
            }
            stack.reverse();

            while let Some(current) = stack.pop() {
                if !expanded.insert(current) {
                    continue;
                }
                let labels: Vec<NodeId> = tree
                    .children(current)
                    .filter(|&c| tree.is_label(c))
                    .collect();
                for label in labels.into_iter().rev() {
                    family.insert(label);
                    if !expanded.contains(&label) {
                        stack.push(label);
                    }
                }
            }
        }
    }

    trace!("family({}, {:?}) -> {} objects", root, mode, family.len());
    family
}

/// Union of the families of several roots, in order, without duplicates
pub fn families<T>(tree: &T, roots: &[NodeId], mode: FamilyMode) -> Vec<NodeId>
where
    T: Tree + ?Sized,
{
    let mut seen = HashSet::new();
    roots
        .iter()
        .flat_map(|&r| family(tree, r, mode).members)
        .filter(|id| seen.insert(*id))
        .collect()
}
