//! Root finding: the unit a selected object is shown or hidden as

use std::collections::{BTreeSet, HashSet};

use log::trace;
use scene_tree::{NodeId, Tree};

/// How far [`find_root`] may climb through label decorations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RootPolicy {
    /// Stop on the object just below a top-level object
    StopBelowTopLevel,
    /// Keep climbing labels up to the top-level object
    ClimbToTop,
}

impl RootPolicy {
    /// `ClimbToTop` for "hide unselected", `StopBelowTopLevel` otherwise
    pub const fn for_unselected(hide_unselected: bool) -> Self {
        if hide_unselected {
            RootPolicy::ClimbToTop
        } else {
            RootPolicy::StopBelowTopLevel
        }
    }
}

/// Walk up from `start` to the object it should be handled as
///
/// Stops at the first object that is not a label decoration. With
/// [`RootPolicy::StopBelowTopLevel`] it also stops when the parent is a
/// top-level object. Every object passed on the way up is removed from
/// `pending`, so selected labels of an already resolved root are not
/// resolved twice. An object without a parent is its own root.
pub fn find_root<T>(
    tree: &T,
    start: NodeId,
    policy: RootPolicy,
    pending: &mut BTreeSet<NodeId>,
) -> NodeId
where
    T: Tree + ?Sized,
{
    let mut current = start;
    let mut seen = HashSet::new();

    while let Some(parent) = tree.parent(current) {
        if !seen.insert(current) {
            break;
        }
        pending.remove(&current);

        if !tree.is_label(current) {
            break;
        }
        if policy == RootPolicy::StopBelowTopLevel && tree.parent(parent).is_none() {
            break;
        }
        current = parent;
    }

    trace!("find_root({}, {:?}) -> {}", start, policy, current);
    current
}

/// Resolve one root per selected object not already subsumed by another
///
/// Roots come back in the order they were resolved, without duplicates.
pub fn resolve_roots<T>(tree: &T, selection: &[NodeId], policy: RootPolicy) -> Vec<NodeId>
where
    T: Tree + ?Sized,
{
    let mut pending: BTreeSet<NodeId> = selection.iter().copied().collect();
    let mut roots = Vec::new();

    while let Some(next) = pending.pop_first() {
        let root = find_root(tree, next, policy, &mut pending);
        if !roots.contains(&root) {
            roots.push(root);
        }
    }
    roots
}
