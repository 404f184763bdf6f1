//! The contract between the visibility subsystem and the scene it runs in
//!
//! The subsystem never owns objects. It reads structure through [`Tree`]
//! and only flips per-object flags through this trait, so any scene store
//! (the in-memory [`SceneGraph`](crate::SceneGraph), an editor binding, a
//! test double) can host it.

use std::collections::HashSet;

use glam::Quat;

use crate::collection::CollectionId;
use crate::node::{Node, NodeId};
use crate::object::ObjectState;
use crate::traits::Tree;

/// Notifications a host queues for its subscribers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    /// The active object pointer moved
    ActiveChanged {
        previous: Option<NodeId>,
        current: Option<NodeId>,
    },
}

/// A scene the visibility operators can read and mutate
///
/// Required methods expose structure, selection and collections; the flag
/// setters are provided on top of [`SceneHost::node_mut`] and report whether
/// anything actually changed.
pub trait SceneHost: Tree<NodeData = ObjectState> {
    /// Every live object, in creation order
    fn objects(&self) -> Vec<NodeId>;

    /// Mutable access to an object
    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node<ObjectState>>;

    /// The active object, if any
    fn active_object(&self) -> Option<NodeId>;

    /// The first collection an object is linked to
    fn primary_collection(&self, id: NodeId) -> Option<CollectionId>;

    /// Objects linked to a collection or any collection nested in it
    fn collection_objects(&self, collection: CollectionId) -> Vec<NodeId>;

    /// The top-level collection whose objects include `id`
    fn top_level_collection_of(&self, id: NodeId) -> Option<CollectionId>;

    /// Objects restricted to by a local view, if one is active
    fn local_view(&self) -> Option<&HashSet<NodeId>>;

    /// Enter (`Some`) or leave (`None`) a local view
    fn set_local_view(&mut self, members: Option<HashSet<NodeId>>);

    /// Read an object's state
    fn state(&self, id: NodeId) -> Option<&ObjectState> {
        self.get(id).map(|n| &n.data)
    }

    /// Whether the object's hide flag is set
    fn is_hidden(&self, id: NodeId) -> bool {
        self.state(id).map(|s| s.hidden).unwrap_or(false)
    }

    /// Whether the object is drawn: not hidden and inside the local view
    fn is_visible(&self, id: NodeId) -> bool {
        self.contains(id)
            && !self.is_hidden(id)
            && self.local_view().map_or(true, |view| view.contains(&id))
    }

    /// Objects currently drawn
    fn visible_objects(&self) -> Vec<NodeId> {
        self.objects()
            .into_iter()
            .filter(|&id| self.is_visible(id))
            .collect()
    }

    /// Whether the object is a light source
    fn is_light(&self, id: NodeId) -> bool {
        self.state(id)
            .map(|s| s.object_type.is_light())
            .unwrap_or(false)
    }

    /// Selected objects, in creation order
    fn selection(&self) -> Vec<NodeId> {
        self.objects()
            .into_iter()
            .filter(|&id| self.state(id).is_some_and(|s| s.selected))
            .collect()
    }

    /// Set the hide flag, returning true if it changed
    fn set_hidden(&mut self, id: NodeId, hidden: bool) -> bool {
        update(self, id, |s| &mut s.hidden, hidden)
    }

    /// Set the selectable flag, returning true if it changed
    fn set_selectable(&mut self, id: NodeId, selectable: bool) -> bool {
        update(self, id, |s| &mut s.selectable, selectable)
    }

    /// Set the selected flag, returning true if it changed
    fn set_selected(&mut self, id: NodeId, selected: bool) -> bool {
        update(self, id, |s| &mut s.selected, selected)
    }

    /// Set the render exclusion flag, returning true if it changed
    fn set_render_hidden(&mut self, id: NodeId, render_hidden: bool) -> bool {
        update(self, id, |s| &mut s.render_hidden, render_hidden)
    }

    /// Set the world orientation, returning true if it changed
    fn set_rotation(&mut self, id: NodeId, rotation: Quat) -> bool {
        update(self, id, |s| &mut s.rotation, rotation)
    }

    /// Rename an object, returning true if it changed
    fn rename(&mut self, id: NodeId, name: &str) -> bool {
        match self.node_mut(id) {
            Some(node) if node.name != name => {
                node.name = name.to_string();
                true
            }
            _ => false,
        }
    }
}

fn update<H, T, F>(host: &mut H, id: NodeId, field: F, value: T) -> bool
where
    H: SceneHost + ?Sized,
    T: PartialEq,
    F: FnOnce(&mut ObjectState) -> &mut T,
{
    let Some(node) = host.node_mut(id) else {
        return false;
    };
    let slot = field(&mut node.data);
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}
