//! In-memory scene graph
//!
//! Arena storage for objects with parent links, ordered children and
//! collection memberships. Structural edits never leave a cycle behind;
//! flag edits go through [`SceneHost`].

use std::collections::HashSet;

use log::{debug, trace};
use smallvec::SmallVec;

use crate::collection::{CollectionId, Collections};
use crate::error::SceneError;
use crate::host::{HostEvent, SceneHost};
use crate::node::{Node, NodeId, NodeKind};
use crate::object::{ObjectState, ObjectType};
use crate::traits::Tree;

/// Internal object storage
#[derive(Debug, Clone)]
struct SceneObject {
    /// The node data
    node: Node<ObjectState>,
    /// Parent object ID
    parent: Option<NodeId>,
    /// Children in creation order
    children: Vec<NodeId>,
    /// Linked collections, primary first
    collections: SmallVec<[CollectionId; 2]>,
}

/// A scene of objects, collections, a selection and an active object
///
/// # Example
///
/// ```
/// use scene_tree::prelude::*;
///
/// let mut scene = SceneGraph::new();
/// let femur = scene.add("Femur", NodeKind::Regular);
/// let label = scene.add("Femur.t", NodeKind::LabelText);
/// scene.set_parent(label, Some(femur)).unwrap();
///
/// assert_eq!(scene.children(femur).collect::<Vec<_>>(), vec![label]);
/// assert!(scene.is_label(label));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SceneGraph {
    /// Arena storage, `None` for removed objects
    objects: Vec<Option<SceneObject>>,
    /// Collection tree
    collections: Collections,
    /// The active object
    active: Option<NodeId>,
    /// Notifications not yet drained by subscribers
    events: Vec<HostEvent>,
    /// Members of the current local view
    local_view: Option<HashSet<NodeId>>,
}

impl SceneGraph {
    /// Create an empty scene
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, id: NodeId) -> Option<&SceneObject> {
        self.objects.get(id.get())?.as_ref()
    }

    fn slot_mut(&mut self, id: NodeId) -> Option<&mut SceneObject> {
        self.objects.get_mut(id.get())?.as_mut()
    }

    /// Add a top-level object
    pub fn add_object(&mut self, node: Node<ObjectState>) -> NodeId {
        let id = NodeId::new(self.objects.len());
        trace!("Adding {} as {}", node, id);
        self.objects.push(Some(SceneObject {
            node,
            parent: None,
            children: Vec::new(),
            collections: SmallVec::new(),
        }));
        id
    }

    /// Add a mesh object of the given kind
    pub fn add(&mut self, name: impl Into<String>, kind: NodeKind) -> NodeId {
        self.add_object(Node::new(name, kind, ObjectState::default()))
    }

    /// Add a light source
    pub fn add_light(&mut self, name: impl Into<String>) -> NodeId {
        self.add_object(Node::new(
            name,
            NodeKind::Regular,
            ObjectState::of_type(ObjectType::Light),
        ))
    }

    /// Add an object whose kind is encoded in its name
    pub fn add_legacy(&mut self, name: impl Into<String>, object_type: ObjectType) -> NodeId {
        self.add_object(Node::from_legacy_name(name, ObjectState::of_type(object_type)))
    }

    /// Add an object as the last child of `parent`
    pub fn add_child(
        &mut self,
        parent: NodeId,
        name: impl Into<String>,
        kind: NodeKind,
    ) -> Result<NodeId, SceneError> {
        if !self.contains(parent) {
            return Err(SceneError::UnknownNode(parent));
        }
        let id = self.add(name, kind);
        self.set_parent(id, Some(parent))?;
        Ok(id)
    }

    /// Re-parent an object, or detach it with `None`
    ///
    /// Fails if either object is unknown or if `parent` is `child` itself or
    /// one of its descendants.
    pub fn set_parent(&mut self, child: NodeId, parent: Option<NodeId>) -> Result<(), SceneError> {
        if !self.contains(child) {
            return Err(SceneError::UnknownNode(child));
        }
        if let Some(parent) = parent {
            if !self.contains(parent) {
                return Err(SceneError::UnknownNode(parent));
            }
            if parent == child || self.is_ancestor_of(child, parent) {
                return Err(SceneError::WouldCycle { child, parent });
            }
        }

        if let Some(old) = self.slot(child).and_then(|o| o.parent) {
            if let Some(old_parent) = self.slot_mut(old) {
                old_parent.children.retain(|&c| c != child);
            }
        }
        if let Some(parent) = parent {
            if let Some(new_parent) = self.slot_mut(parent) {
                new_parent.children.push(child);
            }
        }
        if let Some(object) = self.slot_mut(child) {
            object.parent = parent;
        }
        Ok(())
    }

    /// Delete an object
    ///
    /// Its children become top-level objects. Returns the removed node.
    pub fn remove_object(&mut self, id: NodeId) -> Result<Node<ObjectState>, SceneError> {
        let parent = self.slot(id).ok_or(SceneError::UnknownNode(id))?.parent;
        if let Some(parent) = parent {
            if let Some(p) = self.slot_mut(parent) {
                p.children.retain(|&c| c != id);
            }
        }

        let object = self.objects[id.get()]
            .take()
            .ok_or(SceneError::UnknownNode(id))?;
        for child in &object.children {
            if let Some(c) = self.slot_mut(*child) {
                c.parent = None;
            }
        }
        if self.active == Some(id) {
            self.set_active(None);
        }
        if let Some(view) = self.local_view.as_mut() {
            view.remove(&id);
        }
        debug!("Removed {} ({})", object.node, id);
        Ok(object.node)
    }

    /// The collection tree
    pub fn collections(&self) -> &Collections {
        &self.collections
    }

    /// Create a collection below `parent`
    pub fn new_collection(
        &mut self,
        name: impl Into<String>,
        parent: CollectionId,
    ) -> Result<CollectionId, SceneError> {
        self.collections
            .insert(name, parent)
            .ok_or(SceneError::UnknownCollection(parent))
    }

    /// Link an object into a collection
    ///
    /// The first collection linked becomes the object's primary collection.
    pub fn link(&mut self, id: NodeId, collection: CollectionId) -> Result<(), SceneError> {
        if !self.collections.contains(collection) {
            return Err(SceneError::UnknownCollection(collection));
        }
        let object = self.slot_mut(id).ok_or(SceneError::UnknownNode(id))?;
        if !object.collections.contains(&collection) {
            object.collections.push(collection);
        }
        Ok(())
    }

    /// Collections an object is linked to, primary first
    pub fn collections_of(&self, id: NodeId) -> &[CollectionId] {
        self.slot(id).map(|o| o.collections.as_slice()).unwrap_or(&[])
    }

    /// Remove a collection, its nested collections and every object in them
    ///
    /// Returns the removed objects.
    pub fn remove_collection(
        &mut self,
        collection: CollectionId,
    ) -> Result<Vec<NodeId>, SceneError> {
        if collection.is_scene() || !self.collections.contains(collection) {
            return Err(SceneError::UnknownCollection(collection));
        }
        let doomed = self.collection_objects(collection);
        for &id in &doomed {
            self.remove_object(id)?;
        }
        self.collections.remove(collection);
        debug!(
            "Removed collection {} with {} objects",
            collection,
            doomed.len()
        );
        Ok(doomed)
    }

    /// Make `id` the active object, queueing a notification if it changed
    pub fn set_active(&mut self, id: Option<NodeId>) {
        let current = id.filter(|&i| self.contains(i));
        if current == self.active {
            return;
        }
        let previous = std::mem::replace(&mut self.active, current);
        trace!("Active object {:?} -> {:?}", previous, current);
        self.events.push(HostEvent::ActiveChanged { previous, current });
    }

    /// Select an object and make it active
    pub fn select_active(&mut self, id: NodeId) {
        self.set_selected(id, true);
        self.set_active(Some(id));
    }

    /// Clear the selection
    pub fn deselect_all(&mut self) {
        for id in self.objects() {
            self.set_selected(id, false);
        }
    }

    /// Take all notifications queued since the last drain
    pub fn drain_events(&mut self) -> Vec<HostEvent> {
        std::mem::take(&mut self.events)
    }

    /// Whether notifications are waiting
    pub fn has_pending_events(&self) -> bool {
        !self.events.is_empty()
    }
}

impl Tree for SceneGraph {
    type NodeData = ObjectState;

    fn roots(&self) -> Box<dyn Iterator<Item = NodeId> + '_> {
        Box::new(
            self.objects
                .iter()
                .enumerate()
                .filter_map(|(i, o)| match o {
                    Some(o) if o.parent.is_none() => Some(NodeId::new(i)),
                    _ => None,
                }),
        )
    }

    fn get(&self, id: NodeId) -> Option<&Node<ObjectState>> {
        self.slot(id).map(|o| &o.node)
    }

    fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.slot(id)?.parent
    }

    fn children(&self, id: NodeId) -> Box<dyn Iterator<Item = NodeId> + '_> {
        match self.slot(id) {
            Some(o) => Box::new(o.children.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn node_count(&self) -> usize {
        self.objects.iter().filter(|o| o.is_some()).count()
    }
}

impl SceneHost for SceneGraph {
    fn objects(&self) -> Vec<NodeId> {
        self.objects
            .iter()
            .enumerate()
            .filter(|(_, o)| o.is_some())
            .map(|(i, _)| NodeId::new(i))
            .collect()
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node<ObjectState>> {
        self.slot_mut(id).map(|o| &mut o.node)
    }

    fn active_object(&self) -> Option<NodeId> {
        self.active
    }

    fn primary_collection(&self, id: NodeId) -> Option<CollectionId> {
        self.collections_of(id).first().copied()
    }

    fn collection_objects(&self, collection: CollectionId) -> Vec<NodeId> {
        let scope: HashSet<CollectionId> =
            self.collections.subtree(collection).into_iter().collect();
        if scope.is_empty() {
            return Vec::new();
        }
        self.objects
            .iter()
            .enumerate()
            .filter_map(|(i, o)| {
                let o = o.as_ref()?;
                o.collections
                    .iter()
                    .any(|c| scope.contains(c))
                    .then_some(NodeId::new(i))
            })
            .collect()
    }

    fn top_level_collection_of(&self, id: NodeId) -> Option<CollectionId> {
        self.collections_of(id)
            .iter()
            .find_map(|&c| self.collections.top_level_of(c))
    }

    fn local_view(&self) -> Option<&HashSet<NodeId>> {
        self.local_view.as_ref()
    }

    fn set_local_view(&mut self, members: Option<HashSet<NodeId>>) {
        self.local_view = members;
    }
}
