//! Named object collections ("layers")
//!
//! Collections form their own tree under the scene master collection. An
//! object may be linked into several collections; the first link is its
//! primary collection.

use derive_more::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier of a collection within a scene graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[display(fmt = "CollectionId({})", _0)]
pub struct CollectionId(pub usize);

impl CollectionId {
    /// The scene master collection, parent of every top-level collection
    pub const SCENE: CollectionId = CollectionId(0);

    /// Returns true for the scene master collection
    pub const fn is_scene(self) -> bool {
        self.0 == Self::SCENE.0
    }
}

#[derive(Debug, Clone)]
struct Collection {
    name: String,
    parent: Option<CollectionId>,
    children: Vec<CollectionId>,
}

/// Arena of collections rooted at [`CollectionId::SCENE`]
#[derive(Debug, Clone)]
pub struct Collections {
    slots: Vec<Option<Collection>>,
}

impl Default for Collections {
    fn default() -> Self {
        Self::new()
    }
}

impl Collections {
    /// Name given to the scene master collection
    pub const SCENE_NAME: &'static str = "Scene Collection";

    /// Create an arena holding only the scene master collection
    pub fn new() -> Self {
        Self {
            slots: vec![Some(Collection {
                name: Self::SCENE_NAME.to_string(),
                parent: None,
                children: Vec::new(),
            })],
        }
    }

    /// Add a collection below `parent`
    ///
    /// Returns `None` if `parent` does not exist.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        parent: CollectionId,
    ) -> Option<CollectionId> {
        if !self.contains(parent) {
            return None;
        }
        let id = CollectionId(self.slots.len());
        self.slots.push(Some(Collection {
            name: name.into(),
            parent: Some(parent),
            children: Vec::new(),
        }));
        if let Some(Some(p)) = self.slots.get_mut(parent.0) {
            p.children.push(id);
        }
        Some(id)
    }

    /// Remove a collection and all collections nested in it
    ///
    /// Returns the removed ids, outermost first. The master collection cannot
    /// be removed.
    pub fn remove(&mut self, id: CollectionId) -> Vec<CollectionId> {
        if id.is_scene() || !self.contains(id) {
            return Vec::new();
        }
        let removed = self.subtree(id);

        if let Some(parent) = self.parent(id) {
            if let Some(Some(p)) = self.slots.get_mut(parent.0) {
                p.children.retain(|&c| c != id);
            }
        }
        for c in &removed {
            self.slots[c.0] = None;
        }
        removed
    }

    /// Check whether a collection exists
    pub fn contains(&self, id: CollectionId) -> bool {
        matches!(self.slots.get(id.0), Some(Some(_)))
    }

    /// Name of a collection
    pub fn name(&self, id: CollectionId) -> Option<&str> {
        self.slots.get(id.0)?.as_ref().map(|c| c.name.as_str())
    }

    /// Parent collection; `None` for the master collection
    pub fn parent(&self, id: CollectionId) -> Option<CollectionId> {
        self.slots.get(id.0)?.as_ref()?.parent
    }

    /// Direct child collections
    pub fn children(&self, id: CollectionId) -> &[CollectionId] {
        match self.slots.get(id.0) {
            Some(Some(c)) => &c.children,
            _ => &[],
        }
    }

    /// Collections directly below the master collection
    pub fn top_level(&self) -> &[CollectionId] {
        self.children(CollectionId::SCENE)
    }

    /// Find a collection by name
    pub fn find(&self, name: &str) -> Option<CollectionId> {
        self.slots
            .iter()
            .enumerate()
            .find(|(_, c)| c.as_ref().is_some_and(|c| c.name == name))
            .map(|(i, _)| CollectionId(i))
    }

    /// `id` followed by every collection nested in it
    pub fn subtree(&self, id: CollectionId) -> Vec<CollectionId> {
        if !self.contains(id) {
            return Vec::new();
        }
        let mut out = vec![id];
        let mut i = 0;
        while i < out.len() {
            out.extend_from_slice(self.children(out[i]));
            i += 1;
        }
        out
    }

    /// The top-level collection `id` is nested in (itself if top-level)
    pub fn top_level_of(&self, id: CollectionId) -> Option<CollectionId> {
        let mut current = id;
        loop {
            match self.parent(current) {
                Some(parent) if parent.is_scene() => return Some(current),
                Some(parent) => current = parent,
                None => return None,
            }
        }
    }
}
