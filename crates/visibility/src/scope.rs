//! Layer scoping for operators restricted to the active object's collection

use log::warn;
use scene_tree::{CollectionId, NodeId, SceneHost};

use crate::error::{Result, VisibilityError};
use crate::settings::{ScopeFallback, VisibilitySettings};

/// The set of objects a layer-scoped operator may touch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    /// Objects of one top-level collection
    Layer(CollectionId, Vec<NodeId>),
    /// Every object in the scene
    WholeScene(Vec<NodeId>),
}

impl Scope {
    /// The objects in scope
    pub fn objects(&self) -> &[NodeId] {
        match self {
            Scope::Layer(_, objects) | Scope::WholeScene(objects) => objects,
        }
    }

    /// The collection scoped to, if any
    pub fn layer(&self) -> Option<CollectionId> {
        match self {
            Scope::Layer(c, _) => Some(*c),
            Scope::WholeScene(_) => None,
        }
    }
}

/// Resolve the active object's top-level collection
///
/// When there is none, [`ScopeFallback::WholeScene`] widens the scope to the
/// whole scene and [`ScopeFallback::Reject`] refuses. The widened scope lists
/// every object; operators narrow it the way their unscoped form does, so
/// hide only considers visible objects.
pub fn active_layer<H>(host: &H, settings: &VisibilitySettings) -> Result<Scope>
where
    H: SceneHost + ?Sized,
{
    let active = host.active_object();
    let layer = active.and_then(|a| host.top_level_collection_of(a));

    match (layer, active, settings.scope_fallback) {
        (Some(layer), _, _) => Ok(Scope::Layer(layer, host.collection_objects(layer))),
        (None, Some(active), ScopeFallback::Reject) => Err(VisibilityError::NoActiveLayer(active)),
        (None, None, ScopeFallback::Reject) => Err(VisibilityError::NoActiveObject),
        (None, _, ScopeFallback::WholeScene) => {
            warn!(
                "Active object {:?} is in no top-level collection, using the whole scene",
                active
            );
            Ok(Scope::WholeScene(host.objects()))
        }
    }
}
