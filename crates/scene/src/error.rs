use derive_more::Display;

use crate::collection::CollectionId;
use crate::node::NodeId;

/// Errors raised by structural edits of a [`SceneGraph`](crate::SceneGraph)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SceneError {
    /// The object id is not (or no longer) part of the scene
    #[display(fmt = "unknown object {}", _0)]
    UnknownNode(NodeId),

    /// The collection id is not (or no longer) part of the scene
    #[display(fmt = "unknown collection {}", _0)]
    UnknownCollection(CollectionId),

    /// Parenting would make an object its own ancestor
    #[display(fmt = "parenting {} under {} would create a cycle", child, parent)]
    WouldCycle { child: NodeId, parent: NodeId },
}

impl std::error::Error for SceneError {}
