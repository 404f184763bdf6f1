use derive_more::Display;
use scene_tree::NodeId;

/// Reasons an operator declined to run
///
/// None of these are fatal: the scene is left untouched and the caller is
/// expected to surface the message to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum VisibilityError {
    /// The operator needs at least one selected object
    #[display(fmt = "nothing is selected")]
    NothingSelected,

    /// The operator needs an active object
    #[display(fmt = "there is no active object")]
    NoActiveObject,

    /// Layer scoping was requested but the active object is in no top-level collection
    #[display(fmt = "{} is not in any top-level collection", _0)]
    NoActiveLayer(NodeId),

    /// The operator only applies to label texts
    #[display(fmt = "{} is not a label", _0)]
    NotALabel(NodeId),

    /// The object is not part of the scene
    #[display(fmt = "unknown object {}", _0)]
    UnknownNode(NodeId),
}

impl std::error::Error for VisibilityError {}

pub type Result<T, E = VisibilityError> = std::result::Result<T, E>;
