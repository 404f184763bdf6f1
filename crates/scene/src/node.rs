//! Core node types for the scene hierarchy

use derive_more::Display;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Unique identifier for an object within a scene graph
///
/// Internally represented as an index into an arena-based storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodeId(pub usize);

impl NodeId {
    /// Create a new NodeId from a usize
    pub const fn new(id: usize) -> Self {
        NodeId(id)
    }

    /// Get the inner usize value
    pub const fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl From<usize> for NodeId {
    fn from(id: usize) -> Self {
        NodeId(id)
    }
}

impl From<NodeId> for usize {
    fn from(id: NodeId) -> Self {
        id.0
    }
}

/// The role an object plays in the scene hierarchy
///
/// Assigned when the object is created. Label decorations (texts and their
/// leader lines) hang off "real" objects and are never part of the
/// meaningful anatomy hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NodeKind {
    /// An ordinary object (mesh, light, empty...)
    #[display(fmt = "Regular")]
    Regular,

    /// The text part of a label
    #[display(fmt = "LabelText")]
    LabelText,

    /// The leader line connecting a label to what it annotates
    #[display(fmt = "LabelLine")]
    LabelLine,

    /// A group label, toggled as a unit per collection
    #[display(fmt = "Group")]
    Group,

    /// A container whose children are only shown while it is active
    #[display(fmt = "EllipsisContainer")]
    EllipsisContainer,

    /// A free-standing annotation text, outside any label family
    #[display(fmt = "Subtext")]
    Subtext,
}

impl NodeKind {
    /// Returns true for label decorations (texts and lines)
    pub const fn is_label(self) -> bool {
        matches!(self, NodeKind::LabelText | NodeKind::LabelLine)
    }

    /// Returns true for the text part of a label
    pub const fn is_label_text(self) -> bool {
        matches!(self, NodeKind::LabelText)
    }

    /// Returns true for group labels
    pub const fn is_group(self) -> bool {
        matches!(self, NodeKind::Group)
    }

    /// Returns true for ellipsis containers
    pub const fn is_ellipsis(self) -> bool {
        matches!(self, NodeKind::EllipsisContainer)
    }

    /// Returns true for texts that never drive the selection reactor
    pub const fn is_text(self) -> bool {
        matches!(self, NodeKind::LabelText | NodeKind::LabelLine | NodeKind::Subtext)
    }

    /// Classify a legacy object name
    ///
    /// Older scenes encode the kind in the name (`Femur.t`, `Femur-line`,
    /// `Bones.g`, `Skull...`, `Origin.st`). Use this when importing them;
    /// new objects should be created with an explicit kind.
    pub fn classify(name: &str) -> Self {
        if name.contains(".t") || name.contains("-txt") {
            NodeKind::LabelText
        } else if name.contains("-line") {
            NodeKind::LabelLine
        } else if name.contains(".st") {
            NodeKind::Subtext
        } else if name.ends_with(".g") {
            NodeKind::Group
        } else if name.ends_with("...") {
            NodeKind::EllipsisContainer
        } else {
            NodeKind::Regular
        }
    }
}

impl Default for NodeKind {
    fn default() -> Self {
        NodeKind::Regular
    }
}

/// A single object in the scene
///
/// Generic over the data type `D` which carries the per-object state the
/// host exposes (visibility flags, object type, orientation...).
#[derive(Debug, Clone)]
pub struct Node<D> {
    /// The object's name
    pub name: String,
    /// The object's role in the hierarchy
    pub kind: NodeKind,
    /// Host-side state associated with this object
    pub data: D,
}

impl<D> Node<D> {
    /// Create a new node
    pub fn new(name: impl Into<String>, kind: NodeKind, data: D) -> Self {
        Self {
            name: name.into(),
            kind,
            data,
        }
    }

    /// Create a new node, deriving its kind from a legacy name
    pub fn from_legacy_name(name: impl Into<String>, data: D) -> Self {
        let name = name.into();
        let kind = NodeKind::classify(&name);
        Self::new(name, kind, data)
    }

    /// Returns true if this node is a label decoration
    pub fn is_label(&self) -> bool {
        self.kind.is_label()
    }
}

impl<D: Default> Node<D> {
    /// Create a regular node with default data
    pub fn regular(name: impl Into<String>) -> Self {
        Self::new(name, NodeKind::Regular, D::default())
    }
}

impl<D> fmt::Display for Node<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.kind)
    }
}
