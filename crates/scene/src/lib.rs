//! Scene Tree Library
//!
//! The hierarchy model the visibility subsystem works on: objects with a
//! parent link, ordered children, an explicit [`NodeKind`] and host flags,
//! grouped into nested collections.
//!
//! # Core Concepts
//!
//! - **Tree**: read-only navigation over a forest of objects
//! - **SceneHost**: the mutable contract a host scene offers (flags,
//!   selection, active object, collections)
//! - **SceneGraph**: in-memory arena implementation of both
//!
//! # Example
//!
//! ```
//! use scene_tree::prelude::*;
//!
//! let mut scene = SceneGraph::new();
//! let skeleton = scene.new_collection("Skeletal system", CollectionId::SCENE).unwrap();
//! let femur = scene.add("Femur", NodeKind::Regular);
//! let label = scene.add_child(femur, "Femur.t", NodeKind::LabelText).unwrap();
//! scene.link(femur, skeleton).unwrap();
//!
//! for id in scene.walk(TraversalOrder::PreOrder) {
//!     println!("{:indent$}{}", "", scene.name(id).unwrap(), indent = scene.depth(id) * 2);
//! }
//! assert_eq!(scene.path(label), "Femur/Femur.t");
//! ```

mod collection;
mod error;
mod graph;
mod host;
mod naming;
mod node;
mod object;
mod traits;

pub use collection::{CollectionId, Collections};
pub use error::SceneError;
pub use graph::SceneGraph;
pub use host::{HostEvent, SceneHost};
pub use naming::clean_name;
pub use node::{Node, NodeId, NodeKind};
pub use object::{ObjectState, ObjectType};
pub use traits::{TraversalOrder, Tree, TreeTraversal, TreeWalker};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        CollectionId, HostEvent, Node, NodeId, NodeKind, ObjectState, ObjectType, SceneGraph,
        SceneHost, TraversalOrder, Tree, TreeTraversal,
    };
}
