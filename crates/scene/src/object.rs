//! Per-object host state

use derive_more::Display;
use glam::Quat;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What kind of data an object carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ObjectType {
    #[display(fmt = "Mesh")]
    Mesh,
    #[display(fmt = "Light")]
    Light,
    #[display(fmt = "Font")]
    Font,
    #[display(fmt = "Curve")]
    Curve,
    #[display(fmt = "Empty")]
    Empty,
}

impl ObjectType {
    /// Returns true for light sources
    pub const fn is_light(self) -> bool {
        matches!(self, ObjectType::Light)
    }
}

impl Default for ObjectType {
    fn default() -> Self {
        ObjectType::Mesh
    }
}

/// Mutable flags and transform the visibility subsystem reads and writes
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObjectState {
    /// What the object is
    pub object_type: ObjectType,
    /// Hidden in the viewport
    pub hidden: bool,
    /// Can be picked in the viewport
    pub selectable: bool,
    /// Part of the current selection
    pub selected: bool,
    /// Excluded from renders
    pub render_hidden: bool,
    /// Revealed again by every refresh tick if hidden
    pub always_show: bool,
    /// World orientation
    pub rotation: Quat,
}

impl Default for ObjectState {
    fn default() -> Self {
        Self {
            object_type: ObjectType::default(),
            hidden: false,
            selectable: true,
            selected: false,
            render_hidden: false,
            always_show: false,
            rotation: Quat::IDENTITY,
        }
    }
}

impl ObjectState {
    /// State for a visible object of the given type
    pub fn of_type(object_type: ObjectType) -> Self {
        Self {
            object_type,
            ..Self::default()
        }
    }

    /// Mark the object as hidden
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Mark the object as always shown
    pub fn always_show(mut self, always_show: bool) -> Self {
        self.always_show = always_show;
        self
    }

    /// Set whether the object can be picked
    pub fn selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }
}
