//! User-facing switches shared by the visibility operators.

use serde::{Deserialize, Serialize};

/// What layer-scoped operators do when the active object belongs to no
/// top-level collection
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScopeFallback {
    /// Act on the whole scene instead (logged)
    #[default]
    WholeScene,
    /// Refuse with [`VisibilityError::NoActiveLayer`](crate::VisibilityError::NoActiveLayer)
    Reject,
}

/// Settings read by the operators and the selection reactor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibilitySettings {
    /// Show group labels belonging to the active object's collection.
    pub enable_group_labels: bool,

    /// Behavior of layer-scoped operators without an active layer.
    pub scope_fallback: ScopeFallback,
}

impl Default for VisibilitySettings {
    fn default() -> Self {
        Self {
            enable_group_labels: true,
            scope_fallback: ScopeFallback::default(),
        }
    }
}

impl VisibilitySettings {
    /// Create settings with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable group labels.
    pub fn enable_group_labels(mut self, enabled: bool) -> Self {
        self.enable_group_labels = enabled;
        self
    }

    /// Set the layer scoping fallback.
    pub fn scope_fallback(mut self, fallback: ScopeFallback) -> Self {
        self.scope_fallback = fallback;
        self
    }
}
