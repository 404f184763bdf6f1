//! Configuration of a visibility session.
//!
//! [`Config`] carries the user switches of the visibility operators plus the
//! timing and viewport state the periodic label refresh needs.

use std::time::Duration;

use glam::Quat;
use serde::{Deserialize, Serialize};
use visibility::{ScopeFallback, VisibilitySettings};

/// Interval between two label refresh ticks (about 60 per second).
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_micros(16_500);

/// Configuration options for a [`Session`](crate::Session).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Show group labels belonging to the active object's collection.
    pub enable_group_labels: bool,

    /// Behavior of layer-scoped operators without an active layer.
    pub scope_fallback: ScopeFallback,

    /// Time between two refresh ticks.
    pub refresh_interval: Duration,

    /// Orientation of the viewport that labels are turned to face.
    pub viewport_rotation: Quat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enable_group_labels: true,
            scope_fallback: ScopeFallback::default(),
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
            viewport_rotation: Quat::IDENTITY,
        }
    }
}

impl Config {
    /// Create a configuration with default values.
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

    /// Set the refresh interval.
    pub fn refresh_interval(mut self, interval: Duration) -> Self {
        self.refresh_interval = interval;
        self
    }

    /// Set the initial viewport orientation.
    pub fn viewport_rotation(mut self, rotation: Quat) -> Self {
        self.viewport_rotation = rotation;
        self
    }

    /// The operator settings this configuration describes.
    pub fn settings(&self) -> VisibilitySettings {
        VisibilitySettings::new()
            .enable_group_labels(self.enable_group_labels)
            .scope_fallback(self.scope_fallback)
    }
}
