//! Selection-change reactor
//!
//! Runs every time the host's active object changes and re-derives which
//! labels, group labels and container children should be visible for the
//! new active object.
//!
//! All rules are evaluated over the whole scene into one
//! [`VisibilityPlan`] and applied once. The plan depends only on structure,
//! collections, the active object and the settings, never on the current
//! hide flags, so a second run without an active change is a no-op.

use log::{debug, trace};
use scene_tree::{NodeId, NodeKind, SceneHost, TreeTraversal};

use crate::family::{family, FamilyMode};
use crate::labels::{plan_ellipsis_children, plan_foreign_labels, plan_group_labels};
use crate::plan::VisibilityPlan;
use crate::settings::VisibilitySettings;

/// What a reactor run did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReactorReport {
    /// The active object the run reacted to, `None` if it was skipped
    pub active: Option<NodeId>,
    /// Objects that went from shown to hidden
    pub hidden: Vec<NodeId>,
    /// Objects that went from hidden to shown
    pub shown: Vec<NodeId>,
    /// Objects newly selected because the active object is a group label
    pub selected: Vec<NodeId>,
}

impl ReactorReport {
    /// Number of flag changes made
    pub fn changed(&self) -> usize {
        self.hidden.len() + self.shown.len() + self.selected.len()
    }

    /// True when the run was skipped
    pub fn is_skipped(&self) -> bool {
        self.active.is_none()
    }
}

/// Build the visibility plan for `active` without touching the scene
pub fn plan_for_active<H>(host: &H, active: NodeId, settings: &VisibilitySettings) -> VisibilityPlan
where
    H: SceneHost + ?Sized,
{
    let mut plan = VisibilityPlan::new();
    plan.show_all(family(host, active, FamilyMode::LabelsOnly).iter());
    plan_group_labels(host, Some(active), settings, &mut plan);
    plan_foreign_labels(host, Some(active), &mut plan);
    plan_ellipsis_children(host, Some(active), &mut plan);
    plan
}

/// React to the active object having changed
///
/// Does nothing when there is no active object or when it is a text
/// (a label decoration or a free-standing subtext).
pub fn on_active_changed<H>(host: &mut H, settings: &VisibilitySettings) -> ReactorReport
where
    H: SceneHost,
{
    let Some(active) = host.active_object() else {
        trace!("Reactor: no active object");
        return ReactorReport::default();
    };
    if host.kind(active).is_text() {
        trace!("Reactor: active {} is a text, skipping", active);
        return ReactorReport::default();
    }

    let plan = plan_for_active(host, active, settings);
    let applied = plan.apply(host);

    let mut selected = Vec::new();
    if host.kind(active) == NodeKind::Group {
        for id in host.descendants(active) {
            if host.set_selected(id, true) {
                selected.push(id);
            }
        }
        host.set_selected(active, true);
    }

    debug!(
        "Reactor for {}: {} hidden, {} shown, {} selected",
        active,
        applied.hidden.len(),
        applied.shown.len(),
        selected.len()
    );
    ReactorReport {
        active: Some(active),
        hidden: applied.hidden,
        shown: applied.shown,
        selected,
    }
}
