//! Periodic label refresh: text labels and containers face the viewport,
//! `always_show` objects never stay hidden.

use glam::Quat;
use log::trace;
use scene_tree::{NodeId, NodeKind, SceneHost};

/// What one refresh tick changed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefreshReport {
    /// Objects turned to face the viewport
    pub rotated: Vec<NodeId>,
    /// `always_show` objects that were hidden and got revealed
    pub revealed: Vec<NodeId>,
}

impl RefreshReport {
    pub fn is_empty(&self) -> bool {
        self.rotated.is_empty() && self.revealed.is_empty()
    }
}

fn faces_viewport(kind: NodeKind) -> bool {
    matches!(kind, NodeKind::LabelText | NodeKind::EllipsisContainer)
}

/// Run one refresh tick against `viewport_rotation`
pub fn refresh_labels<H>(host: &mut H, viewport_rotation: Quat) -> RefreshReport
where
    H: SceneHost + ?Sized,
{
    let mut report = RefreshReport::default();

    for id in host.objects() {
        if host.is_visible(id)
            && faces_viewport(host.kind(id))
            && host.set_rotation(id, viewport_rotation)
        {
            report.rotated.push(id);
        }

        let always_show = host.state(id).is_some_and(|s| s.always_show);
        if always_show && host.set_hidden(id, false) {
            report.revealed.push(id);
        }
    }

    if !report.is_empty() {
        trace!(
            "Refresh: {} rotated, {} revealed",
            report.rotated.len(),
            report.revealed.len()
        );
    }
    report
}
