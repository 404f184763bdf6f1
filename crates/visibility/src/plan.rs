//! Batched hide/show decisions

use std::collections::HashMap;

use log::debug;
use scene_tree::{NodeId, SceneHost};

/// Desired hide flags, applied in one pass
///
/// Later decisions about the same object override earlier ones, so an
/// operator can state broad rules first and exceptions after them.
#[derive(Debug, Clone, Default)]
pub struct VisibilityPlan {
    order: Vec<NodeId>,
    hidden: HashMap<NodeId, bool>,
}

/// What applying a plan changed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Applied {
    /// Objects whose hide flag was set
    pub hidden: Vec<NodeId>,
    /// Objects whose hide flag was cleared
    pub shown: Vec<NodeId>,
}

impl Applied {
    /// Total number of flag flips
    pub fn changed(&self) -> usize {
        self.hidden.len() + self.shown.len()
    }

    /// True when nothing changed
    pub fn is_empty(&self) -> bool {
        self.changed() == 0
    }
}

impl VisibilityPlan {
    pub fn new() -> Self {
        Self::default()
    }

    fn set(&mut self, id: NodeId, hidden: bool) {
        if self.hidden.insert(id, hidden).is_none() {
            self.order.push(id);
        }
    }

    pub fn hide(&mut self, id: NodeId) {
        self.set(id, true);
    }

    pub fn show(&mut self, id: NodeId) {
        self.set(id, false);
    }

    pub fn hide_all(&mut self, ids: impl IntoIterator<Item = NodeId>) {
        for id in ids {
            self.hide(id);
        }
    }

    pub fn show_all(&mut self, ids: impl IntoIterator<Item = NodeId>) {
        for id in ids {
            self.show(id);
        }
    }

    /// The decision currently recorded for `id`
    pub fn decision(&self, id: NodeId) -> Option<bool> {
        self.hidden.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Write the decisions to the host, in the order objects were first mentioned
    pub fn apply<H: SceneHost + ?Sized>(&self, host: &mut H) -> Applied {
        let mut applied = Applied::default();
        for &id in &self.order {
            let hidden = self.hidden[&id];
            if host.set_hidden(id, hidden) {
                if hidden {
                    applied.hidden.push(id);
                } else {
                    applied.shown.push(id);
                }
            }
        }
        if !applied.is_empty() {
            debug!(
                "Applied visibility plan: {} hidden, {} shown",
                applied.hidden.len(),
                applied.shown.len()
            );
        }
        applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scene_tree::{NodeKind, SceneGraph};

    #[test]
    fn test_later_decision_wins() {
        let mut scene = SceneGraph::new();
        let a = scene.add("A", NodeKind::Regular);
        let b = scene.add("B", NodeKind::Regular);

        let mut plan = VisibilityPlan::new();
        plan.hide_all([a, b]);
        plan.show(a);
        assert_eq!(plan.decision(a), Some(false));
        assert_eq!(plan.len(), 2);

        let applied = plan.apply(&mut scene);
        assert_eq!(applied.hidden, vec![b]);
        assert!(applied.shown.is_empty());
        assert!(!scene.is_hidden(a));
    }

    #[test]
    fn test_reapplying_changes_nothing() {
        let mut scene = SceneGraph::new();
        let a = scene.add("A", NodeKind::Regular);
        let mut plan = VisibilityPlan::new();
        plan.hide(a);

        assert_eq!(plan.apply(&mut scene).changed(), 1);
        assert!(plan.apply(&mut scene).is_empty());
    }
}
