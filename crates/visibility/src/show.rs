//! The show-hidden operator

use log::info;
use scene_tree::{NodeId, SceneHost};

use crate::error::Result;
use crate::labels::{plan_foreign_labels, plan_group_labels};
use crate::plan::VisibilityPlan;
use crate::scope::active_layer;
use crate::settings::VisibilitySettings;

/// Options of the show-hidden operator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShowOptions {
    /// Only reveal objects of the active object's top-level collection
    pub active_layer_only: bool,
    /// Select the objects that get revealed
    pub select: bool,
}

impl ShowOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_layer_only(mut self, value: bool) -> Self {
        self.active_layer_only = value;
        self
    }

    pub fn select(mut self, value: bool) -> Self {
        self.select = value;
        self
    }
}

/// Outcome of a successful show-hidden
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShowReport {
    /// Objects that went from hidden to shown
    pub shown: Vec<NodeId>,
    /// Objects hidden again (foreign labels, disabled group labels)
    pub hidden: Vec<NodeId>,
}

/// Reveal hidden objects, then hide every label that is not the active object's
///
/// Label texts not parented to the active object end up hidden together
/// with their lines, so at most the active object's own label shows. When
/// group labels are disabled they are hidden again as well.
pub fn show_hidden<H>(
    host: &mut H,
    options: &ShowOptions,
    settings: &VisibilitySettings,
) -> Result<ShowReport>
where
    H: SceneHost + ?Sized,
{
    let scope = if options.active_layer_only {
        active_layer(host, settings)?.objects().to_vec()
    } else {
        host.objects()
    };

    let active = host.active_object();
    let mut plan = VisibilityPlan::new();
    plan.show_all(scope);
    plan_foreign_labels(host, active, &mut plan);
    if !settings.enable_group_labels {
        plan_group_labels(host, active, settings, &mut plan);
    }

    let applied = plan.apply(host);
    if options.select {
        for &id in &applied.shown {
            host.set_selected(id, true);
        }
    }

    info!(
        "Show hidden: {} shown, {} labels kept hidden",
        applied.shown.len(),
        applied.hidden.len()
    );
    Ok(ShowReport {
        shown: applied.shown,
        hidden: applied.hidden,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use scene_tree::{NodeKind, SceneGraph};

    #[test]
    fn test_reveal_keeps_only_active_label() {
        let mut scene = SceneGraph::new();
        let femur = scene.add("Femur", NodeKind::Regular);
        let own = scene.add_child(femur, "Femur.t", NodeKind::LabelText).unwrap();
        let tibia = scene.add("Tibia", NodeKind::Regular);
        let other = scene.add_child(tibia, "Tibia.t", NodeKind::LabelText).unwrap();
        for id in [femur, own, tibia, other] {
            scene.set_hidden(id, true);
        }
        scene.set_active(Some(femur));

        let options = ShowOptions::new().select(true);
        let report = show_hidden(&mut scene, &options, &VisibilitySettings::default()).unwrap();
        assert_eq!(report.shown, vec![femur, own, tibia]);
        assert!(report.hidden.is_empty());
        assert!(scene.is_hidden(other));
        assert!(scene.state(tibia).unwrap().selected);
        assert!(!scene.state(other).unwrap().selected);
    }
}
