//! The hide operator

use std::collections::HashSet;

use log::{info, warn};
use scene_tree::{NodeId, SceneHost};

use crate::error::{Result, VisibilityError};
use crate::family::{families, FamilyMode};
use crate::plan::VisibilityPlan;
use crate::root::{resolve_roots, RootPolicy};
use crate::scope::{active_layer, Scope};
use crate::settings::VisibilitySettings;

/// Options of the hide operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HideOptions {
    /// Hide everything except the selection instead of the selection
    pub hide_unselected: bool,
    /// With `hide_unselected`, only touch the active object's top-level collection
    pub active_layer_only: bool,
    /// Take whole subtrees along instead of label decorations only
    pub follow_parent: bool,
}

impl Default for HideOptions {
    fn default() -> Self {
        Self {
            hide_unselected: false,
            active_layer_only: false,
            follow_parent: true,
        }
    }
}

impl HideOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hide_unselected(mut self, value: bool) -> Self {
        self.hide_unselected = value;
        self
    }

    pub fn active_layer_only(mut self, value: bool) -> Self {
        self.active_layer_only = value;
        self
    }

    pub fn follow_parent(mut self, value: bool) -> Self {
        self.follow_parent = value;
        self
    }
}

/// Outcome of a successful hide
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HideReport {
    /// Roots the selection resolved to
    pub roots: Vec<NodeId>,
    /// Objects that went from shown to hidden
    pub hidden: Vec<NodeId>,
}

/// Hide the selected objects' families, or everything but them
///
/// Lights are never hidden by "hide unselected". The selection itself is
/// left alone. With an empty selection nothing changes and
/// [`VisibilityError::NothingSelected`] is returned.
pub fn hide<H>(
    host: &mut H,
    options: &HideOptions,
    settings: &VisibilitySettings,
) -> Result<HideReport>
where
    H: SceneHost + ?Sized,
{
    let selection = host.selection();
    if selection.is_empty() {
        warn!("Hide: nothing selected");
        return Err(VisibilityError::NothingSelected);
    }

    let roots = resolve_roots(
        host,
        &selection,
        RootPolicy::for_unselected(options.hide_unselected),
    );
    let members = families(host, &roots, FamilyMode::following_parent(options.follow_parent));

    let mut plan = VisibilityPlan::new();
    if options.hide_unselected {
        let keep: HashSet<NodeId> = members.into_iter().collect();
        // Without a layer, the fallback hides what the unscoped operator would
        let candidates = if options.active_layer_only {
            match active_layer(host, settings)? {
                Scope::Layer(_, objects) => objects,
                Scope::WholeScene(_) => host.visible_objects(),
            }
        } else {
            host.visible_objects()
        };
        plan.hide_all(
            candidates
                .into_iter()
                .filter(|id| !keep.contains(id) && !host.is_light(*id)),
        );
    } else {
        plan.hide_all(members);
    }

    let applied = plan.apply(host);
    info!(
        "Hide ({:?}): {} roots, {} objects hidden",
        options,
        roots.len(),
        applied.hidden.len()
    );
    Ok(HideReport {
        roots,
        hidden: applied.hidden,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use scene_tree::{NodeKind, SceneGraph};

    #[test]
    fn test_empty_selection_is_rejected() {
        let mut scene = SceneGraph::new();
        let a = scene.add("A", NodeKind::Regular);

        let result = hide(&mut scene, &HideOptions::default(), &VisibilitySettings::default());
        assert_eq!(result, Err(VisibilityError::NothingSelected));
        assert!(!scene.is_hidden(a));
    }

    #[test]
    fn test_layer_fallback_leaves_objects_outside_local_view() {
        let mut scene = SceneGraph::new();
        let a = scene.add("A", NodeKind::Regular);
        let b = scene.add("B", NodeKind::Regular);
        let outside = scene.add("Outside", NodeKind::Regular);
        scene.select_active(a);
        scene.set_local_view(Some(HashSet::from([a, b])));

        let settings = VisibilitySettings::default();
        let unscoped = HideOptions::new().hide_unselected(true);
        let scoped = unscoped.active_layer_only(true);

        let report = hide(&mut scene, &scoped, &settings).unwrap();
        assert_eq!(report.hidden, vec![b]);
        assert!(!scene.is_hidden(outside));

        scene.set_hidden(b, false);
        let report = hide(&mut scene, &unscoped, &settings).unwrap();
        assert_eq!(report.hidden, vec![b]);
    }

    #[test]
    fn test_hiding_a_label_hides_its_object_family() {
        let mut scene = SceneGraph::new();
        let body = scene.add("Body", NodeKind::Regular);
        let femur = scene.add_child(body, "Femur", NodeKind::Regular).unwrap();
        let text = scene.add_child(femur, "Femur.t", NodeKind::LabelText).unwrap();
        let line = scene.add_child(text, "Femur-line", NodeKind::LabelLine).unwrap();
        scene.select_active(text);

        let report =
            hide(&mut scene, &HideOptions::default(), &VisibilitySettings::default()).unwrap();
        assert_eq!(report.roots, vec![femur]);
        assert_eq!(report.hidden, vec![femur, text, line]);
        assert!(!scene.is_hidden(body));
        assert!(scene.state(text).unwrap().selected);
    }
}
